//! End-to-end execution harness.

use mipsim_executor::io::BufferChannel;
use mipsim_executor::{Cpu, ExecutorError, Image};

use crate::encode;

/// Run a program with scripted console input.
///
/// Returns the run result and whatever the program wrote to the output
/// port.
pub fn run_program(
    words: &[u32],
    input: &[u8],
    max_steps: u64,
) -> (Result<u8, ExecutorError>, Vec<u8>) {
    let channel = BufferChannel::with_input(input);
    let mut cpu = Cpu::with_channel(Box::new(channel.clone()));
    let image = Image::parse(&encode::to_image(words));
    cpu.load_image(&image).expect("image fits in instruction memory");
    let result = cpu.run(Some(max_steps));
    (result, channel.output())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::programs;

    #[test]
    fn test_sum_program_exits_with_the_sum() {
        let (result, output) = run_program(&programs::sum_program(5), b"", 1_000);
        assert_eq!(result.unwrap(), 15);
        assert!(output.is_empty());
    }

    #[test]
    fn test_sum_program_status_is_truncated_to_a_byte() {
        // sum(1..=30) = 465 = 0x1D1; only the low byte survives.
        let (result, _) = run_program(&programs::sum_program(30), b"", 1_000);
        assert_eq!(result.unwrap(), 0xD1);
    }

    #[test]
    fn test_hello_program_writes_console_output() {
        let (result, output) = run_program(&programs::hello_program(), b"", 1_000);
        assert_eq!(result.unwrap(), 0);
        assert_eq!(output, b"OK\n");
    }

    #[test]
    fn test_echo_program_round_trips_input() {
        let (result, output) = run_program(&programs::echo_program(), b"hello", 1_000);
        assert_eq!(result.unwrap(), 0);
        assert_eq!(output, b"hello");
    }

    #[test]
    fn test_echo_program_handles_empty_input() {
        let (result, output) = run_program(&programs::echo_program(), b"", 1_000);
        assert_eq!(result.unwrap(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_byte_order_program_exits_with_msb() {
        let (result, _) = run_program(&programs::byte_order_program(), b"", 1_000);
        assert_eq!(result.unwrap(), 0xAA);
    }

    #[test]
    fn test_runaway_program_hits_the_step_budget() {
        // beq $zero, $zero back to itself, forever.
        let words = [
            encode::nop(),
            encode::beq(0, 0, -1),
            encode::nop(),
        ];
        let (result, _) = run_program(&words, b"", 100);
        assert!(matches!(
            result.unwrap_err(),
            ExecutorError::MaxStepsReached { .. }
        ));
    }
}
