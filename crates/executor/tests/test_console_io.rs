//! The memory-mapped character device, end to end.

use mipsim_executor::cpu::{
    assemble_bltz, assemble_jr, assemble_lui, assemble_lw, assemble_nop, assemble_ori,
    assemble_sw,
};
use mipsim_executor::io::BufferChannel;
use mipsim_executor::{Cpu, ExecutorError, Image};

fn boot_with_channel(words: &[u32], channel: BufferChannel) -> Cpu {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
    let mut cpu = Cpu::with_channel(Box::new(channel));
    cpu.load_image(&Image::parse(&bytes)).unwrap();
    cpu
}

#[test]
fn test_store_to_output_port_writes_stdout() {
    let chan = BufferChannel::new();
    let mut cpu = boot_with_channel(
        &[
            assemble_lui(8, 0x3000),
            assemble_ori(9, 0, 0x41),
            assemble_sw(9, 8, 4),
            assemble_jr(0),
            assemble_nop(),
        ],
        chan.clone(),
    );
    assert_eq!(cpu.run(Some(100)).unwrap(), 0);
    assert_eq!(chan.output(), b"A");
}

#[test]
fn test_load_from_input_port_consumes_stdin() {
    let chan = BufferChannel::with_input(b"B");
    let mut cpu = boot_with_channel(
        &[
            assemble_lui(8, 0x3000),
            assemble_lw(9, 8, 0),
            assemble_sw(9, 8, 4),
            assemble_jr(0),
            assemble_nop(),
        ],
        chan.clone(),
    );
    assert_eq!(cpu.run(Some(100)).unwrap(), 0);
    assert_eq!(chan.output(), b"B");
}

#[test]
fn test_end_of_input_reads_all_ones_without_trapping() {
    // EOF is data, not a trap: the program sees the all-ones word, which
    // is negative, and picks its own exit status.
    let chan = BufferChannel::new();
    let mut cpu = boot_with_channel(
        &[
            assemble_lui(8, 0x3000),
            assemble_lw(9, 8, 0),
            assemble_bltz(9, 4), // to +28: the EOF path
            assemble_nop(),
            assemble_ori(2, 0, 1), // input available
            assemble_jr(0),
            assemble_nop(),
            assemble_ori(2, 0, 7), // EOF path
            assemble_jr(0),
            assemble_nop(),
        ],
        chan,
    );
    assert_eq!(cpu.run(Some(100)).unwrap(), 7);
    assert_eq!(cpu.get_reg(9), 0xFFFF_FFFF);
}

#[test]
fn test_reading_the_output_port_traps() {
    let chan = BufferChannel::new();
    let mut cpu = boot_with_channel(
        &[assemble_lui(8, 0x3000), assemble_lw(9, 8, 4)],
        chan,
    );
    let err = cpu.run(Some(100)).unwrap_err();
    assert!(matches!(err, ExecutorError::OutOfBounds { .. }));
    assert_eq!(err.exit_code(), -11);
}

#[test]
fn test_writing_the_input_port_traps() {
    let chan = BufferChannel::new();
    let mut cpu = boot_with_channel(
        &[assemble_lui(8, 0x3000), assemble_sw(8, 8, 0)],
        chan.clone(),
    );
    let err = cpu.run(Some(100)).unwrap_err();
    assert!(matches!(err, ExecutorError::OutOfBounds { .. }));
    assert_eq!(chan.output(), b"");
}
