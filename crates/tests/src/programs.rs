//! Canned MIPS-I test programs.

use crate::encode;

/// Sum the integers 1..=n into `$v0` and terminate.
///
/// ```asm
/// ori   $t0, $zero, n     # counter
/// loop:
///     addu  $v0, $v0, $t0 # v0 += counter
///     addiu $t0, $t0, -1  # counter -= 1
///     bne   $t0, $zero, loop
///     nop                 # delay slot
/// jr    $zero             # terminate
/// nop                     # delay slot
/// ```
pub fn sum_program(n: u16) -> Vec<u32> {
    vec![
        encode::ori(8, 0, n),      // $t0 = n
        encode::addu(2, 2, 8),     // loop: $v0 += $t0
        encode::addiu(8, 8, -1),   // $t0 -= 1
        encode::bne(8, 0, -3),     // back to the addu
        encode::nop(),             // delay slot
        encode::jr(0),
        encode::nop(),
    ]
}

/// Write "OK\n" to the console output port, then exit 0.
pub fn hello_program() -> Vec<u32> {
    vec![
        encode::lui(8, 0x3000),        // $t0 = device base
        encode::ori(9, 0, b'O' as u16),
        encode::sw(9, 8, 4),
        encode::ori(9, 0, b'K' as u16),
        encode::sw(9, 8, 4),
        encode::ori(9, 0, b'\n' as u16),
        encode::sw(9, 8, 4),
        encode::ori(2, 0, 0),          // exit status 0
        encode::jr(0),
        encode::nop(),
    ]
}

/// Echo input bytes to output until end of input, then exit 0.
///
/// ```asm
/// lui   $t0, 0x3000
/// loop:
///     lw    $t1, 0($t0)   # read one byte, or -1 at EOF
///     bltz  $t1, done
///     nop
///     sw    $t1, 4($t0)   # write it back out
///     beq   $zero, $zero, loop
///     nop
/// done:
///     ori   $v0, $zero, 0
///     jr    $zero
///     nop
/// ```
pub fn echo_program() -> Vec<u32> {
    vec![
        encode::lui(8, 0x3000),
        encode::lw(9, 8, 0),     // loop head (+4)
        encode::bltz(9, 4),      // to done (+28)
        encode::nop(),
        encode::sw(9, 8, 4),
        encode::beq(0, 0, -5),   // back to the lw
        encode::nop(),
        encode::ori(2, 0, 0),    // done (+28)
        encode::jr(0),
        encode::nop(),
    ]
}

/// Store a word in data memory, reread its bytes, and exit with the most
/// significant one.
pub fn byte_order_program() -> Vec<u32> {
    vec![
        encode::lui(8, 0x2000),        // $t0 = data base
        encode::lui(9, 0xAABB),
        encode::ori(9, 9, 0xCCDD),
        encode::sw(9, 8, 0),
        encode::lbu(2, 8, 0),          // MSB lives at the lowest address
        encode::jr(0),
        encode::nop(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_program_shape() {
        let prog = sum_program(5);
        assert_eq!(prog.len(), 7);
        // Terminates through jr $zero.
        assert_eq!(prog[5], encode::jr(0));
    }

    #[test]
    fn test_echo_program_branches_are_paired_with_delay_slots() {
        let prog = echo_program();
        assert_eq!(prog[3], encode::nop());
        assert_eq!(prog[6], encode::nop());
        assert_eq!(prog[9], encode::nop());
    }
}
