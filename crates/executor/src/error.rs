//! Executor traps.

use thiserror::Error;

/// Fatal simulator traps.
///
/// None of these are recoverable: the driver maps each onto a process exit
/// code via [`ExecutorError::exit_code`]. End-of-input on the character
/// device is *not* a trap; the simulated program sees an all-ones word.
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("arithmetic overflow at pc={pc:#010x}")]
    Overflow { pc: u32 },

    #[error("memory access out of bounds: address {addr:#010x}")]
    OutOfBounds { addr: u32 },

    #[error("permission violation at address {addr:#010x}")]
    AccessViolation { addr: u32 },

    #[error("address {addr:#010x} not aligned to {required} bytes")]
    UnalignedAccess { addr: u32, required: u32 },

    #[error("program counter out of range: pc={pc:#010x}")]
    BadProgramCounter { pc: u32 },

    #[error("invalid instruction at pc={pc:#010x}: {bits:#010x}")]
    InvalidInstruction { pc: u32, bits: u32 },

    #[error("reserved field set at pc={pc:#010x}: {bits:#010x}")]
    ReservedField { pc: u32, bits: u32 },

    #[error("execution halted: reached max steps ({max_steps})")]
    MaxStepsReached { max_steps: u64 },
}

impl ExecutorError {
    /// Process exit code for this trap.
    ///
    /// The three trap categories keep the reference sentinels: overflow
    /// `-10`, memory `-11`, invalid instruction `-12` (status bytes 246,
    /// 245, 244 on Unix). A blown step budget is an operational error, not
    /// an architectural trap, and exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecutorError::Overflow { .. } => -10,
            ExecutorError::OutOfBounds { .. }
            | ExecutorError::AccessViolation { .. }
            | ExecutorError::UnalignedAccess { .. }
            | ExecutorError::BadProgramCounter { .. } => -11,
            ExecutorError::InvalidInstruction { .. } | ExecutorError::ReservedField { .. } => -12,
            ExecutorError::MaxStepsReached { .. } => 1,
        }
    }
}
