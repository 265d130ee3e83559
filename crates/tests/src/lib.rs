//! Integration tests for the mipsim MIPS-I simulator.
//!
//! This crate demonstrates the complete pipeline:
//! 1. Encode a MIPS-I program
//! 2. Load it as a raw big-endian image
//! 3. Execute it against a scripted console
//! 4. Check the exit status and console output

pub mod encode;
pub mod pipeline;
pub mod programs;
