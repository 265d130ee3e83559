//! MIPS-I integer CPU executor.
//!
//! Implements the user-mode integer subset of the classic 32-bit big-endian
//! MIPS-I architecture: the ALU register forms under the SPECIAL opcode, the
//! REGIMM conditional branches, absolute jumps, immediate arithmetic and
//! logic, and the byte/half/word (including unaligned LWL/LWR) loads and
//! stores.
//!
//! # Execution model
//!
//! One instruction fully completes before the next begins; there is no
//! pipeline and no interrupts. The only architectural concession to the real
//! machine is the **branch delay slot**: a taken control transfer latches its
//! target in a one-deep `Option<u32>`, and the instruction immediately after
//! the branch executes before the target applies. A branch inside a delay
//! slot simply overwrites the latch (last writer wins).
//!
//! At the point an instruction executes, the program counter has already
//! been advanced to the delay-slot address. Relative branch targets, jump
//! region bits, and link values are all computed from that advanced PC, so
//! `$ra` receives the address *after* the delay slot.
//!
//! # Termination and traps
//!
//! Termination is cooperative: when the PC becomes zero after an instruction
//! (typically `jr $ra` with a zero link register), [`Cpu::step`] reports the
//! low byte of `$v0` as the exit status. Everything else that goes wrong is
//! a fatal [`ExecutorError`]: arithmetic overflow on the signed add/subtract
//! forms, memory bounds/permission/alignment violations, a PC outside the
//! loaded image, and reserved or unknown encodings.

use crate::decode::{funct, opcode, regimm, DecodedInstr};
use crate::error::ExecutorError;
use crate::io::{ByteChannel, StdioChannel};
use crate::loader::Image;
use crate::memory::{AddressSpace, TEXT_BASE};

/// MIPS-I CPU state.
pub struct Cpu {
    /// General-purpose registers $0..$31.
    /// $0 is hardwired to zero.
    pub regs: [u32; 32],
    /// Multiply/divide high result register.
    pub hi: u32,
    /// Multiply/divide low result register.
    pub lo: u32,
    /// Address of the next instruction to fetch.
    pub pc: u32,
    /// Lowest valid fetch address.
    pc_min: u32,
    /// End of the loaded image; a fetch needs `pc + 4 <= pc_max`.
    pc_max: u32,
    /// Target latched by a taken branch, applied after the delay slot.
    pending_branch: Option<u32>,
    /// Executed-instruction counter.
    pub cycle: u64,
    /// Memory subsystem.
    pub memory: AddressSpace,
}

impl Cpu {
    /// Create a CPU wired to the process's standard streams.
    pub fn new() -> Self {
        Self::with_channel(Box::new(StdioChannel))
    }

    /// Create a CPU with a custom console channel.
    pub fn with_channel(channel: Box<dyn ByteChannel>) -> Self {
        Self {
            regs: [0; 32],
            hi: 0,
            lo: 0,
            pc: TEXT_BASE,
            pc_min: TEXT_BASE,
            pc_max: TEXT_BASE,
            pending_branch: None,
            cycle: 0,
            memory: AddressSpace::new(channel),
        }
    }

    /// Load a program image into instruction memory and set the PC bounds.
    pub fn load_image(&mut self, image: &Image) -> Result<(), ExecutorError> {
        let mut addr = TEXT_BASE;
        for &word in image.words() {
            self.memory.write(addr, word, true)?;
            addr += 4;
        }
        self.pc = TEXT_BASE;
        self.pc_min = TEXT_BASE;
        self.pc_max = TEXT_BASE + image.byte_len();
        Ok(())
    }

    /// Set a register value ($0 writes are silently discarded).
    #[inline]
    pub fn set_reg(&mut self, r: u8, val: u32) {
        if r != 0 {
            self.regs[r as usize] = val;
        }
    }

    /// Get a register value ($0 always reads zero).
    #[inline]
    pub fn get_reg(&self, r: u8) -> u32 {
        if r == 0 {
            0
        } else {
            self.regs[r as usize]
        }
    }

    /// Execute a single instruction.
    ///
    /// Returns `Ok(Some(status))` when the program terminates by driving the
    /// PC to zero, `Ok(None)` otherwise.
    pub fn step(&mut self) -> Result<Option<u8>, ExecutorError> {
        // Fetch
        let pc = self.pc;
        if pc % 4 != 0
            || pc < self.pc_min
            || pc.checked_add(4).map_or(true, |end| end > self.pc_max)
        {
            return Err(ExecutorError::BadProgramCounter { pc });
        }
        let bits = self.memory.read(pc, false)?;
        let instr = DecodedInstr::decode(bits);

        // Advance: a pending branch lands after its delay slot.
        self.pc = match self.pending_branch.take() {
            Some(target) => target,
            None => pc + 4,
        };

        let rs_val = self.get_reg(instr.rs);
        let rt_val = self.get_reg(instr.rt);
        let simm = instr.simm();

        match instr.op {
            // ========== SPECIAL: register forms, dispatched on funct ==========
            opcode::SPECIAL => match instr.funct {
                funct::SLL => {
                    // SLL: Shift Left Logical by shamt
                    self.set_reg(instr.rd, rt_val << instr.shamt);
                }
                funct::SRL => {
                    // SRL: Shift Right Logical by shamt
                    self.set_reg(instr.rd, rt_val >> instr.shamt);
                }
                funct::SRA => {
                    // SRA: Shift Right Arithmetic by shamt
                    self.set_reg(instr.rd, ((rt_val as i32) >> instr.shamt) as u32);
                }
                funct::SLLV => {
                    // SLLV: Shift Left Logical by the low five bits of RS
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, rt_val << (rs_val & 0x1F));
                }
                funct::SRLV => {
                    // SRLV: Shift Right Logical variable
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, rt_val >> (rs_val & 0x1F));
                }
                funct::SRAV => {
                    // SRAV: Shift Right Arithmetic variable
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, ((rt_val as i32) >> (rs_val & 0x1F)) as u32);
                }
                funct::JR => {
                    // JR: Jump Register
                    self.pending_branch = Some(rs_val);
                }
                funct::JALR => {
                    // JALR: Jump And Link Register
                    if instr.shamt != 0 || instr.rt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.pending_branch = Some(rs_val);
                    self.set_reg(instr.rd, self.pc.wrapping_add(4));
                }
                funct::MFHI => {
                    // MFHI: Move From HI
                    if instr.shamt != 0 || instr.rt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, self.hi);
                }
                funct::MTHI => {
                    // MTHI: Move To HI
                    if instr.shamt != 0 || instr.rt != 0 || instr.rd != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.hi = rs_val;
                }
                funct::MFLO => {
                    // MFLO: Move From LO
                    if instr.shamt != 0 || instr.rt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, self.lo);
                }
                funct::MTLO => {
                    // MTLO: Move To LO
                    if instr.shamt != 0 || instr.rt != 0 || instr.rd != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.lo = rs_val;
                }
                funct::MULT => {
                    // MULT: signed 32x32 -> 64 multiply into {HI, LO}
                    if instr.shamt != 0 || instr.rd != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    let prod = (rs_val as i32 as i64).wrapping_mul(rt_val as i32 as i64);
                    self.hi = (prod >> 32) as u32;
                    self.lo = prod as u32;
                }
                funct::MULTU => {
                    // MULTU: unsigned multiply into {HI, LO}
                    if instr.shamt != 0 || instr.rd != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    let prod = (rs_val as u64).wrapping_mul(rt_val as u64);
                    self.hi = (prod >> 32) as u32;
                    self.lo = prod as u32;
                }
                funct::DIV => {
                    // DIV: signed divide, quotient in LO, remainder in HI.
                    // A zero divisor leaves both registers untouched.
                    if instr.shamt != 0 || instr.rd != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    if rt_val != 0 {
                        let a = rs_val as i32;
                        let b = rt_val as i32;
                        self.lo = a.wrapping_div(b) as u32;
                        self.hi = a.wrapping_rem(b) as u32;
                    }
                }
                funct::DIVU => {
                    // DIVU: unsigned divide; zero divisor is a no-op
                    if instr.shamt != 0 || instr.rd != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    if rt_val != 0 {
                        self.lo = rs_val / rt_val;
                        self.hi = rs_val % rt_val;
                    }
                }
                funct::ADD => {
                    // ADD: signed add, traps on overflow
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    match (rs_val as i32).checked_add(rt_val as i32) {
                        Some(sum) => self.set_reg(instr.rd, sum as u32),
                        None => return Err(ExecutorError::Overflow { pc }),
                    }
                }
                funct::ADDU => {
                    // ADDU: wrapping add
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, rs_val.wrapping_add(rt_val));
                }
                funct::SUB => {
                    // SUB: signed subtract, traps on overflow
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    match (rs_val as i32).checked_sub(rt_val as i32) {
                        Some(diff) => self.set_reg(instr.rd, diff as u32),
                        None => return Err(ExecutorError::Overflow { pc }),
                    }
                }
                funct::SUBU => {
                    // SUBU: wrapping subtract
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, rs_val.wrapping_sub(rt_val));
                }
                funct::AND => {
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, rs_val & rt_val);
                }
                funct::OR => {
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, rs_val | rt_val);
                }
                funct::XOR => {
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, rs_val ^ rt_val);
                }
                funct::SLT => {
                    // SLT: Set on Less Than (signed)
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, ((rs_val as i32) < (rt_val as i32)) as u32);
                }
                funct::SLTU => {
                    // SLTU: Set on Less Than Unsigned
                    if instr.shamt != 0 {
                        return Err(ExecutorError::ReservedField { pc, bits });
                    }
                    self.set_reg(instr.rd, (rs_val < rt_val) as u32);
                }
                _ => {
                    return Err(ExecutorError::InvalidInstruction { pc, bits });
                }
            },

            // ========== REGIMM: conditional branches on the sign of RS ==========
            opcode::REGIMM => {
                let (taken, link) = match instr.rt {
                    regimm::BLTZ => ((rs_val as i32) < 0, false),
                    regimm::BGEZ => ((rs_val as i32) >= 0, false),
                    regimm::BLTZAL => ((rs_val as i32) < 0, true),
                    regimm::BGEZAL => ((rs_val as i32) >= 0, true),
                    _ => return Err(ExecutorError::InvalidInstruction { pc, bits }),
                };
                if taken {
                    self.pending_branch = Some(self.pc.wrapping_add((simm << 2) as u32));
                }
                // The link register is written whether or not the branch is taken.
                if link {
                    self.set_reg(31, self.pc.wrapping_add(4));
                }
            }

            // ========== Jumps ==========
            opcode::J => {
                // J: region bits come from the delay-slot PC
                self.pending_branch = Some((self.pc & 0xF000_0000) | (instr.target << 2));
            }
            opcode::JAL => {
                // JAL: Jump And Link
                if instr.shamt != 0 || instr.rt != 0 || instr.rd != 0 {
                    return Err(ExecutorError::ReservedField { pc, bits });
                }
                self.pending_branch = Some((self.pc & 0xF000_0000) | (instr.target << 2));
                self.set_reg(31, self.pc.wrapping_add(4));
            }

            // ========== Compare-and-branch ==========
            opcode::BEQ => {
                if rs_val == rt_val {
                    self.pending_branch = Some(self.pc.wrapping_add((simm << 2) as u32));
                }
            }
            opcode::BNE => {
                if rs_val != rt_val {
                    self.pending_branch = Some(self.pc.wrapping_add((simm << 2) as u32));
                }
            }
            opcode::BLEZ => {
                if instr.rt != 0 {
                    return Err(ExecutorError::ReservedField { pc, bits });
                }
                if (rs_val as i32) <= 0 {
                    self.pending_branch = Some(self.pc.wrapping_add((simm << 2) as u32));
                }
            }
            opcode::BGTZ => {
                if instr.rt != 0 {
                    return Err(ExecutorError::ReservedField { pc, bits });
                }
                if (rs_val as i32) > 0 {
                    self.pending_branch = Some(self.pc.wrapping_add((simm << 2) as u32));
                }
            }

            // ========== Immediate arithmetic and logic ==========
            opcode::ADDI => {
                // ADDI: signed add immediate, traps on overflow
                match (rs_val as i32).checked_add(simm) {
                    Some(sum) => self.set_reg(instr.rt, sum as u32),
                    None => return Err(ExecutorError::Overflow { pc }),
                }
            }
            opcode::ADDIU => {
                // ADDIU: wrapping add immediate
                self.set_reg(instr.rt, rs_val.wrapping_add(simm as u32));
            }
            opcode::SLTI => {
                self.set_reg(instr.rt, ((rs_val as i32) < simm) as u32);
            }
            opcode::SLTIU => {
                // The immediate is sign-extended, then compared unsigned.
                self.set_reg(instr.rt, (rs_val < simm as u32) as u32);
            }
            opcode::ANDI => {
                self.set_reg(instr.rt, rs_val & instr.zimm());
            }
            opcode::ORI => {
                self.set_reg(instr.rt, rs_val | instr.zimm());
            }
            opcode::XORI => {
                self.set_reg(instr.rt, rs_val ^ instr.zimm());
            }
            opcode::LUI => {
                // LUI: Load Upper Immediate
                if instr.rs != 0 {
                    return Err(ExecutorError::ReservedField { pc, bits });
                }
                self.set_reg(instr.rt, instr.zimm() << 16);
            }

            // ========== Loads ==========
            // Byte offset 0 within a word is the most-significant byte.
            opcode::LB => {
                // LB: Load Byte, sign-extended
                let addr = rs_val.wrapping_add(simm as u32);
                let word = self.memory.read(addr & !3, false)?;
                let shift = (3 - (addr & 3)) * 8;
                let byte = ((word >> shift) & 0xFF) as u8;
                self.set_reg(instr.rt, byte as i8 as i32 as u32);
            }
            opcode::LH => {
                // LH: Load Halfword, sign-extended
                let addr = rs_val.wrapping_add(simm as u32);
                if addr % 2 != 0 {
                    return Err(ExecutorError::UnalignedAccess { addr, required: 2 });
                }
                let word = self.memory.read(addr & !3, false)?;
                let shift = (2 - (addr & 3)) * 8;
                let half = ((word >> shift) & 0xFFFF) as u16;
                self.set_reg(instr.rt, half as i16 as i32 as u32);
            }
            opcode::LWL => {
                // LWL: merge the left part of an unaligned word over the
                // high bytes of RT
                let addr = rs_val.wrapping_add(simm as u32);
                let word = self.memory.read(addr & !3, false)?;
                let shift = (addr & 3) * 8;
                let mask = u32::MAX << shift;
                self.set_reg(instr.rt, (rt_val & !mask) | ((word << shift) & mask));
            }
            opcode::LW => {
                // LW: Load Word
                let addr = rs_val.wrapping_add(simm as u32);
                if addr % 4 != 0 {
                    return Err(ExecutorError::UnalignedAccess { addr, required: 4 });
                }
                let word = self.memory.read(addr, false)?;
                self.set_reg(instr.rt, word);
            }
            opcode::LBU => {
                // LBU: Load Byte Unsigned
                let addr = rs_val.wrapping_add(simm as u32);
                let word = self.memory.read(addr & !3, false)?;
                let shift = (3 - (addr & 3)) * 8;
                self.set_reg(instr.rt, (word >> shift) & 0xFF);
            }
            opcode::LHU => {
                // LHU: Load Halfword Unsigned
                let addr = rs_val.wrapping_add(simm as u32);
                if addr % 2 != 0 {
                    return Err(ExecutorError::UnalignedAccess { addr, required: 2 });
                }
                let word = self.memory.read(addr & !3, false)?;
                let shift = (2 - (addr & 3)) * 8;
                self.set_reg(instr.rt, (word >> shift) & 0xFFFF);
            }
            opcode::LWR => {
                // LWR: merge the right part of an unaligned word over the
                // low bytes of RT
                let addr = rs_val.wrapping_add(simm as u32);
                let word = self.memory.read(addr & !3, false)?;
                let shift = (3 - (addr & 3)) * 8;
                let mask = u32::MAX >> shift;
                self.set_reg(instr.rt, (rt_val & !mask) | ((word >> shift) & mask));
            }

            // ========== Stores ==========
            // Byte and half stores read-modify-write the containing word.
            // The read is forced, the write is not, so a store to read-only
            // memory still traps, just after the read.
            opcode::SB => {
                // SB: Store Byte
                let addr = rs_val.wrapping_add(simm as u32);
                let shift = (3 - (addr & 3)) * 8;
                let mask = 0xFFu32 << shift;
                let current = self.memory.read(addr & !3, true)?;
                let merged = (current & !mask) | ((rt_val << shift) & mask);
                self.memory.write(addr & !3, merged, false)?;
            }
            opcode::SH => {
                // SH: Store Halfword
                let addr = rs_val.wrapping_add(simm as u32);
                if addr % 2 != 0 {
                    return Err(ExecutorError::UnalignedAccess { addr, required: 2 });
                }
                let shift = (2 - (addr & 3)) * 8;
                let mask = 0xFFFFu32 << shift;
                let current = self.memory.read(addr & !3, true)?;
                let merged = (current & !mask) | ((rt_val << shift) & mask);
                self.memory.write(addr & !3, merged, false)?;
            }
            opcode::SW => {
                // SW: Store Word
                let addr = rs_val.wrapping_add(simm as u32);
                if addr % 4 != 0 {
                    return Err(ExecutorError::UnalignedAccess { addr, required: 4 });
                }
                self.memory.write(addr, rt_val, false)?;
            }

            _ => {
                return Err(ExecutorError::InvalidInstruction { pc, bits });
            }
        }

        self.cycle += 1;

        // Cooperative termination: a zero PC (typically jr through a zero
        // $ra) reports the low byte of $v0.
        if self.pc == 0 {
            return Ok(Some((self.get_reg(2) & 0xFF) as u8));
        }
        Ok(None)
    }

    /// Run until the program terminates or a trap fires.
    ///
    /// With `max_steps` set, execution stops with
    /// [`ExecutorError::MaxStepsReached`] once that many instructions have
    /// run.
    pub fn run(&mut self, max_steps: Option<u64>) -> Result<u8, ExecutorError> {
        loop {
            if let Some(limit) = max_steps {
                if self.cycle >= limit {
                    return Err(ExecutorError::MaxStepsReached { max_steps: limit });
                }
            }
            if let Some(status) = self.step()? {
                return Ok(status);
            }
        }
    }

    /// Reset registers, HI/LO, the branch latch, and the cycle counter.
    /// Memory contents are left alone.
    pub fn reset(&mut self) {
        self.regs = [0; 32];
        self.hi = 0;
        self.lo = 0;
        self.pc = self.pc_min;
        self.pending_branch = None;
        self.cycle = 0;
    }

    /// Executed-instruction count.
    pub fn cycles(&self) -> u64 {
        self.cycle
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Instruction Assembler Helpers (for testing)
// ============================================================================

/// Assemble a SPECIAL (register-form) instruction.
pub fn assemble_r(funct: u8, rd: u8, rs: u8, rt: u8, shamt: u8) -> u32 {
    ((rs as u32) << 21)
        | ((rt as u32) << 16)
        | ((rd as u32) << 11)
        | ((shamt as u32) << 6)
        | (funct as u32)
}

/// Assemble an immediate-form instruction.
pub fn assemble_i(op: u8, rt: u8, rs: u8, imm: u16) -> u32 {
    ((op as u32) << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | (imm as u32)
}

/// Assemble a jump from a byte target address (the region bits are dropped;
/// they come from the PC at execution time).
pub fn assemble_jump(op: u8, target: u32) -> u32 {
    ((op as u32) << 26) | ((target >> 2) & 0x03FF_FFFF)
}

/// Assemble a REGIMM branch with a word offset.
pub fn assemble_regimm(sub: u8, rs: u8, offset: i16) -> u32 {
    ((opcode::REGIMM as u32) << 26) | ((rs as u32) << 21) | ((sub as u32) << 16) | (offset as u16 as u32)
}

// Convenience assembler functions
pub fn assemble_nop() -> u32 {
    // SLL $0, $0, 0
    0
}

pub fn assemble_ori(rt: u8, rs: u8, imm: u16) -> u32 {
    assemble_i(opcode::ORI, rt, rs, imm)
}

pub fn assemble_andi(rt: u8, rs: u8, imm: u16) -> u32 {
    assemble_i(opcode::ANDI, rt, rs, imm)
}

pub fn assemble_addi(rt: u8, rs: u8, imm: i16) -> u32 {
    assemble_i(opcode::ADDI, rt, rs, imm as u16)
}

pub fn assemble_addiu(rt: u8, rs: u8, imm: i16) -> u32 {
    assemble_i(opcode::ADDIU, rt, rs, imm as u16)
}

pub fn assemble_slti(rt: u8, rs: u8, imm: i16) -> u32 {
    assemble_i(opcode::SLTI, rt, rs, imm as u16)
}

pub fn assemble_sltiu(rt: u8, rs: u8, imm: i16) -> u32 {
    assemble_i(opcode::SLTIU, rt, rs, imm as u16)
}

pub fn assemble_lui(rt: u8, imm: u16) -> u32 {
    assemble_i(opcode::LUI, rt, 0, imm)
}

pub fn assemble_add(rd: u8, rs: u8, rt: u8) -> u32 {
    assemble_r(funct::ADD, rd, rs, rt, 0)
}

pub fn assemble_addu(rd: u8, rs: u8, rt: u8) -> u32 {
    assemble_r(funct::ADDU, rd, rs, rt, 0)
}

pub fn assemble_sub(rd: u8, rs: u8, rt: u8) -> u32 {
    assemble_r(funct::SUB, rd, rs, rt, 0)
}

pub fn assemble_subu(rd: u8, rs: u8, rt: u8) -> u32 {
    assemble_r(funct::SUBU, rd, rs, rt, 0)
}

pub fn assemble_slt(rd: u8, rs: u8, rt: u8) -> u32 {
    assemble_r(funct::SLT, rd, rs, rt, 0)
}

pub fn assemble_sltu(rd: u8, rs: u8, rt: u8) -> u32 {
    assemble_r(funct::SLTU, rd, rs, rt, 0)
}

pub fn assemble_sll(rd: u8, rt: u8, shamt: u8) -> u32 {
    assemble_r(funct::SLL, rd, 0, rt, shamt)
}

pub fn assemble_sra(rd: u8, rt: u8, shamt: u8) -> u32 {
    assemble_r(funct::SRA, rd, 0, rt, shamt)
}

pub fn assemble_sllv(rd: u8, rt: u8, rs: u8) -> u32 {
    assemble_r(funct::SLLV, rd, rs, rt, 0)
}

pub fn assemble_mult(rs: u8, rt: u8) -> u32 {
    assemble_r(funct::MULT, 0, rs, rt, 0)
}

pub fn assemble_multu(rs: u8, rt: u8) -> u32 {
    assemble_r(funct::MULTU, 0, rs, rt, 0)
}

pub fn assemble_div(rs: u8, rt: u8) -> u32 {
    assemble_r(funct::DIV, 0, rs, rt, 0)
}

pub fn assemble_divu(rs: u8, rt: u8) -> u32 {
    assemble_r(funct::DIVU, 0, rs, rt, 0)
}

pub fn assemble_mfhi(rd: u8) -> u32 {
    assemble_r(funct::MFHI, rd, 0, 0, 0)
}

pub fn assemble_mflo(rd: u8) -> u32 {
    assemble_r(funct::MFLO, rd, 0, 0, 0)
}

pub fn assemble_mthi(rs: u8) -> u32 {
    assemble_r(funct::MTHI, 0, rs, 0, 0)
}

pub fn assemble_mtlo(rs: u8) -> u32 {
    assemble_r(funct::MTLO, 0, rs, 0, 0)
}

pub fn assemble_jr(rs: u8) -> u32 {
    assemble_r(funct::JR, 0, rs, 0, 0)
}

pub fn assemble_jalr(rd: u8, rs: u8) -> u32 {
    assemble_r(funct::JALR, rd, rs, 0, 0)
}

pub fn assemble_j(target: u32) -> u32 {
    assemble_jump(opcode::J, target)
}

pub fn assemble_jal(target: u32) -> u32 {
    assemble_jump(opcode::JAL, target)
}

pub fn assemble_beq(rs: u8, rt: u8, offset: i16) -> u32 {
    assemble_i(opcode::BEQ, rt, rs, offset as u16)
}

pub fn assemble_bne(rs: u8, rt: u8, offset: i16) -> u32 {
    assemble_i(opcode::BNE, rt, rs, offset as u16)
}

pub fn assemble_blez(rs: u8, offset: i16) -> u32 {
    assemble_i(opcode::BLEZ, 0, rs, offset as u16)
}

pub fn assemble_bgtz(rs: u8, offset: i16) -> u32 {
    assemble_i(opcode::BGTZ, 0, rs, offset as u16)
}

pub fn assemble_bltz(rs: u8, offset: i16) -> u32 {
    assemble_regimm(regimm::BLTZ, rs, offset)
}

pub fn assemble_bgez(rs: u8, offset: i16) -> u32 {
    assemble_regimm(regimm::BGEZ, rs, offset)
}

pub fn assemble_bltzal(rs: u8, offset: i16) -> u32 {
    assemble_regimm(regimm::BLTZAL, rs, offset)
}

pub fn assemble_lb(rt: u8, base: u8, offset: i16) -> u32 {
    assemble_i(opcode::LB, rt, base, offset as u16)
}

pub fn assemble_lbu(rt: u8, base: u8, offset: i16) -> u32 {
    assemble_i(opcode::LBU, rt, base, offset as u16)
}

pub fn assemble_lh(rt: u8, base: u8, offset: i16) -> u32 {
    assemble_i(opcode::LH, rt, base, offset as u16)
}

pub fn assemble_lhu(rt: u8, base: u8, offset: i16) -> u32 {
    assemble_i(opcode::LHU, rt, base, offset as u16)
}

pub fn assemble_lw(rt: u8, base: u8, offset: i16) -> u32 {
    assemble_i(opcode::LW, rt, base, offset as u16)
}

pub fn assemble_lwl(rt: u8, base: u8, offset: i16) -> u32 {
    assemble_i(opcode::LWL, rt, base, offset as u16)
}

pub fn assemble_lwr(rt: u8, base: u8, offset: i16) -> u32 {
    assemble_i(opcode::LWR, rt, base, offset as u16)
}

pub fn assemble_sb(rt: u8, base: u8, offset: i16) -> u32 {
    assemble_i(opcode::SB, rt, base, offset as u16)
}

pub fn assemble_sh(rt: u8, base: u8, offset: i16) -> u32 {
    assemble_i(opcode::SH, rt, base, offset as u16)
}

pub fn assemble_sw(rt: u8, base: u8, offset: i16) -> u32 {
    assemble_i(opcode::SW, rt, base, offset as u16)
}
