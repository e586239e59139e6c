use std::io::{self, Write};

use ls8_core::{Ram, RamError, RegisterError, RegisterFile};
use thiserror::Error;

use crate::alu::{self, AluError, AluOp};
use crate::isa::Opcode;

/// Memory capacity in bytes.
pub const RAM_SIZE: usize = 256;
/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

#[derive(Debug, Error)]
pub enum CpuError {
    #[error(transparent)]
    Ram(#[from] RamError),
    #[error(transparent)]
    Register(#[from] RegisterError),
    #[error(transparent)]
    Alu(#[from] AluError),
    #[error("unknown instruction 0x{opcode:02X} at 0x{pc:02X}")]
    UnknownInstruction { opcode: u8, pc: usize },
    #[error("failed to emit output")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CpuError>;

/// The LS-8 execution engine: owns memory, the register file, and the
/// program counter, and runs the fetch-decode-execute loop until halted.
///
/// `W` is the sink PRN prints to: stdout in the binary, a buffer in tests.
#[derive(Debug)]
pub struct Cpu<W: Write> {
    ram: Ram<RAM_SIZE>,
    regs: RegisterFile<NUM_REGISTERS>,
    pc: usize,
    running: bool,
    output: W,
}

impl Default for Cpu<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu<io::Stdout> {
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Cpu<W> {
    pub fn with_output(output: W) -> Self {
        Self {
            ram: Ram::new(),
            regs: RegisterFile::new(),
            pc: 0,
            running: false,
            output,
        }
    }

    /// Copy a program image into memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        self.ram.load(0, program)?;
        Ok(())
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn register(&self, index: usize) -> Result<u8> {
        Ok(self.regs.get(index)?)
    }

    /// Run the fetch-decode-execute loop until HLT clears the running flag.
    /// The flag is re-checked after every dispatched instruction, so halting
    /// always happens at an instruction boundary.
    pub fn run(&mut self) -> Result<()> {
        self.running = true;
        while self.running {
            self.step()?;
        }
        Ok(())
    }

    /// One fetch-decode-execute cycle.
    ///
    /// The fetch always reads a fixed 3-byte window at PC, whether or not
    /// the opcode uses both operand bytes. Over-reading zero-initialized
    /// memory is harmless; a window extending past the last cell is a fatal
    /// out-of-bounds fault.
    pub fn step(&mut self) -> Result<()> {
        let ir = self.ram.read(self.pc)?;
        let operand_a = self.ram.read(self.pc + 1)?;
        let operand_b = self.ram.read(self.pc + 2)?;

        let opcode = Opcode::decode(ir).map_err(|_| CpuError::UnknownInstruction {
            opcode: ir,
            pc: self.pc,
        })?;
        tracing::trace!(
            "0x{:02X}: {} {:02X} {:02X}",
            self.pc,
            opcode.mnemonic(),
            operand_a,
            operand_b
        );

        // Each handler advances PC by its own instruction width.
        match opcode {
            Opcode::Hlt => self.hlt(),
            Opcode::Prn => self.prn(operand_a),
            Opcode::Ldi => self.ldi(operand_a, operand_b),
            Opcode::Add => self.add(operand_a, operand_b),
            Opcode::Mul => self.mul(operand_a, operand_b),
        }
    }

    fn hlt(&mut self) -> Result<()> {
        self.running = false;
        self.pc += Opcode::Hlt.width();
        Ok(())
    }

    fn prn(&mut self, reg: u8) -> Result<()> {
        let value = self.regs.get(reg as usize)?;
        writeln!(self.output, "{}", value)?;
        self.pc += Opcode::Prn.width();
        Ok(())
    }

    fn ldi(&mut self, reg: u8, value: u8) -> Result<()> {
        self.regs.set(reg as usize, value)?;
        self.pc += Opcode::Ldi.width();
        Ok(())
    }

    fn add(&mut self, dest: u8, src: u8) -> Result<()> {
        alu::apply(&mut self.regs, AluOp::Add, dest as usize, src as usize)?;
        self.pc += Opcode::Add.width();
        Ok(())
    }

    fn mul(&mut self, dest: u8, src: u8) -> Result<()> {
        alu::apply(&mut self.regs, AluOp::Mul, dest as usize, src as usize)?;
        self.pc += Opcode::Mul.width();
        Ok(())
    }

    /// Diagnostic snapshot of PC, the 3-byte fetch window, and all eight
    /// registers. Never invoked by the run loop; it exists for manual
    /// debugging, and the field widths and separators are a fixed contract.
    pub fn trace(&self) -> Result<String> {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.ram.read(self.pc)?,
            self.ram.read(self.pc + 1)?,
            self.ram.read(self.pc + 2)?,
        );
        for value in self.regs.as_slice() {
            line.push_str(&format!(" {:02X}", value));
        }
        line.push('\n');
        Ok(line)
    }
}
