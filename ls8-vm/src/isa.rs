use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown instruction 0x{0:02X}")]
    UnknownInstruction(u8),
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Raw opcode byte values. These are the external ABI of the machine: any
/// program image using them must receive exactly the documented semantics,
/// so they must never be renumbered.
pub const HLT: u8 = 0x01;
pub const PRN: u8 = 0x47;
pub const LDI: u8 = 0x82;
pub const ADD: u8 = 0xA0;
pub const MUL: u8 = 0xA2;

/// The instruction set, as a closed enum: one variant per supported opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Stop the run loop.
    Hlt,
    /// Print a register value in decimal.
    Prn,
    /// Load an immediate byte into a register.
    Ldi,
    /// ALU add of two registers into the first.
    Add,
    /// ALU multiply of two registers into the first.
    Mul,
}

/// Dispatch table over the full opcode space, built once at compile time and
/// read-only thereafter. Lookup here is the single point where an
/// unrecognized byte is rejected.
const DISPATCH: [Option<Opcode>; 256] = build_dispatch();

const fn build_dispatch() -> [Option<Opcode>; 256] {
    let mut table: [Option<Opcode>; 256] = [None; 256];
    table[HLT as usize] = Some(Opcode::Hlt);
    table[PRN as usize] = Some(Opcode::Prn);
    table[LDI as usize] = Some(Opcode::Ldi);
    table[ADD as usize] = Some(Opcode::Add);
    table[MUL as usize] = Some(Opcode::Mul);
    table
}

impl Opcode {
    pub fn decode(byte: u8) -> Result<Self> {
        DISPATCH[byte as usize].ok_or(DecodeError::UnknownInstruction(byte))
    }

    /// Total instruction width in bytes, opcode included. Each handler
    /// advances the program counter by exactly this amount.
    pub const fn width(&self) -> usize {
        match self {
            Opcode::Hlt => 1,
            Opcode::Prn => 2,
            Opcode::Ldi | Opcode::Add | Opcode::Mul => 3,
        }
    }

    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Prn => "PRN",
            Opcode::Ldi => "LDI",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
        }
    }
}
