use ls8_core::{RegisterError, RegisterFile};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AluError {
    #[error("unsupported ALU operation {0:?}")]
    UnsupportedOp(AluOp),
    #[error(transparent)]
    Register(#[from] RegisterError),
}

pub type Result<T> = std::result::Result<T, AluError>;

/// Operation tags the ALU can be asked to perform. `Sub` and `Div` belong to
/// the fuller LS-8 arithmetic set and are declared but not implemented;
/// dispatching one is a table-construction bug, not a runtime input error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Apply `op` to `reg[dest]` and `reg[src]`, writing the result back to
/// `reg[dest]`. All arithmetic wraps modulo 2^8 to match the register width.
pub fn apply<const N: usize>(
    regs: &mut RegisterFile<N>,
    op: AluOp,
    dest: usize,
    src: usize,
) -> Result<()> {
    let a = regs.get(dest)?;
    let b = regs.get(src)?;
    let value = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Sub | AluOp::Div => return Err(AluError::UnsupportedOp(op)),
    };
    regs.set(dest, value)?;
    Ok(())
}
