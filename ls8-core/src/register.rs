use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("register index {0} out of bounds, must be [0, {1})")]
    InvalidRegister(usize, usize),
}

pub type Result<T> = std::result::Result<T, RegisterError>;

/// Fixed-size file of 8-bit general-purpose registers, addressed by index.
///
/// Values are stored exactly as written; overflow policy belongs to the
/// arithmetic that produces them, not to the file.
#[derive(Clone, Debug)]
pub struct RegisterFile<const N: usize> {
    regs: [u8; N],
}

impl<const N: usize> Default for RegisterFile<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RegisterFile<N> {
    pub fn new() -> Self {
        Self { regs: [0; N] }
    }

    pub fn get(&self, index: usize) -> Result<u8> {
        self.regs
            .get(index)
            .copied()
            .ok_or(RegisterError::InvalidRegister(index, N))
    }

    pub fn set(&mut self, index: usize, value: u8) -> Result<()> {
        match self.regs.get_mut(index) {
            Some(reg) => {
                *reg = value;
                Ok(())
            }
            None => Err(RegisterError::InvalidRegister(index, N)),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.regs
    }
}
