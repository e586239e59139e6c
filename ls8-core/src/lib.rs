mod ram;
mod register;

pub use crate::ram::{Ram, RamError};
pub use crate::register::{RegisterError, RegisterFile};
