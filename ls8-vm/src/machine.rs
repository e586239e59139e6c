use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::cpu::{Cpu, CpuError};
use crate::loader::{self, LoaderError};

#[derive(Debug, Error)]
pub enum MachineError {
    #[error(transparent)]
    Cpu(#[from] CpuError),
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error("failed to read program '{0}'")]
    ProgramRead(String, #[source] io::Error),
}

pub type Result<T> = std::result::Result<T, MachineError>;

/// An assembled LS-8 machine: a CPU with a program image loaded at address 0,
/// printing to stdout.
#[derive(Debug)]
pub struct Machine {
    cpu: Cpu<io::Stdout>,
}

impl Machine {
    pub fn new(program: &[u8]) -> Result<Self> {
        let mut cpu = Cpu::new();
        cpu.load(program)?;
        Ok(Self { cpu })
    }

    /// Parse and load a program image from an `.ls8` file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|err| MachineError::ProgramRead(path.display().to_string(), err))?;
        let program = loader::parse(&source)?;
        Self::new(&program)
    }

    /// Run to completion: returns when HLT halts the CPU, or with the first
    /// fatal fault.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("starting LS-8 machine");
        self.cpu.run()?;
        Ok(())
    }

    /// Diagnostic snapshot of the CPU state; see [`Cpu::trace`].
    pub fn trace(&self) -> Result<String> {
        Ok(self.cpu.trace()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_path(name: &str) -> String {
        format!("{}/../demos/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    #[test]
    fn test_run_print8_demo() {
        let mut machine = Machine::from_file(Path::new(&demo_path("print8.ls8"))).unwrap();
        machine.run().unwrap();
    }

    #[test]
    fn test_run_mult_demo() {
        let mut machine = Machine::from_file(Path::new(&demo_path("mult.ls8"))).unwrap();
        machine.run().unwrap();
    }

    #[test]
    fn test_missing_program_file() {
        let err = Machine::from_file(Path::new("no-such-file.ls8")).unwrap_err();
        assert!(matches!(err, MachineError::ProgramRead(_, _)));
    }

    #[test]
    fn test_trace_after_load() {
        let machine = Machine::new(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
        assert_eq!(
            machine.trace().unwrap(),
            "TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 00\n"
        );
    }
}
