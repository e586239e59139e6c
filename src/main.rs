use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ls8_vm::machine::Machine;
use tracing_subscriber::prelude::*;

/// LS-8 virtual machine.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Program image to execute, in the one-binary-byte-per-line text format.
    program: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout is reserved for PRN output.
    let stderr_format = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    tracing_subscriber::registry().with(stderr_format).init();

    tracing::info!("loading LS-8 program {}", args.program.display());
    let mut machine = Machine::from_file(&args.program)?;
    machine.run()?;
    Ok(())
}
