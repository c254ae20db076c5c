//! `pixmill shell`: commands from stdin.

use anyhow::Result;
use pixmill_cli::Interpreter;
use pixmill_ops::Engine;
use std::io;
use tracing::debug;

/// Always reports zero failures; errors are already on stdout.
pub fn run(engine: Engine) -> Result<usize> {
    let mut interp = Interpreter::new(engine, io::stdout().lock());
    interp.run_reader(io::stdin().lock())?;
    debug!(failed = interp.failures(), "stdin closed");
    Ok(0)
}
