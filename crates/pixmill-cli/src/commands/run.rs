//! `pixmill run <script>...`

use anyhow::Result;
use pixmill_cli::{Command, Interpreter};
use pixmill_ops::Engine;
use std::io;
use std::path::PathBuf;
use tracing::info;

pub fn run(engine: Engine, scripts: &[PathBuf]) -> Result<usize> {
    let mut interp = Interpreter::new(engine, io::stdout().lock());
    for script in scripts {
        interp.execute_reported(&Command::Run { path: script.clone() })?;
    }

    info!(scripts = scripts.len(), failed = interp.failures(), "Scripts complete");
    Ok(interp.failures())
}
