//! `pixmill exec <command>...`

use anyhow::Result;
use pixmill_cli::Interpreter;
use pixmill_ops::Engine;
use std::io;

pub fn run(engine: Engine, commands: &[String]) -> Result<usize> {
    let mut interp = Interpreter::new(engine, io::stdout().lock());
    for line in commands {
        interp.execute_line(line)?;
    }
    Ok(interp.failures())
}
