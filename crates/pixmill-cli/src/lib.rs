//! # pixmill-cli
//!
//! Text front end for the pixmill engine: a line-oriented command language,
//! an [`Interpreter`] that executes it against one session, and the
//! `pixmill` binary.
//!
//! ```rust
//! use pixmill_cli::Interpreter;
//! use pixmill_ops::Engine;
//!
//! let mut shell = Interpreter::new(Engine::new(), Vec::new());
//! shell.run_reader("# nothing loaded yet\nblur missing out\n".as_bytes()).unwrap();
//! assert_eq!(shell.failures(), 1);
//! ```

#![warn(missing_docs)]

pub mod command;
pub mod interpreter;

pub use command::Command;
pub use interpreter::Interpreter;
