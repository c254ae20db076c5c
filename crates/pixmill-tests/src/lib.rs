//! Integration tests for pixmill crates.
//!
//! End-to-end checks that drive scripts through the interpreter, write real
//! files with `pixmill-io`, and read them back.
