//! Line-by-line command execution against one [`Engine`].
//!
//! Every non-blank, non-comment line produces exactly one report on the
//! output sink:
//!
//! ```text
//! OK: load koala.ppm koala
//! ERROR: blur ghost out: unknown image: 'ghost'
//! ```
//!
//! A failed line never stops processing; the next line runs against the
//! registry as it stood.

use crate::command::Command;
use anyhow::{anyhow, bail, Context, Result};
use pixmill_ops::Engine;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Deepest allowed chain of `run` commands.
pub const MAX_SCRIPT_DEPTH: usize = 16;

/// Executes commands and reports results to `W`.
pub struct Interpreter<W: Write> {
    engine: Engine,
    out: W,
    failures: usize,
    depth: usize,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter reporting to `out`.
    pub fn new(engine: Engine, out: W) -> Self {
        Self {
            engine,
            out,
            failures: 0,
            depth: 0,
        }
    }

    /// The session engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Number of lines that reported `ERROR` so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Consumes the interpreter, returning the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Parses, executes and reports one line.
    ///
    /// Returns `Ok(false)` if the line failed. Blank and comment lines
    /// succeed silently. The outer `Err` is only for a failing sink.
    pub fn execute_line(&mut self, line: &str) -> io::Result<bool> {
        let cmd = match Command::parse(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Ok(true),
            Err(e) => return self.report(line, Err(e)),
        };
        let result = self.execute(&cmd);
        self.report(line, result)
    }

    /// Executes an already parsed command and reports it like a line.
    pub fn execute_reported(&mut self, cmd: &Command) -> io::Result<bool> {
        let line = cmd.to_string();
        let result = self.execute(cmd);
        self.report(&line, result)
    }

    /// Runs every line of `reader`.
    pub fn run_reader<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for line in reader.lines() {
            self.execute_line(&line?)?;
        }
        Ok(())
    }

    /// Runs a script file. Failures inside the script are reported per line.
    pub fn run_script(&mut self, path: &Path) -> Result<()> {
        if self.depth >= MAX_SCRIPT_DEPTH {
            bail!("script nesting deeper than {MAX_SCRIPT_DEPTH}");
        }
        let file = File::open(path)
            .with_context(|| format!("Failed to open script: {}", path.display()))?;
        info!(script = %path.display(), "Running script");

        self.depth += 1;
        let result = self.run_reader(BufReader::new(file));
        self.depth -= 1;
        result.with_context(|| format!("Failed while running: {}", path.display()))
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, cmd: &Command) -> Result<()> {
        debug!(command = %cmd, "execute");
        match cmd {
            Command::Load { path, name } => {
                let img = pixmill_io::read(path)
                    .with_context(|| format!("Failed to load: {}", path.display()))?;
                self.engine.load(img, name);
            }
            Command::Save { path, name } => {
                let img = self
                    .engine
                    .save(name)
                    .ok_or_else(|| anyhow!("unknown image: '{name}'"))?;
                pixmill_io::write(path, &img)
                    .with_context(|| format!("Failed to save: {}", path.display()))?;
            }
            Command::HorizontalFlip { src, dst } => {
                self.engine.horizontal_flip(src, dst)?;
            }
            Command::VerticalFlip { src, dst } => {
                self.engine.vertical_flip(src, dst)?;
            }
            Command::Brighten { delta, src, dst } => {
                self.engine.brighten(*delta, src, dst)?;
            }
            Command::Greyscale { component, src, dst } => {
                self.engine.greyscale(*component, src, dst)?;
            }
            Command::ColorTransform { kind, src, dst } => {
                self.engine.color_transform(*kind, src, dst)?;
            }
            Command::Filter { kind, src, dst } => {
                self.engine.filter(*kind, src, dst)?;
            }
            Command::Dither { src, dst } => {
                self.engine.dither(src, dst)?;
            }
            Command::RgbSplit { src, r, g, b } => {
                self.engine.split(src, r, g, b)?;
            }
            Command::RgbCombine { dst, r, g, b } => {
                self.engine.combine(dst, r, g, b)?;
            }
            Command::Run { path } => self.run_script(path)?,
        }
        Ok(())
    }

    fn report(&mut self, line: &str, result: Result<()>) -> io::Result<bool> {
        let line = line.trim();
        match result {
            Ok(()) => {
                writeln!(self.out, "OK: {line}")?;
                Ok(true)
            }
            Err(e) => {
                self.failures += 1;
                warn!(line, error = %format!("{e:#}"), "Command failed");
                writeln!(self.out, "ERROR: {line}: {e:#}")?;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmill_core::{Raster, Rgb};

    fn interp() -> Interpreter<Vec<u8>> {
        let mut engine = Engine::new();
        engine.load(Raster::from_fn(2, 2, 255, |x, y| Rgb::new(x * 100, y * 100, 50)), "img");
        Interpreter::new(engine, Vec::new())
    }

    fn output(i: Interpreter<Vec<u8>>) -> String {
        String::from_utf8(i.into_inner()).unwrap()
    }

    #[test]
    fn test_ok_and_error_reports() {
        let mut i = interp();
        assert!(i.execute_line("horizontal-flip img flipped").unwrap());
        assert!(!i.execute_line("blur ghost out").unwrap());
        assert!(i.execute_line("# comment").unwrap());
        assert_eq!(i.failures(), 1);
        assert_eq!(
            output(i),
            "OK: horizontal-flip img flipped\nERROR: blur ghost out: unknown image: 'ghost'\n"
        );
    }

    #[test]
    fn test_continues_after_error() {
        let mut i = interp();
        let script = "brighten x img a\nbrighten 10 img a\nsave out.ppm nothing\n";
        i.run_reader(script.as_bytes()).unwrap();
        assert_eq!(i.failures(), 2);
        assert!(i.engine().registry().contains("a"));
        let out = output(i);
        assert!(out.contains("ERROR: brighten x img a: invalid increment 'x'"));
        assert!(out.contains("OK: brighten 10 img a"));
        assert!(out.contains("ERROR: save out.ppm nothing: unknown image: 'nothing'"));
    }

    #[test]
    fn test_unknown_component_reports_and_creates_nothing() {
        let mut i = interp();
        assert!(!i.execute_line("greyscale purple-component img g").unwrap());
        assert!(!i.engine().registry().contains("g"));
    }

    #[test]
    fn test_split_combine_lines() {
        let mut i = interp();
        i.run_reader("rgb-split img r g b\nrgb-combine back r g b\n".as_bytes()).unwrap();
        assert_eq!(i.failures(), 0);
        let reg = i.engine().registry();
        assert_eq!(reg.get("back"), reg.get("img"));
    }

    #[test]
    fn test_load_save_files() {
        let dir = tempfile::tempdir().unwrap();
        let ppm = dir.path().join("in.ppm");
        std::fs::write(&ppm, "P3\n1 1\n255\n10 20 30\n").unwrap();
        let out = dir.path().join("out.ppm");

        let mut i = Interpreter::new(Engine::new(), Vec::new());
        i.execute_line(&format!("load {} a", ppm.display())).unwrap();
        i.execute_line("brighten 5 a a").unwrap();
        i.execute_line(&format!("save {} a", out.display())).unwrap();
        assert_eq!(i.failures(), 0);

        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, "P3\n1 1\n255\n15\n25\n35\n");
    }

    #[test]
    fn test_execute_reported() {
        let mut i = interp();
        let cmd = Command::Brighten { delta: -5, src: "img".into(), dst: "dim".into() };
        assert!(i.execute_reported(&cmd).unwrap());
        assert_eq!(output(i), "OK: brighten -5 img dim\n");
    }

    #[test]
    fn test_run_missing_script() {
        let mut i = interp();
        assert!(!i.execute_line("run /nonexistent/script.txt").unwrap());
        assert!(output(i).starts_with("ERROR: run /nonexistent/script.txt: Failed to open script"));
    }

    #[test]
    fn test_nested_and_recursive_scripts() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("inner.txt");
        std::fs::write(&inner, "vertical-flip img v\n").unwrap();
        let outer = dir.path().join("outer.txt");
        std::fs::write(&outer, format!("run {}\n", inner.display())).unwrap();

        let mut i = interp();
        i.run_script(&outer).unwrap();
        assert!(i.engine().registry().contains("v"));
        assert_eq!(i.failures(), 0);

        let selfref = dir.path().join("loop.txt");
        std::fs::write(&selfref, format!("run {}\n", selfref.display())).unwrap();
        let mut i = interp();
        i.run_script(&selfref).unwrap();
        // Only the innermost `run` fails; the enclosing ones complete.
        assert_eq!(i.failures(), 1);
        assert!(output(i).contains("script nesting deeper than 16"));
    }
}
