//! pixmill - scriptable image transformation CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pixmill_ops::{DitherMode, Engine, EngineConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pixmill")]
#[command(author, version, about = "Scriptable image transformation CLI")]
#[command(long_about = "
Runs pixmill commands against one in-memory image session.

Examples:
  pixmill run edit.txt                          # Run a script
  pixmill shell < edit.txt                      # Same, from stdin
  pixmill exec 'load koala.ppm k' 'sepia k s' 'save s.png s'
  pixmill --dither floyd-steinberg exec 'load a.png a' 'dither a d' 'save d.png d'

Commands:
  load <path> <name>              save <path> <name>
  horizontal-flip <src> <dst>     vertical-flip <src> <dst>
  brighten <delta> <src> <dst>    greyscale [<component>] <src> <dst>
  sepia <src> <dst>               blur <src> <dst>
  sharpen <src> <dst>             dither <src> <dst>
  rgb-split <src> <r> <g> <b>     rgb-combine <dst> <r> <g> <b>
  run <script>
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Engine config file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dither mode: legacy, floyd-steinberg (overrides config)
    #[arg(long, global = true)]
    dither: Option<DitherMode>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or more script files in order
    Run(RunArgs),

    /// Read commands from stdin until EOF
    Shell,

    /// Execute each argument as one command line
    #[command(visible_alias = "x")]
    Exec(ExecArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Script file(s)
    #[arg(required = true)]
    scripts: Vec<PathBuf>,
}

#[derive(Args)]
struct ExecArgs {
    /// Command lines, e.g. 'blur koala soft'
    #[arg(required = true)]
    commands: Vec<String>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn engine_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(mode) = cli.dither {
        config = config.with_dither(mode);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<usize> {
    let engine = Engine::with_config(engine_config(&cli)?);
    match cli.command {
        Commands::Run(args) => commands::run::run(engine, &args.scripts),
        Commands::Shell => commands::shell::run(engine),
        Commands::Exec(args) => commands::exec::run(engine, &args.commands),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            eprintln!("{failed} command(s) failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
