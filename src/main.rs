mod app;
mod command;
mod config;
mod consts;
mod game;
mod logo;
mod startup;
mod util;
use crate::app::{App, Exit};
use crate::config::{Config, Timing};
use anyhow::Context;
use lexopt::prelude::*;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

static USAGE: &str = "\
Usage: gridsnake [--config <PATH>]

Classic snake on a fixed 25x25 grid.  Eat fruit, climb the levels, and dodge
the walls that pile up along the way.

Options:
  -c, --config <PATH>   Read configuration from <PATH>
  -h, --help            Show this message and exit
  -V, --version         Show the program version and exit";

fn main() -> ExitCode {
    let cli = match Cli::from_env() {
        Ok(Some(cli)) => cli,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    let timing = match cli.timing() {
        Ok(timing) => timing,
        Err(e) => {
            eprintln!("gridsnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(timing).run(terminal);
    ratatui::restore();
    match r {
        Ok(Exit::Clean) => ExitCode::SUCCESS,
        Ok(Exit::GameOver) => ExitCode::FAILURE,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Cli {
    config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.  Returns `None` if the program should
    /// exit without playing (after `--help` or `--version`).
    fn from_env() -> Result<Option<Cli>, lexopt::Error> {
        Cli::parse(lexopt::Parser::from_env())
    }

    fn parse(mut parser: lexopt::Parser) -> Result<Option<Cli>, lexopt::Error> {
        let mut cli = Cli::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    cli.config = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => {
                    println!("{USAGE}");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(cli))
    }

    /// Load the configuration file and resolve the game clock's knobs.  A
    /// missing file is only an error when its path was given explicitly.
    fn timing(&self) -> anyhow::Result<Timing> {
        let config = if let Some(path) = self.config.as_deref() {
            Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        } else {
            let path = Config::default_path().context("failed to load configuration")?;
            Config::load(&path, true)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        };
        Ok(config.timing())
    }
}
