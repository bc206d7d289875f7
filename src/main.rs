//! The binary driver: reads a machine description and inputs from stdin, runs the
//! engine over each input, and prints one verdict character per line.
//!
//! Argument handling follows the reference crate's hand-rolled `arg_handler.rs`
//! shape rather than pulling in an argument-parsing crate — the surface here is two
//! flags, which doesn't earn a dependency the ancestor never reached for either.

use std::io::{Read, Write};

use ndtm_sim::config::RuntimeConfig;
use ndtm_sim::engine;
use ndtm_sim::error::EngineError;
use ndtm_sim::parser::{self, ParseError};

#[derive(Debug, thiserror::Error)]
enum DriverError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn help_string() -> String {
    let mut s = String::new();
    s.push_str("This program reads a machine description and inputs from stdin and prints one verdict line (1, 0, or U) per input.\n");
    s.push_str("-h, --help:            This help text\n");
    s.push_str("-c, --config <path>:   Use this config.toml path instead of the default\n");
    s
}

enum Args {
    Run { config_path: Option<String> },
    Help,
}

fn parse_args(args: &[String]) -> Args {
    let mut config_path = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Args::Help,
            "-c" | "--config" => {
                config_path = args.get(i + 1).cloned();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }
    Args::Run { config_path }
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    match parse_args(&args) {
        Args::Help => {
            println!("{}", help_string());
        }
        Args::Run { config_path } => {
            if let Err(error) = run(config_path) {
                tracing::error!(%error, "fatal error");
                eprintln!("error: {error}");
                std::process::exit(1);
            }
        }
    }
}

fn run(config_path: Option<String>) -> Result<(), DriverError> {
    let runtime_config = match config_path {
        Some(path) => RuntimeConfig::from_config_toml_at(std::path::Path::new(&path)),
        None => RuntimeConfig::from_config_toml(),
    };
    tracing::info!(%runtime_config, "starting run");

    let mut source = String::new();
    std::io::stdin().lock().read_to_string(&mut source)?;

    let parsed = parser::parse(&source, &runtime_config)?;
    tracing::info!(
        states = parsed.machine.state_count(),
        step_budget = parsed.step_budget,
        inputs = parsed.inputs.len(),
        "machine description parsed"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for input in &parsed.inputs {
        let verdict = engine::run(&parsed.machine, input, parsed.step_budget, &runtime_config)?;
        writeln!(out, "{verdict}")?;
    }

    Ok(())
}
