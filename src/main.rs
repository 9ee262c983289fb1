use std::{
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

use chemtext::{
    compute,
    elements::{self, ElementSet},
};
use clap::Parser;
use log::debug;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "chemtext")]
#[command(about = "Parse chemical formula markup into element counts and charge", long_about = None)]
struct Cli {
    /// JSON array of element symbols to accept instead of the periodic table
    #[arg(short, long)]
    elements: Option<PathBuf>,

    /// Print each formula as JSON
    #[arg(long)]
    json: bool,

    /// Formula markup, e.g. "H<sub>2</sub>O". Read line by line from stdin when absent.
    markup: Vec<String>,
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Elements(#[from] elements::Error),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize formula: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Prints one line per input and reports whether every input parsed.
fn run(cli: &Cli) -> Result<bool, Error> {
    let elements = match &cli.elements {
        Some(path) => ElementSet::load(path)?,
        None => ElementSet::periodic_table(),
    };
    debug!("accepting {} element symbols", elements.len());

    let inputs = if cli.markup.is_empty() {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        cli.markup.clone()
    };

    let mut all_parsed = true;
    for input in &inputs {
        match compute(input, &elements) {
            Ok(formula) if cli.json => println!("{}", serde_json::to_string(&formula)?),
            Ok(formula) => println!("{formula}"),
            Err(error) => {
                eprintln!("Error: {error}");
                all_parsed = false;
            }
        }
    }

    Ok(all_parsed)
}
