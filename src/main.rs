//! Claims Triangle CLI
//!
//! Processes a claims payment file into a cumulative development triangle
//! artifact, and lists or shows previously produced artifacts.
//!
//! # Usage
//!
//! ```bash
//! claims-triangle process claims.csv
//! claims-triangle list
//! claims-triangle show claims_CumulativeData.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use claims_triangle::{cumulative_triangle, parse_records, store, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[clap(name = "claims-triangle", version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate a claims file into a triangle artifact
    Process {
        /// Claims payment file (.txt or .csv)
        input: PathBuf,

        /// Directory the artifact is written to
        #[clap(long, default_value = "ProcessedFiles")]
        out_dir: PathBuf,
    },
    /// List previously produced artifacts
    List {
        #[clap(long, default_value = "ProcessedFiles")]
        out_dir: PathBuf,
    },
    /// Print a stored artifact's contents
    Show {
        /// Artifact name, as printed by `list`
        name: String,

        #[clap(long, default_value = "ProcessedFiles")]
        out_dir: PathBuf,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Process { input, out_dir } => process_file(&input, &out_dir),
        Command::List { out_dir } => {
            for name in store::list_artifacts(&out_dir)? {
                println!("{}", name);
            }
            Ok(())
        }
        Command::Show { name, out_dir } => {
            print!("{}", store::read_artifact(&out_dir, &name)?);
            Ok(())
        }
    }
}

fn process_file(input: &Path, out_dir: &Path) -> Result<()> {
    store::validate_input(input)?;

    let reader = BufReader::new(File::open(input)?);
    let records = parse_records(reader);
    if records.is_empty() {
        println!(
            "No payment records found in {}; nothing to aggregate",
            input.display()
        );
        return Ok(());
    }

    let lines = cumulative_triangle(&records)?;
    let path = store::write_artifact(out_dir, &store::artifact_name(input), &lines)?;

    println!(
        "Processed {} record(s) into {}",
        records.len(),
        path.display()
    );
    Ok(())
}
