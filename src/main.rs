use std::error::Error as _;
use std::path::PathBuf;

use clap::Parser;
use json2csv::convert::{self, ConvertOptions};
use json2csv::{ConvertError, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        if verbose {
            let mut cause = error.source();
            while let Some(inner) = cause {
                eprintln!("caused by: {inner}");
                cause = inner.source();
            }
        }
        std::process::exit(error.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose)?;
    let options = ConvertOptions {
        fields: cli.fields,
        encoding: cli.encoding,
        delimiter: cli.delimiter,
    };
    let summary = convert::json_to_csv(&cli.input_json, cli.output.as_deref(), &options)?;
    println!("{}", summary.output.display());
    Ok(())
}

/// Routes warn/error diagnostics to stderr and the rest to stdout. The
/// filter is built from the verbosity flag alone; no environment variables
/// are consulted.
fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .with_writer(writer)
        .try_init()
        .map_err(|error| ConvertError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert JSON documents into delimited text tables."
)]
struct Cli {
    /// Path to the input JSON file.
    input_json: PathBuf,

    /// Output CSV path. Defaults to the input path with a .csv extension.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Comma-separated list of fields to write, in order. Disables inference
    /// and drops record fields not named here.
    #[arg(long, value_delimiter = ',')]
    fields: Option<Vec<String>>,

    /// Text encoding used for both reading and writing.
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// Field separator for the output table.
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Raise log verbosity from informational to debug.
    #[arg(long, short = 'v')]
    verbose: bool,
}
