use anyhow::Result;
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use folder_namer::error::FolderError;
use folder_namer::folder::{self, FolderScheme};
use folder_namer::json_export;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Code to derive the folder name from, e.g. PROD1234
    code: Option<String>,

    /// Print the derived folder as JSON instead of the plain name
    #[arg(long, short = 'j')]
    json: bool,

    /// Width of each folder range
    #[arg(long, short = 'w', default_value_t = folder::DEFAULT_WIDTH)]
    width: u64,

    /// Subtracted from the range index to form the folder id
    #[arg(long, short = 'o', default_value_t = folder::DEFAULT_OFFSET, allow_negative_numbers = true)]
    offset: i64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries the folder name only
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let code = cli.code.ok_or(FolderError::MissingArgument)?;
    let scheme = FolderScheme::new(cli.width, cli.offset)?;
    info!(
        code = %code,
        width = scheme.width(),
        offset = scheme.offset(),
        "Deriving folder name"
    );

    let folder_name = scheme.derive(&code)?;

    if cli.json {
        writeln!(out, "{}", json_export::serialize_to_json(&folder_name)?)?;
    } else {
        writeln!(out, "{}", folder_name)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(cli, &mut io::stdout().lock())
}
