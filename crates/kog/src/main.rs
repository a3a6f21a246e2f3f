use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use kog::commands::{run_parse, run_query, InputFormat, InputSource, ValueKind};
use kog::{logging, KogConfig};
use kog_decode::FormParser;
use tracing::debug;

/// kog - decode form and JSON bodies from the command line
#[derive(Parser)]
#[command(name = "kog")]
#[command(about = "Inspect form and JSON bodies with kog decoders", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a kog.toml (defaults to ./kog.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct InputArgs {
    /// How to read the body
    #[arg(short, long, value_enum, default_value_t = InputFormat::Form)]
    format: InputFormat,

    /// Read the body from a file instead of stdin
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Body given inline
    #[arg(long)]
    text: Option<String>,
}

impl InputArgs {
    fn source(&self) -> InputSource {
        InputSource::from_args(self.text.clone(), self.file.clone())
    }
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Print the value tree of a body as JSON
    Parse {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Decode one field of a body
    Query {
        #[command(flatten)]
        input: InputArgs,
        /// Decode the field as this kind
        #[arg(short = 'a', long = "as", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
        /// Accept a single value or a list of them
        #[arg(short, long)]
        many: bool,
        /// Keys to follow from the root
        path: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = KogConfig::discover(cli.config.as_deref(), &cwd)?;
    logging::init(&logging::filter_directive(&config.log.filter, cli.verbose));
    debug!(?config, "configuration loaded");

    let parser = FormParser::new(config.form);
    let code = match &cli.command {
        Commands::Parse { input } => run_parse(&input.source(), input.format, &parser)?,
        Commands::Query {
            input,
            kind,
            many,
            path,
        } => run_query(&input.source(), input.format, &parser, path, *kind, *many)?,
    };

    Ok(ExitCode::from(code))
}
