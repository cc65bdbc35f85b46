//! Kingraph CLI
//!
//! Turns a family CSV into a layout-ready graph description.
//!
//! # Usage
//!
//! ```bash
//! # JSON for a dagre-style renderer
//! cargo run --bin kingraph -- build --input data/family.csv
//!
//! # Graphviz
//! cargo run --bin kingraph -- build --input data/family.csv --format dot --output family.gv
//!
//! # Report dangling references without building
//! cargo run --bin kingraph -- check --input data/family.csv
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use kingraph_core::config::{KinshipConfig, RankDir};
use kingraph_core::features::export::{self, ExportFormat};
use kingraph_core::features::graph_builder::{GraphBuilderUseCase, GraphBuilderUseCaseImpl};
use kingraph_core::features::record_loader::{CsvRecordLoader, RecordSanitizer};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kingraph")]
#[command(about = "Kingraph - genealogy records to layered graph", long_about = None)]
struct Cli {
    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph and export it
    Build {
        /// Family CSV path
        #[arg(short, long)]
        input: PathBuf,

        /// YAML config path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Override layout rank direction (TB, BT, LR, RL)
        #[arg(long)]
        rankdir: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter
        #[arg(long, default_value = ",")]
        delimiter: char,
    },

    /// Load and sanitize only, printing every issue found
    Check {
        /// Family CSV path
        #[arg(short, long)]
        input: PathBuf,

        /// YAML config path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Field delimiter
        #[arg(long, default_value = ",")]
        delimiter: char,
    },

    /// Write the default configuration
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = "kingraph.yaml")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Dot,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Dot => ExportFormat::Dot,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Commands::Build {
            input,
            config,
            format,
            rankdir,
            output,
            delimiter,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(rankdir) = rankdir {
                config.layout.rankdir = rankdir.parse::<RankDir>()?;
            }
            build(&input, &config, format.into(), output.as_deref(), delimiter_byte(delimiter)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            input,
            config,
            delimiter,
        } => {
            let config = load_config(config.as_deref())?;
            check(&input, &config, delimiter_byte(delimiter)?)
        }
        Commands::InitConfig { output } => {
            std::fs::write(&output, KinshipConfig::default().to_yaml()?)?;
            println!("Wrote {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<KinshipConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(KinshipConfig::from_yaml(path)?),
        None => Ok(KinshipConfig::default()),
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8, Box<dyn std::error::Error>> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            format!("delimiter must be a single ASCII character, got '{delimiter}'").into()
        })
}

fn build(
    input: &Path,
    config: &KinshipConfig,
    format: ExportFormat,
    output: Option<&Path>,
    delimiter: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let use_case = GraphBuilderUseCaseImpl::new(config.loader)
        .with_loader(CsvRecordLoader::new().with_delimiter(delimiter));
    let result = use_case.build_from_csv(input)?;

    let rendered = export::export(&result.graph, format, &config.layout)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            eprintln!("{} → {} ({})", input.display(), path.display(), result.stats);
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn check(
    input: &Path,
    config: &KinshipConfig,
    delimiter: u8,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let records = CsvRecordLoader::new().with_delimiter(delimiter).load_path(input)?;
    let total = records.len();
    let outcome = RecordSanitizer::new(config.loader).sanitize(records)?;

    println!("{} records read, {} kept", total, outcome.records.len());
    print!("{}", outcome.report);
    Ok(ExitCode::SUCCESS)
}
