use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use resalloc_core::{LogFormat, ResallocConfig};

mod commands;

use commands::{OutputFormat, Settings};

#[derive(Parser)]
#[command(
    name = "resalloc",
    about = "resalloc — threshold-based CPU and memory decisions",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a resalloc.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the CPU threshold (percent)
    #[arg(long, global = true)]
    cpu_threshold: Option<f64>,

    /// Override the memory threshold (percent)
    #[arg(long, global = true)]
    memory_threshold: Option<f64>,

    /// Output format for decisions
    #[arg(short, long, global = true, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Reject samples that break min <= avg <= max or std >= 0
    #[arg(long, global = true)]
    strict: bool,

    /// Log format (overrides [logging].format in the config)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormatArg>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fabricated sample input and its decision
    Demo,
    /// Evaluate aggregated metrics JSON from a file or stdin.
    ///
    /// The document must contain cpu_percent, memory_percent and
    /// timestamp. A missing avg inside a sample reads as 0.0.
    Evaluate {
        /// Input file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
    },
    /// Print the effective thresholds
    Thresholds,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ResallocConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ResallocConfig::default(),
    };

    init_logging(&config, cli.log_format.map(LogFormat::from))?;

    let thresholds = config
        .thresholds
        .with_overrides(cli.cpu_threshold, cli.memory_threshold);
    thresholds.validate()?;

    debug!(
        cpu_threshold = thresholds.cpu_threshold,
        memory_threshold = thresholds.memory_threshold,
        strict = cli.strict,
        "effective settings"
    );

    let settings = Settings {
        thresholds,
        format: cli.format,
        strict: cli.strict,
    };

    match cli.command {
        Commands::Demo => commands::demo::demo(&settings),
        Commands::Evaluate { input } => commands::evaluate::evaluate(&input, &settings),
        Commands::Thresholds => commands::thresholds::thresholds(&settings),
    }
}

/// Logs go to stderr so stdout carries only the printed documents.
fn init_logging(
    config: &ResallocConfig,
    format_override: Option<LogFormat>,
) -> anyhow::Result<()> {
    let default_directive = config.logging.filter.as_deref().unwrap_or("resalloc=info");
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = build_filter(env_value.as_deref(), default_directive)?;

    match format_override.unwrap_or(config.logging.format) {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }

    if let Some(reason) = rejected {
        warn!(
            var = EnvFilter::DEFAULT_ENV,
            fallback = default_directive,
            error = %reason,
            "ignoring invalid log filter"
        );
    }

    Ok(())
}

/// Filter from the env value when it parses, otherwise from the default
/// directive. The second element carries the env parse error, if any.
fn build_filter(
    env_value: Option<&str>,
    default_directive: &str,
) -> anyhow::Result<(EnvFilter, Option<String>)> {
    let mut rejected = None;
    if let Some(value) = env_value {
        match EnvFilter::try_new(value) {
            Ok(filter) => return Ok((filter, None)),
            Err(e) => rejected = Some(format!("{value:?}: {e}")),
        }
    }

    let filter = EnvFilter::try_new(default_directive)
        .with_context(|| format!("invalid log filter {default_directive:?}"))?;
    Ok((filter, rejected))
}
