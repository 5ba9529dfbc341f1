use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cap_probe::{Format, GatePolicy, Harness, HarnessConfig, render};

/// Classify catalog types by duplication and relocation capability and
/// exercise them through container growth.
#[derive(Debug, Parser)]
#[command(name = "cap-probe", version)]
struct Cli {
    /// Run phases on types lacking the capabilities they need
    /// (also lists the non-relocatable failing cases).
    #[arg(long)]
    unsafe_execution: bool,

    /// Skip every phase; only classify and report.
    #[arg(long)]
    disable_all: bool,

    /// Gate storage growth like bulk insertion instead of the reference formula.
    #[arg(long)]
    symmetric_gates: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only run these catalog members (by short name, repeatable).
    #[arg(long = "only", value_name = "NAME")]
    only: Vec<String>,

    /// Log filter directive written to stderr, e.g. `debug` or `cap_probe=trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Format::Text,
            OutputFormat::Json => Format::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("invalid log filter `{}`", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let policy = if cli.symmetric_gates {
        GatePolicy::Symmetric
    } else {
        GatePolicy::Reference
    };
    let config = HarnessConfig::new()
        .with_unsafe_execution(cli.unsafe_execution)
        .with_all_execution_disabled(cli.disable_all)
        .with_gate_policy(policy);
    debug!(?config, "harness configured");

    let harness = Harness::new(config);
    let runs = if cli.only.is_empty() {
        harness.run_catalog()
    } else {
        harness.run_named(cli.only.as_slice())?
    };

    print!("{}", render(&runs, cli.format.into())?);
    Ok(())
}
