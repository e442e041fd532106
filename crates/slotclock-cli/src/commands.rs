//! Command-line surface and the single query command.

use clap::Parser;
use slotclock_core::{EstimateError, SlotEstimator, SlotTime};
use slotclock_rpc::client::MAX_PERFORMANCE_SAMPLES;
use slotclock_rpc::{LedgerRpc, RpcClient};
use slotclock_types::SlotQuery;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::CliConfig;
use crate::output::{self, OutputFormat};

/// Main CLI.
#[derive(Parser, Debug)]
#[command(name = "slotclock")]
#[command(about = "Find out when a slot happened, or estimate when it will")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Slot number
    #[arg(value_name = "SLOT_NUMBER")]
    pub slot: String,

    /// Network: "mainnet" or "testnet"
    #[arg(value_name = "NETWORK")]
    pub network: String,

    /// RPC endpoint URL for the selected network
    #[arg(short, long, env = "SLOTCLOCK_RPC_URL")]
    pub url: Option<String>,

    /// Recent performance samples used for estimates
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=MAX_PERFORMANCE_SAMPLES as i64))]
    pub samples: Option<u16>,

    /// Per-request timeout in seconds
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log filter
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Effective settings after merging flags, env and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub rpc_url: String,
    pub sample_limit: usize,
    pub timeout: Duration,
}

impl Settings {
    /// Flags win over the config file.
    pub fn resolve(cli: &Cli, query: &SlotQuery, config: &CliConfig) -> Self {
        Self {
            rpc_url: cli
                .url
                .clone()
                .unwrap_or_else(|| config.rpc_url(query.network).to_string()),
            sample_limit: cli.samples.map(usize::from).unwrap_or(config.sample_limit),
            timeout: Duration::from_secs(cli.timeout.unwrap_or(config.timeout_secs)),
        }
    }
}

/// Execute the query described by `cli`.
///
/// Arguments are validated before the config file is read or any client is
/// built.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let query = SlotQuery::parse(&cli.slot, &cli.network).map_err(EstimateError::from)?;
    let config = CliConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, &query, &config);

    info!(
        slot = query.target_slot,
        network = %query.network,
        cluster = query.network.cluster(),
        url = %settings.rpc_url,
        "resolved query"
    );
    debug!(?settings, "effective settings");

    let client = RpcClient::with_timeout(settings.rpc_url, settings.timeout)?;
    let estimator = SlotEstimator::new(client).with_sample_limit(settings.sample_limit);

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    run_query(&estimator, &query, cli.output, &mut stdout.lock(), color).await
}

/// Estimate and print one slot.
///
/// A past slot without a block time is reported on stderr and is not an
/// error.
pub async fn run_query<R: LedgerRpc, W: Write>(
    estimator: &SlotEstimator<R>,
    query: &SlotQuery,
    format: OutputFormat,
    out: &mut W,
    color: bool,
) -> anyhow::Result<()> {
    let result = estimator.estimate(query.target_slot).await?;

    if let SlotTime::NotFound { slot } = result {
        output::print_warning(&output::not_found_message(slot));
        if format == OutputFormat::Text {
            return Ok(());
        }
    }

    output::write_slot_time(out, query, &result, format, color)?;
    out.flush()?;
    Ok(())
}

/// Process exit status for a failed run.
///
/// Estimation errors carry their own status; anything else (config file,
/// client construction, stdout) exits 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<EstimateError>() {
        Some(estimate_err) => {
            error!(kind = ?estimate_err.kind(), error = %estimate_err, "query failed");
            estimate_err.exit_code()
        }
        None => {
            error!(error = ?err, "query failed");
            1
        }
    }
}
