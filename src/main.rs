//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_insight` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Token persistence and report output
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use domain_insight::config::{
    DEFAULT_DOH_URL, DEFAULT_ENRICHMENT_URL, DEFAULT_RDAP_URL, DEFAULT_SETTINGS_PATH,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use domain_insight::initialization::init_logger_with;
use domain_insight::settings::{save_token, FileSettingsStore};
use domain_insight::sink::{JsonSink, ResultSink, TerminalSink};
use domain_insight::{run_lookup, Config, LogFormat, LogLevel, LookupError, OutputFormat};

/// Look up the zone apex, registration, addresses and network of a hostname.
#[derive(Debug, Parser)]
#[command(name = "domain_insight", version, about)]
struct Cli {
    /// URL or bare hostname to look up
    target: String,

    /// Enrichment API token (overrides the saved one)
    #[arg(long, env = "IPINFO_TOKEN")]
    ipinfo_token: Option<String>,

    /// Save the given --ipinfo-token for future runs
    #[arg(long, requires = "ipinfo_token")]
    save_token: bool,

    /// Settings file holding the saved token
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    settings_path: PathBuf,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long, default_value = DEFAULT_DOH_URL)]
    doh_url: String,

    /// RDAP service base URL
    #[arg(long, default_value = DEFAULT_RDAP_URL)]
    rdap_url: String,

    /// Enrichment service base URL
    #[arg(long, default_value = DEFAULT_ENRICHMENT_URL)]
    enrichment_url: String,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            log_level: cli.log_level.clone(),
            log_format: cli.log_format.clone(),
            output: cli.output.clone(),
            timeout_seconds: cli.timeout_seconds,
            user_agent: cli.user_agent.clone(),
            doh_url: cli.doh_url.clone(),
            rdap_url: cli.rdap_url.clone(),
            enrichment_url: cli.enrichment_url.clone(),
            settings_path: cli.settings_path.clone(),
            ipinfo_token: cli.ipinfo_token.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load IPINFO_TOKEN from a .env file, if one exists
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from(&cli);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("domain_insight error: {e}");
        process::exit(1);
    }

    let mut store = FileSettingsStore::new(&config.settings_path);

    let mut json_sink = JsonSink::new();
    let mut terminal_sink = TerminalSink::stdout();
    let sink: &mut dyn ResultSink = match config.output {
        OutputFormat::Json => &mut json_sink,
        OutputFormat::Plain => &mut terminal_sink,
    };

    if cli.save_token {
        if let Some(token) = cli.ipinfo_token.as_deref() {
            if let Err(e) = save_token(&mut store, token) {
                log::warn!("Saving token to {} failed: {e}", store.path().display());
                sink.show_error(&LookupError::SettingsSave(e).to_string());
            }
        }
    }

    let outcome = run_lookup(&config, &cli.target, &store, sink).await;

    if config.output == OutputFormat::Json {
        json_sink
            .write_to(io::stdout())
            .context("Failed to write JSON report")?;
    }

    if let Err(e) = outcome {
        if e.downcast_ref::<LookupError>().is_none() {
            eprintln!("domain_insight error: {e:#}");
        }
        process::exit(1);
    }

    Ok(())
}
