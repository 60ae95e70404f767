//! valuelens CLI binary.
//!
//! Runs a valuation lens over a ticker from the command line or serves the
//! browser UI.

mod web;

use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use valuelens::data::config::{DEFAULT_LOOKBACK_DAYS, DEFAULT_YAHOO_BASE_URL};
use valuelens::data::{
    FinancialsSource, ProviderConfig, StaticFinancialsSource, StatementKind, Ticker,
    YahooFinancialsSource,
};
use valuelens::lenses::{LensKind, ProfileKind};
use valuelens::output::{ExportFormat, Exporter, StatementExport, render_pdf};
use valuelens::{Analysis, AnalysisError};

const DEFAULT_LOG_FILTER: &str = "valuelens=info,tower_http=info";

#[derive(Debug, Parser)]
#[command(name = "valuelens")]
#[command(about = "Superinvestor valuation lenses over quarterly fundamentals", long_about = None)]
#[command(version)]
struct Cli {
    /// Use the built-in sample statements instead of Yahoo Finance
    #[arg(long, global = true)]
    offline: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(flatten)]
    provider: ProviderArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct ProviderArgs {
    /// Yahoo Finance API host
    #[arg(long, global = true, env = "VALUELENS_YAHOO_BASE_URL", default_value = DEFAULT_YAHOO_BASE_URL)]
    yahoo_base_url: String,

    /// Minimum milliseconds between provider requests
    #[arg(long, global = true, env = "VALUELENS_REQUEST_INTERVAL_MS", default_value_t = 250)]
    request_interval_ms: u64,

    /// Days of quarterly history to request
    #[arg(long, global = true, env = "VALUELENS_LOOKBACK_DAYS", default_value_t = DEFAULT_LOOKBACK_DAYS)]
    lookback_days: u32,
}

impl ProviderArgs {
    fn config(&self) -> ProviderConfig {
        ProviderConfig::default()
            .with_base_url(&self.yahoo_base_url)
            .with_request_interval(Duration::from_millis(self.request_interval_ms))
            .with_lookback_days(self.lookback_days)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute metrics for a ticker and apply a lens
    Analyze {
        /// Stock symbol
        ticker: String,

        /// Lens to apply (burry, greenblatt, buffett, klarman, einhorn)
        #[arg(long, default_value_t = LensKind::Burry)]
        lens: LensKind,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write a PDF summary to this file or directory
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Include an investor-profile checklist; bare flag uses the lens's own
        /// profile, or name one (graham, buffett, lynch, greenblatt, burry)
        #[arg(long, value_name = "KEY", num_args = 0..=1)]
        profile: Option<Option<ProfileKind>>,
    },

    /// Print raw quarterly statements
    Statements {
        /// Stock symbol
        ticker: String,

        /// Statement to print (income, balance, cashflow); all when omitted
        #[arg(long)]
        kind: Option<StatementKind>,

        /// Number of most recent quarters in text output
        #[arg(long, default_value_t = 4)]
        periods: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print each statement as a DataFrame instead
        #[arg(long)]
        frame: bool,
    },

    /// List available lenses and investor profiles
    Lenses,

    /// Serve the browser UI
    Serve {
        /// Address to listen on
        #[arg(long, env = "VALUELENS_ADDR", default_value = "127.0.0.1:8501")]
        addr: SocketAddr,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
    Csv,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    if let Err(err) = dotenvy::dotenv()
        && !err.not_found()
    {
        return Err(err).context("failed to load .env; fix or remove the file");
    }

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match cli.command {
        Commands::Lenses => {
            list_lenses();
            Ok(())
        }
        Commands::Analyze {
            ref ticker,
            lens,
            format,
            ref pdf,
            profile,
        } => {
            let source = build_source(&cli)?;
            analyze(source.as_ref(), ticker, lens, format, pdf.as_ref(), profile).await
        }
        Commands::Statements {
            ref ticker,
            kind,
            periods,
            format,
            frame,
        } => {
            let source = build_source(&cli)?;
            let format = if frame { None } else { Some(format) };
            statements(source.as_ref(), ticker, kind, periods, format).await
        }
        Commands::Serve { addr } => {
            let source = build_source(&cli)?;
            web::run_server(addr, source).await
        }
    }
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_source(cli: &Cli) -> anyhow::Result<Arc<dyn FinancialsSource>> {
    if cli.offline {
        warn!("offline mode: serving built-in sample statements for every ticker");
        return Ok(Arc::new(StaticFinancialsSource::sample()));
    }
    let config = cli.provider.config();
    debug!(base_url = %config.base_url, "using Yahoo Finance provider");
    let source = YahooFinancialsSource::new(&config)
        .context("failed to create the Yahoo Finance client")?;
    Ok(Arc::new(source))
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    pb
}

/// Attach retry guidance to provider failures.
fn with_guidance(err: AnalysisError) -> anyhow::Error {
    if err.is_retryable() {
        anyhow!(
            "{err}\nYahoo Finance sometimes returns empty responses or throttles requests; \
             try again in a moment, or use --offline to explore with sample data."
        )
    } else {
        err.into()
    }
}

async fn analyze(
    source: &dyn FinancialsSource,
    ticker: &str,
    lens: LensKind,
    format: OutputFormat,
    pdf: Option<&PathBuf>,
    profile: Option<Option<ProfileKind>>,
) -> anyhow::Result<()> {
    let pb = spinner(format!(
        "Fetching quarterly statements for {}...",
        ticker.trim().to_uppercase()
    ));
    let result = Analysis::run(source, ticker, lens).await;
    pb.finish_and_clear();
    let mut analysis = result.map_err(with_guidance)?;
    if let Some(Some(kind)) = profile {
        analysis = analysis.with_profile(kind);
    }

    let mut report = analysis.report()?;
    if profile.is_none() {
        report.profile = None;
    }

    match format {
        OutputFormat::Text => print!("{}", report.to_ascii_table()),
        OutputFormat::Markdown => print!("{}", report.to_markdown()),
        OutputFormat::Json => println!("{}", report.export_to_string(ExportFormat::PrettyJson)?),
        OutputFormat::Csv => print!("{}", report.export_to_string(ExportFormat::Csv)?),
    }

    if let Some(path) = pdf {
        let path = if path.is_dir() {
            path.join(analysis.pdf_file_name())
        } else {
            path.clone()
        };
        let bytes = render_pdf(&report)?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("failed to write PDF to {}", path.display()))?;
        eprintln!("Saved PDF report to {}", path.display());
    }

    Ok(())
}

async fn statements(
    source: &dyn FinancialsSource,
    ticker: &str,
    kind: Option<StatementKind>,
    periods: usize,
    format: Option<OutputFormat>,
) -> anyhow::Result<()> {
    let ticker = Ticker::parse(ticker)?;
    let pb = spinner(format!("Fetching quarterly statements for {ticker}..."));
    let result = source.fetch_quarterly(&ticker).await;
    pb.finish_and_clear();
    let financials = result
        .map_err(AnalysisError::from)
        .map_err(with_guidance)?;

    let kinds = kind.map_or_else(|| StatementKind::ALL.to_vec(), |k| vec![k]);
    for kind in kinds {
        let Some(format) = format else {
            println!("{} (quarterly): {ticker}", kind.title());
            println!("{}", financials.to_dataframe(kind)?);
            continue;
        };
        let export = StatementExport::from_table(ticker.as_str(), financials.statement(kind));
        match format {
            OutputFormat::Text | OutputFormat::Markdown => {
                print!("{}", export.to_ascii_table(periods));
            }
            OutputFormat::Json => {
                println!("{}", export.export_to_string(ExportFormat::PrettyJson)?);
            }
            OutputFormat::Csv => {
                println!("# {}", export.title);
                print!("{}", export.export_to_string(ExportFormat::Csv)?);
            }
        }
    }

    Ok(())
}

fn list_lenses() {
    println!("Lenses");
    println!("======\n");
    for lens in LensKind::ALL {
        println!("  {:<12} {:<38} {}", lens.key(), lens.name(), lens.description());
    }

    println!("\nInvestor profiles");
    println!("=================\n");
    for profile in ProfileKind::ALL {
        println!(
            "  {:<12} {:<38} {}",
            profile.key(),
            profile.label(),
            profile.description()
        );
    }
}
