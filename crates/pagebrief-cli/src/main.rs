//! PageBrief CLI - summarize a webpage from the command line

use clap::{Parser, ValueEnum};
use pagebrief::{fetch_with_options, ApiConfig, FetchOptions, Page, Summarizer};
use serde::Serialize;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for the summary
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// The markdown summary alone
    #[default]
    Md,
    /// JSON envelope with url, title, model, and summary
    Json,
}

/// PageBrief - summarize a webpage with an OpenAI-compatible model
#[derive(Parser, Debug)]
#[command(name = "pagebrief")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL of the page to summarize
    #[arg(default_value = "https://cnn.com")]
    url: String,

    /// Model identifier sent to the completion endpoint
    #[arg(long)]
    model: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long)]
    api_base: Option<String>,

    /// Custom User-Agent for the page fetch
    #[arg(long)]
    user_agent: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "md")]
    output: OutputFormat,
}

/// JSON envelope for `--output json`
#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    url: &'a str,
    title: &'a str,
    model: &'a str,
    summary: &'a str,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ApiConfig::from_env()?;
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    if let Some(api_base) = cli.api_base {
        config = config.with_api_base(api_base);
    }

    let options = FetchOptions {
        user_agent: cli.user_agent,
    };
    let page = fetch_with_options(&cli.url, options).await?;

    let summarizer = Summarizer::new(config)?;
    let summary = summarizer.summarize(&page).await?;

    writeln_safe(&render(&page, summarizer.model(), &summary, cli.output)?);
    Ok(())
}

/// Render the summary in the requested format
fn render(page: &Page, model: &str, summary: &str, output: OutputFormat) -> anyhow::Result<String> {
    Ok(match output {
        OutputFormat::Md => summary.to_string(),
        OutputFormat::Json => {
            let report = SummaryReport {
                url: &page.url,
                title: &page.title,
                model,
                summary,
            };
            serde_json::to_string_pretty(&report)?
        }
    })
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
