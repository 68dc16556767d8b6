//! Disease Scraper CLI
//!
//! Scrapes the disease directory and writes one CSV row per disease.

use clap::Parser;
use disease_scraper::config::{DEFAULT_BASE_URL, DEFAULT_OUTPUT, DEFAULT_TIMEOUT_MS};
use disease_scraper::{FaqPolicy, Pipeline, ScrapeConfig};
use std::path::PathBuf;

/// Disease Scraper
#[derive(Parser, Debug)]
#[command(name = "disease-scraper")]
#[command(version)]
#[command(about = "Scrape disease information pages into a CSV file")]
struct Args {
    /// Directory page listing every disease
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// CSV file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Also write one row per FAQ entry to this CSV file
    #[arg(long)]
    faq_output: Option<PathBuf>,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// User agent sent with every request
    #[arg(long)]
    user_agent: Option<String>,

    /// Handling of FAQ blocks missing a question or an answer (skip-entry, drop-disease)
    #[arg(long, default_value = "skip-entry")]
    faq_policy: FaqPolicy,

    /// Visit at most this many detail pages
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> ScrapeConfig {
        let mut builder = ScrapeConfig::builder()
            .base_url(self.base_url)
            .output(self.output)
            .timeout_ms(self.timeout_ms)
            .faq_policy(self.faq_policy);
        if let Some(path) = self.faq_output {
            builder = builder.faq_output(path);
        }
        if let Some(ua) = self.user_agent {
            builder = builder.user_agent(ua);
        }
        if let Some(limit) = self.limit {
            builder = builder.limit(limit);
        }
        builder.build()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .init();

    let config = args.into_config();
    tracing::info!("Scraping {}", config.base_url);

    let summary = Pipeline::from_config(config)?.run().await?;

    match summary.listed {
        None => println!("No disease URLs fetched."),
        Some(listed) => {
            println!(
                "Done: {} listed, {} saved, {} failed.",
                listed,
                summary.rows_written,
                summary.failed.len()
            );
            for reason in &summary.failure_reasons {
                println!("Failed: {}", reason);
            }
            if let Some(path) = &summary.output {
                println!("Data saved to {}", path.display());
            }
            if let Some(path) = &summary.faq_output {
                println!("{} FAQ entries saved to {}", summary.faq_rows_written, path.display());
            }
        }
    }

    Ok(())
}
