mod config;
mod errors;
mod jd;
mod llm_client;
mod pipeline;
mod profile;
mod search;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::pipeline::{LiveProfileSource, RunReport};
use crate::profile::ProfileFetcher;
use crate::search::ProfileLocator;

/// Sources and summarizes job candidates from one job description:
/// extracts search attributes, discovers matching public profiles, and
/// produces a structured summary per profile.
#[derive(Parser)]
#[command(name = "scout", version)]
struct Cli {
    /// Job description: literal text or a path to a .txt/.pdf file
    job_description: String,

    /// Maximum number of profiles to locate and summarize
    #[arg(long, default_value_t = 30)]
    max_profiles: usize,

    /// Emit the full report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Structured logging goes to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Scout v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm_timeout)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let locator = ProfileLocator::new(config.http_timeout)?;
    let fetcher = ProfileFetcher::new(&config)?;
    let mut source = LiveProfileSource::new(fetcher, &llm);

    // Extraction and location failures propagate here: non-zero exit.
    // Per-profile failures are already absorbed into the report.
    let report = pipeline::run(
        &cli.job_description,
        cli.max_profiles,
        &llm,
        &locator,
        &mut source,
    )
    .await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    let attrs = &report.attributes;
    println!("Extracted attributes");
    println!("  title:          {}", attrs.title);
    println!("  degree:         {:?}", attrs.minimum_degree);
    println!("  location:       {}", attrs.location);
    println!("  skills:         {}", attrs.required_skills.join(", "));
    println!("  experience:     {}+ years", attrs.experience_years);
    println!("  keywords:       {}", attrs.search_keywords.join(", "));
    println!("  work auth:      {}", attrs.work_authorization);
    println!();

    for (url, summary) in &report.summaries {
        println!("{url}");
        println!("  name:   {}", summary.name);
        println!("  skills: {}", summary.skills.join(", "));
        for entry in &summary.experience {
            println!("  exp:    {} at {} ({})", entry.title, entry.company, entry.duration);
        }
        for entry in &summary.education {
            println!(
                "  edu:    {}, {} ({})",
                entry.degree, entry.institution, entry.duration
            );
        }
        println!();
    }

    for skipped in &report.skipped {
        println!("skipped {} — {}", skipped.url, skipped.reason);
    }

    println!(
        "{} profiles summarized, {} skipped",
        report.summaries.len(),
        report.skipped.len()
    );
}
