//! Wordfreq-Crawler main entry point
//!
//! This is the command-line interface for the word-frequency crawler.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordfreq_crawler::config::{read_config, validate, Config, FailurePolicy, OutputFormat};
use wordfreq_crawler::crawler::crawl;
use wordfreq_crawler::output::write_report;
use wordfreq_crawler::ConfigError;

/// Wordfreq-Crawler: most frequent words and phrases of a website
///
/// Crawls a site from a seed URL, follows links that start with the seed up
/// to the given depth, and reports the most frequent word n-grams found in
/// the visible page text.
#[derive(Parser, Debug)]
#[command(name = "wordfreq-crawler")]
#[command(version)]
#[command(about = "Most frequent word n-grams of a website", long_about = None)]
struct Cli {
    /// Seed URL (overrides `crawler.seed` from the config file)
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of link hops to follow from the seed
    #[arg(short, long, value_name = "N")]
    depth: Option<u32>,

    /// Number of most frequent n-grams to report per length
    #[arg(short, long, value_name = "K")]
    top: Option<usize>,

    /// N-gram length to report (repeatable)
    #[arg(short = 'n', long = "ngram", value_name = "N")]
    ngrams: Vec<usize>,

    /// What to do when a page cannot be fetched
    #[arg(long, value_enum, value_name = "POLICY")]
    on_error: Option<FailurePolicy>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so a report printed to stdout stays clean.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wordfreq_crawler=info,warn"),
            1 => EnvFilter::new("wordfreq_crawler=debug,info"),
            2 => EnvFilter::new("wordfreq_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Merges the config file (if any) with command-line overrides
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            read_config(path)?
        }
        None => Config::for_seed(String::new()),
    };

    if let Some(seed) = &cli.seed {
        config.crawler.seed = seed.clone();
    }
    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(top) = cli.top {
        config.crawler.most_frequent = top;
    }
    if !cli.ngrams.is_empty() {
        config.crawler.ngram_lengths = cli.ngrams.iter().copied().collect();
    }
    if let Some(policy) = cli.on_error {
        config.crawler.on_error = policy;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(path) = &cli.output {
        config.output.path = Some(path.display().to_string());
    }

    validate(&config)?;
    Ok(config)
}

/// Handles the --dry-run mode: shows the merged configuration
fn handle_dry_run(config: &Config) {
    println!("=== Wordfreq-Crawler Dry Run ===\n");

    println!("Crawl:");
    println!("  Seed: {}", config.crawler.seed);
    println!("  Max depth: {}", config.crawler.max_depth);
    println!(
        "  N-gram lengths: {}",
        config
            .crawler
            .ngram_lengths
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Most frequent: {}", config.crawler.most_frequent);
    println!("  On error: {:?}", config.crawler.on_error);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  Connect timeout: {}s", config.http.connect_timeout_secs);

    println!("\nOutput:");
    println!("  Format: {:?}", config.output.format);
    println!(
        "  Destination: {}",
        config.output.path.as_deref().unwrap_or("stdout")
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let report = match crawl(config).await {
        Ok(report) => {
            tracing::info!(
                "Crawl completed successfully: {} pages, {} tokens",
                report.pages_visited.len(),
                report.token_count
            );
            report
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let path = config.output.path.as_deref().map(std::path::Path::new);
    write_report(&report, config.output.format, path)?;

    Ok(())
}
