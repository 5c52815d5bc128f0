//! Pagesift main entry point
//!
//! This is the command-line interface for the pagesift article scraper.

use clap::Parser;
use pagesift::config::load_config_with_hash;
use pagesift::crawler::{run_crawl, CrawlMode, CrawlReport};
use pagesift::url::SiteScope;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagesift: a single-site article scraper
///
/// Pagesift harvests article links from one root page, fetches each
/// article, and either tallies word frequencies or exports
/// `{url, title, content}` records as JSON, CSV, and XLSX.
#[derive(Parser, Debug)]
#[command(name = "pagesift")]
#[command(version)]
#[command(about = "A single-site article scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Extract records and write the JSON/CSV/XLSX export files
    #[arg(long, conflicts_with = "dry_run")]
    export: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long, conflicts_with = "export")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        let mode = if cli.export {
            CrawlMode::Export
        } else {
            CrawlMode::WordCounts
        };
        handle_crawl(&config, mode).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagesift=info,warn"),
            1 => EnvFilter::new("pagesift=debug,info"),
            2 => EnvFilter::new("pagesift=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &pagesift::config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let scope = SiteScope::from_root_url(&config.site.root_url)?;

    println!("=== Pagesift Dry Run ===\n");

    println!("Site:");
    println!("  Root URL: {}", config.site.root_url);
    println!("  Host: {}", scope.host());
    println!("  Origin: {}", scope.origin());
    println!("  Content selector: {}", config.site.content_selector);
    println!("  Title selector: {}", config.site.title_selector);
    println!("  Link pattern: {}", config.site.link_pattern);

    println!("\nFetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);

    println!("\nReport:");
    println!("  Top words: {}", config.report.top_words);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);

    println!("\n✓ Configuration is valid");
    println!("✓ Would crawl article links found on {}", scope.root_url());

    Ok(())
}

/// Handles a crawl in either mode and prints the final report
async fn handle_crawl(
    config: &pagesift::config::Config,
    mode: CrawlMode,
) -> Result<(), Box<dyn std::error::Error>> {
    match run_crawl(config, mode).await {
        Ok(CrawlReport::WordCounts { articles, top }) => {
            println!("Top {} words across {} articles:", top.len(), articles);
            for (rank, (token, count)) in top.iter().enumerate() {
                println!("{:>4}. {} ({})", rank + 1, token, count);
            }
            Ok(())
        }
        Ok(CrawlReport::Export { articles, files }) => {
            println!("Exported {} records:", articles);
            for file in files {
                println!("  {}", file.display());
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
