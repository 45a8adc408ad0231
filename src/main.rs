//! Seed-Crawl main entry point
//!
//! This is the command-line interface for the Seed-Crawl site crawler.

use anyhow::Context;
use clap::{Parser, Subcommand};
use seed_crawl::config::{load_config_with_hash, Config};
use seed_crawl::crawler::Coordinator;
use seed_crawl::output::{print_statistics, render_pages};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Seed-Crawl: a bounded same-site crawler
///
/// Seed-Crawl walks a website depth-first from a seed URL, stays on the
/// seed's host, honors robots.txt, and reports title, description and
/// keywords for every page it fetched.
#[derive(Parser, Debug)]
#[command(name = "seed-crawl")]
#[command(version)]
#[command(about = "A bounded same-site crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the crawl API (POST /api/crawl)
    Serve {
        /// Override the configured bind address
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Crawl one site and print the page records as JSON
    Crawl {
        /// Seed URL to start from
        url: String,

        /// Maximum depth (the seed is depth 1); defaults to the configured value
        #[arg(short, long)]
        depth: Option<u32>,

        /// Print outcome statistics after the results
        #[arg(long)]
        stats: bool,
    },

    /// Validate the configuration and show the effective settings
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load(cli.config.as_ref())?;

    match cli.command {
        Command::Serve { bind } => handle_serve(config, bind).await,
        Command::Crawl { url, depth, stats } => handle_crawl(config, &url, depth, stats).await,
        Command::CheckConfig => {
            handle_check_config(&config);
            Ok(())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so `crawl` output on stdout stays valid JSON.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seed_crawl=info,warn"),
            1 => EnvFilter::new("seed_crawl=debug,info"),
            2 => EnvFilter::new("seed_crawl=trace,debug"),
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

/// Loads configuration from `path`, or the defaults when no path is given
fn load(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok(config)
}

/// Handles the `serve` command
async fn handle_serve(mut config: Config, bind: Option<String>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    seed_crawl::api::serve(config).await?;
    Ok(())
}

/// Handles the `crawl` command
async fn handle_crawl(
    config: Config,
    url: &str,
    depth: Option<u32>,
    stats: bool,
) -> anyhow::Result<()> {
    let depth = depth.unwrap_or(config.crawler.max_depth);
    let coordinator = Coordinator::new(config)?;

    let report = coordinator.run_report(url, depth).await?;
    let pages = render_pages(report.pages);

    println!("{}", serde_json::to_string_pretty(&pages)?);

    if stats {
        println!();
        print_statistics(&report.statistics);
    }

    Ok(())
}

/// Handles the `check-config` command: shows the effective configuration
fn handle_check_config(config: &Config) {
    println!("=== Seed-Crawl Configuration ===\n");

    println!("Crawler:");
    println!("  Default max depth: {}", config.crawler.max_depth);
    println!("  Page ceiling: {}", config.crawler.max_pages);
    println!("  Keywords per page: {}", config.crawler.keyword_limit);
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);
    println!("  Connect timeout: {}s", config.crawler.connect_timeout_secs);
    match config.crawler.crawl_deadline_secs {
        Some(secs) => println!("  Crawl deadline: {}s", secs),
        None => println!("  Crawl deadline: none"),
    }

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nServer:");
    println!("  Bind address: {}", config.server.bind_address);

    println!("\n✓ Configuration is valid");
}
