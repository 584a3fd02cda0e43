//! City Lookup - trie-indexed records behind a swappable cache
//!
//! Loads the dataset into the index, then serves lookups over HTTP, runs an
//! interactive prompt, or benchmarks every eviction policy.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use city_lookup::api::{create_router, AppState};
use city_lookup::bench::{generate_queries, run_benchmark, write_report};
use city_lookup::cache::StrategyKind;
use city_lookup::config::Config;
use city_lookup::ingest::load_index;
use city_lookup::lookup::CityLookup;
use city_lookup::repl::run_repl;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "city_lookup", version, about)]
struct Args {
    /// CSV dataset to index (overrides DATA_FILE)
    #[clap(short, long, value_parser)]
    data: Option<PathBuf>,

    /// Cache strategy: lfu, fifo, lru or random (overrides CACHE_STRATEGY)
    #[clap(short, long)]
    strategy: Option<String>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve lookups over HTTP (default)
    Serve,

    /// Prompt for cities on stdin
    Repl,

    /// Replay a generated workload against every strategy
    Bench {
        /// Where to write the JSON report
        #[clap(short, long, value_parser, default_value = "benchmark_results.json")]
        output: PathBuf,

        /// Number of queries (overrides BENCH_QUERIES)
        #[clap(short, long)]
        queries: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "city_lookup=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut config = Config::from_env().context("invalid configuration")?;
    if let Some(data) = args.data {
        config.data_file = data;
    }
    if let Some(strategy) = args.strategy.as_deref() {
        config.cache_strategy = strategy.parse::<StrategyKind>()?;
    }
    info!(
        "Configuration loaded: data_file={}, strategy={}, port={}",
        config.data_file.display(),
        config.cache_strategy,
        config.server_port
    );

    let index = load_index(&config.data_file)
        .with_context(|| format!("failed to load {}", config.data_file.display()))?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(CityLookup::new(index, config.cache_strategy), &config).await,
        Command::Repl => {
            let mut lookup = CityLookup::new(index, config.cache_strategy);
            tokio::task::spawn_blocking(move || {
                run_repl(&mut lookup, io::stdin().lock(), io::stdout().lock())
            })
            .await??;
            Ok(())
        }
        Command::Bench { output, queries } => {
            let count = queries.unwrap_or(config.bench_queries);
            let mut rng = StdRng::seed_from_u64(config.bench_seed);
            let workload = generate_queries(&index, count, config.bench_hot_fraction, &mut rng);
            info!("Generated {} queries", workload.len());

            let report = run_benchmark(&index, &workload, &StrategyKind::ALL, config.bench_seed);
            for result in &report.results {
                println!(
                    "{:<7} hits {:>7}  misses {:>7}  evictions {:>7}  hit rate {:>6.2}%  {:>8} us",
                    result.strategy,
                    result.hits,
                    result.misses,
                    result.evictions,
                    result.hit_rate * 100.0,
                    result.elapsed_micros
                );
            }
            write_report(&output, &report)?;
            Ok(())
        }
    }
}

async fn serve(lookup: CityLookup, config: &Config) -> anyhow::Result<()> {
    let app = create_router(AppState::new(lookup));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
