//! ClauseGuard
//!
//! Upload a contract, extract its text and get every risky clause
//! highlighted with the issue it raises and a suggested rewrite.

use anyhow::Context;
use clap::Parser;
use clauseguard_server::cli::{Cli, Commands};
use clauseguard_server::config::ReviewConfig;
use clauseguard_server::review::{review_file, write_report, write_rules};
use clauseguard_server::server::run_server;
use clauseguard_server::state::AppState;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            common,
            address,
            port,
        } => {
            init_logging(common.verbose);

            let mut config = ReviewConfig::load(&common).context("Failed to load configuration")?;
            if let Some(address) = address {
                config.listen = address;
            }
            if let Some(port) = port {
                config.port = port;
            }
            info!("Configuration loaded successfully");

            let addr: SocketAddr = format!("{}:{}", config.listen, config.port).parse()?;
            let metrics_handle = init_metrics()?;
            let state = AppState::new(config, Some(metrics_handle))?;

            println!();
            println!("  ClauseGuard - contract review with highlights & suggestions");
            println!();
            println!("  Rules:   {} ({} rules)", state.rules.name, state.rules.len());
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(state, addr).await?;
        }

        Commands::Review {
            file,
            common,
            format,
            plain,
        } => {
            init_logging(common.verbose);

            let config = ReviewConfig::load(&common).context("Failed to load configuration")?;
            let (document, report) = review_file(&config, &file)
                .with_context(|| format!("Failed to review {}", file.display()))?;

            let stdout = std::io::stdout();
            write_report(&mut stdout.lock(), &document, &report, format, plain)?;
        }

        Commands::Rules { common, format } => {
            init_logging(common.verbose);

            let config = ReviewConfig::load(&common).context("Failed to load configuration")?;
            let stdout = std::io::stdout();
            write_rules(&mut stdout.lock(), &config, format)?;
        }
    }

    Ok(())
}

/// Initialize tracing/logging; logs go to stderr so reports stay pipeable
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("clauseguard=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("clauseguard=info,tower_http=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Install the Prometheus recorder and describe ClauseGuard's metrics
fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "clauseguard_documents_total",
        "Documents extracted, by format"
    );
    metrics::describe_counter!(
        "clauseguard_clauses_total",
        "Clauses classified, by risk level"
    );
    metrics::describe_counter!("clauseguard_errors_total", "Failed requests, by error kind");
    metrics::describe_histogram!(
        "clauseguard_review_latency_us",
        metrics::Unit::Microseconds,
        "Time to split, classify and report one document"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
