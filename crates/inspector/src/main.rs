pub mod scanner;
pub mod scenarios;
pub mod shared;

use anyhow::Context;
use shared::config::LoggingConfig;

fn main() -> anyhow::Result<()> {
    let (config, source) = shared::config::load_config()?;
    init_logging(&config.logging)?;
    tracing::info!("configuration loaded from {source}");

    let registry = shared::metadata_registry::global()?;
    tracing::info!(
        types = registry.types().len(),
        kinds = registry.kinds().len(),
        "metadata registry ready"
    );

    for scenario in &config.demo.scenarios {
        let output = scenarios::run(*scenario, registry, config.output.format)
            .with_context(|| format!("scenario {} aborted", scenario.as_str()))?;
        println!("{output}");
        println!();
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Логи в файл, если включено в конфиге
    let file_layer = if logging.file {
        let log_dir = std::path::Path::new("target").join("logs");
        std::fs::create_dir_all(&log_dir)?;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("inspector.log"))?;

        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
    } else {
        None
    };

    // stderr, чтобы не смешивать с выводом сценариев
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}
