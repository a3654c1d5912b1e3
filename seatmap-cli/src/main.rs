use anyhow::Context;
use seatmap_cli::{app_config::Manifest, build_flight, issue_cards};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seatmap_cli=info,seatmap_core=info".into()),
        )
        // Cards go to stdout
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_dir = std::env::var_os("SEATMAP_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config"));
    let manifest = Manifest::load(&config_dir)
        .with_context(|| format!("Failed to load flight manifest from {}", config_dir.display()))?;
    tracing::info!(
        "Loaded manifest for flight {} with {} allocations",
        manifest.flight.number,
        manifest.allocations.len()
    );

    let flight = build_flight(&manifest)?;
    tracing::info!(
        "Flight {} has {} of {} seats available",
        flight.flight_number(),
        flight.available_seat_count(),
        flight.capacity()
    );

    issue_cards(&flight, manifest.output.format, std::io::stdout().lock())?;

    Ok(())
}
