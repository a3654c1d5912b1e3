use anyhow::Context;
use seatmap_core::{Aircraft, ConsoleCardPrinter, SeatAllocator};
use std::io::Write;

pub mod app_config;

use app_config::{Manifest, OutputFormat};

/// Open the manifest's flight and apply its allocations, then its relocations, in order
pub fn build_flight(manifest: &Manifest) -> anyhow::Result<SeatAllocator<Aircraft>> {
    let mut flight = SeatAllocator::new(manifest.flight.number.clone(), manifest.aircraft.clone())
        .context("Failed to open flight")?;

    for allocation in &manifest.allocations {
        flight
            .allocate_seat(&allocation.seat, allocation.passenger.clone())
            .with_context(|| format!("Failed to seat {}", allocation.passenger))?;
    }

    for relocation in &manifest.relocations {
        flight
            .relocate_passenger(&relocation.from, &relocation.to)
            .with_context(|| format!("Failed to move {} to {}", relocation.from, relocation.to))?;
    }

    Ok(flight)
}

pub fn issue_cards<W: Write>(
    flight: &SeatAllocator<Aircraft>,
    format: OutputFormat,
    mut out: W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let mut printer = ConsoleCardPrinter::new(out);
            flight.make_boarding_cards(&mut printer)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &flight.boarding_cards())?;
            writeln!(out)?;
        }
    }

    Ok(())
}
