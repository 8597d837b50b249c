//! StayLens - Hotel Booking Analytics Dashboard
//!
//! Loads the booking dataset, computes summary metrics and aggregate views,
//! and renders the report in a native window.

mod charts;
mod data;
mod gui;
mod stats;

use anyhow::Context;
use eframe::egui;
use gui::DashboardApp;
use stats::{MetricsCalculator, ViewBuilder};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The dataset must be readable before any window opens; a missing file
    // aborts the whole render.
    let started = Instant::now();
    let table = data::dataset()
        .with_context(|| format!("place '{}' next to the executable", data::DATA_FILE))?;

    let metrics = MetricsCalculator::compute(table).context("failed to compute summary metrics")?;
    let views = ViewBuilder::build(table).context("failed to build aggregate views")?;
    log::info!(
        "dashboard ready: {} bookings in {:.2?}",
        metrics.total_bookings,
        started.elapsed()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1200.0, 700.0])
            .with_title("StayLens"),
        ..Default::default()
    };

    eframe::run_native(
        "StayLens",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, metrics, views)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the dashboard window: {err}"))
}
