//! Application entry point for the particle flower garden.
//!
//! This binary sets up logging and eframe/egui and delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer` module.

mod painter;
mod sway;
mod viewer;

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// Installs the global tracing subscriber, then launches the main window
/// titled `"Particle Flower Garden"`. All UI state and rendering are handled
/// by [`Viewer`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter("info")
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("flower garden starting");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Particle Flower Garden",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
