//! Flyweight demo. Reads the cat fixture named in the settings.
//!
//! Run with: cargo run --bin flyweight

use design_patterns::config::Settings;
use design_patterns::{logging, structural::flyweight};

fn main() -> design_patterns::Result<()> {
    let settings = Settings::load()?;
    logging::init(&settings.logging.filter);
    tracing::debug!(?settings, "settings loaded");

    flyweight::run(&settings.fixtures.cats_csv);
    Ok(())
}
