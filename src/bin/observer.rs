//! Observer demo. Repository events are appended to the configured event log.
//!
//! Run with: cargo run --bin observer

use design_patterns::config::Settings;
use design_patterns::{behavioral::observer, logging};

fn main() -> design_patterns::Result<()> {
    let settings = Settings::load()?;
    logging::init(&settings.logging.filter);
    tracing::debug!(?settings, "settings loaded");

    observer::run(&settings.logging.event_log);
    Ok(())
}
