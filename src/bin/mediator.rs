//! Mediator demo. Every dispatched event is appended to the configured
//! event log.
//!
//! Run with: cargo run --bin mediator

use design_patterns::config::Settings;
use design_patterns::{behavioral::mediator, logging};

fn main() -> design_patterns::Result<()> {
    let settings = Settings::load()?;
    logging::init(&settings.logging.filter);
    tracing::debug!(?settings, "settings loaded");

    mediator::run(&settings.logging.event_log);
    Ok(())
}
