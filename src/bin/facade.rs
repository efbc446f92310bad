//! Facade demo.
//!
//! Run with: cargo run --bin facade

fn main() {
    design_patterns::structural::facade::run();
}
