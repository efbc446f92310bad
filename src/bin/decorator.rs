//! Decorator demo.
//!
//! Run with: cargo run --bin decorator

fn main() {
    design_patterns::structural::decorator::run();
}
