//! Adapter demo.
//!
//! Run with: cargo run --bin adapter

fn main() {
    design_patterns::structural::adapter::run();
}
