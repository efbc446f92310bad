//! Bridge demo.
//!
//! Run with: cargo run --bin bridge

fn main() {
    design_patterns::structural::bridge::run();
}
