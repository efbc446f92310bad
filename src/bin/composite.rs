//! Composite demo.
//!
//! Run with: cargo run --bin composite

fn main() {
    design_patterns::structural::composite::run();
}
