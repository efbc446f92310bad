//! Memento demo.
//!
//! Run with: cargo run --bin memento

fn main() {
    design_patterns::behavioral::memento::run();
}
