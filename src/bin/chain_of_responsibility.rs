//! Chain of Responsibility demo.
//!
//! Run with: cargo run --bin chain_of_responsibility

fn main() {
    design_patterns::behavioral::chain_of_responsibility::run();
}
