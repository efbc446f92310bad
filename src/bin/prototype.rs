//! Prototype demo.
//!
//! Run with: cargo run --bin prototype

fn main() {
    design_patterns::creational::prototype::run();
}
