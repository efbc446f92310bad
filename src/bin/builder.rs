//! Builder demo.
//!
//! Run with: cargo run --bin builder

fn main() {
    design_patterns::creational::builder::run();
}
