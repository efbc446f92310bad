//! Singleton demo.
//!
//! Run with: cargo run --bin singleton

fn main() {
    design_patterns::creational::singleton::run();
}
