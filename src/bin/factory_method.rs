//! Factory Method demo.
//!
//! Run with: cargo run --bin factory_method

fn main() {
    design_patterns::creational::factory_method::run();
}
