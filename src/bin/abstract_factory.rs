//! Abstract Factory demo.
//!
//! Run with: cargo run --bin abstract_factory

fn main() {
    design_patterns::creational::abstract_factory::run();
}
