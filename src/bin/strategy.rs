//! Strategy demo.
//!
//! Run with: cargo run --bin strategy

fn main() {
    design_patterns::behavioral::strategy::run();
}
