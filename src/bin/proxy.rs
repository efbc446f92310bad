//! Proxy demo.
//!
//! Run with: cargo run --bin proxy

fn main() {
    design_patterns::structural::proxy::run();
}
