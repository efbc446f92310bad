//! State demo.
//!
//! Run with: cargo run --bin state

fn main() {
    design_patterns::behavioral::state::run();
}
