//! Command demo.
//!
//! Run with: cargo run --bin command

fn main() {
    design_patterns::behavioral::command::run();
}
