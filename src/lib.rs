//! # Design Patterns
//!
//! Runnable examples of the classic Gang-of-Four design patterns, written
//! the Rust way: traits for the abstract roles, owned boxes for wrapping,
//! `Rc`/`RefCell` where objects really do share state.
//!
//! ## Creational Patterns
//! - Abstract Factory (families of products)
//! - Builder (directors, fluent builders, SQL dialects)
//! - Factory Method (creators that pick their product)
//! - Prototype (`Clone` with back references)
//! - Singleton (`OnceLock`)
//!
//! ## Structural Patterns
//! - Adapter, Bridge, Composite, Decorator, Facade, Flyweight, Proxy
//!
//! ## Behavioral Patterns
//! - Chain of Responsibility, Command (with a SQLite-backed job queue),
//!   Iterator, Mediator, Memento, Observer, State, Strategy
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin abstract_factory
//! cargo run --bin builder
//! cargo run --bin command
//! cargo run --bin command_queue
//! cargo run --bin strategy
//! ```
//!
//! Every pattern module exposes a `run()` that prints its demo; the example
//! functions themselves return strings so they can be checked in tests.

pub mod behavioral;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod output;
pub mod structural;

pub use error::{PatternError, Result};
