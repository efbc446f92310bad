//! Behavioral patterns: how objects share responsibility and talk to each
//! other.

pub mod chain_of_responsibility;
pub mod command;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
