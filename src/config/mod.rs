//! Configuration management for the contract registry

pub mod settings;

pub use settings::*;
