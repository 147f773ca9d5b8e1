//! Ethereum node connection setup

pub mod providers;

pub use providers::*;
