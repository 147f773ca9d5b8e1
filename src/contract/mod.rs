//! Contract handle construction and the top-level fetcher

pub mod handle;
pub mod fetcher;

pub use handle::*;
pub use fetcher::*;
