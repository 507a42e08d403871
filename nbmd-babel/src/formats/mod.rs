//! Format implementations
//!
//! This module contains all format implementations that convert between
//! cells and their text representations.

pub mod ipynb;
pub mod markdown;

pub use ipynb::IpynbFormat;
pub use markdown::MarkdownFormat;
