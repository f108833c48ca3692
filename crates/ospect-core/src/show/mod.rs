//! The extractor catalog: one module per output shape, one public
//! function per vendor dialect. Every function is a pure
//! `&str -> Result<...>` over captured show output.

pub mod basic;
pub mod bfd;
pub mod dbsum;
pub mod frr;
pub mod neighbor;
pub mod patterns;
pub mod traffic;

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
