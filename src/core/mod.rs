//! Core client infrastructure.
//!
//! - [`bytes`] - Opaque byte sequences
//! - [`config`] - Configuration parsing and validation
//! - [`error`] - Error taxonomy

pub mod bytes;
pub mod config;
pub mod error;
