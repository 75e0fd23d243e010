//! Core types for the Burrow URL shortener.
//!
//! This crate provides the base-62 encoder, the [`ShortCode`] and
//! [`Record`] types, and the [`Clock`] abstraction shared by the registry
//! and the service crates.

pub mod base62;
pub mod clock;
pub mod error;
pub mod record;
pub mod shortcode;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "test-util"))]
pub use clock::ManualClock;
pub use error::{CoreError, DecodeError};
pub use record::Record;
pub use shortcode::ShortCode;
