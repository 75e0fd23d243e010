//! URL shortener service implementation.
//!
//! This crate validates and normalizes submitted URLs and exposes the
//! [`Shortener`] trait over a [`burrow_registry::Registry`]. Core types are
//! re-exported from `burrow_core`.

pub mod error;
pub mod normalize;
pub mod service;
pub mod shortener;

pub use burrow_core::{Record, ShortCode};
pub use burrow_registry::{Registry, RegistryStats};
pub use error::ShortenerError;
pub use normalize::normalize_url;
pub use service::{ShortenerService, ShortenerSettings};
pub use shortener::{ShortenedUrl, Shortener, UrlInfo};
