//! The concurrent keyed store behind the Burrow URL shortener.
//!
//! A [`Registry`] assigns sequential ids to normalized URLs, derives a
//! base-62 short code from each id, and counts how often every code is
//! resolved. All state lives in memory for the lifetime of the process.
//!
//! # Example
//!
//! ```
//! use burrow_registry::Registry;
//!
//! let registry = Registry::new();
//! let record = registry.create("http://example.com").unwrap();
//! assert_eq!(record.code.as_str(), "1");
//!
//! registry.record_access("1").unwrap();
//! assert_eq!(registry.get_by_code("1").unwrap().access_count, 1);
//! ```

pub mod error;
pub mod registry;
pub mod stats;

pub use error::RegistryError;
pub use registry::Registry;
pub use stats::RegistryStats;
