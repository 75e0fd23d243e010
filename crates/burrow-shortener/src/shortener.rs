use crate::error::ShortenerError;
use burrow_core::{Record, ShortCode};
use burrow_registry::RegistryStats;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

type Result<T> = std::result::Result<T, ShortenerError>;

/// The outcome of shortening a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedUrl {
    pub id: u64,
    pub original_url: String,
    pub short_code: ShortCode,
    /// `short_code` joined onto the public base URL.
    pub short_url: String,
    pub created_at: Timestamp,
}

/// Everything known about a short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlInfo {
    pub id: u64,
    pub original_url: String,
    pub short_code: ShortCode,
    pub short_url: String,
    pub created_at: Timestamp,
    pub access_count: u64,
}

impl ShortenedUrl {
    pub(crate) fn from_record(record: Record, base_url: &str) -> Self {
        Self {
            short_url: record.code.to_url(base_url),
            id: record.id,
            original_url: record.original,
            short_code: record.code,
            created_at: record.created_at,
        }
    }
}

impl UrlInfo {
    pub(crate) fn from_record(record: Record, base_url: &str) -> Self {
        Self {
            short_url: record.code.to_url(base_url),
            id: record.id,
            original_url: record.original,
            short_code: record.code,
            created_at: record.created_at,
            access_count: record.access_count,
        }
    }
}

pub trait Shortener: Send + Sync + 'static {
    /// Validates and normalizes `url`, then returns its short code.
    /// Shortening the same URL twice returns the same code.
    fn shorten(&self, url: &str) -> Result<ShortenedUrl>;

    /// Returns the original URL behind `code` and counts the access.
    fn resolve(&self, code: &str) -> Result<String>;

    /// Returns details about `code` without counting an access.
    fn info(&self, code: &str) -> Result<UrlInfo>;

    /// Returns the current store counters.
    fn stats(&self) -> RegistryStats;
}
