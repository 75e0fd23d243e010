use crate::error::ShortenerError;
use crate::normalize::normalize_url;
use crate::shortener::{ShortenedUrl, Shortener, UrlInfo};
use burrow_core::{Clock, SystemClock};
use burrow_registry::{Registry, RegistryStats};
use std::sync::Arc;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configures a [`ShortenerService`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// Public base URL that short codes are appended to.
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    pub base_url: String,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a [`Registry`] and handles:
/// - URL validation and normalization before anything is stored
/// - short code format checks before lookups
/// - building full short URLs from the configured base URL
#[derive(Debug, Clone)]
pub struct ShortenerService<C = SystemClock> {
    registry: Arc<Registry<C>>,
    settings: ShortenerSettings,
}

impl<C: Clock> ShortenerService<C> {
    pub fn new(registry: Arc<Registry<C>>, settings: ShortenerSettings) -> Self {
        Self { registry, settings }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }
}

impl ShortenerService<SystemClock> {
    /// Creates a service over a fresh registry backed by the system clock.
    pub fn with_settings(settings: ShortenerSettings) -> Self {
        Self::new(Arc::new(Registry::new()), settings)
    }
}

impl<C: Clock + 'static> Shortener for ShortenerService<C> {
    fn shorten(&self, url: &str) -> Result<ShortenedUrl, ShortenerError> {
        let normalized = normalize_url(url).inspect_err(|e| {
            debug!(url = %url, error = %e, "rejecting url");
        })?;

        let record = self.registry.create(&normalized).inspect_err(|e| {
            warn!(url = %normalized, error = %e, "failed to register url");
        })?;

        debug!(code = %record.code, url = %record.original, "shortened url");
        Ok(ShortenedUrl::from_record(record, self.base_url()))
    }

    fn resolve(&self, code: &str) -> Result<String, ShortenerError> {
        trace!(code = %code, "resolving short code");

        // Lookup and counting happen under one write guard.
        let record = self.registry.record_access(code)?;

        debug!(code = %code, url = %record.original, access_count = record.access_count, "resolved short code");
        Ok(record.original)
    }

    fn info(&self, code: &str) -> Result<UrlInfo, ShortenerError> {
        let record = self.registry.get_by_code(code)?;
        Ok(UrlInfo::from_record(record, self.base_url()))
    }

    fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }
}
