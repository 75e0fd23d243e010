//! Validation and normalization of submitted URLs.
//!
//! The registry deduplicates on the exact string it is given, so every URL
//! goes through [`normalize_url`] first: two spellings of the same address
//! must end up as the same string.

use crate::error::ShortenerError;

const DEFAULT_SCHEME: &str = "http";
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Validates `raw` and returns its normalized form.
///
/// - surrounding whitespace is trimmed; inner whitespace and control
///   characters are rejected
/// - a missing scheme defaults to `http`
/// - only `http` and `https` are accepted
/// - the host must contain a `.` or be `localhost`
/// - scheme and host are lowercased; path, query and fragment are kept
///
/// # Examples
///
/// ```
/// use burrow_shortener::normalize::normalize_url;
///
/// assert_eq!(normalize_url("example.com").unwrap(), "http://example.com");
/// assert_eq!(
///     normalize_url("HTTPS://Example.COM/Path?q=1").unwrap(),
///     "https://example.com/Path?q=1"
/// );
/// assert!(normalize_url("ftp://example.com").is_err());
/// ```
pub fn normalize_url(raw: &str) -> Result<String, ShortenerError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ShortenerError::InvalidUrl(
            "URL cannot be empty".to_string(),
        ));
    }

    if url.chars().any(char::is_whitespace) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must not contain whitespace: {}",
            url
        )));
    }

    // The result ends up in a `Location` header, which cannot carry these.
    if url.chars().any(char::is_control) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must not contain control characters: {:?}",
            url
        )));
    }

    // A "://" inside the path or query is not a scheme separator.
    let (scheme, rest) = match url.split_once("://") {
        Some((scheme, rest)) if is_scheme(scheme) => (scheme, rest),
        _ => (DEFAULT_SCHEME, url),
    };
    let scheme = scheme.to_ascii_lowercase();
    if !ALLOWED_SCHEMES.contains(&scheme.as_str()) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL scheme must be http or https: {}",
            scheme
        )));
    }

    let authority_end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);

    let (userinfo, host_port) = match authority.rsplit_once('@') {
        Some((userinfo, host_port)) => (Some(userinfo), host_port),
        None => (None, authority),
    };

    let host_port = host_port.to_ascii_lowercase();
    let host = split_host(&host_port).ok_or_else(|| {
        ShortenerError::InvalidUrl(format!("URL must have a valid host: {}", url))
    })?;

    if host != "localhost" && !host.contains('.') {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL host must be a domain name or localhost: {}",
            host
        )));
    }

    let mut normalized = String::with_capacity(url.len() + DEFAULT_SCHEME.len() + 3);
    normalized.push_str(&scheme);
    normalized.push_str("://");
    if let Some(userinfo) = userinfo {
        normalized.push_str(userinfo);
        normalized.push('@');
    }
    normalized.push_str(&host_port);
    normalized.push_str(tail);
    Ok(normalized)
}

fn is_scheme(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Returns the host part of `host[:port]`, or `None` if either part is malformed.
fn split_host(host_port: &str) -> Option<&str> {
    let (host, port) = match host_port.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    };

    if let Some(port) = port {
        if port.is_empty() || port.parse::<u16>().is_err() {
            return None;
        }
    }

    (!host.is_empty()).then_some(host)
}
