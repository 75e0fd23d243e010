use crate::base62;
use crate::error::{CoreError, DecodeError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A validated base-62 short code.
///
/// Codes issued by the registry are always built with [`ShortCode::from_id`];
/// codes arriving from the outside go through [`ShortCode::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

impl ShortCode {
    /// Derives the short code for a numeric identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow_core::ShortCode;
    ///
    /// assert_eq!(ShortCode::from_id(1).as_str(), "1");
    /// assert_eq!(ShortCode::from_id(62).as_str(), "10");
    /// ```
    pub fn from_id(id: u64) -> Self {
        Self(base62::encode(id))
    }

    /// Creates a new `ShortCode` after validating the input.
    ///
    /// Valid codes are non-empty and contain only `[0-9a-zA-Z]`.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let code = code.into();
        if !base62::is_valid_code(&code) {
            return Err(CoreError::InvalidShortCode(format!(
                "must be non-empty and contain only [0-9a-zA-Z]: '{}'",
                code
            )));
        }
        Ok(Self(code))
    }

    /// Decodes the identifier this code was derived from.
    ///
    /// Fails only when the code is too long to fit in a `u64`.
    pub fn to_id(&self) -> std::result::Result<u64, DecodeError> {
        base62::decode(&self.0)
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ShortCode {
    type Error = CoreError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortCode> for String {
    fn from(value: ShortCode) -> Self {
        value.0
    }
}
