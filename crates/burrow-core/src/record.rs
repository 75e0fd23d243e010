use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A shortened URL as stored by the registry.
///
/// Values handed out by the registry are snapshots; changing one has no
/// effect on the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// The normalized URL that was shortened.
    pub original: String,
    /// Base-62 encoding of `id`.
    pub code: ShortCode,
    /// When the record was first created.
    pub created_at: Timestamp,
    /// How many times the code has been resolved.
    pub access_count: u64,
}

impl Record {
    /// Builds a fresh record for `id`, deriving its code.
    pub fn new(id: u64, original: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id,
            original: original.into(),
            code: ShortCode::from_id(id),
            created_at,
            access_count: 0,
        }
    }
}
