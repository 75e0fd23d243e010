use serde::{Deserialize, Serialize};

/// A point-in-time view of a [`Registry`][crate::Registry].
///
/// All fields are read under the same guard, so they always agree with
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Number of records stored.
    pub total_records: u64,
    /// The id the next new record will receive.
    pub next_id: u64,
    /// Sum of every record's access count.
    pub total_accesses: u64,
}
