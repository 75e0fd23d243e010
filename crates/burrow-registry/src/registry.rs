use crate::error::{RegistryError, Result};
use crate::stats::RegistryStats;
use burrow_core::{base62, Clock, Record, SystemClock};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Everything guarded by the registry lock.
///
/// `records` is the only copy of each record; the two maps hold ids.
#[derive(Debug)]
struct State {
    records: Vec<Record>,
    by_code: HashMap<String, u64>,
    by_original: HashMap<String, u64>,
    first_id: u64,
    next_id: u64,
    total_accesses: u64,
}

impl State {
    fn new(first_id: u64) -> Self {
        Self {
            records: Vec::new(),
            by_code: HashMap::new(),
            by_original: HashMap::new(),
            first_id,
            next_id: first_id,
            total_accesses: 0,
        }
    }

    fn slot(&self, id: u64) -> Option<usize> {
        let offset = id.checked_sub(self.first_id)?;
        usize::try_from(offset)
            .ok()
            .filter(|&slot| slot < self.records.len())
    }

    fn get(&self, id: u64) -> Option<&Record> {
        self.slot(id).map(|slot| &self.records[slot])
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut Record> {
        self.slot(id).map(move |slot| &mut self.records[slot])
    }
}

/// A concurrent, in-memory store of shortened URLs.
///
/// Each distinct original URL gets exactly one [`Record`], with a
/// sequential id and the base-62 encoding of that id as its code.
/// Lookups take a shared lock and may run in parallel; creation and access
/// counting take the exclusive lock.
///
/// The registry is an ordinary value: wrap it in an `Arc` to share it.
#[derive(Debug)]
pub struct Registry<C = SystemClock> {
    state: RwLock<State>,
    clock: C,
}

impl Registry<SystemClock> {
    /// Creates an empty registry backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Registry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Registry<C> {
    /// Creates an empty registry that stamps records with `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self::with_first_id(clock, 1)
    }

    /// Creates an empty registry whose first record gets `first_id`.
    ///
    /// Lets tests reach high ids without creating every record before them.
    /// Ids below 1 are raised to 1.
    pub fn with_first_id(clock: C, first_id: u64) -> Self {
        Self {
            state: RwLock::new(State::new(first_id.max(1))),
            clock,
        }
    }

    /// Returns the record for `original`, creating it if needed.
    ///
    /// `original` must already be normalized. Submitting the same URL again
    /// returns the first record unchanged and consumes no id.
    pub fn create(&self, original: &str) -> Result<Record> {
        trace!(original = %original, "creating record");

        let mut state = self.state.write();

        if let Some(&id) = state.by_original.get(original) {
            if let Some(existing) = state.get(id) {
                debug!(id, code = %existing.code, "original already registered");
                return Ok(existing.clone());
            }
        }

        let id = state.next_id;
        // The last u64 is never handed out so `next_id` always stays valid.
        let next_id = id.checked_add(1).ok_or(RegistryError::Exhausted)?;

        let record = Record::new(id, original, self.clock.now());
        state.by_code.insert(record.code.as_str().to_owned(), id);
        state.by_original.insert(record.original.clone(), id);
        state.records.push(record.clone());
        state.next_id = next_id;

        debug!(id, code = %record.code, original = %record.original, "record created");
        Ok(record)
    }

    /// Looks up a record by its short code.
    ///
    /// Malformed codes fail with [`RegistryError::InvalidFormat`] before the
    /// store is consulted.
    pub fn get_by_code(&self, code: &str) -> Result<Record> {
        ensure_valid_code(code)?;

        let state = self.state.read();
        state
            .by_code
            .get(code)
            .and_then(|&id| state.get(id))
            .cloned()
            .ok_or_else(|| {
                trace!(code = %code, "short code not found");
                RegistryError::NotFound(code.to_owned())
            })
    }

    /// Looks up a record by its numeric id.
    pub fn get_by_id(&self, id: u64) -> Result<Record> {
        self.state
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Looks up a record by the normalized URL it was created from.
    pub fn get_by_original(&self, original: &str) -> Result<Record> {
        let state = self.state.read();
        state
            .by_original
            .get(original)
            .and_then(|&id| state.get(id))
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(original.to_owned()))
    }

    /// Counts one access to `code` and returns the updated record.
    pub fn record_access(&self, code: &str) -> Result<Record> {
        ensure_valid_code(code)?;

        let mut state = self.state.write();
        let id = state
            .by_code
            .get(code)
            .copied()
            .ok_or_else(|| RegistryError::NotFound(code.to_owned()))?;
        let record = state
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(code.to_owned()))?;

        record.access_count = record.access_count.saturating_add(1);
        let updated = record.clone();
        state.total_accesses = state.total_accesses.saturating_add(1);

        trace!(code = %code, access_count = updated.access_count, "access recorded");
        Ok(updated)
    }

    /// Returns a consistent snapshot of the registry counters.
    pub fn stats(&self) -> RegistryStats {
        let state = self.state.read();
        RegistryStats {
            total_records: state.records.len() as u64,
            next_id: state.next_id,
            total_accesses: state.total_accesses,
        }
    }

    /// Returns a copy of every record, ordered by id.
    pub fn records(&self) -> Vec<Record> {
        self.state.read().records.clone()
    }

    /// Number of records stored.
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn ensure_valid_code(code: &str) -> Result<()> {
    if base62::is_valid_code(code) {
        Ok(())
    } else {
        debug!(code = %code, "rejecting malformed short code");
        Err(RegistryError::InvalidFormat(code.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrow_core::ManualClock;
    use jiff::{SignedDuration, Timestamp};
    use std::collections::HashSet;

    fn epoch() -> Timestamp {
        Timestamp::from_second(1_700_000_000).unwrap()
    }

    fn test_registry() -> (Registry<ManualClock>, ManualClock) {
        let clock = ManualClock::new(epoch());
        (Registry::with_clock(clock.clone()), clock)
    }

    #[test]
    fn create_assigns_sequential_ids_and_codes() {
        let (registry, _) = test_registry();

        let first = registry.create("http://example.com").unwrap();
        let second = registry.create("https://other.com").unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(first.code.as_str(), "1");
        assert_eq!(first.access_count, 0);
        assert_eq!(first.created_at, epoch());
        assert_eq!(second.id, 2);
        assert_eq!(second.code.as_str(), "2");
    }

    #[test]
    fn sixty_second_record_gets_two_symbol_code() {
        let (registry, _) = test_registry();

        let mut last = None;
        for i in 0..62 {
            last = Some(registry.create(&format!("https://example{i}.com")).unwrap());
        }

        let last = last.unwrap();
        assert_eq!(last.id, 62);
        assert_eq!(last.code.as_str(), "10");
    }

    #[test]
    fn create_is_idempotent() {
        let (registry, clock) = test_registry();

        let first = registry.create("https://x.com").unwrap();
        clock.advance(SignedDuration::from_secs(30));
        let second = registry.create("https://x.com").unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.stats().next_id, 2);
    }

    #[test]
    fn distinct_urls_get_distinct_ids_and_codes() {
        let (registry, _) = test_registry();

        let records: Vec<_> = (0..500)
            .map(|i| registry.create(&format!("https://site{i}.org/path")).unwrap())
            .collect();

        let ids: HashSet<_> = records.iter().map(|r| r.id).collect();
        let codes: HashSet<_> = records.iter().map(|r| r.code.clone()).collect();
        assert_eq!(ids.len(), 500);
        assert_eq!(codes.len(), 500);
        assert!(records.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test]
    fn created_at_comes_from_clock() {
        let (registry, clock) = test_registry();

        let first = registry.create("https://a.com").unwrap();
        clock.advance(SignedDuration::from_secs(5));
        let second = registry.create("https://b.com").unwrap();

        assert_eq!(first.created_at, epoch());
        assert_eq!(second.created_at, epoch() + SignedDuration::from_secs(5));
    }

    #[test]
    fn lookups_find_created_record() {
        let (registry, _) = test_registry();
        let created = registry.create("https://example.com/a?b=c").unwrap();

        assert_eq!(registry.get_by_code(created.code.as_str()).unwrap(), created);
        assert_eq!(registry.get_by_id(created.id).unwrap(), created);
        assert_eq!(
            registry.get_by_original("https://example.com/a?b=c").unwrap(),
            created
        );
    }

    #[test]
    fn missing_records_are_not_found() {
        let (registry, _) = test_registry();
        registry.create("https://example.com").unwrap();

        assert!(matches!(
            registry.get_by_code("doesNotExist"),
            Err(RegistryError::NotFound(_))
        ));
        assert!(matches!(
            registry.get_by_id(99999),
            Err(RegistryError::NotFound(_))
        ));
        assert!(matches!(
            registry.get_by_id(0),
            Err(RegistryError::NotFound(_))
        ));
        assert!(matches!(
            registry.get_by_original("https://nowhere.com"),
            Err(RegistryError::NotFound(_))
        ));
        assert!(matches!(
            registry.record_access("zz"),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn malformed_codes_are_invalid_format() {
        let (registry, _) = test_registry();

        for code in ["", "invalid!", "test@code", "a b"] {
            assert_eq!(
                registry.get_by_code(code),
                Err(RegistryError::InvalidFormat(code.to_owned()))
            );
            assert_eq!(
                registry.record_access(code),
                Err(RegistryError::InvalidFormat(code.to_owned()))
            );
        }
    }

    #[test]
    fn record_access_counts_each_call() {
        let (registry, _) = test_registry();
        let created = registry.create("http://example.com").unwrap();

        for expected in 1..=3 {
            let updated = registry.record_access(created.code.as_str()).unwrap();
            assert_eq!(updated.access_count, expected);
        }

        let fetched = registry.get_by_code(created.code.as_str()).unwrap();
        assert_eq!(fetched.access_count, 3);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[test]
    fn lookups_do_not_count_access() {
        let (registry, _) = test_registry();
        let created = registry.create("http://example.com").unwrap();

        registry.get_by_code(created.code.as_str()).unwrap();
        registry.get_by_id(created.id).unwrap();

        assert_eq!(registry.stats().total_accesses, 0);
        assert_eq!(registry.get_by_id(created.id).unwrap().access_count, 0);
    }

    #[test]
    fn stats_reflect_store() {
        let (registry, _) = test_registry();
        assert_eq!(
            registry.stats(),
            RegistryStats {
                total_records: 0,
                next_id: 1,
                total_accesses: 0
            }
        );

        let a = registry.create("https://a.com").unwrap();
        let b = registry.create("https://b.com").unwrap();
        registry.record_access(a.code.as_str()).unwrap();
        registry.record_access(b.code.as_str()).unwrap();
        registry.record_access(b.code.as_str()).unwrap();

        assert_eq!(
            registry.stats(),
            RegistryStats {
                total_records: 2,
                next_id: 3,
                total_accesses: 3
            }
        );
    }

    #[test]
    fn records_are_ordered_by_id() {
        let (registry, _) = test_registry();
        for url in ["https://c.com", "https://a.com", "https://b.com"] {
            registry.create(url).unwrap();
        }

        let ids: Vec<_> = registry.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn first_id_offsets_ids_and_codes() {
        let registry = Registry::with_first_id(ManualClock::new(epoch()), 1000);

        let record = registry.create("https://example.com").unwrap();
        assert_eq!(record.id, 1000);
        assert_eq!(record.code.as_str(), "g8");
        assert_eq!(registry.get_by_id(1000).unwrap(), record);
        assert!(registry.get_by_id(999).is_err());
    }

    #[test]
    fn exhausted_id_space_is_an_error() {
        let registry = Registry::with_first_id(ManualClock::new(epoch()), u64::MAX - 1);

        let last = registry.create("https://last.com").unwrap();
        assert_eq!(last.id, u64::MAX - 1);

        assert_eq!(
            registry.create("https://one-too-many.com"),
            Err(RegistryError::Exhausted)
        );
        assert_eq!(registry.len(), 1);
        // Existing records are still returned.
        assert_eq!(registry.create("https://last.com").unwrap(), last);
    }

    #[test]
    fn instances_are_independent() {
        let (one, _) = test_registry();
        let (two, _) = test_registry();

        one.create("https://a.com").unwrap();
        one.create("https://b.com").unwrap();
        let other = two.create("https://b.com").unwrap();

        assert_eq!(other.id, 1);
        assert_eq!(two.len(), 1);
    }

    #[test]
    fn registry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
        assert_send_sync::<Registry<ManualClock>>();
    }
}
