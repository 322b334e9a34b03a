use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::QueryKey;

/// Handle for one in-flight fetch.
///
/// Carries the entry generation observed when the fetch started. Settling a
/// ticket from an older generation has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: QueryKey,
    generation: u64,
}

impl FetchTicket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Result stored as the authoritative value
    Applied,
    /// An invalidation happened while the fetch was in flight; result dropped
    Superseded,
}

#[derive(Debug)]
struct Entry<T> {
    data: Option<T>,
    error: Option<String>,
    generation: u64,
    /// Generation of the outstanding fetch, if any
    fetching: Option<u64>,
    stale: bool,
    updated_at: Option<DateTime<Utc>>,
}

impl<T> Entry<T> {
    fn new() -> Self {
        Self {
            data: None,
            error: None,
            generation: 0,
            fetching: None,
            stale: true,
            updated_at: None,
        }
    }

    fn fetching_current(&self) -> bool {
        self.fetching == Some(self.generation)
    }
}

/// Read-only view of one cache entry.
#[derive(Debug, Clone, Copy)]
pub struct QuerySnapshot<'a, T> {
    /// Last successfully fetched value, kept across invalidations
    pub data: Option<&'a T>,
    /// Message of the last failed fetch of the current generation
    pub error: Option<&'a str>,
    pub is_fetching: bool,
    pub is_stale: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> QuerySnapshot<'_, T> {
    /// No settled result exists for the current generation yet.
    pub fn is_loading(&self) -> bool {
        self.is_fetching || self.is_stale
    }
}

pub struct QueryCache<T> {
    entries: BTreeMap<QueryKey, Entry<T>>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self, key: &QueryKey) -> QuerySnapshot<'_, T> {
        match self.entries.get(key) {
            Some(entry) => QuerySnapshot {
                data: entry.data.as_ref(),
                error: entry.error.as_deref(),
                is_fetching: entry.fetching_current(),
                is_stale: entry.stale,
                updated_at: entry.updated_at,
            },
            None => QuerySnapshot {
                data: None,
                error: None,
                is_fetching: false,
                is_stale: true,
                updated_at: None,
            },
        }
    }

    pub fn data(&self, key: &QueryKey) -> Option<&T> {
        self.entries.get(key).and_then(|e| e.data.as_ref())
    }

    /// True when the entry is missing or stale and nobody is fetching it yet.
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        match self.entries.get(key) {
            Some(entry) => entry.stale && !entry.fetching_current(),
            None => true,
        }
    }

    /// Start a fetch for `key`.
    ///
    /// Returns `None` when a fetch for the current generation is already in
    /// flight, so concurrent readers share one request.
    pub fn begin_fetch(&mut self, key: &QueryKey) -> Option<FetchTicket> {
        let entry = self.entries.entry(key.clone()).or_insert_with(Entry::new);
        if entry.fetching_current() {
            return None;
        }

        entry.fetching = Some(entry.generation);
        tracing::debug!(key = %key, generation = entry.generation, "fetch started");
        Some(FetchTicket {
            key: key.clone(),
            generation: entry.generation,
        })
    }

    /// Record the outcome of a fetch started with [`begin_fetch`](Self::begin_fetch).
    ///
    /// A failure keeps the previously fetched value and records the message.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<T, String>) -> Settled {
        let Some(entry) = self.entries.get_mut(&ticket.key) else {
            return Settled::Superseded;
        };

        if ticket.generation != entry.generation {
            if entry.fetching == Some(ticket.generation) {
                entry.fetching = None;
            }
            tracing::debug!(
                key = %ticket.key,
                ticket = ticket.generation,
                current = entry.generation,
                "dropping superseded fetch result"
            );
            return Settled::Superseded;
        }

        entry.fetching = None;
        entry.stale = false;
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
                entry.updated_at = Some(Utc::now());
            }
            Err(message) => {
                tracing::warn!(key = %ticket.key, "fetch failed: {}", message);
                entry.error = Some(message);
            }
        }
        Settled::Applied
    }

    /// Mark every entry under `prefix` stale and bump its generation.
    ///
    /// Returns the keys that were invalidated. Data is kept so readers can
    /// keep showing it while the refetch runs.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> Vec<QueryKey> {
        let mut invalidated = Vec::new();
        for (key, entry) in self.entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.generation += 1;
                entry.stale = true;
                invalidated.push(key.clone());
            }
        }
        tracing::debug!(prefix = %prefix, count = invalidated.len(), "invalidated queries");
        invalidated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweets() -> QueryKey {
        QueryKey::tweets()
    }

    #[test]
    fn test_unknown_key_needs_fetch() {
        let cache: QueryCache<Vec<u32>> = QueryCache::new();
        assert!(cache.needs_fetch(&tweets()));
        let snapshot = cache.query(&tweets());
        assert!(snapshot.is_loading());
        assert!(snapshot.data.is_none());
    }

    #[test]
    fn test_fetch_settle_applies() {
        let mut cache = QueryCache::new();
        let ticket = cache.begin_fetch(&tweets()).unwrap();
        assert!(cache.query(&tweets()).is_fetching);
        assert!(!cache.needs_fetch(&tweets()));

        assert_eq!(cache.settle(ticket, Ok(vec![1, 2])), Settled::Applied);
        let snapshot = cache.query(&tweets());
        assert!(!snapshot.is_loading());
        assert_eq!(snapshot.data, Some(&vec![1, 2]));
        assert!(snapshot.updated_at.is_some());
        assert!(!cache.needs_fetch(&tweets()));
    }

    #[test]
    fn test_concurrent_begin_is_deduplicated() {
        let mut cache: QueryCache<Vec<u32>> = QueryCache::new();
        assert!(cache.begin_fetch(&tweets()).is_some());
        assert!(cache.begin_fetch(&tweets()).is_none());
    }

    #[test]
    fn test_invalidation_supersedes_in_flight_fetch() {
        let mut cache = QueryCache::new();
        let old = cache.begin_fetch(&tweets()).unwrap();

        cache.invalidate(&tweets());
        assert!(cache.needs_fetch(&tweets()));
        let fresh = cache.begin_fetch(&tweets()).unwrap();
        assert_eq!(fresh.generation(), old.generation() + 1);

        // Fresh result lands first, the old one must not overwrite it
        assert_eq!(cache.settle(fresh, Ok(vec![1, 2, 3])), Settled::Applied);
        assert_eq!(cache.settle(old, Ok(vec![])), Settled::Superseded);
        assert_eq!(cache.data(&tweets()), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_invalidate_by_prefix() {
        let mut cache = QueryCache::new();
        for key in [QueryKey::tweets(), QueryKey::my_tweets(), QueryKey::new(["users", "me"])] {
            let ticket = cache.begin_fetch(&key).unwrap();
            cache.settle(ticket, Ok(0u8));
        }

        let invalidated = cache.invalidate(&tweets());
        assert_eq!(invalidated, vec![QueryKey::tweets(), QueryKey::my_tweets()]);
        assert!(cache.needs_fetch(&QueryKey::my_tweets()));
        assert!(!cache.needs_fetch(&QueryKey::new(["users", "me"])));
        // Data survives invalidation
        assert_eq!(cache.data(&QueryKey::my_tweets()), Some(&0));
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut cache = QueryCache::new();
        let ticket = cache.begin_fetch(&tweets()).unwrap();
        cache.settle(ticket, Ok(vec![7]));

        cache.invalidate(&tweets());
        let ticket = cache.begin_fetch(&tweets()).unwrap();
        cache.settle(ticket, Err("boom".to_string()));

        let snapshot = cache.query(&tweets());
        assert_eq!(snapshot.error, Some("boom"));
        assert_eq!(snapshot.data, Some(&vec![7]));
        assert!(!cache.needs_fetch(&tweets()));
    }

    #[test]
    fn test_settle_for_unknown_key_is_superseded() {
        let mut a: QueryCache<u8> = QueryCache::new();
        let mut b: QueryCache<u8> = QueryCache::new();
        let ticket = a.begin_fetch(&tweets()).unwrap();
        assert_eq!(b.settle(ticket, Ok(1)), Settled::Superseded);
    }
}
