//! Room name suggestions with an explicit expiring cache.

use crate::model::{natural_cmp, Room};
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Key/value cache whose entries expire after a fixed time-to-live.
///
/// Owned by the caller and passed by reference; time is supplied on every
/// call so expiry is deterministic under test.
#[derive(Debug, Clone)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, (Instant, V)>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    /// Create an empty cache.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Get a live entry.
    pub fn get(&self, key: &K, now: Instant) -> Option<V> {
        self.entries
            .get(key)
            .filter(|(stored, _)| now.saturating_duration_since(*stored) < self.ttl)
            .map(|(_, value)| value.clone())
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: K, value: V, now: Instant) {
        self.entries.insert(key, (now, value));
    }

    /// Drop expired entries.
    pub fn purge_expired(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, (stored, _)| now.saturating_duration_since(*stored) < ttl);
    }

    /// Drop everything, e.g. after the room catalog changes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Suggest rooms whose name starts with `prefix` (case-insensitive).
///
/// Common rooms come first, then higher usage rank, then natural name order.
pub fn suggest_rooms(
    rooms: &[Room],
    prefix: &str,
    limit: usize,
    cache: &mut TtlCache<String, Vec<Room>>,
    now: Instant,
) -> Vec<Room> {
    let needle = prefix.trim().to_lowercase();
    let key = format!("{}|{}", needle, limit);

    if let Some(hit) = cache.get(&key, now) {
        tracing::debug!("Room suggestion cache hit for '{}'", needle);
        return hit;
    }

    let mut matches: Vec<Room> = rooms
        .iter()
        .filter(|r| r.name.to_lowercase().starts_with(&needle))
        .cloned()
        .collect();

    matches.sort_by(|a, b| {
        b.common
            .cmp(&a.common)
            .then_with(|| b.usage_rank.cmp(&a.usage_rank))
            .then_with(|| natural_cmp(&a.name, &b.name))
    });
    matches.truncate(limit);

    cache.insert(key, matches.clone(), now);
    matches
}
