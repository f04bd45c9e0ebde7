//! Query Cache
//!
//! Client-side cache of remote reads keyed by query identity. Entries go
//! stale after a configurable time or when invalidated; stale data is still
//! handed out so views can render while they refetch.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::model::{FeedbackId, FeedbackItem};
use crate::sync::FetchTicket;

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<V> {
    Fresh(V),
    Stale(V),
    Missing,
}

impl<V> Lookup<V> {
    pub fn value(self) -> Option<V> {
        match self {
            Lookup::Fresh(v) | Lookup::Stale(v) => Some(v),
            Lookup::Missing => None,
        }
    }

    pub fn needs_fetch(&self) -> bool {
        !matches!(self, Lookup::Fresh(_))
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    fetched_at: DateTime<Utc>,
    invalidated: bool,
}

#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    stale_after: Duration,
}

impl<K, V> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self { entries: HashMap::new(), stale_after: Duration::zero() }
    }
}

impl<K: Eq + Hash + Clone, V: Clone> QueryCache<K, V> {
    pub fn new(stale_after: Duration) -> Self {
        Self { entries: HashMap::new(), stale_after }
    }

    pub fn lookup(&self, key: &K, now: DateTime<Utc>) -> Lookup<V> {
        match self.entries.get(key) {
            None => Lookup::Missing,
            Some(entry) if entry.invalidated || now - entry.fetched_at >= self.stale_after => {
                Lookup::Stale(entry.value.clone())
            }
            Some(entry) => Lookup::Fresh(entry.value.clone()),
        }
    }

    pub fn insert(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.entries.insert(key, Entry { value, fetched_at: now, invalidated: false });
    }

    /// Mark an entry stale, keeping its data
    pub fn invalidate(&mut self, key: &K) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.invalidated = true;
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|e| e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Feedbacks,
    Feedback(FeedbackId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    /// A list keeps the ticket it was fetched under, so replaying it goes
    /// through the same sequencing as a live response
    Feedbacks { ticket: FetchTicket, items: Vec<FeedbackItem> },
    Feedback(FeedbackItem),
}

pub type FeedbackCache = QueryCache<QueryKey, QueryData>;

impl QueryCache<QueryKey, QueryData> {
    pub fn feedbacks(&self, now: DateTime<Utc>) -> Lookup<(FetchTicket, Vec<FeedbackItem>)> {
        match self.lookup(&QueryKey::Feedbacks, now) {
            Lookup::Fresh(QueryData::Feedbacks { ticket, items }) => Lookup::Fresh((ticket, items)),
            Lookup::Stale(QueryData::Feedbacks { ticket, items }) => Lookup::Stale((ticket, items)),
            _ => Lookup::Missing,
        }
    }

    /// Cache a list the board accepted under `ticket`
    pub fn store_feedbacks(&mut self, ticket: FetchTicket, items: Vec<FeedbackItem>, now: DateTime<Utc>) {
        self.insert(QueryKey::Feedbacks, QueryData::Feedbacks { ticket, items }, now);
    }

    pub fn feedback(&self, id: &FeedbackId, now: DateTime<Utc>) -> Lookup<FeedbackItem> {
        match self.lookup(&QueryKey::Feedback(id.clone()), now) {
            Lookup::Fresh(QueryData::Feedback(item)) => Lookup::Fresh(item),
            Lookup::Stale(QueryData::Feedback(item)) => Lookup::Stale(item),
            _ => Lookup::Missing,
        }
    }

    pub fn store_feedback(&mut self, item: FeedbackItem, now: DateTime<Utc>) {
        self.insert(QueryKey::Feedback(item.id.clone()), QueryData::Feedback(item), now);
    }

    /// After a create: the list no longer matches the server
    pub fn invalidate_after_create(&mut self) {
        debug!("[CACHE] invalidate feedbacks");
        self.invalidate(&QueryKey::Feedbacks);
    }

    /// After an update: the list and the item's own entry are out of date
    pub fn invalidate_after_update(&mut self, id: &FeedbackId) {
        debug!("[CACHE] invalidate feedbacks and {}", id);
        self.invalidate(&QueryKey::Feedbacks);
        self.invalidate(&QueryKey::Feedback(id.clone()));
    }

    /// After a delete: the item's entry is gone for good
    pub fn invalidate_after_delete(&mut self, id: &FeedbackId) {
        debug!("[CACHE] drop {}", id);
        self.invalidate(&QueryKey::Feedbacks);
        self.remove(&QueryKey::Feedback(id.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::testing::make_item;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_entries_go_stale_after_ttl() {
        let mut cache: QueryCache<&str, u32> = QueryCache::new(Duration::seconds(30));
        assert_eq!(cache.lookup(&"k", t0()), Lookup::Missing);

        cache.insert("k", 7, t0());
        assert_eq!(cache.lookup(&"k", t0() + Duration::seconds(29)), Lookup::Fresh(7));
        assert_eq!(cache.lookup(&"k", t0() + Duration::seconds(30)), Lookup::Stale(7));
    }

    #[test]
    fn test_invalidate_keeps_data() {
        let mut cache: QueryCache<&str, u32> = QueryCache::new(Duration::minutes(5));
        cache.insert("k", 1, t0());
        cache.invalidate(&"k");

        let lookup = cache.lookup(&"k", t0());
        assert!(lookup.needs_fetch());
        assert_eq!(lookup.value(), Some(1));

        cache.insert("k", 2, t0());
        assert_eq!(cache.lookup(&"k", t0()), Lookup::Fresh(2));
    }

    #[test]
    fn test_zero_stale_time_always_refetches() {
        let mut cache: QueryCache<&str, u32> = QueryCache::default();
        cache.insert("k", 1, t0());
        assert_eq!(cache.lookup(&"k", t0()), Lookup::Stale(1));
    }

    #[test]
    fn test_feedback_invalidation_rules() {
        let mut cache = FeedbackCache::new(Duration::minutes(1));
        let item = make_item("a", Status::Planned);
        cache.store_feedbacks(FetchTicket { version: 1 }, vec![item.clone()], t0());
        cache.store_feedback(item.clone(), t0());

        cache.invalidate_after_update(&item.id);
        assert!(matches!(cache.feedbacks(t0()), Lookup::Stale(_)));
        assert!(matches!(cache.feedback(&item.id, t0()), Lookup::Stale(_)));

        cache.invalidate_after_delete(&item.id);
        assert_eq!(cache.feedback(&item.id, t0()), Lookup::Missing);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_list_keeps_its_ticket() {
        let mut cache = FeedbackCache::new(Duration::minutes(1));
        let ticket = FetchTicket { version: 4 };
        cache.store_feedbacks(ticket, vec![make_item("a", Status::Live)], t0());

        match cache.feedbacks(t0()) {
            Lookup::Fresh((cached, items)) => {
                assert_eq!(cached, ticket);
                assert_eq!(items.len(), 1);
            }
            other => panic!("expected a fresh list, got {:?}", other),
        }
    }
}
