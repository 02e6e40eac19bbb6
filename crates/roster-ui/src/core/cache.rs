//! Page cache keyed by resource kind and list query.
//!
//! # Design
//! - Every fetch is issued a ticket; only the newest ticket for a key may write that key.
//! - A response for a key that is no longer active is stored but never displayed.
//! - Invalidation is explicit per resource kind and bumps a generation counter that views
//!   watch to trigger refetches.
//! - Only the active and displayed keys outlive an invalidation; the rest of the map is
//!   capped at [`CACHE_CAPACITY`] with the oldest pages evicted first.

use crate::core::config::CACHE_CAPACITY;
use crate::core::query::ListQuery;
use crate::core::resource::{Record, ResourceKind};
use roster_api_models::PageResponse;
use std::collections::HashMap;
use std::rc::Rc;

/// Identity of one cached list page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey<C> {
    /// Resource collection.
    pub kind: ResourceKind,
    /// Full list query.
    pub query: ListQuery<C>,
}

impl<C> CacheKey<C> {
    /// Key for `query` on `kind`.
    #[must_use]
    pub const fn new(kind: ResourceKind, query: ListQuery<C>) -> Self {
        Self { kind, query }
    }
}

/// Handle for one outstanding fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket<C> {
    key: CacheKey<C>,
    seq: u64,
    generation: u64,
}

impl<C> FetchTicket<C> {
    /// Key the fetch was issued for.
    #[must_use]
    pub const fn key(&self) -> &CacheKey<C> {
        &self.key
    }

    /// Monotonic sequence number.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }
}

/// Outcome of handing a response to the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Stored and now displayed.
    Applied,
    /// Stored for a key that is no longer displayed.
    Cached,
    /// Dropped because a newer fetch for the same key was issued.
    Discarded,
}

/// What a list view should render right now.
#[derive(Clone, Debug, PartialEq)]
pub struct CacheView<T> {
    /// Page to render: the exact page or a placeholder from the last displayed key.
    pub page: Option<Rc<PageResponse<T>>>,
    /// The page is outdated (invalidated or a placeholder).
    pub stale: bool,
    /// No entry exists for the exact active key yet.
    pub loading: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct Entry<T> {
    page: Rc<PageResponse<T>>,
    stale: bool,
    stored: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct InFlight {
    seq: u64,
    generation: u64,
}

/// Page cache for one record type.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryCache<T: Record> {
    entries: HashMap<CacheKey<T::Column>, Entry<T>>,
    in_flight: HashMap<CacheKey<T::Column>, InFlight>,
    active: Option<CacheKey<T::Column>>,
    displayed: Option<CacheKey<T::Column>>,
    next_seq: u64,
    generation: u64,
}

impl<T: Record> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            in_flight: HashMap::new(),
            active: None,
            displayed: None,
            next_seq: 0,
            generation: 0,
        }
    }
}

impl<T: Record> QueryCache<T> {
    /// Make `key` the displayed key.
    pub fn activate(&mut self, key: CacheKey<T::Column>) {
        if self.entries.contains_key(&key) {
            self.displayed = Some(key.clone());
        }
        self.active = Some(key);
    }

    /// Currently displayed key.
    #[must_use]
    pub const fn active(&self) -> Option<&CacheKey<T::Column>> {
        self.active.as_ref()
    }

    /// Counter bumped by every invalidation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `key` has no fresh entry and no fetch issued since the last invalidation.
    #[must_use]
    pub fn needs_fetch(&self, key: &CacheKey<T::Column>) -> bool {
        let fresh = self.entries.get(key).is_some_and(|entry| !entry.stale);
        let pending = self
            .in_flight
            .get(key)
            .is_some_and(|flight| flight.generation == self.generation);
        !fresh && !pending
    }

    /// Issue a ticket for fetching `key`, superseding any earlier one.
    pub fn begin_fetch(&mut self, key: CacheKey<T::Column>) -> FetchTicket<T::Column> {
        self.next_seq += 1;
        let flight = InFlight {
            seq: self.next_seq,
            generation: self.generation,
        };
        self.in_flight.insert(key.clone(), flight);
        FetchTicket {
            key,
            seq: flight.seq,
            generation: flight.generation,
        }
    }

    /// Store a fetched page.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket<T::Column>,
        page: PageResponse<T>,
    ) -> Resolution {
        if !self.take_if_latest(ticket) {
            return Resolution::Discarded;
        }
        self.entries.insert(
            ticket.key.clone(),
            Entry {
                page: Rc::new(page),
                stale: ticket.generation != self.generation,
                stored: ticket.seq,
            },
        );
        self.evict_overflow();
        if self.active.as_ref() == Some(&ticket.key) {
            self.displayed = Some(ticket.key.clone());
            Resolution::Applied
        } else {
            Resolution::Cached
        }
    }

    /// Record a failed fetch. Returns `true` when the failure concerns the
    /// displayed key and should be surfaced.
    pub fn fail(&mut self, ticket: &FetchTicket<T::Column>) -> bool {
        self.take_if_latest(ticket) && self.active.as_ref() == Some(&ticket.key)
    }

    /// Mark the on-screen entries of `kind` stale, drop its other entries and
    /// bump the generation.
    pub fn invalidate(&mut self, kind: ResourceKind) {
        let active = self.active.as_ref();
        let displayed = self.displayed.as_ref();
        self.entries.retain(|key, entry| {
            if key.kind != kind {
                return true;
            }
            let on_screen = Some(key) == active || Some(key) == displayed;
            entry.stale = true;
            on_screen
        });
        self.generation += 1;
    }

    /// Render state for the active key.
    #[must_use]
    pub fn view(&self) -> CacheView<T> {
        let exact = self.active.as_ref().and_then(|key| self.entries.get(key));
        if let Some(entry) = exact {
            return CacheView {
                page: Some(Rc::clone(&entry.page)),
                stale: entry.stale,
                loading: false,
            };
        }
        let placeholder = self
            .displayed
            .as_ref()
            .and_then(|key| self.entries.get(key))
            .map(|entry| Rc::clone(&entry.page));
        CacheView {
            page: placeholder,
            stale: true,
            loading: true,
        }
    }

    /// Rows of the exact page for the active key, if cached.
    #[must_use]
    pub fn active_rows(&self) -> Vec<T> {
        self.active
            .as_ref()
            .and_then(|key| self.entries.get(key))
            .map(|entry| entry.page.content.clone())
            .unwrap_or_default()
    }

    fn evict_overflow(&mut self) {
        while self.entries.len() > CACHE_CAPACITY {
            let oldest = self
                .entries
                .iter()
                .filter(|(key, _)| {
                    Some(*key) != self.active.as_ref() && Some(*key) != self.displayed.as_ref()
                })
                .min_by_key(|(_, entry)| entry.stored)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }

    fn take_if_latest(&mut self, ticket: &FetchTicket<T::Column>) -> bool {
        match self.in_flight.get(&ticket.key) {
            Some(flight) if flight.seq == ticket.seq => {
                self.in_flight.remove(&ticket.key);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::ListPatch;
    use crate::core::resource::SortColumn;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    struct NoColumn;

    impl SortColumn for NoColumn {
        const ALL: &'static [Self] = &[];

        fn key(self) -> &'static str {
            "none"
        }

        fn label(self) -> &'static str {
            "None"
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Row(i64);

    impl Record for Row {
        type Column = NoColumn;
        const KIND: ResourceKind = ResourceKind::Staff;

        fn id(&self) -> Option<i64> {
            Some(self.0)
        }

        fn is_active(&self) -> bool {
            true
        }

        fn display_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn key(page: u32) -> CacheKey<NoColumn> {
        CacheKey::new(
            ResourceKind::Staff,
            ListQuery::default().apply(ListPatch::page(page)),
        )
    }

    fn page_of(ids: &[i64]) -> PageResponse<Row> {
        PageResponse {
            content: ids.iter().copied().map(Row).collect(),
            total_pages: 3,
            total_elements: 25,
            number: 0,
            size: 10,
        }
    }

    #[test]
    fn first_fetch_is_loading_until_applied() {
        let mut cache = QueryCache::<Row>::default();
        cache.activate(key(0));
        assert!(cache.view().loading);
        assert!(cache.needs_fetch(&key(0)));
        let ticket = cache.begin_fetch(key(0));
        assert!(!cache.needs_fetch(&key(0)));
        assert_eq!(cache.resolve(&ticket, page_of(&[1, 2])), Resolution::Applied);
        let view = cache.view();
        assert!(!view.loading);
        assert!(!view.stale);
        assert_eq!(cache.active_rows(), vec![Row(1), Row(2)]);
    }

    #[test]
    fn abandoned_key_is_cached_not_displayed() {
        let mut cache = QueryCache::<Row>::default();
        cache.activate(key(0));
        let slow = cache.begin_fetch(key(0));
        cache.activate(key(1));
        let fast = cache.begin_fetch(key(1));
        assert_eq!(cache.resolve(&fast, page_of(&[11])), Resolution::Applied);
        assert_eq!(cache.resolve(&slow, page_of(&[1])), Resolution::Cached);
        assert_eq!(cache.active_rows(), vec![Row(11)]);
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let mut cache = QueryCache::<Row>::default();
        cache.activate(key(0));
        let first = cache.begin_fetch(key(0));
        let second = cache.begin_fetch(key(0));
        assert!(second.seq() > first.seq());
        assert_eq!(cache.resolve(&second, page_of(&[2])), Resolution::Applied);
        assert_eq!(cache.resolve(&first, page_of(&[1])), Resolution::Discarded);
        assert_eq!(cache.active_rows(), vec![Row(2)]);
    }

    #[test]
    fn previous_page_is_a_stale_placeholder() {
        let mut cache = QueryCache::<Row>::default();
        cache.activate(key(0));
        let ticket = cache.begin_fetch(key(0));
        cache.resolve(&ticket, page_of(&[1]));
        cache.activate(key(1));
        let view = cache.view();
        assert!(view.loading);
        assert!(view.stale);
        assert_eq!(view.page.map(|page| page.content.clone()), Some(vec![Row(1)]));
    }

    #[test]
    fn invalidation_marks_stale_and_requests_refetch() {
        let mut cache = QueryCache::<Row>::default();
        cache.activate(key(0));
        let ticket = cache.begin_fetch(key(0));
        cache.resolve(&ticket, page_of(&[1]));
        let before = cache.generation();
        cache.invalidate(ResourceKind::Staff);
        assert_eq!(cache.generation(), before + 1);
        assert!(cache.needs_fetch(&key(0)));
        let view = cache.view();
        assert!(view.stale);
        assert!(!view.loading);
    }

    #[test]
    fn invalidation_keeps_only_on_screen_entries() {
        let mut cache = QueryCache::<Row>::default();
        for page in 0..500 {
            cache.activate(key(page));
            let ticket = cache.begin_fetch(key(page));
            cache.resolve(&ticket, page_of(&[i64::from(page)]));
            cache.invalidate(ResourceKind::Staff);
        }
        assert_eq!(cache.entries.len(), 1);
        assert_eq!(cache.view().page.map(|page| page.content.clone()), Some(vec![Row(499)]));
    }

    #[test]
    fn browsing_is_capped_and_evicts_oldest_first() {
        let mut cache = QueryCache::<Row>::default();
        for page in 0..500 {
            cache.activate(key(page));
            let ticket = cache.begin_fetch(key(page));
            cache.resolve(&ticket, page_of(&[i64::from(page)]));
        }
        assert_eq!(cache.entries.len(), CACHE_CAPACITY);
        assert!(cache.needs_fetch(&key(0)));
        assert!(!cache.needs_fetch(&key(499)));
        assert_eq!(cache.active_rows(), vec![Row(499)]);
    }

    #[test]
    fn invalidating_other_kind_keeps_entries_fresh() {
        let mut cache = QueryCache::<Row>::default();
        cache.activate(key(0));
        let ticket = cache.begin_fetch(key(0));
        cache.resolve(&ticket, page_of(&[1]));
        cache.invalidate(ResourceKind::Students);
        assert!(!cache.needs_fetch(&key(0)));
    }

    #[test]
    fn response_issued_before_invalidation_lands_stale() {
        let mut cache = QueryCache::<Row>::default();
        cache.activate(key(0));
        let ticket = cache.begin_fetch(key(0));
        cache.invalidate(ResourceKind::Staff);
        assert!(cache.needs_fetch(&key(0)));
        assert_eq!(cache.resolve(&ticket, page_of(&[1])), Resolution::Applied);
        assert!(cache.view().stale);
    }

    #[test]
    fn failure_only_surfaces_for_latest_active_ticket() {
        let mut cache = QueryCache::<Row>::default();
        cache.activate(key(0));
        let old = cache.begin_fetch(key(0));
        let current = cache.begin_fetch(key(0));
        assert!(!cache.fail(&old));
        assert!(cache.fail(&current));
        assert!(cache.needs_fetch(&key(0)));
    }
}
