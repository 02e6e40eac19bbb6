//! Per-resource list state: query, selection, cached pages, in-flight mutations.
//!
//! # Design
//! - The query is observed from the URL; this type never writes it back.
//! - A query change clears the selection; a new page prunes it to the visible ids.
//! - Mutation completion is the single place where cache invalidation and selection
//!   clearing are decided.

use crate::core::banner::Banner;
use crate::core::cache::{CacheKey, CacheView, FetchTicket, QueryCache, Resolution};
use crate::core::mutation::{MutationKind, PendingMutations};
use crate::core::query::ListQuery;
use crate::core::resource::Record;
use crate::core::selection::{Selection, SelectionSummary};
use roster_api_models::PageResponse;

/// What the table body renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableBody {
    /// First load for this key, nothing to show yet.
    Loading,
    /// No rows, or the fetch failed with nothing cached.
    Empty,
    /// Rows of the exact page or a placeholder.
    Rows,
}

/// Complete list state for one record type.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T: Record> {
    /// Query currently reflected by the URL.
    pub query: ListQuery<T::Column>,
    /// Selected rows on the current page.
    pub selection: Selection,
    /// Page cache.
    pub cache: QueryCache<T>,
    /// Mutations awaiting a response.
    pub pending: PendingMutations,
    /// Result banner from the last import/invite.
    pub banner: Option<Banner>,
    /// Error from the last failed list fetch.
    pub fetch_error: Option<String>,
}

impl<T: Record> Default for ListState<T> {
    fn default() -> Self {
        Self {
            query: ListQuery::default(),
            selection: Selection::default(),
            cache: QueryCache::default(),
            pending: PendingMutations::default(),
            banner: None,
            fetch_error: None,
        }
    }
}

impl<T: Record> ListState<T> {
    /// Cache key for the current query.
    #[must_use]
    pub fn key(&self) -> CacheKey<T::Column> {
        CacheKey::new(T::KIND, self.query.clone())
    }

    /// Adopt the query read from the URL. Returns `true` when it changed.
    pub fn observe_query(&mut self, query: ListQuery<T::Column>) -> bool {
        let changed = query != self.query;
        if changed {
            self.query = query;
            self.selection.clear();
            self.fetch_error = None;
        }
        self.cache.activate(self.key());
        changed
    }

    /// Issue a fetch ticket when the current key needs one.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket<T::Column>> {
        let key = self.key();
        if self.cache.needs_fetch(&key) {
            Some(self.cache.begin_fetch(key))
        } else {
            None
        }
    }

    /// Hand a fetched page to the cache.
    pub fn apply_page(
        &mut self,
        ticket: &FetchTicket<T::Column>,
        page: PageResponse<T>,
    ) -> Resolution {
        let resolution = self.cache.resolve(ticket, page);
        if resolution == Resolution::Applied {
            self.fetch_error = None;
            let visible = self.visible_ids();
            self.selection.retain_visible(&visible);
        }
        resolution
    }

    /// Record a failed fetch; the message is kept only for the displayed key.
    pub fn fetch_failed(&mut self, ticket: &FetchTicket<T::Column>, message: String) -> bool {
        let surfaced = self.cache.fail(ticket);
        if surfaced {
            self.fetch_error = Some(message);
        }
        surfaced
    }

    /// Mark `kind` in flight. Returns `false` when it already is.
    pub fn start_mutation(&mut self, kind: MutationKind) -> bool {
        self.pending.start(kind)
    }

    /// Settle `kind`; on success invalidate and clear as the kind requires.
    pub fn complete_mutation(&mut self, kind: MutationKind, ok: bool) {
        self.pending.finish(kind);
        if !ok {
            return;
        }
        if kind.invalidates_cache() {
            self.cache.invalidate(T::KIND);
        }
        if kind.clears_selection() {
            self.selection.clear();
        }
    }

    /// Render state for the current key.
    #[must_use]
    pub fn view(&self) -> CacheView<T> {
        self.cache.view()
    }

    /// Ids of the rows on the exact current page.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<i64> {
        self.cache
            .active_rows()
            .iter()
            .filter_map(Record::id)
            .collect()
    }

    /// Flip selection of one row.
    pub fn toggle_row(&mut self, id: i64) {
        self.selection.toggle(id);
    }

    /// Header checkbox against the current page.
    pub fn toggle_all(&mut self) {
        let visible = self.visible_ids();
        self.selection.toggle_all(&visible);
    }

    /// Bulk bar flags for the current page.
    #[must_use]
    pub fn summary(&self) -> SelectionSummary {
        self.selection.summarize(&self.cache.active_rows())
    }

    /// Body state for the table.
    #[must_use]
    pub fn table_body(&self) -> TableBody {
        let view = self.view();
        match view.page {
            Some(page) if !page.content.is_empty() => TableBody::Rows,
            None if view.loading && self.fetch_error.is_none() => TableBody::Loading,
            _ => TableBody::Empty,
        }
    }

    /// Rows on screen can be selected only once the exact page has arrived.
    #[must_use]
    pub fn rows_selectable(&self) -> bool {
        !self.view().loading
    }

    /// Page count of whatever page is on screen; 0 before the first load.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.view().page.map_or(0, |page| page.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{ListPatch, StatusFilter};
    use crate::core::resource::{ResourceKind, SortColumn};

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
    struct Row {
        id: i64,
        active: bool,
    }

    impl Record for Row {
        type Column = NoColumn;
        const KIND: ResourceKind = ResourceKind::Students;

        fn id(&self) -> Option<i64> {
            Some(self.id)
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn display_name(&self) -> String {
            format!("row {}", self.id)
        }
    }

    fn page(rows: Vec<Row>) -> PageResponse<Row> {
        PageResponse {
            total_elements: rows.len() as u64,
            content: rows,
            total_pages: 1,
            number: 0,
            size: 10,
        }
    }

    #[test]
    fn placeholder_rows_are_locked_while_next_page_loads() {
        let mut state = loaded(vec![Row { id: 1, active: true }]);
        assert!(state.rows_selectable());
        state.observe_query(ListQuery::default().apply(ListPatch::page(1)));
        assert!(state.begin_fetch().is_some());
        assert_eq!(state.table_body(), TableBody::Rows);
        assert!(!state.rows_selectable());
    }

    #[test]
    fn failed_first_fetch_stops_loading() {
        let mut state = ListState::<Row>::default();
        state.observe_query(ListQuery::default());
        let ticket = state.begin_fetch().expect("first fetch");
        assert_eq!(state.table_body(), TableBody::Loading);
        assert!(state.fetch_failed(&ticket, "Something went wrong".into()));
        assert_eq!(state.table_body(), TableBody::Empty);
    }

    #[test]
    fn empty_page_shows_empty_state() {
        let state = loaded(Vec::new());
        assert_eq!(state.table_body(), TableBody::Empty);
        assert!(state.rows_selectable());
    }

    fn loaded(rows: Vec<Row>) -> ListState<Row> {
        let mut state = ListState::default();
        state.observe_query(ListQuery::default());
        let ticket = state.begin_fetch().unwrap();
        state.apply_page(&ticket, page(rows));
        state
    }

    #[test]
    fn query_change_clears_selection() {
        let mut state = loaded(vec![Row { id: 1, active: true }]);
        state.toggle_all();
        assert_eq!(state.selection.len(), 1);
        let next = state.query.apply(ListPatch::status(StatusFilter::Active));
        assert!(state.observe_query(next));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn same_query_keeps_selection() {
        let mut state = loaded(vec![Row { id: 1, active: true }]);
        state.toggle_row(1);
        assert!(!state.observe_query(ListQuery::default()));
        assert!(state.selection.contains(1));
    }

    #[test]
    fn fresh_page_prunes_vanished_rows() {
        let mut state = loaded(vec![Row { id: 1, active: true }, Row { id: 2, active: true }]);
        state.toggle_all();
        state.complete_mutation(MutationKind::Delete, true);
        let ticket = state.begin_fetch().unwrap();
        state.apply_page(&ticket, page(vec![Row { id: 2, active: true }]));
        assert_eq!(state.selection.ids(), vec![2]);
    }

    #[test]
    fn bulk_success_clears_selection_and_refetches() {
        let mut state = loaded(vec![Row { id: 1, active: true }, Row { id: 2, active: false }]);
        state.toggle_all();
        assert!(state.start_mutation(MutationKind::BulkDeactivate));
        assert!(state.begin_fetch().is_none());
        state.complete_mutation(MutationKind::BulkDeactivate, true);
        assert!(state.selection.is_empty());
        assert!(state.begin_fetch().is_some());
        assert!(!state.pending.is_pending(MutationKind::BulkDeactivate));
    }

    #[test]
    fn failed_mutation_keeps_cache_and_selection() {
        let mut state = loaded(vec![Row { id: 1, active: true }]);
        state.toggle_all();
        state.start_mutation(MutationKind::BulkDelete);
        state.complete_mutation(MutationKind::BulkDelete, false);
        assert_eq!(state.selection.len(), 1);
        assert!(state.begin_fetch().is_none());
    }

    #[test]
    fn export_does_not_refetch() {
        let mut state = loaded(vec![Row { id: 1, active: true }]);
        state.start_mutation(MutationKind::ExportCsv);
        state.complete_mutation(MutationKind::ExportCsv, true);
        assert!(state.begin_fetch().is_none());
    }

    #[test]
    fn fetch_error_is_cleared_by_next_page() {
        let mut state = ListState::<Row>::default();
        state.observe_query(ListQuery::default());
        let ticket = state.begin_fetch().unwrap();
        assert!(state.fetch_failed(&ticket, "Something went wrong".into()));
        assert_eq!(state.fetch_error.as_deref(), Some("Something went wrong"));
        let retry = state.begin_fetch().unwrap();
        state.apply_page(&retry, page(Vec::new()));
        assert!(state.fetch_error.is_none());
        assert_eq!(state.total_pages(), 1);
    }
}
