//! List query state: the canonical pagination/sort/filter value behind a list view.
//!
//! # Design
//! - `ListQuery` is immutable; every change produces a new value via [`ListQuery::apply`].
//! - The URL is only a serialization target. Defaults are never written to it.
//! - Any change other than explicit page navigation sends the user back to page 0.

use crate::core::config::{DEFAULT_PAGE_SIZE, MAX_PAGE, PAGE_SIZES};
use crate::core::resource::SortColumn;
use std::borrow::Cow;

/// URL key for the search term.
pub const KEY_SEARCH: &str = "search";
/// URL key for the zero-based page index.
pub const KEY_PAGE: &str = "page";
/// URL key for the page size.
pub const KEY_SIZE: &str = "size";
/// URL key for the sort field.
pub const KEY_SORT_BY: &str = "sortBy";
/// URL key for the sort order.
pub const KEY_ORDER: &str = "order";
/// URL key for the status filter.
pub const KEY_STATUS: &str = "status";

const OWNED_KEYS: [&str; 6] = [
    KEY_SEARCH,
    KEY_PAGE,
    KEY_SIZE,
    KEY_SORT_BY,
    KEY_ORDER,
    KEY_STATUS,
];
const ID_SORT_KEY: &str = "id";

/// Rows per page, restricted to [`PAGE_SIZES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageSize(u32);

impl PageSize {
    /// Accept `value` only when it is one of the allowed sizes.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        PAGE_SIZES.contains(&value).then_some(Self(value))
    }

    /// Raw row count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Every allowed size, smallest first.
    pub fn all() -> impl Iterator<Item = Self> {
        PAGE_SIZES.into_iter().map(Self)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SortOrder {
    /// Ascending (default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse a wire value, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Active-status filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusFilter {
    /// No filtering (default).
    #[default]
    All,
    /// Active records only.
    Active,
    /// Inactive records only.
    Inactive,
}

impl StatusFilter {
    /// Filters in toolbar order.
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    /// URL value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Toolbar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Parse a URL value; `true`/`false` are accepted for older links.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" | "true" => Some(Self::Active),
            "inactive" | "false" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// Value of the API `active` parameter, `None` when unfiltered.
    #[must_use]
    pub const fn active_param(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Active => Some(true),
            Self::Inactive => Some(false),
        }
    }
}

/// Sort field: the implicit `id` ordering or one of the resource's columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SortKey<C> {
    /// Server default ordering by identifier.
    Id,
    /// A sortable column.
    Column(C),
}

impl<C> Default for SortKey<C> {
    fn default() -> Self {
        Self::Id
    }
}

impl<C: SortColumn> SortKey<C> {
    /// Wire value for `sortBy`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => ID_SORT_KEY,
            Self::Column(column) => column.key(),
        }
    }

    /// Parse a `sortBy` value; unknown fields fall back to `id`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        C::from_key(value).map_or(Self::Id, Self::Column)
    }
}

/// Canonical list parameters for one resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListQuery<C> {
    /// Free-text search; empty means no search.
    pub search: String,
    /// Zero-based page index.
    pub page: u32,
    /// Rows per page.
    pub page_size: PageSize,
    /// Sort field.
    pub sort: SortKey<C>,
    /// Sort direction.
    pub order: SortOrder,
    /// Active-status filter.
    pub status: StatusFilter,
}

impl<C> Default for ListQuery<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 0,
            page_size: PageSize::default(),
            sort: SortKey::Id,
            order: SortOrder::Asc,
            status: StatusFilter::All,
        }
    }
}

/// Partial update merged into a [`ListQuery`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListPatch<C> {
    /// New search term.
    pub search: Option<String>,
    /// Explicit page navigation.
    pub page: Option<u32>,
    /// New page size.
    pub page_size: Option<PageSize>,
    /// New sort field.
    pub sort: Option<SortKey<C>>,
    /// New sort direction.
    pub order: Option<SortOrder>,
    /// New status filter.
    pub status: Option<StatusFilter>,
}

impl<C> Default for ListPatch<C> {
    fn default() -> Self {
        Self {
            search: None,
            page: None,
            page_size: None,
            sort: None,
            order: None,
            status: None,
        }
    }
}

impl<C> ListPatch<C> {
    /// Change the search term.
    #[must_use]
    pub fn search(value: impl Into<String>) -> Self {
        Self {
            search: Some(value.into()),
            ..Self::default()
        }
    }

    /// Navigate to `page`.
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// Change the page size.
    #[must_use]
    pub fn page_size(size: PageSize) -> Self {
        Self {
            page_size: Some(size),
            ..Self::default()
        }
    }

    /// Change the status filter.
    #[must_use]
    pub fn status(status: StatusFilter) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Whether applying this patch leaves page navigation behind.
    #[must_use]
    pub const fn resets_page(&self) -> bool {
        self.search.is_some()
            || self.page_size.is_some()
            || self.sort.is_some()
            || self.order.is_some()
            || self.status.is_some()
    }
}

impl<C: SortColumn> ListQuery<C> {
    /// Read list parameters from a URL query string (leading `?` optional).
    ///
    /// The first occurrence of a key wins; malformed values fall back to the
    /// field default.
    #[must_use]
    pub fn from_query_str(raw: &str) -> Self {
        let pairs = parse_pairs(raw);
        let lookup = |key: &str| {
            pairs
                .iter()
                .find(|(candidate, _)| candidate == key)
                .map(|(_, value)| value.as_str())
        };
        let mut query = Self::default();
        if let Some(search) = lookup(KEY_SEARCH) {
            query.search = search.to_string();
        }
        if let Some(page) = lookup(KEY_PAGE)
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|page| *page <= MAX_PAGE)
        {
            query.page = page;
        }
        if let Some(size) = lookup(KEY_SIZE)
            .and_then(|value| value.parse::<u32>().ok())
            .and_then(PageSize::new)
        {
            query.page_size = size;
        }
        if let Some(sort) = lookup(KEY_SORT_BY) {
            query.sort = SortKey::parse(sort);
        }
        if let Some(order) = lookup(KEY_ORDER).and_then(SortOrder::parse) {
            query.order = order;
        }
        if let Some(status) = lookup(KEY_STATUS).and_then(StatusFilter::parse) {
            query.status = status;
        }
        query
    }

    /// Merge `patch` into a new query.
    #[must_use]
    pub fn apply(&self, patch: ListPatch<C>) -> Self {
        let resets_page = patch.resets_page();
        let mut next = self.clone();
        if let Some(search) = patch.search {
            next.search = search;
        }
        if let Some(size) = patch.page_size {
            next.page_size = size;
        }
        if let Some(sort) = patch.sort {
            next.sort = sort;
        }
        if let Some(order) = patch.order {
            next.order = order;
        }
        if let Some(status) = patch.status {
            next.status = status;
        }
        next.page = if resets_page {
            0
        } else {
            patch.page.unwrap_or(self.page)
        };
        next
    }

    /// Header click on `column`: flip order when already active, otherwise
    /// sort ascending by it.
    #[must_use]
    pub fn toggle_sort(&self, column: C) -> Self {
        let patch = if self.sort == SortKey::Column(column) {
            ListPatch {
                order: Some(self.order.flipped()),
                ..ListPatch::default()
            }
        } else {
            ListPatch {
                sort: Some(SortKey::Column(column)),
                order: Some(SortOrder::Asc),
                ..ListPatch::default()
            }
        };
        self.apply(patch)
    }

    /// Sort direction for `column` when it is the active sort.
    #[must_use]
    pub fn sort_direction(&self, column: C) -> Option<SortOrder> {
        (self.sort == SortKey::Column(column)).then_some(self.order)
    }

    /// Non-default parameters in canonical key order.
    #[must_use]
    pub fn canonical_pairs(&self) -> Vec<(&'static str, String)> {
        let defaults = Self::default();
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push((KEY_SEARCH, self.search.clone()));
        }
        if self.page != defaults.page {
            pairs.push((KEY_PAGE, self.page.to_string()));
        }
        if self.page_size != defaults.page_size {
            pairs.push((KEY_SIZE, self.page_size.get().to_string()));
        }
        if self.sort != defaults.sort {
            pairs.push((KEY_SORT_BY, self.sort.key().to_string()));
        }
        if self.order != defaults.order {
            pairs.push((KEY_ORDER, self.order.as_str().to_string()));
        }
        if self.status != defaults.status {
            pairs.push((KEY_STATUS, self.status.as_str().to_string()));
        }
        pairs
    }

    /// Canonical query string without a leading `?`; empty for the default query.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        encode_pairs(
            self.canonical_pairs()
                .iter()
                .map(|(key, value)| (*key, value.as_str())),
        )
    }

    /// Replace the owned keys of `existing` with this query, keeping any
    /// other parameters in their original order.
    #[must_use]
    pub fn merge_pairs(&self, existing: &str) -> Vec<(String, String)> {
        let mut merged: Vec<(String, String)> = parse_pairs(existing)
            .into_iter()
            .filter(|(key, _)| !OWNED_KEYS.contains(&key.as_str()))
            .collect();
        merged.extend(
            self.canonical_pairs()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value)),
        );
        merged
    }

    /// Encoded form of [`ListQuery::merge_pairs`].
    #[must_use]
    pub fn merge_into(&self, existing: &str) -> String {
        let merged = self.merge_pairs(existing);
        encode_pairs(
            merged
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        )
    }

    /// Query string for the REST list endpoint.
    #[must_use]
    pub fn api_query(&self) -> String {
        let page = self.page.to_string();
        let size = self.page_size.get().to_string();
        let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(6);
        if !self.search.is_empty() {
            pairs.push((KEY_SEARCH, self.search.as_str()));
        }
        pairs.push((KEY_PAGE, page.as_str()));
        pairs.push((KEY_SIZE, size.as_str()));
        pairs.push((KEY_SORT_BY, self.sort.key()));
        pairs.push((KEY_ORDER, self.order.as_str()));
        if let Some(active) = self.status.active_param() {
            pairs.push(("active", if active { "true" } else { "false" }));
        }
        encode_pairs(pairs.into_iter())
    }

    /// Whether this query differs from the default in anything but the page.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.status != StatusFilter::All
    }
}

/// Split a query string into decoded key/value pairs.
#[must_use]
pub fn parse_pairs(raw: &str) -> Vec<(String, String)> {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Encode key/value pairs as `k=v&k=v`.
pub fn encode_pairs<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    enum Column {
        Name,
        Email,
    }

    impl SortColumn for Column {
        const ALL: &'static [Self] = &[Self::Name, Self::Email];

        fn key(self) -> &'static str {
            match self {
                Self::Name => "firstName",
                Self::Email => "email",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Self::Name => "Name",
                Self::Email => "Email",
            }
        }
    }

    type Query = ListQuery<Column>;

    #[test]
    fn empty_url_reads_defaults() {
        assert_eq!(Query::from_query_str(""), Query::default());
        assert_eq!(Query::from_query_str("?"), Query::default());
    }

    #[test]
    fn default_query_serializes_to_nothing() {
        assert_eq!(Query::default().to_query_string(), "");
    }

    #[test]
    fn non_defaults_round_trip() {
        let query = Query {
            search: "mary ann".into(),
            page: 3,
            page_size: PageSize::new(25).unwrap(),
            sort: SortKey::Column(Column::Email),
            order: SortOrder::Desc,
            status: StatusFilter::Inactive,
        };
        let raw = query.to_query_string();
        assert_eq!(
            raw,
            "search=mary%20ann&page=3&size=25&sortBy=email&order=desc&status=inactive"
        );
        assert_eq!(Query::from_query_str(&raw), query);
    }

    #[test]
    fn malformed_values_fall_back() {
        let query = Query::from_query_str("?page=-1&size=13&sortBy=salary&order=up&status=maybe");
        assert_eq!(query, Query::default());
    }

    #[test]
    fn page_beyond_server_range_falls_back() {
        assert_eq!(Query::from_query_str("page=4294967295").page, 0);
        assert_eq!(Query::from_query_str("page=2147483648").page, 0);
        assert_eq!(Query::from_query_str("page=2147483647").page, MAX_PAGE);
    }

    #[test]
    fn legacy_status_and_plus_spaces_parse() {
        let query = Query::from_query_str("status=true&search=a+b");
        assert_eq!(query.status, StatusFilter::Active);
        assert_eq!(query.search, "a b");
    }

    #[test]
    fn explicit_page_navigation_keeps_page() {
        let query = Query::default().apply(ListPatch::page(4));
        assert_eq!(query.page, 4);
    }

    #[test]
    fn filter_changes_reset_page() {
        let on_page = Query::default().apply(ListPatch::page(4));
        assert_eq!(on_page.apply(ListPatch::search("x")).page, 0);
        assert_eq!(
            on_page.apply(ListPatch::status(StatusFilter::Active)).page,
            0
        );
        assert_eq!(
            on_page
                .apply(ListPatch::page_size(PageSize::new(50).unwrap()))
                .page,
            0
        );
        assert_eq!(on_page.toggle_sort(Column::Name).page, 0);
    }

    #[test]
    fn patch_with_page_and_filter_still_resets() {
        let query = Query::default().apply(ListPatch {
            search: Some("x".into()),
            page: Some(7),
            ..ListPatch::default()
        });
        assert_eq!(query.page, 0);
    }

    #[test]
    fn empty_search_removes_parameter() {
        let query = Query::from_query_str("search=john").apply(ListPatch::search(""));
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn toggle_sort_flips_active_column_and_resets_new_one() {
        let by_name = Query::default().toggle_sort(Column::Name);
        assert_eq!(by_name.sort, SortKey::Column(Column::Name));
        assert_eq!(by_name.order, SortOrder::Asc);
        let flipped = by_name.toggle_sort(Column::Name);
        assert_eq!(flipped.order, SortOrder::Desc);
        let by_email = flipped.toggle_sort(Column::Email);
        assert_eq!(by_email.sort, SortKey::Column(Column::Email));
        assert_eq!(by_email.order, SortOrder::Asc);
        assert_eq!(by_email.sort_direction(Column::Name), None);
        assert_eq!(by_email.sort_direction(Column::Email), Some(SortOrder::Asc));
    }

    #[test]
    fn merge_keeps_foreign_keys() {
        let query = Query::default().apply(ListPatch::page(2));
        assert_eq!(query.merge_into("?tab=roster&page=9&size=10"), "tab=roster&page=2");
        assert_eq!(Query::default().merge_into("page=9"), "");
    }

    #[test]
    fn api_query_always_sends_paging_and_omits_empty_filters() {
        assert_eq!(
            Query::default().api_query(),
            "page=0&size=10&sortBy=id&order=asc"
        );
        let filtered = Query::default()
            .apply(ListPatch::search("john"))
            .apply(ListPatch::status(StatusFilter::Inactive));
        assert_eq!(
            filtered.api_query(),
            "search=john&page=0&size=10&sortBy=id&order=asc&active=false"
        );
    }

    #[test]
    fn parse_pairs_keeps_valueless_keys() {
        assert_eq!(
            parse_pairs("?a&b=2"),
            vec![("a".to_string(), String::new()), ("b".to_string(), "2".to_string())]
        );
    }
}
