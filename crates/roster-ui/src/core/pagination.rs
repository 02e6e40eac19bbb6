//! Pagination control helpers.

/// Entry in the page button row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index.
    Page(u32),
    /// Elided range.
    Gap,
}

const COMPACT_LIMIT: u32 = 7;

/// Page buttons for `current` (zero-based) out of `total` pages.
#[must_use]
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total <= COMPACT_LIMIT {
        return (0..total).map(PageItem::Page).collect();
    }
    let last = total - 1;
    let mut items = vec![PageItem::Page(0)];
    if current > 3 {
        items.push(PageItem::Gap);
    }
    let start = current.saturating_sub(1).max(1);
    let end = current.saturating_add(1).min(total - 2);
    items.extend((start..=end).map(PageItem::Page));
    if current < total - 4 {
        items.push(PageItem::Gap);
    }
    items.push(PageItem::Page(last));
    items
}

/// Footer text such as `Showing 11–20 of 42`.
#[must_use]
pub fn range_label(page: u32, size: u32, total: u64) -> String {
    if total == 0 {
        return "No results".to_string();
    }
    let from = u64::from(page) * u64::from(size) + 1;
    if from > total {
        return "No results on this page".to_string();
    }
    let to = (u64::from(page) + 1)
        .saturating_mul(u64::from(size))
        .min(total);
    format!("Showing {from}\u{2013}{to} of {total}")
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Gap, Page};
    use super::*;

    #[test]
    fn short_lists_show_every_page() {
        assert_eq!(page_items(0, 0), Vec::new());
        assert_eq!(page_items(2, 3), vec![Page(0), Page(1), Page(2)]);
        assert_eq!(page_items(0, 7).len(), 7);
    }

    #[test]
    fn start_of_long_list_has_trailing_gap() {
        assert_eq!(
            page_items(0, 10),
            vec![Page(0), Page(1), Gap, Page(9)]
        );
        assert_eq!(
            page_items(3, 10),
            vec![Page(0), Page(2), Page(3), Page(4), Gap, Page(9)]
        );
    }

    #[test]
    fn middle_of_long_list_has_both_gaps() {
        assert_eq!(
            page_items(5, 10),
            vec![Page(0), Gap, Page(4), Page(5), Page(6), Gap, Page(9)]
        );
    }

    #[test]
    fn end_of_long_list_has_leading_gap() {
        assert_eq!(
            page_items(9, 10),
            vec![Page(0), Gap, Page(8), Page(9)]
        );
        assert_eq!(
            page_items(6, 10),
            vec![Page(0), Gap, Page(5), Page(6), Page(7), Page(9)]
        );
    }

    #[test]
    fn range_label_clamps_last_page() {
        assert_eq!(range_label(0, 10, 0), "No results");
        assert_eq!(range_label(0, 10, 42), "Showing 1\u{2013}10 of 42");
        assert_eq!(range_label(4, 10, 42), "Showing 41\u{2013}42 of 42");
    }

    #[test]
    fn range_label_past_the_end_never_reads_backwards() {
        assert_eq!(range_label(5, 10, 42), "No results on this page");
        assert_eq!(range_label(u32::MAX, 50, 42), "No results on this page");
    }
}
