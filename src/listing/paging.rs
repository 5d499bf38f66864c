/// Records shown per page unless overridden in the config or on the CLI.
pub const RECORDS_PER_PAGE: usize = 10;

/// Page count plus the half-open slice window for the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

/// Maps (total record count, page size, 1-based current page) to the page
/// count and the slice window to apply to the filtered collection. The
/// window is clamped to the collection bounds, so a page past the end
/// produces an empty slice rather than a panic.
pub fn page_window(total_records: usize, per_page: usize, current_page: usize) -> PageWindow {
    let per_page = per_page.max(1);
    let total_pages = (total_records + per_page - 1) / per_page;
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(total_records);
    let end = start.saturating_add(per_page).min(total_records);
    PageWindow {
        total_pages,
        start,
        end,
    }
}

/// The footer button model: Previous, one numbered button per page, Next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub pages: Vec<usize>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

pub fn page_controls(current_page: usize, total_pages: usize) -> PageControls {
    PageControls {
        current: current_page,
        pages: (1..=total_pages).collect(),
        prev_enabled: current_page > 1,
        next_enabled: current_page < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_records_page_one() {
        let window = page_window(25, 10, 1);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 10);
    }

    #[test]
    fn last_page_window_is_partial() {
        let window = page_window(25, 10, 3);
        assert_eq!(window.start, 20);
        assert_eq!(window.end, 25);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let window = page_window(0, 10, 1);
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 0);
    }

    #[test]
    fn page_past_end_yields_empty_window() {
        let window = page_window(5, 10, 4);
        assert_eq!(window.start, 5);
        assert_eq!(window.end, 5);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(page_window(30, 10, 1).total_pages, 3);
        assert_eq!(page_window(31, 10, 1).total_pages, 4);
    }

    #[test]
    fn controls_disable_edges() {
        let first = page_controls(1, 3);
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);
        assert_eq!(first.pages, vec![1, 2, 3]);

        let last = page_controls(3, 3);
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);

        let empty = page_controls(1, 0);
        assert!(!empty.prev_enabled);
        assert!(!empty.next_enabled);
        assert!(empty.pages.is_empty());
    }
}
