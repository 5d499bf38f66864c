pub mod filter;
pub mod paging;

use crate::model::Business;

/// View state over the fetched collection: the records themselves, the
/// search text and the current page.
///
/// The record collection is a cache of the remote store, rebuilt wholesale
/// after every fetch; mutations never patch it in place. Filtering and the
/// page window are recomputed from current inputs on every read.
#[derive(Debug, Clone)]
pub struct Listing {
    records: Vec<Business>,
    search: String,
    current_page: usize,
    per_page: usize,
}

/// The visible slice plus the numbers the pagination footer needs.
#[derive(Debug)]
pub struct PageView<'a> {
    pub records: Vec<&'a Business>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_records: usize,
}

impl Listing {
    pub fn new(per_page: usize) -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            current_page: 1,
            per_page: per_page.max(1),
        }
    }

    /// Replaces the cached collection after a fetch. The current page is
    /// re-clamped so a shrinking collection cannot strand the view past the
    /// last page.
    pub fn set_records(&mut self, records: Vec<Business>) {
        self.records = records;
        let total_pages = self.total_pages();
        if self.current_page > total_pages {
            self.current_page = total_pages.max(1);
        }
    }

    pub fn records(&self) -> &[Business] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Any edit to the search text resets the view to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.current_page = 1;
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search.push(ch);
        self.current_page = 1;
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.current_page = 1;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_pages(&self) -> usize {
        let filtered = filter::filter(&self.records, &self.search).len();
        paging::page_window(filtered, self.per_page, self.current_page).total_pages
    }

    /// Out-of-range requests are silent no-ops.
    pub fn goto_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        }
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.goto_page(self.current_page.saturating_sub(1));
    }

    pub fn page_view(&self) -> PageView<'_> {
        let filtered = filter::filter(&self.records, &self.search);
        let window = paging::page_window(filtered.len(), self.per_page, self.current_page);
        PageView {
            total_records: filtered.len(),
            current_page: self.current_page,
            total_pages: window.total_pages,
            records: filtered[window.start..window.end].to_vec(),
        }
    }
}
