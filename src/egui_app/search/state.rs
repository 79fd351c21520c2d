//! Picker view-state
//!
//! Only [`super::SearchController`] mutates this; views read it.

use crate::shared::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Text currently in the search box
    pub query: String,
    /// Results in server order
    pub results: Vec<User>,
    pub is_searching: bool,
    pub is_loading_more: bool,
    /// Last page merged into `results` (1-based)
    pub page: u32,
    /// Set once the server reports overflow; no more load-more requests
    pub end_of_list: bool,
    /// Result count when the last load-more failed. No new load-more until
    /// the list changes or a new search starts.
    pub load_more_failed_at: Option<usize>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            is_searching: false,
            is_loading_more: false,
            page: 1,
            end_of_list: false,
            load_more_failed_at: None,
        }
    }
}

impl SearchState {
    /// Start a fresh result set: page 1, end-of-list cleared
    pub fn begin_search(&mut self) {
        self.is_searching = true;
        self.is_loading_more = false;
        self.page = 1;
        self.end_of_list = false;
        self.load_more_failed_at = None;
    }

    /// Replace the list with the first page
    pub fn replace_results(&mut self, users: Vec<User>) {
        self.results = users;
    }

    /// Append page `page` after the existing entries
    pub fn append_page(&mut self, page: u32, users: Vec<User>) {
        self.results.extend(users);
        self.page = page;
    }

    pub fn mark_end_of_list(&mut self) {
        self.end_of_list = true;
    }

    pub fn mark_load_more_failed(&mut self) {
        self.load_more_failed_at = Some(self.results.len());
    }

    /// Page number the next load-more request should carry
    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1)
    }

    /// Whether a load-more request may be issued right now
    pub fn can_load_more(&self) -> bool {
        !self.end_of_list
            && !self.is_loading_more
            && !self.is_searching
            && !self.results.is_empty()
            && self.load_more_failed_at != Some(self.results.len())
    }
}
