//! Search Controller
//!
//! Owns the picker's [`SearchState`] and runs `search` / `loadMore` on
//! worker threads. Finished requests are picked up by [`SearchController::poll`],
//! which the UI calls once per frame.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

use crate::egui_app::api::{ApiError, DirectoryApi};
use crate::egui_app::navigation::Navigator;
use crate::egui_app::types::Screen;
use crate::shared::{LoadMorePage, User};

use super::state::SearchState;

/// Pending API operation result types
pub type SearchResult = Result<Vec<User>, ApiError>;
pub type LoadMoreResult = Result<LoadMorePage, ApiError>;

struct PendingLoadMore {
    page: u32,
    rx: Receiver<LoadMoreResult>,
}

pub struct SearchController {
    api: Arc<dyn DirectoryApi>,
    state: SearchState,
    pending_search: Option<Receiver<SearchResult>>,
    pending_load_more: Option<PendingLoadMore>,
}

impl SearchController {
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self {
            api,
            state: SearchState::default(),
            pending_search: None,
            pending_load_more: None,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The search box binds to this
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.state.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Swap the API client, e.g. after a login produced a new token
    pub fn set_api(&mut self, api: Arc<dyn DirectoryApi>) {
        self.api = api;
    }

    /// Whether any request is still in flight
    pub fn is_busy(&self) -> bool {
        self.pending_search.is_some() || self.pending_load_more.is_some()
    }

    /// Search for the current query, restarting pagination at page 1.
    ///
    /// A search replaces any request still in flight: their results are
    /// dropped when they arrive.
    pub fn search(&mut self) {
        self.state.begin_search();
        self.pending_load_more = None;

        let api = Arc::clone(&self.api);
        let query = self.state.query.clone();
        tracing::debug!(%query, "search");

        self.pending_search = Some(spawn(move || api.search(&query)));
    }

    /// Request the page after the last one merged, if allowed
    pub fn load_more_data(&mut self) {
        if !self.state.can_load_more() {
            return;
        }
        self.state.is_loading_more = true;

        let api = Arc::clone(&self.api);
        let query = self.state.query.clone();
        let page = self.state.next_page();
        tracing::debug!(%query, page, "load more");

        let rx = spawn(move || api.load_more(&query, page));
        self.pending_load_more = Some(PendingLoadMore { page, rx });
    }

    /// Merge finished requests into the state
    pub fn poll(&mut self, navigator: &mut Navigator) {
        let received = self.pending_search.as_ref().map(Receiver::try_recv);
        match received {
            Some(Ok(result)) => {
                self.pending_search = None;
                self.finish_search(result, navigator);
            }
            Some(Err(TryRecvError::Disconnected)) => {
                tracing::warn!("search worker exited without a result");
                self.pending_search = None;
                self.state.is_searching = false;
            }
            Some(Err(TryRecvError::Empty)) | None => {}
        }

        let received = self
            .pending_load_more
            .as_ref()
            .map(|pending| (pending.page, pending.rx.try_recv()));
        match received {
            Some((page, Ok(result))) => {
                self.pending_load_more = None;
                self.finish_load_more(page, result);
            }
            Some((_, Err(TryRecvError::Disconnected))) => {
                tracing::warn!("load-more worker exited without a result");
                self.pending_load_more = None;
                self.state.is_loading_more = false;
                self.state.mark_load_more_failed();
            }
            Some((_, Err(TryRecvError::Empty))) | None => {}
        }
    }

    fn finish_search(&mut self, result: SearchResult, navigator: &mut Navigator) {
        match result {
            Ok(users) => {
                tracing::debug!(count = users.len(), "search finished");
                self.state.replace_results(users);
            }
            Err(ApiError::Forbidden) => {
                tracing::info!("search rejected with 403, redirecting to login");
                navigator.navigate(Screen::Login);
            }
            Err(e) => {
                tracing::warn!("search failed: {}", e);
            }
        }
        self.state.is_searching = false;
    }

    fn finish_load_more(&mut self, page: u32, result: LoadMoreResult) {
        match result {
            Ok(LoadMorePage::Overflow) => {
                tracing::debug!(page, "end of list");
                self.state.mark_end_of_list();
            }
            Ok(LoadMorePage::Users(users)) if users.is_empty() => {
                self.state.mark_end_of_list();
            }
            Ok(LoadMorePage::Users(users)) => {
                tracing::debug!(page, count = users.len(), "page appended");
                self.state.append_page(page, users);
            }
            Err(e) => {
                tracing::warn!(page, "load more failed: {}", e);
                self.state.mark_load_more_failed();
            }
        }
        self.state.is_loading_more = false;
    }
}

fn spawn<T, F>(job: F) -> Receiver<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        let _ = tx.send(job());
    });
    rx
}
