//! Search session: the single owner of mutable state.
//!
//! Every user event (search submit, filter change, page click, export) is a
//! method here. The session owns the client, the result store, and the one
//! mutable `ViewState`; filter and sort events replace view fields and
//! re-run the pure pipeline, never the fetch.

use std::path::Path;

use crate::client::PlosClient;
use crate::config::Config;
use crate::error::{SessionError, SessionResult};
use crate::export;
use crate::models::Article;
use crate::store::ResultStore;
use crate::view::{self, PageView, SortOrder, TypeFilter, ViewState};

/// An interactive search session over the PLOS API.
#[derive(Debug)]
pub struct Session {
    client: PlosClient,
    store: ResultStore,
    view: ViewState,
    query: String,
}

impl Session {
    /// Create a session with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let view = ViewState::new(config.page_size);
        let client = PlosClient::new(config)?;

        Ok(Self { client, store: ResultStore::new(), view, query: String::new() })
    }

    /// Run a search. Trims the query; an empty query is rejected before any
    /// network call. On success the store is replaced wholesale and the
    /// view resets to page 1 with no filters. On failure the store and view
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyQuery`] for blank input, or the client
    /// error when the fetch fails.
    pub async fn search(&mut self, query: &str) -> SessionResult<PageView> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SessionError::EmptyQuery);
        }

        let generation = self.store.issue();
        tracing::info!(query, generation, "searching");

        let articles = self.client.search(query).await?;
        tracing::info!(count = articles.len(), generation, "search returned");

        if self.store.commit(generation, articles) {
            self.view = ViewState::new(self.view.page_size);
            self.query = query.to_string();
        }

        Ok(self.current_page())
    }

    /// The visible page for the current view state.
    #[must_use]
    pub fn current_page(&self) -> PageView {
        view::paginate(self.store.articles(), &self.view)
    }

    /// Change the sort order. Resets to page 1.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.view.sort = sort;
        self.view.page = 1;
    }

    /// Change the type filter. Resets to page 1.
    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.view.type_filter = filter;
        self.view.page = 1;
    }

    /// Change the year-range bounds. Resets to page 1.
    pub fn set_year_range(&mut self, from: Option<i32>, to: Option<i32>) {
        self.view.year_from = from;
        self.view.year_to = to;
        self.view.page = 1;
    }

    /// Jump to a page, clamped into the valid range for the current filters.
    pub fn set_page(&mut self, page: usize) {
        let total_pages = self.current_page().total_pages;
        self.view.page = page.clamp(1, total_pages.max(1));
    }

    /// Advance one page.
    pub fn next_page(&mut self) {
        self.set_page(self.view.page + 1);
    }

    /// Go back one page.
    pub fn prev_page(&mut self) {
        self.set_page(self.view.page.saturating_sub(1));
    }

    /// The article at a 1-based row of the current page, for the detail
    /// view.
    #[must_use]
    pub fn detail(&self, row: usize) -> Option<Article> {
        let index = row.checked_sub(1)?;
        self.current_page().articles.into_iter().nth(index)
    }

    /// Article types present in the current results, for the filter menu.
    #[must_use]
    pub fn article_types(&self) -> Vec<String> {
        self.store.article_types()
    }

    /// Export the full result list (store order, not the filtered view) as
    /// CSV. `None` when the store is empty.
    #[must_use]
    pub fn export_csv(&self) -> Option<String> {
        export::to_csv(self.store.articles())
    }

    /// Write the CSV export to a file. Returns `false` (and writes nothing)
    /// when the store is empty.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn export_to(&self, path: &Path) -> std::io::Result<bool> {
        export::write_csv(path, self.store.articles())
    }

    /// The query of the last successful search, for highlighting.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current view parameters.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Read-only access to the result store.
    #[must_use]
    pub fn store(&self) -> &ResultStore {
        &self.store
    }
}
