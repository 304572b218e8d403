use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::filter::matches_folded;
use crate::{
    Diagnostic, FeedOptions, FeedState, FetchOutcome, Item, ItemKey, LoadMode, PageRequest,
    TransportError,
};

/// A headless controller for a paginated, searchable feed.
///
/// The controller never performs I/O. It hands out [`PageRequest`]s and the caller delivers
/// each result back through [`FeedController::complete`]:
/// - `reset(query)` when the search text changes (and once on mount with an empty query)
/// - `load_next()` when the UI reports it is near the end of the list
/// - `complete(request, result)` when a fetch resolves
///
/// Only one request is live at a time. `load_next` is rejected while one is outstanding;
/// `reset` supersedes it, and the superseded result is discarded when it arrives.
#[derive(Clone, Debug)]
pub struct FeedController {
    options: FeedOptions,
    items: Vec<Item>,
    cursor: u64,
    query: String,
    exhausted: bool,
    in_flight: Option<u64>,
    next_request_id: u64,
}

impl FeedController {
    pub fn new(options: FeedOptions) -> Self {
        flog!(
            debug,
            page_size = options.page_size,
            query = options.initial_query.as_str(),
            "FeedController::new"
        );
        Self {
            items: Vec::new(),
            cursor: 1,
            query: options.initial_query.clone(),
            exhausted: false,
            in_flight: None,
            next_request_id: 1,
            options,
        }
    }

    pub fn options(&self) -> &FeedOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// A new page size applies to the next issued request; offsets of already-consumed pages
    /// are not recomputed, so callers normally follow a page size change with `reset`.
    pub fn set_options(&mut self, options: FeedOptions) {
        self.options = options;
        flog!(trace, page_size = self.options.page_size, "FeedController::set_options");
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut FeedOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&FeedController) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_diagnostic(
        &mut self,
        on_diagnostic: Option<impl Fn(&Diagnostic) + Send + Sync + 'static>,
    ) {
        self.options.on_diagnostic = on_diagnostic.map(|f| Arc::new(f) as _);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, key: ItemKey) -> Option<&Item> {
        self.items.iter().find(|item| item.key == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Next page to request (1-based).
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether more pages may be requested.
    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// Id of the live request, if any.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn state(&self) -> FeedState {
        FeedState {
            query: self.query.clone(),
            cursor: self.cursor,
            exhausted: self.exhausted,
            loading: self.is_loading(),
            len: self.items.len(),
        }
    }

    /// Starts over with a new query and issues a request for the first page.
    ///
    /// The list is cleared and exhaustion is reset before the fetch completes. Any request
    /// still in flight becomes stale.
    pub fn reset(&mut self, query: impl Into<String>) -> PageRequest {
        if self.in_flight.is_some() {
            flog!(debug, superseded = ?self.in_flight, "reset supersedes in-flight request");
        }
        self.query = query.into();
        self.items.clear();
        self.exhausted = false;
        self.cursor = 1;
        let request = self.issue(LoadMode::Replace);
        self.notify();
        request
    }

    /// Issues a request for the page at `cursor`.
    ///
    /// Returns `None`, without touching any state, while a request is in flight or once the
    /// feed is exhausted.
    pub fn load_next(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() || self.exhausted {
            flog!(
                trace,
                loading = self.in_flight.is_some(),
                exhausted = self.exhausted,
                "load_next ignored"
            );
            return None;
        }
        let request = self.issue(LoadMode::Append);
        self.notify();
        Some(request)
    }

    /// Whether `request` is the live request for the current query.
    pub fn is_live(&self, request: &PageRequest) -> bool {
        self.in_flight == Some(request.id()) && request.query() == self.query
    }

    /// Delivers the result of a fetch.
    ///
    /// - Stale requests are discarded and nothing changes.
    /// - On success the page is filtered by the current query, then replaces or extends the
    ///   list depending on how it was issued. A page shorter than the page size exhausts the
    ///   feed, and the cursor advances by one whatever the filter kept.
    /// - On failure only `loading` changes; the error is reported as a diagnostic and
    ///   returned.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<Item>, TransportError>,
    ) -> FetchOutcome {
        if !self.is_live(request) {
            flog!(
                warn,
                id = request.id(),
                query = request.query(),
                live = ?self.in_flight,
                "discarding stale page result"
            );
            self.diagnose(|| Diagnostic::StaleResult {
                request: request.clone(),
            });
            return FetchOutcome::Stale;
        }

        self.in_flight = None;
        let outcome = match result {
            Ok(raw) => self.merge(request, raw),
            Err(error) => {
                flog!(
                    warn,
                    id = request.id(),
                    page = request.page(),
                    error = %error,
                    "page fetch failed"
                );
                self.diagnose(|| Diagnostic::FetchFailed {
                    request: request.clone(),
                    error: error.clone(),
                });
                FetchOutcome::Failed(error)
            }
        };
        self.notify();
        outcome
    }

    fn issue(&mut self, mode: LoadMode) -> PageRequest {
        let id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.in_flight = Some(id);
        let request = PageRequest::new(
            id,
            self.query.clone(),
            mode,
            self.cursor,
            self.options.effective_page_size(),
        );
        flog!(
            debug,
            id,
            page = request.page(),
            offset = request.offset(),
            limit = request.limit(),
            mode = ?mode,
            "issuing page request"
        );
        request
    }

    fn merge(&mut self, request: &PageRequest, raw: Vec<Item>) -> FetchOutcome {
        let raw_len = raw.len();
        if raw_len < request.limit() {
            self.exhausted = true;
        }

        if request.mode() == LoadMode::Replace {
            self.items.clear();
        }
        let before = self.items.len();
        let needle = self.query.to_lowercase();
        self.items
            .extend(raw.into_iter().filter(|item| matches_folded(item, &needle)));
        let merged = self.items.len() - before;

        self.cursor = request.page().saturating_add(1);
        flog!(
            trace,
            raw = raw_len,
            merged,
            cursor = self.cursor,
            exhausted = self.exhausted,
            "merged page"
        );
        FetchOutcome::Applied {
            merged,
            exhausted: self.exhausted,
        }
    }

    fn diagnose(&self, make: impl FnOnce() -> Diagnostic) {
        if let Some(cb) = &self.options.on_diagnostic {
            cb(&make());
        }
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }
}

impl Default for FeedController {
    fn default() -> Self {
        Self::new(FeedOptions::default())
    }
}
