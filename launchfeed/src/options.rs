use alloc::string::String;
use alloc::sync::Arc;

use crate::{Diagnostic, FeedController};

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A callback fired after the controller's state changes.
pub type OnChangeCallback = Arc<dyn Fn(&FeedController) + Send + Sync>;

/// A callback receiving non-fatal diagnostics (failed fetches, discarded stale results).
pub type DiagnosticCallback = Arc<dyn Fn(&Diagnostic) + Send + Sync>;

/// Configuration for [`crate::FeedController`].
///
/// Cheap to clone: callbacks are stored in `Arc`s so adapters can tweak a field and call
/// `FeedController::set_options` without reallocating closures.
pub struct FeedOptions {
    /// Items requested per page. A page with fewer raw items than this exhausts the feed.
    pub page_size: usize,

    /// Query the controller starts with, before the first `reset`.
    pub initial_query: String,

    /// Optional callback fired whenever the controller's state changes.
    pub on_change: Option<OnChangeCallback>,

    /// Optional sink for diagnostics. Failures are never raised as faults; this is where they
    /// surface.
    pub on_diagnostic: Option<DiagnosticCallback>,
}

impl FeedOptions {
    pub fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_query: String::new(),
            on_change: None,
            on_diagnostic: None,
        }
    }

    /// Page size in effect (never zero).
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&FeedController) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_diagnostic(
        mut self,
        on_diagnostic: Option<impl Fn(&Diagnostic) + Send + Sync + 'static>,
    ) -> Self {
        self.on_diagnostic = on_diagnostic.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FeedOptions {
    fn clone(&self) -> Self {
        Self {
            page_size: self.page_size,
            initial_query: self.initial_query.clone(),
            on_change: self.on_change.clone(),
            on_diagnostic: self.on_diagnostic.clone(),
        }
    }
}

impl core::fmt::Debug for FeedOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FeedOptions")
            .field("page_size", &self.page_size)
            .field("initial_query", &self.initial_query)
            .field("on_change", &self.on_change.is_some())
            .field("on_diagnostic", &self.on_diagnostic.is_some())
            .finish()
    }
}
