use alloc::string::String;
use alloc::vec::Vec;

use launchfeed::{
    ExpansionTracker, FeedController, FeedOptions, FetchOutcome, Item, ItemKey, PageRequest,
    TransportError,
};

use crate::{DateFormatter, Fetched, Footer, LaunchRow, PageSource, fetch};

/// A framework-neutral feed that pairs a `launchfeed::FeedController` with an
/// `ExpansionTracker` and maps UI signals onto them.
///
/// This type does not hold any UI objects or perform I/O. Adapters drive it by calling:
/// - `mount` once, then `on_search_change` whenever the search text changes
/// - `on_scroll_near_end` when the list is scrolled close to its end
/// - `on_toggle_expand` when a row's details button is pressed
/// - `on_fetch_complete` when a fetch for a returned `PageRequest` resolves
#[derive(Clone, Debug, Default)]
pub struct Feed {
    controller: FeedController,
    expansion: ExpansionTracker<ItemKey>,
}

impl Feed {
    pub fn new(options: FeedOptions) -> Self {
        Self::from_controller(FeedController::new(options))
    }

    pub fn from_controller(controller: FeedController) -> Self {
        Self {
            controller,
            expansion: ExpansionTracker::new(),
        }
    }

    pub fn controller(&self) -> &FeedController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FeedController {
        &mut self.controller
    }

    pub fn expansion(&self) -> &ExpansionTracker<ItemKey> {
        &self.expansion
    }

    pub fn into_parts(self) -> (FeedController, ExpansionTracker<ItemKey>) {
        (self.controller, self.expansion)
    }

    /// Initial load with `FeedOptions::initial_query`, whatever was searched since.
    pub fn mount(&mut self) -> PageRequest {
        let query = self.controller.options().initial_query.clone();
        self.controller.reset(query)
    }

    pub fn on_search_change(&mut self, text: impl Into<String>) -> PageRequest {
        self.controller.reset(text)
    }

    /// Returns `None` while a page is loading or once the feed is exhausted.
    pub fn on_scroll_near_end(&mut self) -> Option<PageRequest> {
        self.controller.load_next()
    }

    /// Returns whether the item is now expanded.
    pub fn on_toggle_expand(&mut self, key: ItemKey) -> bool {
        self.expansion.toggle(key)
    }

    pub fn on_fetch_complete(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<Item>, TransportError>,
    ) -> FetchOutcome {
        self.controller.complete(request, result)
    }

    pub fn on_fetched(&mut self, fetched: Fetched) -> FetchOutcome {
        self.controller.complete(&fetched.request, fetched.result)
    }

    /// Fetches `request` from `source` and applies the result.
    ///
    /// This holds the feed for the duration of the fetch. Adapters that must accept a new
    /// search while a page is outstanding should use [`fetch`] and `on_fetched` instead.
    pub async fn run<S: PageSource + ?Sized>(
        &mut self,
        source: &S,
        request: PageRequest,
    ) -> FetchOutcome {
        let fetched = fetch(source, request).await;
        self.on_fetched(fetched)
    }

    pub fn is_expanded(&self, key: ItemKey) -> bool {
        self.expansion.is_expanded(&key)
    }

    /// Rows for the current items, in list order.
    pub fn rows<'a, D: DateFormatter>(
        &'a self,
        dates: &'a D,
    ) -> impl Iterator<Item = LaunchRow<'a>> + 'a {
        self.controller
            .items()
            .iter()
            .map(move |item| LaunchRow::new(item, self.expansion.is_expanded(&item.key), dates))
    }

    pub fn footer(&self) -> Footer {
        let c = &self.controller;
        if c.is_loading() && c.is_empty() {
            Footer::Spinner
        } else if c.has_more() {
            Footer::Loader
        } else if c.is_empty() {
            Footer::NoMatches
        } else {
            Footer::EndOfList
        }
    }
}
