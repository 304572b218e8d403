use alloc::string::String;

use crate::TransportError;

/// How a fetched page is merged into the accumulated item list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadMode {
    /// Issued by `reset`: the filtered page replaces the list.
    Replace,
    /// Issued by `load_next`: the filtered page is appended.
    Append,
}

/// A page fetch issued by [`crate::FeedController`].
///
/// The caller performs the fetch (`offset`/`limit`) and hands the request back together with
/// its result via `FeedController::complete`. The request captures the query it was issued
/// for, which is how stale results are recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    id: u64,
    query: String,
    mode: LoadMode,
    page: u64,
    limit: usize,
}

impl PageRequest {
    pub(crate) fn new(id: u64, query: String, mode: LoadMode, page: u64, limit: usize) -> Self {
        Self {
            id,
            query,
            mode,
            page,
            limit,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }

    /// 1-based page index.
    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Server-side offset: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit as u64)
    }
}

/// What `FeedController::complete` did with a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was filtered and merged.
    Applied {
        /// Items that passed the filter and were merged.
        merged: usize,
        /// Whether this page exhausted the feed.
        exhausted: bool,
    },
    /// The request was superseded; the result was discarded.
    Stale,
    /// The fetch failed; feed state is unchanged apart from `loading`.
    Failed(TransportError),
}

impl FetchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}
