//! A headless controller for paginated, searchable item feeds.
//!
//! For adapter-level utilities (page sources, row projection, wire decoding), see the
//! `launchfeed-adapter` crate.
//!
//! This crate owns the state behind an "infinite scroll" list backed by a remote, read-only
//! collection: the pagination cursor, the accumulated items, the search query, and the
//! loading/exhaustion flags. Searching is done client-side over each fetched page.
//!
//! It performs no I/O. A UI layer is expected to provide:
//! - search text changes (`reset`)
//! - a "near the end of the list" signal (`load_next`)
//! - fetch results for the requests it was handed (`complete`)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod expansion;
mod filter;
mod key;
#[cfg(feature = "serde")]
mod lenient;
mod options;
mod request;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use controller::FeedController;
pub use error::{Diagnostic, TransportError};
pub use expansion::ExpansionTracker;
pub use filter::matches;
pub use key::FeedKey;
pub use options::{DEFAULT_PAGE_SIZE, DiagnosticCallback, FeedOptions, OnChangeCallback};
pub use request::{FetchOutcome, LoadMode, PageRequest};
pub use state::FeedState;
pub use types::{Item, ItemKey, Links, Outcome, Status, classify};
