//! Adapter utilities for the `launchfeed` crate.
//!
//! The `launchfeed` crate is UI-agnostic and performs no I/O. This crate provides small,
//! framework-neutral helpers commonly needed to put it on screen:
//!
//! - A [`PageSource`] seam for the remote collection endpoint, plus [`fetch`] to run a
//!   `PageRequest` against it
//! - [`Feed`], which wires UI trigger signals to the controller and expansion tracker
//! - Row and footer projection for the rendering layer
//! - Request paths and (with `feature = "serde"`) response decoding for the SpaceX v3 API
//!
//! This crate is intentionally framework-agnostic (no HTTP client, no widget bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod feed;
mod row;
mod source;
mod wire;


pub use feed::Feed;
pub use row::{DateFormatter, Footer, LaunchRow, NO_DETAILS};
pub use source::{Fetched, PageSource, fetch};
#[cfg(feature = "serde")]
pub use wire::decode_page;
pub use wire::{DEFAULT_BASE_URL, launches_path, launches_url};
