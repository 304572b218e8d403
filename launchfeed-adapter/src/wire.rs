use alloc::format;
use alloc::string::String;
#[cfg(feature = "serde")]
use alloc::string::ToString;
#[cfg(feature = "serde")]
use alloc::vec::Vec;

use launchfeed::PageRequest;
#[cfg(feature = "serde")]
use launchfeed::{Item, TransportError};

/// Base URL of the public SpaceX API.
pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com";

/// Path and query for one page of launches, e.g. `/v3/launches?limit=10&offset=20`.
pub fn launches_path(offset: u64, limit: usize) -> String {
    format!("/v3/launches?limit={limit}&offset={offset}")
}

/// Full URL for `request` under `base_url`.
pub fn launches_url(base_url: &str, request: &PageRequest) -> String {
    format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        launches_path(request.offset(), request.limit())
    )
}

/// Decodes a response body into a page of items.
///
/// The body must be a JSON array. Individual fields that are missing or have the wrong shape
/// fall back to defaults; a body that is not an array of objects is a
/// [`TransportError::Body`].
#[cfg(feature = "serde")]
pub fn decode_page(body: &[u8]) -> Result<Vec<Item>, TransportError> {
    serde_json::from_slice(body).map_err(|err| TransportError::body(err.to_string()))
}
