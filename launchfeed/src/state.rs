/// A lightweight, serializable snapshot of the controller's scalar state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedState {
    pub query: alloc::string::String,
    /// Next page to request (1-based).
    pub cursor: u64,
    pub exhausted: bool,
    pub loading: bool,
    /// Number of accumulated items.
    pub len: usize,
}
