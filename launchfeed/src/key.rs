#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

/// Bound for keys tracked by [`crate::ExpansionTracker`].
///
/// With `feature = "std"` keys are hashed; without it they are ordered.
#[cfg(feature = "std")]
pub trait FeedKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> FeedKey for K {}

#[cfg(not(feature = "std"))]
pub trait FeedKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> FeedKey for K {}
