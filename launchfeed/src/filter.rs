use crate::Item;

/// Case-insensitive substring match on an item's title or description.
///
/// An absent description matches as the empty string, so an empty query matches every item.
pub fn matches(item: &Item, query: &str) -> bool {
    matches_folded(item, &query.to_lowercase())
}

/// Same as [`matches`], with the query already case-folded.
pub(crate) fn matches_folded(item: &Item, folded_query: &str) -> bool {
    if folded_query.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(folded_query)
        || item.description().to_lowercase().contains(folded_query)
}
