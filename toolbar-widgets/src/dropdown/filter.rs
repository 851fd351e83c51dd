//! Option filtering for search-enabled dropdowns.

use super::item::DropdownItem;

/// One option that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleOption {
    /// Index of the item in the supplied list.
    pub index: usize,
    pub key: String,
    /// Localized display text.
    pub label: String,
}

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_query(label: &str, query: &str) -> bool {
    query.is_empty() || label.to_lowercase().contains(&query.to_lowercase())
}

/// The options to render, in supplied order.
///
/// `label` resolves an item to its localized text. With search disabled every
/// item is kept.
pub fn visible_options<T, F>(
    items: &[T],
    label: F,
    query: &str,
    search_enabled: bool,
) -> Vec<VisibleOption>
where
    T: DropdownItem,
    F: Fn(&T) -> String,
{
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let text = label(item);
            (!search_enabled || matches_query(&text, query)).then(|| VisibleOption {
                index,
                key: item.key(),
                label: text,
            })
        })
        .collect()
}

/// First item whose localized text equals `text`, ignoring case.
pub fn find_exact<'a, T, F>(items: &'a [T], label: F, text: &str) -> Option<(usize, &'a T)>
where
    T: DropdownItem,
    F: Fn(&T) -> String,
{
    let wanted = text.to_lowercase();
    items
        .iter()
        .enumerate()
        .find(|(_, item)| label(item).to_lowercase() == wanted)
}
