use toolbar_widgets::dropdown::{matches_query, visible_options};

// ============================================================================
// Filtering
// ============================================================================

fn identity(item: &&str) -> String {
    item.to_string()
}

#[test]
fn test_empty_query_matches_everything() {
    assert!(matches_query("Anything", ""));
    assert!(matches_query("", ""));
}

#[test]
fn test_match_ignores_case() {
    assert!(matches_query("Fit Width", "WIDTH"));
    assert!(matches_query("#FF1111", "ff"));
    assert!(!matches_query("Fit Page", "width"));
}

#[test]
fn test_visible_options_keep_order_and_index() {
    let items = ["#000000", "#ff1111", "#ffffff"];
    let visible = visible_options(&items, identity, "ff", true);

    let keys: Vec<_> = visible.iter().map(|o| o.key.as_str()).collect();
    let indices: Vec<_> = visible.iter().map(|o| o.index).collect();
    assert_eq!(keys, vec!["#ff1111", "#ffffff"]);
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn test_visible_options_filter_on_label_not_key() {
    let items = [("a", "Alpha"), ("b", "Beta")];
    let visible = visible_options(&items, |item| item.1.to_string(), "bet", true);

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].key, "b");
    assert_eq!(visible[0].label, "Beta");
}

#[test]
fn test_search_disabled_keeps_everything() {
    let items = ["one", "two", "three"];
    let visible = visible_options(&items, identity, "zzz", false);
    assert_eq!(visible.len(), 3);
}

#[test]
fn test_no_matches() {
    let items = ["one", "two"];
    assert!(visible_options(&items, identity, "zzz", true).is_empty());
    assert!(visible_options::<&str, _>(&[], identity, "", true).is_empty());
}
