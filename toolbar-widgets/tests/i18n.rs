use std::io::Write;

use toolbar_widgets::i18n::{resolve_label, Translations, Translator};
use toolbar_widgets::WidgetError;

// ============================================================================
// Catalog loading
// ============================================================================

#[test]
fn test_from_json_flattens_nested_keys() {
    let t = Translations::from_json(
        r#"{
            "message": { "noResults": "No results" },
            "option": { "zoom": { "fitPage": "Fit Page", "level": 2 } }
        }"#,
    )
    .unwrap();

    assert_eq!(t.len(), 3);
    assert_eq!(t.translate("message.noResults", None), "No results");
    assert_eq!(t.translate("option.zoom.fitPage", None), "Fit Page");
    assert_eq!(t.translate("option.zoom.level", None), "2");
}

#[test]
fn test_from_json_rejects_non_object_root() {
    assert!(matches!(
        Translations::from_json("[1, 2]"),
        Err(WidgetError::CatalogShape)
    ));
    assert!(matches!(
        Translations::from_json("{ not json"),
        Err(WidgetError::Catalog(_))
    ));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("toolbar-widgets-i18n-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(br#"{"action": {"close": "Close"}}"#).unwrap();
    drop(file);

    let t = Translations::load(&path).unwrap();
    assert_eq!(t.translate("action.close", None), "Close");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_missing_file() {
    let err = Translations::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, WidgetError::CatalogIo { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_missing_key_falls_back() {
    let t = Translations::new();
    assert_eq!(t.translate("a.b", Some("b")), "b");
    assert_eq!(t.translate("a.b", None), "a.b");
}

#[test]
fn test_pending_catalog_uses_fallback() {
    let mut t = Translations::pending().with("greeting", "Hello");
    assert!(!t.is_ready());
    assert_eq!(t.translate("greeting", Some("greeting")), "greeting");

    t.set_ready(true);
    assert_eq!(t.translate("greeting", None), "Hello");
}

#[test]
fn test_extend_overrides_and_marks_ready() {
    let mut t = Translations::pending().with("a", "old");
    t.extend(Translations::new().with("a", "new").with("b", "bee"));
    assert!(t.is_ready());
    assert_eq!(t.translate("a", None), "new");
    assert_eq!(t.translate("b", None), "bee");
}

#[test]
fn test_closure_translator() {
    let upper = |key: &str, _: Option<&str>| key.to_uppercase();
    assert_eq!(upper.translate("zoom", None), "ZOOM");
    assert!(upper.is_ready());
}

// ============================================================================
// Label resolution
// ============================================================================

#[test]
fn test_resolve_with_prefix() {
    let t = Translations::new().with("option.zoom.fitPage", "Fit Page");
    assert_eq!(resolve_label(&t, Some("option.zoom"), "fitPage", None), "Fit Page");
    assert_eq!(resolve_label(&t, Some("option.zoom"), "125%", None), "125%");
}

#[test]
fn test_resolve_without_prefix_uses_token() {
    let t = Translations::new().with("Arial", "Arial (sans)");
    assert_eq!(resolve_label(&t, None, "Arial", None), "Arial (sans)");
    assert_eq!(resolve_label(&t, Some(""), "Helvetica", None), "Helvetica");
}

#[test]
fn test_resolve_with_override() {
    let t = Translations::new().with("fonts.arial", "Arial!");
    let to_key = |token: &str| format!("fonts.{}", token.to_lowercase());
    assert_eq!(resolve_label(&t, Some("ignored"), "Arial", Some(&to_key)), "Arial!");
    // No fallback to the token when overridden.
    assert_eq!(
        resolve_label(&t, None, "Courier", Some(&to_key)),
        "fonts.courier"
    );
}
