//! Integration tests for theme lookup and participant-derived titles

use theme_catalog::{builtin_themes, ColorField, Participants, ThemeCatalog, ThemeKey};

#[test]
fn test_every_key_resolves_to_its_own_theme() {
    let catalog = ThemeCatalog::global();
    for &key in catalog.list_keys() {
        let theme = catalog.lookup(key.as_str());
        assert_eq!(theme.key, key);
        assert!(!theme.display_name.is_empty());
        assert!(!theme.motifs.is_empty(), "{} has no motifs", key.as_str());
        for field in ColorField::ALL {
            assert!(theme.color(field).starts_with('#'), "{} {:?}", key.as_str(), field);
        }
    }
}

#[test]
fn test_unknown_keys_fall_back_to_other() {
    let catalog = ThemeCatalog::global();
    for key in ["unknown_xyz", "", "   ", "weddings", "baby-shower"] {
        assert_eq!(catalog.lookup(key).display_name, "Other", "{:?}", key);
    }
    assert_eq!(catalog.lookup_opt(None).key, ThemeKey::Other);
    assert_eq!(catalog.lookup_opt(Some(" Birthday ")).key, ThemeKey::Birthday);
}

#[test]
fn test_titles_from_stored_participants() {
    let catalog = ThemeCatalog::global();
    let cases = [
        (
            r#"{"eventType": "wedding", "bride": "Anna", "groom": "Ben"}"#,
            "The Wedding of Anna & Ben",
        ),
        (
            r#"{"eventType": "engagement", "partnerOne": "Sam", "partnerTwo": "Alex"}"#,
            "Sam & Alex Are Engaged",
        ),
        (
            r#"{"eventType": "birthday", "celebrant": "Mia", "age": 30}"#,
            "Mia's 30th Birthday",
        ),
        (
            r#"{"eventType": "baby_shower", "parents": "Jo & Lee"}"#,
            "Baby Shower for Jo & Lee",
        ),
        (
            r#"{"eventType": "corporate", "company": "Acme Corp"}"#,
            "Acme Corp",
        ),
    ];

    for (json, expected) in cases {
        let participants: Participants = serde_json::from_str(json).unwrap();
        let event_type = serde_json::from_str::<serde_json::Value>(json).unwrap()["eventType"]
            .as_str()
            .unwrap()
            .to_string();
        let theme = catalog.lookup(&event_type);
        assert_eq!(theme.title_for(&participants), expected);
    }
}

#[test]
fn test_unrecognized_participants_have_no_title() {
    let participants: Participants =
        serde_json::from_str(r#"{"eventType": "graduation", "graduate": "Kim"}"#).unwrap();
    assert_eq!(participants, Participants::Other);
    for &key in ThemeKey::ALL {
        assert_eq!(ThemeCatalog::global().get(key).title_for(&participants), "");
    }
}

#[test]
fn test_custom_catalog_keeps_fallback() {
    let weddings_only = builtin_themes()
        .into_iter()
        .filter(|theme| theme.key == ThemeKey::Wedding)
        .map(|mut theme| {
            theme.primary_color = "#000080".to_string();
            theme
        });
    let catalog = ThemeCatalog::from_definitions(weddings_only);

    assert_eq!(catalog.lookup("wedding").primary_color, "#000080");
    assert_eq!(catalog.lookup("birthday").key, ThemeKey::Other);
    assert_eq!(catalog.other().display_name, "Other");
}

#[test]
fn test_global_catalog_shared_across_threads() {
    let expected = ThemeCatalog::global() as *const ThemeCatalog;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| ThemeCatalog::global() as *const ThemeCatalog as usize))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected as usize);
        }
    });
}
