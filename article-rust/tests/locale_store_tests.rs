use article_view::{LocaleCode, LocaleStore};

#[test]
fn insert_replaces_one_locale_and_keeps_others() {
    let mut store = LocaleStore::new();
    assert!(store.is_empty());

    assert_eq!(store.insert(LocaleCode::from("en-US"), "en v1"), None);
    assert_eq!(store.insert(LocaleCode::from("es-ES"), "es v1"), None);
    assert_eq!(store.insert(LocaleCode::from("en-US"), "en v2"), Some("en v1"));

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(&LocaleCode::from("en-US")), Some(&"en v2"));
    assert_eq!(store.get(&LocaleCode::from("es-ES")), Some(&"es v1"));
    assert_eq!(
        store.locales(),
        vec![&LocaleCode::from("en-US"), &LocaleCode::from("es-ES")]
    );
}

#[test]
fn keys_are_case_sensitive() {
    let mut store = LocaleStore::new();
    store.insert(LocaleCode::from("en-US"), 1);
    assert!(store.contains(&LocaleCode::from("en-US")));
    assert!(!store.contains(&LocaleCode::from("en-us")));

    store.clear();
    assert!(store.is_empty());
}
