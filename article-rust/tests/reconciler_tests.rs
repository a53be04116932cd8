use article_view::{change_language_link, reconcile, ArticleViewConfig, LocaleCode, RedirectTarget};

#[test]
fn mismatch_rewrites_locale_segment() {
    let config = ArticleViewConfig::default();
    let requested = LocaleCode::from("fr-FR");

    let target = reconcile(
        Some(&requested),
        &LocaleCode::from("en-US"),
        "/fr-FR/articles/123",
        &config,
    );

    assert_eq!(
        target,
        Some(RedirectTarget {
            path: "/en-US/articles/123".to_string(),
            locale: LocaleCode::from("en-US"),
        })
    );
}

#[test]
fn matching_locale_needs_no_redirect() {
    let config = ArticleViewConfig::default();
    let es = LocaleCode::from("es-ES");
    assert_eq!(reconcile(Some(&es), &es, "/es-ES/articles/123", &config), None);
}

#[test]
fn unset_locale_matches_default_locale() {
    let config = ArticleViewConfig::default();
    assert_eq!(
        reconcile(None, &LocaleCode::from("en-US"), "/articles/123", &config),
        None
    );
}

#[test]
fn unset_locale_redirects_when_api_answers_in_other_locale() {
    let config = ArticleViewConfig::default();
    let target = reconcile(None, &LocaleCode::from("es-ES"), "/articles/123", &config)
        .expect("es-ES differs from the default locale");
    assert_eq!(target.path, "/es-ES/articles/123");
}

#[test]
fn change_language_link_keeps_rest_of_path() {
    let config = ArticleViewConfig::default();
    let en = LocaleCode::from("en-US");
    let es = LocaleCode::from("es-ES");

    let cases = [
        ("/es-ES/articles/123", "/en-US/articles/123"),
        ("/ES-es/articles/123/", "/en-US/articles/123/"),
        ("/es-ES/articles/123?preview=true#top", "/en-US/articles/123?preview=true#top"),
        ("/articles/123", "/en-US/articles/123"),
        ("/", "/en-US"),
        ("", "/en-US"),
    ];
    for (path, expected) in cases {
        assert_eq!(
            change_language_link(path, Some(&es), &en, &config),
            expected,
            "path {path}"
        );
    }
}

#[test]
fn change_language_link_recognizes_unsupported_current_locale() {
    let config = ArticleViewConfig::default();
    let fr = LocaleCode::from("fr-FR");
    assert_eq!(
        change_language_link("/fr-FR/articles/123", Some(&fr), &LocaleCode::from("es-ES"), &config),
        "/es-ES/articles/123"
    );
    assert_eq!(
        change_language_link("/fr-FR/articles/123", None, &LocaleCode::from("es-ES"), &config),
        "/es-ES/fr-FR/articles/123"
    );
}
