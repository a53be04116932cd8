use article_view::{
    intl::{DateFormatOptions, FluentIntl, Intl, MessageKey},
    ArticleError, LocaleCode,
};

fn intl() -> FluentIntl {
    FluentIntl::new(LocaleCode::from("en-US")).expect("bundled messages load")
}

#[test]
fn loads_bundled_locales() {
    let intl = intl();
    assert_eq!(
        intl.available_locales(),
        vec![&LocaleCode::from("en-US"), &LocaleCode::from("es-ES")]
    );
    assert_eq!(intl.current_locale(), None);

    let intl = intl.with_current_locale(Some(LocaleCode::from("es-ES")));
    assert_eq!(intl.current_locale(), Some(LocaleCode::from("es-ES")));
}

#[test]
fn rejects_default_locale_without_messages() {
    let result = FluentIntl::new(LocaleCode::from("ja-JP"));
    assert!(matches!(result, Err(ArticleError::Intl(_))));
}

#[test]
fn formats_placeholder_messages_per_locale() {
    let intl = intl();
    assert_eq!(
        intl.format_message(&LocaleCode::from("en-US"), MessageKey::NoTitle),
        "(Article has no title)"
    );
    assert_eq!(
        intl.format_message(&LocaleCode::from("en-US"), MessageKey::NoBodyCopy),
        "(Article has no body copy)"
    );
    assert_eq!(
        intl.format_message(&LocaleCode::from("es-ES"), MessageKey::NoTeaserImage),
        "(El artículo no tiene imagen)"
    );
}

#[test]
fn falls_back_by_language_then_default() {
    let intl = intl();
    assert_eq!(
        intl.format_message(&LocaleCode::from("es-MX"), MessageKey::NoTitle),
        "(El artículo no tiene título)"
    );
    assert_eq!(
        intl.format_message(&LocaleCode::from("de-DE"), MessageKey::NoTitle),
        "(Article has no title)"
    );
}

#[test]
fn formats_long_dates() {
    let intl = intl();
    assert_eq!(
        intl.format_date(
            &LocaleCode::from("en-US"),
            "2014-11-02T00:00:00Z",
            &DateFormatOptions::LONG
        ),
        "Sunday, November 2, 2014"
    );
}

#[test]
fn long_dates_follow_the_locale_word_order() {
    let intl = intl();
    let format = |locale: &str| {
        intl.format_date(
            &LocaleCode::from(locale),
            "2014-11-02T00:00:00Z",
            &DateFormatOptions::LONG,
        )
    };

    assert_eq!(format("de-DE"), "Sonntag, 2. November 2014");
    assert_eq!(format("fr-FR"), "dimanche 2 novembre 2014");
}

#[test]
fn unparseable_dates_render_verbatim() {
    let intl = intl();
    assert_eq!(
        intl.format_date(&LocaleCode::from("en-US"), "yesterday", &DateFormatOptions::LONG),
        "yesterday"
    );
}
