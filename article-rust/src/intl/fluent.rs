use super::{DateFormatOptions, Intl, MessageKey, MonthStyle, NumericStyle, TextStyle};
use crate::{ArticleError, LocaleCode};
use chrono::{DateTime, Locale};
use fluent_bundle::{concurrent::FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Messages;

/// `Intl` backed by the Fluent resources under `assets/i18n/` and chrono's
/// localized date names.
pub struct FluentIntl {
    bundles: HashMap<LocaleCode, FluentBundle<FluentResource>>,
    default_locale: LocaleCode,
    current_locale: Option<LocaleCode>,
}

impl FluentIntl {
    pub fn new(default_locale: LocaleCode) -> Result<Self, ArticleError> {
        let mut bundles = HashMap::new();

        for file in Messages::iter() {
            let Some(tag) = file.strip_suffix(".ftl") else {
                continue;
            };
            let langid: LanguageIdentifier = tag
                .parse()
                .map_err(|e| ArticleError::Intl(format!("Invalid locale file {file}: {e}")))?;
            let Some(content) = Messages::get(&file) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                ArticleError::Intl(format!("Failed to parse {file}: {errors:?}"))
            })?;
            let mut bundle = FluentBundle::new_concurrent(vec![langid]);
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| ArticleError::Intl(format!("Failed to load {file}: {errors:?}")))?;
            bundles.insert(LocaleCode::from(tag), bundle);
        }

        if !bundles.contains_key(&default_locale) {
            return Err(ArticleError::Intl(format!(
                "No messages for default locale {default_locale}"
            )));
        }

        Ok(Self {
            bundles,
            default_locale,
            current_locale: None,
        })
    }

    #[must_use]
    pub fn with_current_locale(mut self, locale: Option<LocaleCode>) -> Self {
        self.current_locale = locale;
        self
    }

    /// Locales that have a message bundle, sorted.
    pub fn available_locales(&self) -> Vec<&LocaleCode> {
        let mut locales: Vec<&LocaleCode> = self.bundles.keys().collect();
        locales.sort();
        locales
    }

    /// Exact match first, then any bundle of the same language, then the
    /// default locale.
    fn bundle_for(&self, locale: &LocaleCode) -> Option<&FluentBundle<FluentResource>> {
        self.bundles
            .get(locale)
            .or_else(|| {
                self.bundles
                    .iter()
                    .find(|(code, _)| code.language().eq_ignore_ascii_case(locale.language()))
                    .map(|(_, bundle)| bundle)
            })
            .or_else(|| self.bundles.get(&self.default_locale))
    }
}

impl Intl for FluentIntl {
    fn current_locale(&self) -> Option<LocaleCode> {
        self.current_locale.clone()
    }

    fn format_date(&self, locale: &LocaleCode, value: &str, options: &DateFormatOptions) -> String {
        let date = match DateTime::parse_from_rfc3339(value) {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!(value, error = %e, "unparseable date, rendering as is");
                return value.to_string();
            }
        };
        let pattern = date_pattern(locale.language(), options);
        date.format_localized(&pattern, chrono_locale(locale))
            .to_string()
    }

    fn format_message(&self, locale: &LocaleCode, key: MessageKey) -> String {
        let Some(bundle) = self.bundle_for(locale) else {
            return key.id().to_string();
        };
        let Some(message) = bundle.get_message(key.id()) else {
            tracing::warn!(locale = %locale, id = key.id(), "missing message");
            return key.id().to_string();
        };
        let Some(pattern) = message.value() else {
            return key.id().to_string();
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(locale = %locale, id = key.id(), ?errors, "message formatted with errors");
        }
        value.into_owned()
    }
}

fn chrono_locale(locale: &LocaleCode) -> Locale {
    match locale.language() {
        "es" => Locale::es_ES,
        "fr" => Locale::fr_FR,
        "de" => Locale::de_DE,
        _ => Locale::en_US,
    }
}

/// strftime pattern for the given options, ordered the way `language` writes
/// dates.
fn date_pattern(language: &str, options: &DateFormatOptions) -> String {
    let year = match options.year {
        NumericStyle::Numeric => "%Y",
        NumericStyle::TwoDigit => "%y",
    };
    let day = match options.day {
        NumericStyle::Numeric => "%-d",
        NumericStyle::TwoDigit => "%d",
    };
    let month = match options.month {
        MonthStyle::Numeric => "%-m",
        MonthStyle::Short => "%b",
        MonthStyle::Long => "%B",
    };
    let textual = options.month != MonthStyle::Numeric;

    let date = match (language, textual) {
        ("en", true) => format!("{month} {day}, {year}"),
        ("en", false) => format!("{month}/{day}/{year}"),
        ("es", true) => format!("{day} de {month} de {year}"),
        ("de", true) => format!("{day}. {month} {year}"),
        ("de", false) => format!("{day}.{month}.{year}"),
        (_, true) => format!("{day} {month} {year}"),
        (_, false) => format!("{day}/{month}/{year}"),
    };
    // French writes the weekday without a comma.
    let separator = if language == "fr" { " " } else { ", " };

    match options.weekday {
        Some(TextStyle::Long) => format!("%A{separator}{date}"),
        Some(TextStyle::Short) => format!("%a{separator}{date}"),
        None => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_pattern_per_language() {
        assert_eq!(
            date_pattern("en", &DateFormatOptions::LONG),
            "%A, %B %-d, %Y"
        );
        assert_eq!(
            date_pattern("es", &DateFormatOptions::LONG),
            "%A, %-d de %B de %Y"
        );
        assert_eq!(
            date_pattern("de", &DateFormatOptions::LONG),
            "%A, %-d. %B %Y"
        );
        assert_eq!(date_pattern("fr", &DateFormatOptions::LONG), "%A %-d %B %Y");
    }

    #[test]
    fn numeric_pattern_without_weekday() {
        let options = DateFormatOptions {
            year: NumericStyle::TwoDigit,
            month: MonthStyle::Numeric,
            day: NumericStyle::TwoDigit,
            weekday: None,
        };
        assert_eq!(date_pattern("en", &options), "%-m/%d/%y");
        assert_eq!(date_pattern("de", &options), "%d.%-m.%y");
        assert_eq!(date_pattern("fr", &options), "%d/%-m/%y");
    }
}
