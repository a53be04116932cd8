mod fluent;

pub use fluent::FluentIntl;

use crate::LocaleCode;

/// Localized placeholder texts the article view can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    NoTitle,
    NoTeaserImage,
    NoBodyCopy,
}

impl MessageKey {
    pub fn id(self) -> &'static str {
        match self {
            Self::NoTitle => "article-no-title",
            Self::NoTeaserImage => "article-no-teaser",
            Self::NoBodyCopy => "article-no-body-copy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericStyle {
    Numeric,
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    Numeric,
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatOptions {
    pub year: NumericStyle,
    pub month: MonthStyle,
    pub day: NumericStyle,
    pub weekday: Option<TextStyle>,
}

impl DateFormatOptions {
    /// Weekday, month name, numeric day and year, e.g. "Sunday, November 2, 2014".
    pub const LONG: Self = Self {
        year: NumericStyle::Numeric,
        month: MonthStyle::Long,
        day: NumericStyle::Numeric,
        weekday: Some(TextStyle::Long),
    };
}

/// Internationalization services of the host application.
pub trait Intl: Send + Sync {
    /// Locale of the current route, if it carries one.
    fn current_locale(&self) -> Option<LocaleCode>;
    /// Format an ISO 8601 date for display in `locale`.
    fn format_date(&self, locale: &LocaleCode, value: &str, options: &DateFormatOptions) -> String;
    fn format_message(&self, locale: &LocaleCode, key: MessageKey) -> String;
}
