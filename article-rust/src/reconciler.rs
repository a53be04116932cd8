use crate::{ArticleViewConfig, LocaleCode};

/// Where the view must move when the API answered in another locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub path: String,
    pub locale: LocaleCode,
}

/// Compare the requested locale (or the default one) with the locale the API
/// returned. A mismatch yields the current path rewritten to the returned
/// locale.
pub fn reconcile(
    requested: Option<&LocaleCode>,
    returned: &LocaleCode,
    current_path: &str,
    config: &ArticleViewConfig,
) -> Option<RedirectTarget> {
    let effective = config.effective_locale(requested);
    if effective == returned {
        return None;
    }

    Some(RedirectTarget {
        path: change_language_link(current_path, Some(effective), returned, config),
        locale: returned.clone(),
    })
}

/// Rewrite the locale segment of `path` to `locale`.
///
/// The first segment counts as a locale segment when it matches `current`
/// or one of the supported locales, ignoring case. Otherwise `locale` is
/// inserted in front. Query string and fragment are kept.
///
/// ```
/// use article_view::{change_language_link, ArticleViewConfig, LocaleCode};
///
/// let config = ArticleViewConfig::default();
/// let es = LocaleCode::from("es-ES");
/// assert_eq!(
///     change_language_link("/en-us/articles/123?tab=1", None, &es, &config),
///     "/es-ES/articles/123?tab=1"
/// );
/// assert_eq!(
///     change_language_link("/articles/123", None, &es, &config),
///     "/es-ES/articles/123"
/// );
/// ```
pub fn change_language_link(
    path: &str,
    current: Option<&LocaleCode>,
    locale: &LocaleCode,
    config: &ArticleViewConfig,
) -> String {
    let (path_part, suffix) = match path.find(['?', '#']) {
        Some(index) => path.split_at(index),
        None => (path, ""),
    };

    let mut segments: Vec<&str> = path_part.trim_start_matches('/').split('/').collect();
    let is_locale_segment = |segment: &str| {
        current.is_some_and(|current| current.eq_ignore_case(segment))
            || config.is_supported(segment)
    };

    match segments.first().copied() {
        Some(first) if first.is_empty() || is_locale_segment(first) => {
            segments[0] = locale.as_str();
        }
        _ => segments.insert(0, locale.as_str()),
    }

    format!("/{}{suffix}", segments.join("/"))
}
