use crate::LocaleCode;

/// Element codenames requested for an article. Everything else in the
/// content type is left out of the response.
pub const ARTICLE_ELEMENTS: [&str; 20] = [
    "title",
    "teaser_image",
    "post_date",
    "cloudinary_image",
    "body_copy",
    "video_host",
    "video_id",
    "tweet_link",
    "theme",
    "display_options",
    "metadata__meta_title",
    "metadata__meta_description",
    "metadata__og_title",
    "metadata__og_description",
    "metadata__og_image",
    "metadata__twitter_title",
    "metadata__twitter_site",
    "metadata__twitter_creator",
    "metadata__twitter_description",
    "metadata__twitter_image",
];

/// Settings shared by every article view.
/// # Default Values
/// - `default_locale`: `en-US`
/// - `supported_locales`: `en-US`, `es-ES`
/// - `spinner_token`: `apiSpinner`
/// - `content_type`: `article`
#[derive(Debug, Clone)]
pub struct ArticleViewConfig {
    /// Locale assumed when the route does not carry one.
    pub default_locale: LocaleCode,
    /// Locales that can appear as the first path segment of a route.
    pub supported_locales: Vec<LocaleCode>,
    /// Token passed to the loading indicator around each fetch.
    pub spinner_token: String,
    /// Codename of the article content type.
    pub content_type: String,
}

impl Default for ArticleViewConfig {
    fn default() -> Self {
        Self {
            default_locale: LocaleCode::from("en-US"),
            supported_locales: vec![LocaleCode::from("en-US"), LocaleCode::from("es-ES")],
            spinner_token: "apiSpinner".to_string(),
            content_type: "article".to_string(),
        }
    }
}

impl ArticleViewConfig {
    /// The locale a request resolves to when none is given.
    pub fn effective_locale<'a>(&'a self, requested: Option<&'a LocaleCode>) -> &'a LocaleCode {
        requested.unwrap_or(&self.default_locale)
    }

    pub fn is_supported(&self, segment: &str) -> bool {
        self.supported_locales
            .iter()
            .any(|locale| locale.eq_ignore_case(segment))
    }
}
