use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArticleError {
    /// The API answered with zero items for the identifier and language.
    #[error("Article {article_id} not found (language: {language})")]
    NotFound {
        article_id: String,
        language: String,
    },
    /// The alternate image descriptor is present but is not a JSON array of
    /// image objects with a `secure_url`.
    #[error("Malformed alternate image descriptor: {0}")]
    MalformedAlternateImage(String),
    /// The post date is a required element and was absent.
    #[error("Invariant: article has no post date")]
    MissingPostDate,
    /// The API answered with an item other than the one requested.
    #[error("Expected article {expected}, got {returned}")]
    UnexpectedArticle { expected: String, returned: String },
    #[error("Delivery error: {0}")]
    Delivery(#[from] content_delivery::DeliveryError),
    #[error("Localization error: {0}")]
    Intl(String),
}
