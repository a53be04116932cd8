use crate::{
    config::ARTICLE_ELEMENTS,
    loading::{LoadingGuard, LoadingIndicator},
    ArticleError, ArticleIdentifier, ArticleViewConfig, LocaleCode, RawArticle,
};
use content_delivery::{DeliveryClient, ItemsQuery};
use std::sync::Arc;

/// Fetches one article variant, showing the loading indicator for the
/// duration of the request.
#[derive(Clone)]
pub struct ContentFetcher {
    client: Arc<dyn DeliveryClient>,
    loading: Arc<dyn LoadingIndicator>,
    config: Arc<ArticleViewConfig>,
}

impl ContentFetcher {
    pub fn new(
        client: Arc<dyn DeliveryClient>,
        loading: Arc<dyn LoadingIndicator>,
        config: Arc<ArticleViewConfig>,
    ) -> Self {
        Self {
            client,
            loading,
            config,
        }
    }

    /// Query for one article by id, limited to the article elements.
    pub fn query(&self, article_id: &ArticleIdentifier, locale: Option<&LocaleCode>) -> ItemsQuery {
        let query = ItemsQuery::new()
            .content_type(self.config.content_type.as_str())
            .equals_filter("system.id", article_id.as_str())
            .elements_parameter(ARTICLE_ELEMENTS);

        match locale {
            Some(locale) => query.language_parameter(locale.as_str()),
            None => query,
        }
    }

    /// The API may answer in a fallback language; the returned article's
    /// `system.language` says which.
    pub async fn fetch(
        &self,
        article_id: &ArticleIdentifier,
        locale: Option<&LocaleCode>,
    ) -> Result<RawArticle, ArticleError> {
        let query = self.query(article_id, locale);

        let guard = LoadingGuard::acquire(self.loading.clone(), &self.config.spinner_token);
        tracing::debug!(article_id = %article_id, locale = ?locale, "fetching article");
        let result = self.client.items(query).await;
        drop(guard);

        let item = result?.items.into_iter().next().ok_or_else(|| {
            tracing::info!(article_id = %article_id, locale = ?locale, "article not found");
            ArticleError::NotFound {
                article_id: article_id.to_string(),
                language: locale.map_or_else(|| "default".to_string(), ToString::to_string),
            }
        })?;

        Ok(RawArticle::from_item(item)?)
    }
}
