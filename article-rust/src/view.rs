use crate::{
    fetcher::ContentFetcher,
    intl::Intl,
    loading::LoadingIndicator,
    normalizer::normalize,
    opentelemetry::ArticleSpan,
    reconciler::{reconcile, RedirectTarget},
    render::RenderModel,
    routing::{NavigateOptions, Router},
    ArticleError, ArticleIdentifier, ArticleViewConfig, LocaleCode, LocaleStore, RawArticle,
};
use content_delivery::DeliveryClient;
use std::sync::Arc;
use tracing_futures::Instrument;

/// Collaborators of an article view.
pub struct ArticleViewDeps {
    pub client: Arc<dyn DeliveryClient>,
    pub loading: Arc<dyn LoadingIndicator>,
    pub router: Arc<dyn Router>,
    pub intl: Arc<dyn Intl>,
    pub config: ArticleViewConfig,
}

/// The (identifier, requested locale) pair a fetch was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub article_id: ArticleIdentifier,
    pub locale: Option<LocaleCode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded(RenderModel),
    /// Terminal. The router was sent to the corrected path and a new view is
    /// expected to mount there.
    Redirecting(RedirectTarget),
    Failed(String),
}

/// A fetch that has been issued but not yet run. Holds no borrow of the view
/// so the view can change its active key while the request is in flight.
pub struct PendingFetch {
    key: FetchKey,
    fetcher: ContentFetcher,
}

impl PendingFetch {
    pub fn key(&self) -> &FetchKey {
        &self.key
    }

    pub async fn run(self) -> FetchOutcome {
        let span = ArticleSpan::new(&self.key);
        let result = self
            .fetcher
            .fetch(&self.key.article_id, self.key.locale.as_ref())
            .instrument(span.span())
            .await;
        span.on_result(&result);

        FetchOutcome {
            key: self.key,
            result,
        }
    }
}

pub struct FetchOutcome {
    pub key: FetchKey,
    pub result: Result<RawArticle, ArticleError>,
}

/// One mounted article view: resolves the article for the active locale,
/// redirects on locale mismatch and caches variants per returned locale.
pub struct ArticleView {
    article_id: ArticleIdentifier,
    locale: Option<LocaleCode>,
    store: LocaleStore<RawArticle>,
    state: ViewState,
    /// Key of the fetch handed out by `begin_fetch` and not completed yet.
    in_flight: Option<FetchKey>,
    fetcher: ContentFetcher,
    router: Arc<dyn Router>,
    intl: Arc<dyn Intl>,
    config: Arc<ArticleViewConfig>,
}

impl ArticleView {
    /// Mount a view for `article_id`. The requested locale is the current
    /// locale of `deps.intl`.
    pub fn mount(article_id: impl Into<ArticleIdentifier>, deps: ArticleViewDeps) -> Self {
        let config = Arc::new(deps.config);
        Self {
            article_id: article_id.into(),
            locale: deps.intl.current_locale(),
            store: LocaleStore::new(),
            state: ViewState::Idle,
            in_flight: None,
            fetcher: ContentFetcher::new(deps.client, deps.loading, config.clone()),
            router: deps.router,
            intl: deps.intl,
            config,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The render model, only once the active locale is loaded.
    pub fn render_model(&self) -> Option<&RenderModel> {
        match &self.state {
            ViewState::Loaded(model) => Some(model),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn store(&self) -> &LocaleStore<RawArticle> {
        &self.store
    }

    pub fn active_key(&self) -> FetchKey {
        FetchKey {
            article_id: self.article_id.clone(),
            locale: self.locale.clone(),
        }
    }

    pub fn effective_locale(&self) -> &LocaleCode {
        self.config.effective_locale(self.locale.as_ref())
    }

    /// Switch the requested locale. Shows the cached variant right away when
    /// there is one, otherwise the view waits for the next fetch.
    pub fn set_locale(&mut self, locale: Option<LocaleCode>) -> Result<(), ArticleError> {
        if self.is_redirecting() || self.locale == locale {
            return Ok(());
        }
        self.locale = locale;
        self.in_flight = None;
        self.activate()
    }

    /// Point the view at another article. Cached variants of the previous
    /// article are dropped.
    pub fn set_article_id(
        &mut self,
        article_id: impl Into<ArticleIdentifier>,
    ) -> Result<(), ArticleError> {
        let article_id = article_id.into();
        if self.is_redirecting() || self.article_id == article_id {
            return Ok(());
        }
        self.article_id = article_id;
        self.in_flight = None;
        self.store.clear();
        self.activate()
    }

    /// Issue a fetch for the active key. `None` when the active locale is
    /// already cached (the view is then `Loaded`), a fetch for the active key
    /// is still outstanding, or the view is redirecting.
    ///
    /// Dropping the returned `PendingFetch` without completing it keeps the
    /// key outstanding until the locale or article changes.
    pub fn begin_fetch(&mut self) -> Result<Option<PendingFetch>, ArticleError> {
        if self.is_redirecting() {
            return Ok(None);
        }
        if self.store.contains(self.effective_locale()) {
            self.show_cached()?;
            return Ok(None);
        }

        let key = self.active_key();
        if self.in_flight.as_ref() == Some(&key) {
            tracing::debug!(key = ?key, "article fetch already in flight");
            return Ok(None);
        }

        self.state = ViewState::Loading;
        self.in_flight = Some(key.clone());
        Ok(Some(PendingFetch {
            key,
            fetcher: self.fetcher.clone(),
        }))
    }

    /// Merge a finished fetch into the view. Outcomes for a key other than
    /// the active one are discarded.
    pub fn complete(&mut self, outcome: FetchOutcome) -> Result<&ViewState, ArticleError> {
        let active = self.active_key();
        if self.in_flight.as_ref() == Some(&outcome.key) {
            self.in_flight = None;
        }
        if outcome.key != active || self.is_redirecting() {
            tracing::debug!(
                issued = ?outcome.key,
                active = ?active,
                "discarding stale article fetch"
            );
            return Ok(&self.state);
        }

        let raw = match outcome.result {
            Ok(raw) => raw,
            Err(error) => return Err(self.fail(error)),
        };
        if raw.system.id != outcome.key.article_id.as_str() {
            tracing::warn!(
                issued = %outcome.key.article_id,
                returned = %raw.system.id,
                "delivery client answered with another article"
            );
            return Err(self.fail(ArticleError::UnexpectedArticle {
                expected: outcome.key.article_id.to_string(),
                returned: raw.system.id,
            }));
        }

        let returned = raw.language();
        let current_path = self.router.current_path();
        if let Some(target) = reconcile(
            self.locale.as_ref(),
            &returned,
            &current_path,
            &self.config,
        ) {
            tracing::info!(
                article_id = %self.article_id,
                from = %current_path,
                to = %target.path,
                "article returned in another locale, redirecting"
            );
            self.router.navigate(&target.path, NavigateOptions::replace());
            self.store.insert(returned, raw);
            self.state = ViewState::Redirecting(target);
            return Ok(&self.state);
        }

        match self.render(&raw, &returned) {
            Ok(model) => {
                tracing::debug!(article_id = %self.article_id, locale = %returned, "article cached");
                self.store.insert(returned, raw);
                self.state = ViewState::Loaded(model);
                Ok(&self.state)
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    /// Fetch (unless cached) and merge in one step.
    pub async fn refresh(&mut self) -> Result<&ViewState, ArticleError> {
        match self.begin_fetch()? {
            Some(pending) => {
                let outcome = pending.run().await;
                self.complete(outcome)
            }
            None => Ok(&self.state),
        }
    }

    fn is_redirecting(&self) -> bool {
        matches!(self.state, ViewState::Redirecting(_))
    }

    fn activate(&mut self) -> Result<(), ArticleError> {
        if self.store.contains(self.effective_locale()) {
            self.show_cached()
        } else {
            self.state = ViewState::Loading;
            Ok(())
        }
    }

    fn show_cached(&mut self) -> Result<(), ArticleError> {
        let locale = self.effective_locale().clone();
        let Some(raw) = self.store.get(&locale) else {
            self.state = ViewState::Loading;
            return Ok(());
        };
        match self.render(raw, &locale) {
            Ok(model) => {
                self.state = ViewState::Loaded(model);
                Ok(())
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    fn render(&self, raw: &RawArticle, locale: &LocaleCode) -> Result<RenderModel, ArticleError> {
        let normalized = normalize(raw, locale, self.intl.as_ref())?;
        Ok(RenderModel::assemble(raw, normalized))
    }

    fn fail(&mut self, error: ArticleError) -> ArticleError {
        tracing::warn!(article_id = %self.article_id, error = %error, "article view failed");
        self.state = ViewState::Failed(error.to_string());
        error
    }
}
