mod article;
mod config;
mod errors;
mod fetcher;
pub mod intl;
mod loading;
mod locale;
mod locale_store;
pub mod normalizer;
mod opentelemetry;
mod reconciler;
mod render;
mod routing;
mod view;

pub use article::{ArticleMetadata, RawArticle};
pub use config::{ArticleViewConfig, ARTICLE_ELEMENTS};
pub use errors::ArticleError;
pub use fetcher::ContentFetcher;
pub use loading::{LoadingGuard, LoadingIndicator, SpinnerCounters, SpinnerService};
pub use locale::{ArticleIdentifier, LocaleCode};
pub use locale_store::LocaleStore;
pub use reconciler::{change_language_link, reconcile, RedirectTarget};
pub use render::{ArticleEmbeds, BodyCopy, ImageSource, RenderModel, VideoEmbed};
pub use routing::{MemoryRouter, NavigateOptions, Router};
pub use view::{ArticleView, ArticleViewDeps, FetchKey, FetchOutcome, PendingFetch, ViewState};
