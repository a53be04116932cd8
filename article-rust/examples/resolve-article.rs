use article_view::{
    intl::FluentIntl, ArticleView, ArticleViewConfig, ArticleViewDeps, LocaleCode, MemoryRouter,
    SpinnerService, ViewState,
};
use content_delivery::kontent::{KontentDeliveryClient, KontentDeliveryOptions};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let project_id = std::env::var("KONTENT_PROJECT_ID")
        .expect("KONTENT_PROJECT_ID environment variable must be set");
    let article_id =
        std::env::var("ARTICLE_ID").expect("ARTICLE_ID environment variable must be set");
    let locale = std::env::var("ARTICLE_LOCALE").ok().map(LocaleCode::from);

    let client = KontentDeliveryClient::new(KontentDeliveryOptions {
        project_id,
        preview_api_key: std::env::var("KONTENT_PREVIEW_API_KEY").ok(),
        ..Default::default()
    })
    .unwrap();

    let config = ArticleViewConfig::default();
    let path = format!(
        "/{}/articles/{article_id}",
        config.effective_locale(locale.as_ref())
    );
    let intl = FluentIntl::new(config.default_locale.clone())
        .unwrap()
        .with_current_locale(locale);
    let router = Arc::new(MemoryRouter::new(path));

    let mut view = ArticleView::mount(
        article_id,
        ArticleViewDeps {
            client: Arc::new(client),
            loading: Arc::new(SpinnerService::new()),
            router: router.clone(),
            intl: Arc::new(intl),
            config,
        },
    );

    match view.refresh().await.unwrap() {
        ViewState::Loaded(model) => println!("{model:#?}"),
        ViewState::Redirecting(target) => println!("redirected to {}", target.path),
        state => println!("{state:?}"),
    }
    println!("history: {:?}", router.history());
}
