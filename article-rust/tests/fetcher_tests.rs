mod common;

use article_view::{
    ArticleError, ArticleIdentifier, ArticleViewConfig, ContentFetcher, LocaleCode,
    SpinnerService, ARTICLE_ELEMENTS,
};
use common::{article_item, ARTICLE_ID, SPINNER};
use content_delivery::{
    delivery_test::{MockDeliveryClient, MockItemsResult},
    DeliveryClient, DeliveryError, DeliveryResult, ItemsQuery, ItemsResponse, QueryFilter,
};
use std::{sync::Arc, time::Duration};

struct Setup {
    client: Arc<MockDeliveryClient>,
    spinner: Arc<SpinnerService>,
    fetcher: ContentFetcher,
}

fn setup() -> Setup {
    let client = Arc::new(MockDeliveryClient::new());
    let spinner = Arc::new(SpinnerService::new());
    let fetcher = ContentFetcher::new(
        client.clone(),
        spinner.clone(),
        Arc::new(ArticleViewConfig::default()),
    );
    Setup {
        client,
        spinner,
        fetcher,
    }
}

#[tokio::test]
async fn fetch_sends_field_limited_query() {
    let Setup {
        client, fetcher, ..
    } = setup();
    client.enqueue_items(article_item(ARTICLE_ID, "es-ES"));

    let es = LocaleCode::from("es-ES");
    let raw = fetcher
        .fetch(&ArticleIdentifier::from(ARTICLE_ID), Some(&es))
        .await
        .expect("fetch should succeed");
    assert_eq!(raw.language(), es);

    let queries = client.tracked_items_queries();
    assert_eq!(queries.len(), 1);
    let query = &queries[0];
    assert_eq!(query.type_codename(), Some("article"));
    assert_eq!(
        query.filters(),
        [QueryFilter::Equals {
            property: "system.id".to_string(),
            value: ARTICLE_ID.to_string(),
        }]
    );
    assert_eq!(query.elements().len(), ARTICLE_ELEMENTS.len());
    assert!(query.elements().iter().any(|e| e == "metadata__twitter_image"));
    assert_eq!(query.language(), Some("es-ES"));
}

#[tokio::test]
async fn fetch_without_locale_omits_language_parameter() {
    let Setup {
        client, fetcher, ..
    } = setup();
    client.enqueue_items(article_item(ARTICLE_ID, "en-US"));

    fetcher
        .fetch(&ArticleIdentifier::from(ARTICLE_ID), None)
        .await
        .expect("fetch should succeed");

    assert_eq!(client.tracked_items_queries()[0].language(), None);
}

#[tokio::test]
async fn spinner_is_shown_and_hidden_once_on_success() {
    let Setup {
        client,
        spinner,
        fetcher,
    } = setup();
    client.enqueue_items(article_item(ARTICLE_ID, "en-US"));

    fetcher
        .fetch(&ArticleIdentifier::from(ARTICLE_ID), None)
        .await
        .expect("fetch should succeed");

    assert_eq!(spinner.show_count(SPINNER), 1);
    assert_eq!(spinner.hide_count(SPINNER), 1);
    assert!(!spinner.is_shown(SPINNER));
}

#[tokio::test]
async fn empty_result_is_not_found_and_releases_spinner() {
    let Setup {
        client,
        spinner,
        fetcher,
    } = setup();
    client.enqueue_items(MockItemsResult::items(vec![]));

    let err = fetcher
        .fetch(&ArticleIdentifier::from("missing"), Some(&LocaleCode::from("es-ES")))
        .await
        .expect_err("no items should fail");

    match err {
        ArticleError::NotFound {
            article_id,
            language,
        } => {
            assert_eq!(article_id, "missing");
            assert_eq!(language, "es-ES");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
    assert_eq!(spinner.show_count(SPINNER), 1);
    assert_eq!(spinner.hide_count(SPINNER), 1);
    assert!(!spinner.is_shown(SPINNER));
}

#[tokio::test]
async fn transport_failure_propagates_and_releases_spinner() {
    let Setup {
        client,
        spinner,
        fetcher,
    } = setup();
    client.enqueue_items(MockItemsResult::error(DeliveryError::InvalidInput(
        "connection reset".to_string(),
    )));

    let err = fetcher
        .fetch(&ArticleIdentifier::from(ARTICLE_ID), None)
        .await
        .expect_err("delivery error should propagate");

    assert!(matches!(
        err,
        ArticleError::Delivery(DeliveryError::InvalidInput(ref msg)) if msg == "connection reset"
    ));
    assert_eq!(spinner.show_count(SPINNER), 1);
    assert_eq!(spinner.hide_count(SPINNER), 1);
}

struct HangingClient;

#[async_trait::async_trait]
impl DeliveryClient for HangingClient {
    fn provider(&self) -> &'static str {
        "hanging"
    }

    fn project_id(&self) -> String {
        "hanging-project".to_string()
    }

    async fn items(&self, _query: ItemsQuery) -> DeliveryResult<ItemsResponse> {
        futures::future::pending().await
    }
}

#[tokio::test]
async fn dropping_an_in_flight_fetch_releases_spinner() {
    let spinner = Arc::new(SpinnerService::new());
    let fetcher = ContentFetcher::new(
        Arc::new(HangingClient),
        spinner.clone(),
        Arc::new(ArticleViewConfig::default()),
    );

    let id = ArticleIdentifier::from(ARTICLE_ID);
    let timed_out = tokio::time::timeout(Duration::from_millis(20), fetcher.fetch(&id, None)).await;

    assert!(timed_out.is_err());
    assert_eq!(spinner.show_count(SPINNER), 1);
    assert_eq!(spinner.hide_count(SPINNER), 1);
    assert!(!spinner.is_shown(SPINNER));
}
