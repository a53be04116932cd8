#![allow(dead_code)]

use article_view::{
    intl::{DateFormatOptions, Intl, MessageKey},
    ArticleView, ArticleViewConfig, ArticleViewDeps, LocaleCode, MemoryRouter, RawArticle,
    SpinnerService,
};
use content_delivery::{
    delivery_test::MockDeliveryClient, Asset, ContentItem, ContentItemSystem, Element,
};
use std::{collections::HashMap, sync::Arc};

pub const ARTICLE_ID: &str = "f4b3fc05-e98d-4a05-b8d0-6e4f1bb1fd58";
pub const SPINNER: &str = "apiSpinner";

/// Formats dates and messages as `<locale>:<input>` so assertions can see
/// which locale and which raw value were used.
pub struct StubIntl {
    pub current: Option<LocaleCode>,
}

impl Intl for StubIntl {
    fn current_locale(&self) -> Option<LocaleCode> {
        self.current.clone()
    }

    fn format_date(&self, locale: &LocaleCode, value: &str, _options: &DateFormatOptions) -> String {
        format!("{locale}:{value}")
    }

    fn format_message(&self, locale: &LocaleCode, key: MessageKey) -> String {
        format!("{locale}:{}", key.id())
    }
}

pub fn article_item(id: &str, language: &str) -> ContentItem {
    let mut elements = HashMap::new();
    elements.insert(
        "title".to_string(),
        Element::text(format!("Coffee processing techniques ({language})")),
    );
    elements.insert(
        "post_date".to_string(),
        Element::date_time(Some("2014-11-02T00:00:00Z")),
    );
    elements.insert(
        "teaser_image".to_string(),
        Element::assets(&[Asset {
            name: "coffee.jpg".to_string(),
            url: "https://assets.example.com/coffee.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            ..Asset::default()
        }]),
    );
    elements.insert("cloudinary_image".to_string(), Element::custom(None));
    elements.insert(
        "body_copy".to_string(),
        Element::rich_text("<p>Before you enjoy your coffee...</p>"),
    );

    ContentItem {
        system: ContentItemSystem {
            id: id.to_string(),
            name: "Coffee processing techniques".to_string(),
            codename: "coffee_processing_techniques".to_string(),
            language: language.to_string(),
            content_type: "article".to_string(),
            last_modified: None,
        },
        elements,
    }
}

pub fn raw_article(language: &str) -> RawArticle {
    RawArticle::from_item(article_item(ARTICLE_ID, language)).expect("valid fixture")
}

pub struct Harness {
    pub client: Arc<MockDeliveryClient>,
    pub spinner: Arc<SpinnerService>,
    pub router: Arc<MemoryRouter>,
}

impl Harness {
    pub fn new(path: &str) -> Self {
        Self {
            client: Arc::new(MockDeliveryClient::new()),
            spinner: Arc::new(SpinnerService::new()),
            router: Arc::new(MemoryRouter::new(path)),
        }
    }

    pub fn mount(&self, article_id: &str, locale: Option<&str>) -> ArticleView {
        ArticleView::mount(
            article_id,
            ArticleViewDeps {
                client: self.client.clone(),
                loading: self.spinner.clone(),
                router: self.router.clone(),
                intl: Arc::new(StubIntl {
                    current: locale.map(LocaleCode::from),
                }),
                config: ArticleViewConfig::default(),
            },
        )
    }
}
