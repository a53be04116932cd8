use super::options::{KontentDeliveryOptions, DEFAULT_DELIVERY_URL, DEFAULT_PREVIEW_URL};
use crate::{
    client_utils, opentelemetry::trace_items, DeliveryClient, DeliveryError, DeliveryResult,
    ItemsQuery, ItemsResponse,
};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client,
};

const PROVIDER: &str = "kontent";
const WAIT_FOR_NEW_CONTENT_HEADER: &str = "x-kc-wait-for-loading-new-content";

pub struct KontentDeliveryClient {
    project_id: String,
    base_url: String,
    client: Client,
    headers: HeaderMap,
}

impl KontentDeliveryClient {
    pub fn new(options: KontentDeliveryOptions) -> DeliveryResult<Self> {
        if options.project_id.trim().is_empty() {
            return Err(DeliveryError::InvalidInput(
                "project_id must not be empty".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let api_key = options
            .preview_api_key
            .as_ref()
            .or(options.secure_api_key.as_ref());
        if let Some(api_key) = api_key {
            let mut auth_header_value = HeaderValue::try_from(format!("Bearer {api_key}"))
                .map_err(|e| DeliveryError::InvalidInput(format!("Invalid API key: {e}")))?;
            auth_header_value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, auth_header_value);
        }
        if options.wait_for_loading_new_content {
            headers.insert(
                WAIT_FOR_NEW_CONTENT_HEADER,
                HeaderValue::from_static("true"),
            );
        }

        let base_url = options.base_url.unwrap_or_else(|| {
            if options.preview_api_key.is_some() {
                DEFAULT_PREVIEW_URL.to_string()
            } else {
                DEFAULT_DELIVERY_URL.to_string()
            }
        });

        Ok(Self {
            project_id: options.project_id,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            headers,
        })
    }

    fn items_url(&self) -> String {
        format!("{}/{}/items", self.base_url, self.project_id)
    }
}

#[async_trait::async_trait]
impl DeliveryClient for KontentDeliveryClient {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn project_id(&self) -> String {
        self.project_id.clone()
    }

    async fn items(&self, query: ItemsQuery) -> DeliveryResult<ItemsResponse> {
        trace_items(PROVIDER, &self.project_id, query, |query| async move {
            tracing::debug!(query = %query.describe(), "requesting items");
            client_utils::get_json::<ItemsResponse>(
                &self.client,
                &self.items_url(),
                &query.query_pairs(),
                self.headers.clone(),
            )
            .await
        })
        .await
    }
}
