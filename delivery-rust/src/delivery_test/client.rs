use std::{collections::VecDeque, sync::Mutex};

use crate::{
    delivery_client::DeliveryClient,
    errors::{DeliveryError, DeliveryResult},
    ContentItem, ItemsQuery, ItemsResponse,
};

/// Result for a mocked `items` call.
/// It can either be a full response or an error to return.
pub enum MockItemsResult {
    Response(ItemsResponse),
    Error(DeliveryError),
}

impl MockItemsResult {
    /// Construct a result that yields the provided response.
    pub fn response(response: ItemsResponse) -> Self {
        Self::Response(response)
    }

    /// Construct a result that yields a response listing the given items.
    pub fn items(items: Vec<ContentItem>) -> Self {
        Self::Response(ItemsResponse {
            items,
            ..ItemsResponse::default()
        })
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: DeliveryError) -> Self {
        Self::Error(error)
    }
}

impl From<ItemsResponse> for MockItemsResult {
    fn from(response: ItemsResponse) -> Self {
        Self::response(response)
    }
}

impl From<ContentItem> for MockItemsResult {
    fn from(item: ContentItem) -> Self {
        Self::items(vec![item])
    }
}

impl From<DeliveryResult<ItemsResponse>> for MockItemsResult {
    fn from(result: DeliveryResult<ItemsResponse>) -> Self {
        match result {
            Ok(response) => Self::Response(response),
            Err(error) => Self::Error(error),
        }
    }
}

#[derive(Default)]
struct MockDeliveryClientState {
    mocked_items_results: VecDeque<MockItemsResult>,
    tracked_items_queries: Vec<ItemsQuery>,
}

impl MockDeliveryClientState {
    fn reset(&mut self) {
        self.tracked_items_queries.clear();
    }

    fn restore(&mut self) {
        self.mocked_items_results.clear();
        self.reset();
    }
}

/// A mock delivery client for testing that tracks queries and yields
/// predefined results.
pub struct MockDeliveryClient {
    provider: &'static str,
    project_id: String,
    state: Mutex<MockDeliveryClientState>,
}

impl Default for MockDeliveryClient {
    fn default() -> Self {
        Self {
            provider: "mock",
            project_id: "mock-project".to_string(),
            state: Mutex::new(MockDeliveryClientState::default()),
        }
    }
}

impl MockDeliveryClient {
    /// Construct a new mock delivery client instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the project identifier returned by the mock.
    pub fn set_project_id<S: Into<String>>(&mut self, project_id: S) {
        self.project_id = project_id.into();
    }

    /// Enqueue one or more mocked items results.
    pub fn enqueue_items_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockItemsResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_items_results.extend(results);
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked items result.
    pub fn enqueue_items<R>(&self, result: R) -> &Self
    where
        R: Into<MockItemsResult>,
    {
        self.enqueue_items_results(std::iter::once(result.into()))
    }

    /// Retrieve the tracked queries accumulated so far.
    pub fn tracked_items_queries(&self) -> Vec<ItemsQuery> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_items_queries.clone()
    }

    /// Reset tracked queries without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both tracked queries and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }
}

#[async_trait::async_trait]
impl DeliveryClient for MockDeliveryClient {
    fn provider(&self) -> &'static str {
        self.provider
    }

    fn project_id(&self) -> String {
        self.project_id.clone()
    }

    async fn items(&self, query: ItemsQuery) -> DeliveryResult<ItemsResponse> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_items_queries.push(query);

        let result = state.mocked_items_results.pop_front().ok_or_else(|| {
            DeliveryError::Invariant(self.provider, "no mocked items results available".into())
        })?;

        match result {
            MockItemsResult::Response(response) => Ok(response),
            MockItemsResult::Error(error) => Err(error),
        }
    }
}
