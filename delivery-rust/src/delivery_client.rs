use crate::{DeliveryResult, ItemsQuery, ItemsResponse};

/// Read access to published (or preview) content of one project.
#[async_trait::async_trait]
pub trait DeliveryClient: Send + Sync {
    fn provider(&self) -> &'static str;
    fn project_id(&self) -> String;
    /// Run an items query. An empty `items` list is a valid response, not an
    /// error.
    async fn items(&self, query: ItemsQuery) -> DeliveryResult<ItemsResponse>;
}
