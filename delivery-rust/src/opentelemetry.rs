use crate::{DeliveryResult, ItemsQuery, ItemsResponse};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct DeliverySpan {
    span: Span,
    start_time: Instant,
    items_count: Option<usize>,
    ended: bool,
}

impl DeliverySpan {
    pub fn new(provider: &str, project_id: &str, query: &ItemsQuery) -> Self {
        let span = info_span!("content_delivery.items");
        span.set_attribute("kontent.provider", provider.to_string());
        span.set_attribute("kontent.project_id", project_id.to_string());
        span.set_attribute("kontent.query", query.describe());
        if let Some(content_type) = query.type_codename() {
            span.set_attribute("kontent.content_type", content_type.to_string());
        }
        if let Some(language) = query.language() {
            span.set_attribute("kontent.language", language.to_string());
        }

        Self {
            span,
            start_time: Instant::now(),
            items_count: None,
            ended: false,
        }
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span.clone()).await
    }

    pub fn on_response(&mut self, response: &ItemsResponse) {
        self.items_count = Some(response.items.len());
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        if let Some(items_count) = self.items_count {
            self.span.set_attribute(
                "kontent.items.count",
                i64::try_from(items_count).unwrap_or(i64::MAX),
            );
        }
        self.span.set_attribute(
            "kontent.duration_ms",
            i64::try_from(self.start_time.elapsed().as_millis()).unwrap_or(i64::MAX),
        );
    }
}

impl Drop for DeliverySpan {
    fn drop(&mut self) {
        self.on_end();
    }
}

pub async fn trace_items<F, Fut>(
    provider: &str,
    project_id: &str,
    query: ItemsQuery,
    f: F,
) -> DeliveryResult<ItemsResponse>
where
    F: FnOnce(ItemsQuery) -> Fut,
    Fut: std::future::Future<Output = DeliveryResult<ItemsResponse>>,
{
    let mut span = DeliverySpan::new(provider, project_id, &query);
    let result = span.instrument_future(f(query)).await;

    match &result {
        Ok(response) => span.on_response(response),
        Err(error) => span.on_error(error),
    }

    span.on_end();
    result
}
