use crate::{view::FetchKey, ArticleError, RawArticle};
use opentelemetry::trace::Status;
use tracing::{info_span, Span};
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct ArticleSpan {
    span: Span,
}

impl ArticleSpan {
    pub fn new(key: &FetchKey) -> Self {
        let span = info_span!("article_view.fetch");
        span.set_attribute("article.id", key.article_id.to_string());
        if let Some(locale) = &key.locale {
            span.set_attribute("article.locale.requested", locale.to_string());
        }

        Self { span }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn on_result(&self, result: &Result<RawArticle, ArticleError>) {
        match result {
            Ok(raw) => {
                self.span
                    .set_attribute("article.locale.returned", raw.system.language.clone());
            }
            Err(error) => {
                self.span
                    .set_attribute("exception.message", error.to_string());
                self.span.set_status(Status::error(error.to_string()));
            }
        }
    }
}
