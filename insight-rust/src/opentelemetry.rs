use crate::{InsightError, ProviderKind};
use lifehub_llm::ModelUsage;
use opentelemetry::trace::Status;
use std::future::Future;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// How a call ended, recorded on the span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsightOutcome {
    Answered,
    EmptyResponse,
    Failed,
}

impl InsightOutcome {
    fn as_str(self) -> &'static str {
        match self {
            Self::Answered => "answered",
            Self::EmptyResponse => "empty_response",
            Self::Failed => "failed",
        }
    }
}

pub struct InsightSpan {
    span: Span,
    usage: Option<ModelUsage>,
    outcome: Option<InsightOutcome>,
}

impl InsightSpan {
    pub fn new(provider: ProviderKind, model_id: &str, widget_count: usize) -> Self {
        let span = info_span!("lifehub_insight.get_insight");
        span.set_attribute("gen_ai.operation.name", "get_insight");
        span.set_attribute("gen_ai.provider.name", provider.as_str());
        span.set_attribute("gen_ai.request.model", model_id.to_string());
        span.set_attribute(
            "lifehub_insight.widget_count",
            i64::try_from(widget_count).unwrap_or(i64::MAX),
        );

        Self {
            span,
            usage: None,
            outcome: None,
        }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_usage(&mut self, usage: Option<&ModelUsage>) {
        self.usage = usage.cloned();
    }

    pub fn on_outcome(&mut self, outcome: InsightOutcome) {
        self.outcome = Some(outcome);
    }

    pub fn on_error(&mut self, error: &InsightError) {
        self.outcome = Some(InsightOutcome::Failed);
        self.span
            .set_attribute("error.type", error.kind().as_str());
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if let Some(usage) = &self.usage {
            self.span
                .set_attribute("gen_ai.usage.input_tokens", i64::from(usage.input_tokens));
            self.span
                .set_attribute("gen_ai.usage.output_tokens", i64::from(usage.output_tokens));
        }

        if let Some(outcome) = self.outcome {
            self.span
                .set_attribute("lifehub_insight.outcome", outcome.as_str());
        }
    }
}

impl Drop for InsightSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}
