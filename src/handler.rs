//! Form submit handler.
//!
//! [`FormSubmitHandler`] turns one submission into one prediction request:
//!
//! 1. suppress the default submission behaviour
//! 2. show the pending indicator
//! 3. read the form, coerce its fields, POST the payload
//! 4. render success, warning or failure
//!
//! Nothing escapes the handler. Transport and parse errors become a rendered
//! failure message, and the returned [`Outcome`] is informational.
//!
//! # Overlapping submissions
//!
//! Each submission takes the next number from a per-handler sequence. Under
//! [`RenderPolicy::Latest`] a response is rendered only if no newer submission
//! has started since, so a slow early response cannot overwrite a later one.
//! [`RenderPolicy::LastWriteWins`] renders every response as it completes.
//! In-flight requests are never cancelled under either policy.

use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{Span, debug, info, instrument, warn};

use crate::render::RenderStyle;
use crate::telemetry;
use crate::traits::{FormSource, PredictionTransport, ResultDisplay};
use crate::types::{Outcome, PredictionResponse, RequestPayload};

/// Which completed responses reach the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPolicy {
    /// Render only the response to the most recent submission
    #[default]
    Latest,
    /// Render every response; whichever completes last stays visible
    LastWriteWins,
}

/// A form submission event.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the default navigation for this submission
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Wires a form to a prediction endpoint and a result display.
pub struct FormSubmitHandler<T> {
    form: Box<dyn FormSource>,
    display: Box<dyn ResultDisplay>,
    transport: T,
    style: RenderStyle,
    policy: RenderPolicy,
    /// Sequence number of the latest submission. Display writes happen under
    /// this lock so the staleness check and the write are one step.
    latest: Mutex<u64>,
}

impl<T: PredictionTransport> FormSubmitHandler<T> {
    /// Create a handler with HTML rendering and the `Latest` policy.
    pub fn new(
        form: impl FormSource + 'static,
        display: impl ResultDisplay + 'static,
        transport: T,
    ) -> Self {
        Self {
            form: Box::new(form),
            display: Box::new(display),
            transport,
            style: RenderStyle::default(),
            policy: RenderPolicy::default(),
            latest: Mutex::new(0),
        }
    }

    /// Set the render style
    pub fn style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the render policy for overlapping submissions
    pub fn policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Handle one submission event.
    #[instrument(name = "form.submit", skip_all, fields(seq = tracing::field::Empty))]
    pub async fn submit(&self, event: &mut SubmitEvent) -> Outcome {
        event.prevent_default();

        let seq = {
            let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
            *latest += 1;
            self.display.set_content(&self.style.pending());
            *latest
        };
        Span::current().record("seq", seq);

        let payload = RequestPayload::from_fields(&self.form.fields());
        debug!(fields = payload.len(), "sending prediction request");

        let started = Instant::now();
        let result = self.transport.predict(&payload).await;
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());

        let outcome = match result {
            Ok(body) => Outcome::from(PredictionResponse::from_value(&body)),
            Err(e) => {
                warn!(error = %e, transport = e.is_transport(), "prediction request failed");
                Outcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        match &outcome {
            Outcome::Success { category, .. } => {
                info!(category = ?category, "prediction succeeded")
            }
            Outcome::Warning { error } => warn!(error = ?error, "prediction service reported failure"),
            Outcome::Failed { .. } => {}
        }
        metrics::counter!(telemetry::SUBMISSIONS_TOTAL, "outcome" => outcome.label()).increment(1);

        self.render(seq, &outcome);
        outcome
    }

    fn render(&self, seq: u64, outcome: &Outcome) {
        let latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if self.policy == RenderPolicy::Latest && *latest != seq {
            debug!(latest = *latest, "newer submission in flight, response not rendered");
            metrics::counter!(telemetry::STALE_RESPONSES_TOTAL).increment(1);
            return;
        }
        self.display.set_content(&self.style.outcome(outcome));
    }
}
