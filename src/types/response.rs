//! Prediction response and submission outcome types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value that marks a successful prediction
pub const SUCCESS_STATUS: &str = "success";

/// The endpoint's JSON reply, tagged by its `status` field.
///
/// Fields are carried verbatim: a missing field is `None`, and present
/// values keep whatever JSON type the service sent.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResponse {
    Success {
        category: Option<Value>,
        prediction_code: Option<Value>,
    },
    Failure {
        error: Option<Value>,
    },
}

impl PredictionResponse {
    /// Classify a parsed response body.
    ///
    /// Anything other than an object whose `status` is exactly the string
    /// `"success"` is a failure, including non-object bodies.
    pub fn from_value(body: &Value) -> Self {
        let field = |name: &str| body.get(name).cloned();
        if body.get("status").and_then(Value::as_str) == Some(SUCCESS_STATUS) {
            PredictionResponse::Success {
                category: field("category"),
                prediction_code: field("prediction_code"),
            }
        } else {
            PredictionResponse::Failure {
                error: field("error"),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PredictionResponse::Success { .. })
    }
}

/// Result of one submission, as shown in the result display.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `status == "success"`
    Success {
        category: Option<Value>,
        prediction_code: Option<Value>,
    },
    /// Endpoint answered, but not with success
    Warning { error: Option<Value> },
    /// Transport or parse failure, with the error's display text
    Failed { message: String },
}

impl Outcome {
    /// Label used for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success { .. } => "success",
            Outcome::Warning { .. } => "warning",
            Outcome::Failed { .. } => "failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Process exit status for command-line use: 0 on success, 1 otherwise
    pub fn exit_status(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}

impl From<PredictionResponse> for Outcome {
    fn from(response: PredictionResponse) -> Self {
        match response {
            PredictionResponse::Success {
                category,
                prediction_code,
            } => Outcome::Success {
                category,
                prediction_code,
            },
            PredictionResponse::Failure { error } => Outcome::Warning { error },
        }
    }
}

/// Body of the service's `GET /` route
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceInfo {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub usage: String,
}
