//! Result display messages

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::PredictError;
use crate::types::Outcome;

/// How values missing from the response are shown
const MISSING: &str = "undefined";

/// Output markup for the result display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    /// Inner HTML for a document element; interpolated values are escaped
    #[default]
    Html,
    /// Plain text for terminals and logs
    Plain,
}

impl RenderStyle {
    /// Shown after the submission is intercepted and before the request
    pub fn pending(&self) -> String {
        match self {
            RenderStyle::Html => "⏳ Predicting...".to_string(),
            RenderStyle::Plain => "Predicting...".to_string(),
        }
    }

    /// Message for a finished submission
    pub fn outcome(&self, outcome: &Outcome) -> String {
        match (self, outcome) {
            (
                RenderStyle::Html,
                Outcome::Success {
                    category,
                    prediction_code,
                },
            ) => format!(
                "✅ <strong>Prediction:</strong> {}<br>\n<em>(Code: {})</em>",
                escape_html(&verbatim(category.as_ref())),
                escape_html(&verbatim(prediction_code.as_ref())),
            ),
            (RenderStyle::Html, Outcome::Warning { error }) => {
                format!("⚠️ Error: {}", escape_html(&verbatim(error.as_ref())))
            }
            (RenderStyle::Html, Outcome::Failed { message }) => {
                format!("🚫 Failed: {}", escape_html(message))
            }
            (
                RenderStyle::Plain,
                Outcome::Success {
                    category,
                    prediction_code,
                },
            ) => format!(
                "Prediction: {} (Code: {})",
                verbatim(category.as_ref()),
                verbatim(prediction_code.as_ref()),
            ),
            (RenderStyle::Plain, Outcome::Warning { error }) => {
                format!("Error: {}", verbatim(error.as_ref()))
            }
            (RenderStyle::Plain, Outcome::Failed { message }) => format!("Failed: {message}"),
        }
    }
}

impl std::str::FromStr for RenderStyle {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(RenderStyle::Html),
            "plain" => Ok(RenderStyle::Plain),
            other => Err(PredictError::InvalidInput(format!(
                "unknown render style {other:?} (expected \"html\" or \"plain\")"
            ))),
        }
    }
}

/// Show a response value the way it arrived: strings without quotes,
/// everything else as compact JSON.
fn verbatim(value: Option<&Value>) -> String {
    match value {
        None => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
