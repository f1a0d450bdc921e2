//! predictform - wire a form to a remote prediction API
//!
//! A [`FormSubmitHandler`] intercepts a form submission, coerces numeric-looking
//! field values to numbers, POSTs the fields as JSON to a prediction endpoint
//! and renders the outcome into a result display. The form, the display and
//! the transport are injected, so the handler runs the same against a real
//! document binding, a terminal, or in-memory fakes.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use predictform::{BufferDisplay, FormFields, FormSubmitHandler, PredictionClient, SubmitEvent};
//!
//! #[tokio::main]
//! async fn main() -> predictform::Result<()> {
//!     let form = FormFields::new()
//!         .with("City", "Dallas")
//!         .with("Hour", "17");
//!     let display = Arc::new(BufferDisplay::new());
//!     let client = PredictionClient::new("http://127.0.0.1:8000/predict")?;
//!
//!     let handler = FormSubmitHandler::new(form, display.clone(), client);
//!     handler.submit(&mut SubmitEvent::new()).await;
//!
//!     println!("{}", display.content());
//!     Ok(())
//! }
//! ```

pub mod client;
#[cfg(feature = "config")]
pub mod config;
pub mod display;
pub mod error;
pub mod handler;
pub mod render;
pub mod telemetry;
pub mod traits;
pub mod types;
mod version;

// Re-export main types at crate root
pub use client::{DEFAULT_ENDPOINT, PredictionClient};
#[cfg(feature = "config")]
pub use config::Config;
pub use display::BufferDisplay;
pub use error::{PredictError, Result};
pub use handler::{FormSubmitHandler, RenderPolicy, SubmitEvent};
pub use render::RenderStyle;
pub use traits::{FormSource, PredictionTransport, ResultDisplay};
pub use version::{BuildInfo, GIT_BRANCH, GIT_SHA, PKG_VERSION, user_agent, version_string};

// Re-export all types
pub use types::{
    FieldValue, FormFields, Outcome, PredictionCategory, PredictionResponse, RequestPayload,
    SUCCESS_STATUS, ServiceInfo, TrafficInput, coerce_field_value,
};
