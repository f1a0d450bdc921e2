//! Seams between the submit handler and its collaborators
//!
//! The handler never reaches for a global document or a global HTTP client.
//! It receives a [`FormSource`] to read fields from, a [`ResultDisplay`] to
//! write into, and a [`PredictionTransport`] to send the payload through.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;
use crate::types::{FormFields, RequestPayload};

/// A form whose named fields can be read at submission time.
pub trait FormSource: Send + Sync {
    /// Current name -> value view of the form
    fn fields(&self) -> FormFields;
}

/// An element whose content is replaced with status and results.
pub trait ResultDisplay: Send + Sync {
    /// Replace the whole content of the element
    fn set_content(&self, content: &str);
}

/// Sends a payload to the prediction endpoint.
#[async_trait]
pub trait PredictionTransport: Send + Sync {
    /// POST the payload and return the parsed response body.
    ///
    /// Any HTTP status with a JSON body is `Ok`. Connection failures and
    /// bodies that are not JSON are `Err`.
    async fn predict(&self, payload: &RequestPayload) -> Result<Value>;
}

impl FormSource for FormFields {
    fn fields(&self) -> FormFields {
        self.clone()
    }
}

impl<T: FormSource + ?Sized> FormSource for std::sync::Arc<T> {
    fn fields(&self) -> FormFields {
        (**self).fields()
    }
}

impl<T: ResultDisplay + ?Sized> ResultDisplay for std::sync::Arc<T> {
    fn set_content(&self, content: &str) {
        (**self).set_content(content)
    }
}

#[async_trait]
impl<T: PredictionTransport + ?Sized> PredictionTransport for std::sync::Arc<T> {
    async fn predict(&self, payload: &RequestPayload) -> Result<Value> {
        (**self).predict(payload).await
    }
}
