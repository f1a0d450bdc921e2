//! Public types for the predictform API.

mod field;
mod payload;
mod response;
mod traffic;

pub use field::{FieldValue, FormFields, coerce_field_value};
pub use payload::RequestPayload;
pub use response::{Outcome, PredictionResponse, SUCCESS_STATUS, ServiceInfo};
pub use traffic::{PredictionCategory, TrafficInput};
