//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus, statsd);
//! without a recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `predictform_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).

/// Total submissions handled.
///
/// Labels: `outcome` ("success" | "warning" | "failed").
pub const SUBMISSIONS_TOTAL: &str = "predictform_submissions_total";

/// Time from sending the payload to having a parsed response or an error.
pub const REQUEST_DURATION_SECONDS: &str = "predictform_request_duration_seconds";

/// Responses not rendered because a newer submission had started.
pub const STALE_RESPONSES_TOTAL: &str = "predictform_stale_responses_total";
