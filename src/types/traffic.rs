//! Typed traffic prediction form
//!
//! The prediction service this crate was written against scores road
//! segments for congestion and accident risk. [`TrafficInput`] mirrors its
//! form so callers can build a submission without hand-writing field names.

use serde::{Deserialize, Serialize};

use super::field::FormFields;

/// One traffic observation, as entered in the prediction form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrafficInput {
    #[serde(rename = "Start_Lat")]
    pub start_lat: f64,
    #[serde(rename = "Start_Lng")]
    pub start_lng: f64,
    #[serde(rename = "Distance_mi")]
    pub distance_mi: f64,
    pub city: String,
    pub state: String,
    #[serde(rename = "Temperature_F")]
    pub temperature_f: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub visibility: f64,
    #[serde(rename = "Wind_Speed")]
    pub wind_speed: f64,
    #[serde(rename = "Weather_Condition")]
    pub weather_condition: String,
    #[serde(rename = "Sunrise_Sunset")]
    pub sunrise_sunset: String,
    #[serde(rename = "Traffic_Signal")]
    pub traffic_signal: i64,
    pub hour: i64,
    pub month: i64,
    pub year: i64,
}

impl TrafficInput {
    /// Field names in form order
    pub const FIELD_NAMES: [&'static str; 16] = [
        "Start_Lat",
        "Start_Lng",
        "Distance_mi",
        "City",
        "State",
        "Temperature_F",
        "Humidity",
        "Pressure",
        "Visibility",
        "Wind_Speed",
        "Weather_Condition",
        "Sunrise_Sunset",
        "Traffic_Signal",
        "Hour",
        "Month",
        "Year",
    ];

    /// Render as raw form fields, the way a browser form would submit them.
    pub fn to_form_fields(&self) -> FormFields {
        FormFields::new()
            .with("Start_Lat", self.start_lat.to_string())
            .with("Start_Lng", self.start_lng.to_string())
            .with("Distance_mi", self.distance_mi.to_string())
            .with("City", self.city.as_str())
            .with("State", self.state.as_str())
            .with("Temperature_F", self.temperature_f.to_string())
            .with("Humidity", self.humidity.to_string())
            .with("Pressure", self.pressure.to_string())
            .with("Visibility", self.visibility.to_string())
            .with("Wind_Speed", self.wind_speed.to_string())
            .with("Weather_Condition", self.weather_condition.as_str())
            .with("Sunrise_Sunset", self.sunrise_sunset.as_str())
            .with("Traffic_Signal", self.traffic_signal.to_string())
            .with("Hour", self.hour.to_string())
            .with("Month", self.month.to_string())
            .with("Year", self.year.to_string())
    }
}

/// Category the service assigns to a prediction code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionCategory {
    LowCongestion,
    ModerateCongestion,
    HighCongestion,
    AccidentProne,
    Unknown,
}

impl PredictionCategory {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => PredictionCategory::LowCongestion,
            1 => PredictionCategory::ModerateCongestion,
            2 => PredictionCategory::HighCongestion,
            3 => PredictionCategory::AccidentProne,
            _ => PredictionCategory::Unknown,
        }
    }

    /// Label as the service spells it in `category`
    pub fn label(&self) -> &'static str {
        match self {
            PredictionCategory::LowCongestion => "Low Congestion",
            PredictionCategory::ModerateCongestion => "Moderate Congestion",
            PredictionCategory::HighCongestion => "High Congestion",
            PredictionCategory::AccidentProne => "Accident Prone",
            PredictionCategory::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for PredictionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
