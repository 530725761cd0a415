use serde::Deserialize;

use crate::engine::error::PlayError;
use crate::model::stat::Weather;

#[derive(Deserialize)]
struct WeatherReport {
    code: String,
    #[serde(default)]
    message: Option<String>,
}

/// Reads the weather code out of a report document. Every other element is
/// ignored.
pub fn parse_weather(xml: &str) -> Result<Weather, PlayError> {
    let report: WeatherReport =
        quick_xml::de::from_str(xml).map_err(|e| PlayError::Parse(e.to_string()))?;

    if let Some(message) = &report.message {
        log::debug!("Weather report: {}", message.trim());
    }

    Ok(Weather::from_code(report.code.trim()))
}
