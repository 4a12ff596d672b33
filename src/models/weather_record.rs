//! City weather record and display methods

use serde::{Deserialize, Serialize};

/// One city's weather and travel information as served by the data source.
///
/// Every key is required and unknown keys are rejected, so a record that
/// drifts from this shape fails the whole fetch.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeatherRecord {
    /// City name
    pub city_name: String,
    /// Region or state the city belongs to
    pub state: String,
    /// Temperature as displayed, e.g. "22°C"
    pub temperature: String,
    /// Wind speed as displayed, e.g. "12 km/h"
    pub wind_speed: String,
    /// Relative humidity as displayed, e.g. "60%"
    pub humidity: String,
    /// Short condition text, e.g. "Sunny"
    pub condition: String,
    /// Free-text description of the city
    pub description: String,
    /// Places worth visiting
    pub attractions: Vec<String>,
    /// Best season or months to visit
    pub best_time_to_visit: String,
    /// IATA code of the nearest airport
    pub airport_code: String,
    /// Image shown on the detail screen
    pub image_url: String,
    /// Card background color string, e.g. "#FF6F61"
    pub background_color: String,
}

impl WeatherRecord {
    /// "City, State", or just the city when the state is blank
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.state.trim().is_empty() {
            self.city_name.clone()
        } else {
            format!("{}, {}", self.city_name, self.state)
        }
    }

    /// One-line weather summary for list rows
    #[must_use]
    pub fn format_weather_line(&self) -> String {
        format!(
            "{} {} (wind {}, humidity {})",
            self.temperature, self.condition, self.wind_speed, self.humidity
        )
    }

    /// Comma separated attractions, or "none listed"
    #[must_use]
    pub fn attractions_summary(&self) -> String {
        if self.attractions.is_empty() {
            "none listed".to_string()
        } else {
            self.attractions.join(", ")
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::WeatherRecord;

    pub fn record(city: &str) -> WeatherRecord {
        WeatherRecord {
            city_name: city.to_string(),
            state: "Île-de-France".to_string(),
            temperature: "22°C".to_string(),
            wind_speed: "12 km/h".to_string(),
            humidity: "60%".to_string(),
            condition: "Sunny".to_string(),
            description: "Capital city on the Seine.".to_string(),
            attractions: vec!["Eiffel Tower".to_string(), "Louvre".to_string()],
            best_time_to_visit: "April to June".to_string(),
            airport_code: "CDG".to_string(),
            image_url: "https://example.com/paris.jpg".to_string(),
            background_color: "#FF6F61".to_string(),
        }
    }
}
