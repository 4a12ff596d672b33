//! Load state published to observers

use serde::{Deserialize, Serialize};

use crate::models::WeatherRecord;
use crate::CityWeatherError;

/// Outcome of the most recent fetch as seen by the presentation layer.
///
/// A value is never mutated in place; each transition replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum LoadState {
    /// A fetch is in flight
    #[default]
    Loading,
    /// Records in response order
    Success(Vec<WeatherRecord>),
    /// Display message of the failure
    Error(String),
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn records(&self) -> Option<&[WeatherRecord]> {
        match self {
            Self::Success(records) => Some(records),
            _ => None,
        }
    }

    /// Record at `position` for detail navigation
    #[must_use]
    pub fn record(&self, position: usize) -> Option<&WeatherRecord> {
        self.records().and_then(|records| records.get(position))
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl From<CityWeatherError> for LoadState {
    fn from(error: CityWeatherError) -> Self {
        Self::Error(error.display_message())
    }
}

impl From<crate::Result<Vec<WeatherRecord>>> for LoadState {
    fn from(result: crate::Result<Vec<WeatherRecord>>) -> Self {
        match result {
            Ok(records) => Self::Success(records),
            Err(error) => error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UNKNOWN_ERROR;
    use crate::models::weather_record::fixtures::record;

    #[test]
    fn test_default_is_loading() {
        assert!(LoadState::default().is_loading());
        assert_eq!(LoadState::default().records(), None);
    }

    #[test]
    fn test_success_keeps_order() {
        let state = LoadState::from(Ok(vec![record("Paris"), record("Lyon"), record("Nice")]));
        let names: Vec<&str> = state
            .records()
            .unwrap()
            .iter()
            .map(|r| r.city_name.as_str())
            .collect();
        assert_eq!(names, ["Paris", "Lyon", "Nice"]);
        assert_eq!(state.record(1).unwrap().city_name, "Lyon");
        assert!(state.record(3).is_none());
    }

    #[test]
    fn test_error_conversion() {
        let state = LoadState::from(Err(CityWeatherError::status(500, "Internal Server Error")));
        assert_eq!(
            state.error_message(),
            Some("HTTP error 500: Internal Server Error")
        );
        assert!(state.record(0).is_none());
    }

    #[test]
    fn test_blank_error_becomes_unknown() {
        let state = LoadState::from(CityWeatherError::network(""));
        assert_eq!(state, LoadState::Error(UNKNOWN_ERROR.to_string()));
    }

    #[test]
    fn test_serialized_tag() {
        let json = serde_json::to_value(LoadState::Error("boom".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"state": "error", "data": "boom"}));
    }
}
