//! Error types and handling for the `CityWeather` library

use thiserror::Error;

/// Fallback text used when a failure carries no message of its own
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Main error type for the `CityWeather` library
#[derive(Error, Debug)]
pub enum CityWeatherError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport failures (connect, TLS, timeout, body read)
    #[error("Network error: {message}")]
    Network { message: String },

    /// Non-2xx HTTP responses
    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body is not the expected JSON shape
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl CityWeatherError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error
    pub fn status<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Message suitable for the error view of a load state.
    ///
    /// A blank cause falls back to [`UNKNOWN_ERROR`]. Status errors always
    /// keep their code.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Status { status, message } if message.trim().is_empty() => {
                format!("HTTP error {status}")
            }
            Self::Status { .. } => self.to_string(),
            Self::Config { message }
            | Self::Network { message }
            | Self::Parse { message }
            | Self::General { message } => {
                if message.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    self.to_string()
                }
            }
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            Self::Network { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            Self::Status { status, .. } => {
                format!("The weather service answered with status {status}. Try again later.")
            }
            Self::Parse { .. } => "The weather service sent data that could not be read.".to_string(),
            Self::General { message } => message.clone(),
        }
    }
}
