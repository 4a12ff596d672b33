//! `CityWeather` - city weather records with an observable load state
//!
//! This library fetches a JSON list of city weather and travel records and
//! publishes the outcome of each fetch as a [`LoadState`] that presentation
//! code can observe.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod publisher;
pub mod render;
pub mod state;
pub mod telemetry;

// Re-export core types for public API
pub use config::CityWeatherConfig;
pub use error::CityWeatherError;
pub use fetcher::{HttpWeatherFetcher, WeatherFetcher};
pub use models::WeatherRecord;
pub use publisher::StatePublisher;
pub use state::LoadState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CityWeatherError>;
