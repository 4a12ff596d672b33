//! Data models for `CityWeather`
//!
//! - WeatherRecord: one city's weather and travel data as served by the source

pub mod weather_record;

pub use weather_record::WeatherRecord;
