//! Text views for each load state

use crate::models::WeatherRecord;
use crate::state::LoadState;

/// Render the list, progress or error view for `state`.
///
/// List rows are numbered from 1; the number is what `show` takes.
#[must_use]
pub fn render_state(state: &LoadState) -> String {
    match state {
        LoadState::Loading => "Loading city weather...".to_string(),
        LoadState::Success(records) => render_list(records),
        LoadState::Error(message) => render_error(message),
    }
}

#[must_use]
pub fn render_list(records: &[WeatherRecord]) -> String {
    if records.is_empty() {
        return "No cities available.".to_string();
    }

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            format!(
                "{:>3}. {:<28} {}",
                index + 1,
                record.display_name(),
                record.format_weather_line()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full detail view of one record
#[must_use]
pub fn render_detail(record: &WeatherRecord) -> String {
    let title = record.display_name();
    [
        title.clone(),
        "=".repeat(title.chars().count()),
        format!("Condition:     {}", record.condition),
        format!("Temperature:   {}", record.temperature),
        format!("Wind:          {}", record.wind_speed),
        format!("Humidity:      {}", record.humidity),
        String::new(),
        record.description.clone(),
        String::new(),
        format!("Attractions:   {}", record.attractions_summary()),
        format!("Best time:     {}", record.best_time_to_visit),
        format!("Airport:       {}", record.airport_code),
        format!("Image:         {}", record.image_url),
    ]
    .join("\n")
}

#[must_use]
pub fn render_error(message: &str) -> String {
    format!("Error: {message}\nRun the command again to retry.")
}
