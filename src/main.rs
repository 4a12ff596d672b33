use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use cityweather::render::{render_detail, render_state};
use cityweather::{
    CityWeatherConfig, CityWeatherError, HttpWeatherFetcher, LoadState, StatePublisher, telemetry,
};

/// City weather and travel notes.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version)]
struct Cli {
    /// Config file (defaults to <config dir>/cityweather/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the load state as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every city
    List,
    /// Show one city by its list position (starting at 1)
    Show {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        position: u32,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}", failure_report(&e));
            process::exit(1);
        }
    }
}

/// Friendly text for library errors, followed by the full cause chain
fn failure_report(error: &anyhow::Error) -> String {
    match error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CityWeatherError>())
    {
        Some(cause) => format!("Error: {}\nDetails: {error:#}", cause.user_message()),
        None => format!("Error: {error:#}"),
    }
}

/// Returns whether the requested view could be shown.
async fn run(cli: Cli) -> Result<bool> {
    let config = CityWeatherConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    telemetry::init(&config.logging, cli.verbose);
    debug!(url = %config.source.url, "Configuration loaded");

    let fetcher = HttpWeatherFetcher::new(&config.source)?;
    let publisher = StatePublisher::new(Arc::new(fetcher))?;

    publisher.refresh();
    let state = publisher.settled().await;

    let command = cli.command.unwrap_or(Command::List);
    let (output, shown) = view(&command, &state, cli.json)?;
    if shown {
        println!("{output}");
    } else {
        eprintln!("{output}");
    }
    Ok(shown)
}

/// Text for `command` and whether the requested view could be shown.
///
/// With `json`, `show` prints only the selected record.
fn view(command: &Command, state: &LoadState, json: bool) -> Result<(String, bool)> {
    match (command, state) {
        (Command::Show { position }, LoadState::Success(records)) => {
            let index = usize::try_from(*position - 1)?;
            match state.record(index) {
                Some(record) if json => Ok((serde_json::to_string_pretty(record)?, true)),
                Some(record) => Ok((render_detail(record), true)),
                None => Ok((
                    format!(
                        "No city at position {position}; the list has {} entries.",
                        records.len()
                    ),
                    false,
                )),
            }
        }
        (_, state) => {
            let output = if json {
                serde_json::to_string_pretty(state)?
            } else {
                render_state(state)
            };
            Ok((output, !matches!(state, LoadState::Error(_))))
        }
    }
}
