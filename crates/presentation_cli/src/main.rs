//! Traffic planner CLI
//!
//! Resolves two addresses, asks the Google Routes API for a traffic-aware
//! driving route and prints distance, duration, a Maps deep link and the
//! route line.

#![allow(clippy::print_stdout)]

mod map_renderer;
mod preview_calendar;

use std::sync::Arc;

use anyhow::{Context, anyhow, bail};
use application::{
    ApplicationError, CalendarExportService, MapRenderer, MapView, PlaceSelectionService,
    RoutePlan, RoutePlannerService, SessionState,
};
use clap::{Parser, Subcommand};
use domain::{CountryCode, GeoPoint, LocationInput, maps_deep_link, polyline};
use infrastructure::{AppConfig, GeocodingAdapter, RoutesAdapter, TimezoneAdapter, init_telemetry};
use tracing::debug;

use crate::{map_renderer::TerminalMapRenderer, preview_calendar::PreviewCalendar};

/// Traffic planner CLI
#[derive(Parser)]
#[command(name = "traffic-planner")]
#[command(author, version, about = "Traffic-aware driving routes from the command line", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a driving route between two addresses
    ///
    /// Requires TRAFFIC_PLANNER_GOOGLE__API_KEY (or google.api_key in config.toml).
    /// Example: traffic-planner plan --origin "Kenyatta Avenue, Nairobi" --destination "JKIA"
    Plan {
        /// Origin address
        #[arg(long)]
        origin: String,

        /// Destination address
        #[arg(long)]
        destination: String,

        /// Restrict address lookup to a country (ISO 3166-1 alpha-2)
        #[arg(long, value_parser = parse_country)]
        country: Option<CountryCode>,

        /// Local departure time, YYYY-MM-DDTHH:MM
        #[arg(long, default_value = "")]
        departure: String,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,

        /// Also print the calendar event for this route
        #[arg(long)]
        calendar_event: bool,
    },

    /// Decode an encoded polyline into coordinates
    Decode {
        /// Encoded polyline string
        polyline: String,
    },

    /// Print the Google Maps directions link between two coordinates
    Link {
        /// Origin as lat,lng
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        origin: GeoPoint,

        /// Destination as lat,lng
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        destination: GeoPoint,
    },
}

/// Parse a `lat,lng` pair
fn parse_point(value: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| format!("expected lat,lng but got '{value}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;
    GeoPoint::new(lat, lng).map_err(|e| e.to_string())
}

fn parse_country(value: &str) -> Result<CountryCode, String> {
    CountryCode::parse(value).map_err(|e| e.to_string())
}

fn user_facing(err: &ApplicationError) -> anyhow::Error {
    debug!(error = ?err, "Command failed");
    anyhow!(err.user_message())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            origin,
            destination,
            country,
            departure,
            json,
            calendar_event,
        } => {
            let config = AppConfig::load().context("Failed to load configuration")?;
            init_telemetry(&config.telemetry.clone().with_verbosity(cli.verbose))?;
            if let Err(errors) = config.validate() {
                bail!("Invalid configuration:\n  {}", errors.join("\n  "));
            }

            let options = PlanOptions {
                country,
                departure,
                json,
                calendar_event,
            };
            plan(&config, origin, destination, &options).await?;
        },

        Commands::Decode { polyline } => {
            let points = polyline::decode(&polyline).map_err(|e| anyhow!(e))?;
            println!("{} points", points.len());
            for point in points {
                println!("{point}");
            }
        },

        Commands::Link {
            origin,
            destination,
        } => {
            println!("{}", maps_deep_link(&origin, &destination));
        },
    }

    Ok(())
}

struct PlanOptions {
    country: Option<CountryCode>,
    departure: String,
    json: bool,
    calendar_event: bool,
}

async fn plan(
    config: &AppConfig,
    origin: String,
    destination: String,
    options: &PlanOptions,
) -> anyhow::Result<()> {
    let geocoding = config.geocoding_config().map_err(|e| anyhow!(e))?;
    let routes = config.routes_config().map_err(|e| anyhow!(e))?;

    let resolver =
        Arc::new(GeocodingAdapter::from_config(&geocoding).map_err(|e| user_facing(&e))?);
    let mut places = PlaceSelectionService::new(resolver);
    if let Some(country) = options.country.clone() {
        places = places.with_country(country);
    }

    let mut origin = LocationInput::unresolved(origin);
    let mut destination = LocationInput::unresolved(destination);
    places
        .select(&mut origin)
        .await
        .map_err(|e| user_facing(&e))?;
    places
        .select(&mut destination)
        .await
        .map_err(|e| user_facing(&e))?;

    let planner = RoutePlannerService::new(Arc::new(
        RoutesAdapter::from_config(&routes).map_err(|e| user_facing(&e))?,
    ));
    let plan = planner
        .submit(&origin, &destination, &options.departure)
        .await
        .map_err(|e| user_facing(&e))?
        .into_plan();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&origin, &destination, &plan);
        TerminalMapRenderer
            .render(&MapView::new(&origin, &destination, Some(&plan.path)))
            .map_err(|e| user_facing(&e))?;
    }

    if options.calendar_event {
        preview_event(config, &plan).await?;
    }

    Ok(())
}

fn print_plan(origin: &LocationInput, destination: &LocationInput, plan: &RoutePlan) {
    println!("🚗 {} → {}", origin.address, destination.address);
    println!("   Distance: {}", plan.artifacts.distance_text);
    println!("   Duration: {}", plan.artifacts.duration_text);
    println!("   Open in Google Maps: {}", plan.artifacts.map_link);
    println!();
}

async fn preview_event(config: &AppConfig, plan: &RoutePlan) -> anyhow::Result<()> {
    let timezone = config.timezone_config().map_err(|e| anyhow!(e))?;
    let export = CalendarExportService::new(
        Arc::new(PreviewCalendar),
        Arc::new(TimezoneAdapter::from_config(&timezone).map_err(|e| user_facing(&e))?),
        Arc::new(SessionState::with_state(true)),
    );
    export.export(plan).await.map_err(|e| user_facing(&e))?;
    Ok(())
}
