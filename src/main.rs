mod catalog;
mod geometry;
mod revisit;
mod web;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::geometry::GeoPoint;
use crate::revisit::RevisitOutcome;
use crate::web::{state, AppState, Config};

#[derive(Parser)]
#[command(name = "landsat-locator")]
#[command(about = "Landsat scene lookup and revisit prediction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "config.yaml")]
        config: String,
    },
    /// Find the scene covering or nearest to a location
    Lookup {
        #[arg(long, default_value = "config.yaml")]
        config: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Predict the next Landsat 8 and 9 visits of a location
    Revisit {
        #[arg(long, default_value = "config.yaml")]
        config: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Predict from this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config).await,
        Commands::Lookup { config, lat, lon } => lookup(&config, GeoPoint::new(lat, lon)).await,
        Commands::Revisit {
            config,
            lat,
            lon,
            date,
        } => revisit(&config, GeoPoint::new(lat, lon), date),
    }
}

fn load_config(path: &str) -> Option<Config> {
    match Config::from_file(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Error loading config {}: {}", path, e);
            None
        }
    }
}

async fn serve(path: &str) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match web::run_server(state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn lookup(path: &str, point: GeoPoint) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    let source = match state::catalog_source(&config.catalog) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error loading catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let catalog = match source.current().await {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match catalog::lookup(&catalog, point) {
        Some(view) => match serde_json::to_string_pretty(&view) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error encoding metadata: {}", e);
                ExitCode::FAILURE
            }
        },
        None => {
            println!("No metadata found for ({}, {})", point.latitude, point.longitude);
            ExitCode::FAILURE
        }
    }
}

fn revisit(path: &str, point: GeoPoint, date: Option<NaiveDate>) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };
    let Some(revisit_config) = &config.revisit else {
        eprintln!("No revisit section in {}", path);
        return ExitCode::FAILURE;
    };

    let planner = match state::revisit_planner(revisit_config) {
        Ok(planner) => planner,
        Err(e) => {
            eprintln!("Error loading orbit grid: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let as_of = date.unwrap_or_else(|| Local::now().date_naive());
    match planner.plan(point, as_of) {
        RevisitOutcome::Scheduled {
            path,
            row,
            prediction,
        } => {
            println!("WRS-2 path {} row {} (as of {})", path, row, as_of);
            println!("  Landsat 8: {}", prediction.date_landsat_8);
            println!("  Landsat 9: {}", prediction.date_landsat_9);
            ExitCode::SUCCESS
        }
        RevisitOutcome::OutsideGrid => {
            println!("({}, {}) is outside the orbit grid", point.latitude, point.longitude);
            ExitCode::FAILURE
        }
        RevisitOutcome::PathNotScheduled(path) => {
            println!("Path {} has no revisit schedule", path);
            ExitCode::FAILURE
        }
        RevisitOutcome::DateOutOfRange(date) => {
            eprintln!("No revisit date can be represented after {}", date);
            ExitCode::FAILURE
        }
    }
}
