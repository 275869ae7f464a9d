use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for the trip planner.
#[derive(Debug, Parser)]
#[command(
    name = "planner",
    version,
    about = "Inter-city distance and travel-cost estimates for Zimbabwe"
)]
pub struct CliArgs {
    /// Path to a cities CSV (name,latitude,longitude); default: embedded registry
    #[arg(long = "cities", global = true)]
    pub cities: Option<PathBuf>,

    /// Path to a road-distance CSV (from,to,distance_km); default: embedded matrix
    #[arg(long = "roads", global = true)]
    pub roads: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all registered cities in registry order
    Cities,

    /// Resolve the distance between two cities
    Distance {
        /// Origin city (exact registered name, e.g. "Victoria Falls")
        from: String,
        /// Destination city
        to: String,
        /// Use the great-circle distance; skip the curated road table
        #[arg(long)]
        straight: bool,
    },

    /// Estimate travel time and fuel cost for a trip
    Trip {
        /// Origin city
        from: String,
        /// Destination city
        to: String,
        /// Use the great-circle distance; skip the curated road table
        #[arg(long)]
        straight: bool,
        /// Average speed in km/h
        #[arg(long, default_value_t = 70.0)]
        speed: f64,
        /// Fuel price per litre
        #[arg(long = "fuel-price", default_value_t = 1.5)]
        fuel_price: f64,
        /// Vehicle efficiency preset
        #[arg(long, value_enum, default_value_t = Vehicle::Regular)]
        vehicle: Vehicle,
        /// Override the preset with an explicit km-per-litre figure
        #[arg(long = "km-per-liter")]
        km_per_liter: Option<f64>,
    },

    /// Check the road table for asymmetric or one-way entries
    Audit,
}

/// Fuel-efficiency presets.  These are product defaults owned by the CLI;
/// the estimator itself only ever sees the chosen km-per-litre number.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Vehicle {
    /// Petrol car, 10 km/L
    Regular,
    /// Hybrid, 16 km/L
    Hybrid,
}

impl Vehicle {
    pub fn km_per_liter(self) -> f64 {
        match self {
            Vehicle::Regular => 10.0,
            Vehicle::Hybrid => 16.0,
        }
    }
}
