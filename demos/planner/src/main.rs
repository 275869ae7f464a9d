//! planner — command-line trip planner for Zimbabwean inter-city travel.
//!
//! Usage examples
//! --------------
//!
//! - List the registry
//!   $ planner cities
//!
//! - Road distance (curated table, geodesic fallback)
//!   $ planner distance Harare Bulawayo
//!
//! - Straight-line distance
//!   $ planner distance Harare Bulawayo --straight
//!
//! - Full trip estimate
//!   $ planner trip Harare "Victoria Falls" --speed 80 --vehicle hybrid
//!
//! - Vet a hand-authored road table
//!   $ planner --cities my_cities.csv --roads my_roads.csv audit
//!
//! All formatting lives here; the library crates return plain numbers and
//! structured values.

mod args;

use anyhow::Context;
use clap::Parser;

use zt_atlas::{CityAtlas, RoadDistanceTable, RoadTableBuilder, dataset};
use zt_trip::{DistanceMode, TripPlanner, TripQuery};

use crate::args::{CliArgs, Commands};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let (atlas, roads) = load_data(&args)?;

    match args.command {
        Commands::Cities => {
            println!("{} registered cities:", atlas.len());
            for city in atlas.iter() {
                println!("  {:<16} {}", city.name, city.coord);
            }
        }

        Commands::Distance { from, to, straight } => {
            let planner = TripPlanner::new(&atlas, &roads);
            let resolved = planner.distance(&from, &to, distance_mode(straight))?;
            println!("{from} -> {to}: {:.1} km ({})", resolved.km, resolved.source);
        }

        Commands::Trip {
            from,
            to,
            straight,
            speed,
            fuel_price,
            vehicle,
            km_per_liter,
        } => {
            let planner = TripPlanner::new(&atlas, &roads);
            let est = planner.estimate(&TripQuery {
                origin: &from,
                destination: &to,
                mode: distance_mode(straight),
                avg_speed_kmh: speed,
                fuel_price_per_liter: fuel_price,
                fuel_km_per_liter: km_per_liter.unwrap_or_else(|| vehicle.km_per_liter()),
            })?;

            println!("{from} -> {to}");
            println!("  Distance:    {:.1} km ({})", est.distance_km, est.source);
            println!("  Travel time: {} at {speed} km/h", est.travel_time);
            println!("  Fuel cost:   {:.2}", est.fuel_cost);
        }

        Commands::Audit => {
            let report = roads.audit_symmetry();
            if report.is_clean() {
                println!("Road table is symmetric ({} directed entries).", roads.len());
            } else {
                for m in &report.mismatches {
                    println!(
                        "mismatch: {} -> {} is {} km but {} -> {} is {} km",
                        m.from, m.to, m.forward_km, m.to, m.from, m.reverse_km
                    );
                }
                for (from, to) in &report.one_way {
                    println!("one-way: {from} -> {to} has no reverse entry");
                }
                anyhow::bail!(
                    "road table audit failed: {} mismatched, {} one-way",
                    report.mismatches.len(),
                    report.one_way.len()
                );
            }
        }
    }

    Ok(())
}

fn distance_mode(straight: bool) -> DistanceMode {
    if straight {
        DistanceMode::Straight
    } else {
        DistanceMode::Road
    }
}

/// Build the atlas and road table from CSV overrides or the embedded data.
fn load_data(args: &CliArgs) -> anyhow::Result<(CityAtlas, RoadDistanceTable)> {
    match (&args.cities, &args.roads) {
        (None, None) => dataset::zimbabwe().context("embedded dataset failed to build"),

        (Some(cities_path), roads_path) => {
            let atlas = zt_atlas::load_cities_csv(cities_path)
                .with_context(|| format!("loading cities from {}", cities_path.display()))?;
            let roads = match roads_path {
                Some(path) => zt_atlas::load_roads_csv(path, &atlas)
                    .with_context(|| format!("loading roads from {}", path.display()))?,
                // Custom registry without a road file: geodesic-only.
                None => RoadTableBuilder::new(&atlas).build(),
            };
            Ok((atlas, roads))
        }

        (None, Some(path)) => {
            let (atlas, _) = dataset::zimbabwe().context("embedded dataset failed to build")?;
            let roads = zt_atlas::load_roads_csv(path, &atlas)
                .with_context(|| format!("loading roads from {}", path.display()))?;
            Ok((atlas, roads))
        }
    }
}
