//! Terminal front end over the application facade.
//!
//! Stands in for the browser surfaces: each subcommand is one consumer
//! interaction against the stores, rendered as text or `--json`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tn_app::usecases::{SearchQuery, SortBy};
use tn_core::catalog::Amenity;
use tn_core::ids::{HotelId, RoomId};
use tn_core::selection::{InsertOutcome, ToggleOutcome};
use tripnest::{App, AppConfig};

#[derive(Debug, Parser)]
#[command(name = "tripnest", version, about = "Browse hotels, compare rooms, keep favorites")]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the hotel catalog.
    Search(SearchArgs),

    /// Show one hotel with its rooms and affordance flags.
    Hotel { hotel_id: String },

    /// Toggle a hotel in the favorites list.
    Favorite { hotel_id: String },

    /// List saved favorites.
    Favorites,

    /// Manage the room comparison tray.
    #[command(subcommand)]
    Compare(CompareCommand),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive city filter.
    #[arg(long)]
    pub city: Option<String>,

    /// Maximum nightly price, e.g. 150.00.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum rating in stars, e.g. 4.5.
    #[arg(long)]
    pub min_rating: Option<f32>,

    /// Required amenity (snake_case, e.g. wifi, sea_view). Repeatable; a
    /// hotel must have all of them.
    #[arg(long = "amenity", value_parser = parse_amenity)]
    pub amenities: Vec<Amenity>,

    /// Sort order.
    #[arg(long, value_parser = ["price", "rating"], default_value = "price")]
    pub sort: String,
}

#[derive(Debug, Subcommand)]
pub enum CompareCommand {
    /// Add a room to the tray (capacity 4, no eviction).
    Add { hotel_id: String, room_id: String },

    /// Remove a room from the tray.
    Remove { hotel_id: String, room_id: String },

    /// Show the side-by-side comparison table.
    List,

    /// Empty the tray.
    Clear,
}

pub fn init_tracing(config: &AppConfig) {
    let default_filter = config
        .log_filter
        .clone()
        .unwrap_or_else(|| "tripnest=info,tn_app=info,tn_infra=info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn format_price(minor: i64) -> String {
    format!("{}.{:02}", minor / 100, minor % 100)
}

/// Amenity names on the command line use the same snake_case strings as the
/// persisted JSON, so the serde names are the single source of truth.
fn parse_amenity(s: &str) -> Result<Amenity, String> {
    serde_json::from_str(&format!("\"{}\"", s.trim()))
        .map_err(|_| format!("unknown amenity: {s}"))
}

pub async fn dispatch(app: &App, args: Cli) -> Result<()> {
    match args.command {
        Command::Search(search) => run_search(app, search, args.json).await,
        Command::Hotel { hotel_id } => run_hotel(app, &HotelId::from_string(hotel_id), args.json).await,
        Command::Favorite { hotel_id } => {
            let outcome = app
                .toggle_favorite()
                .execute(&HotelId::from_string(hotel_id))
                .await?;
            match outcome {
                ToggleOutcome::Added => println!("Saved to favorites"),
                ToggleOutcome::Removed => println!("Removed from favorites"),
                ToggleOutcome::Rejected => println!("Favorites list is full"),
            }
            Ok(())
        }
        Command::Favorites => run_favorites(app, args.json).await,
        Command::Compare(command) => run_compare(app, command, args.json).await,
    }
}

async fn run_search(app: &App, search: SearchArgs, json: bool) -> Result<()> {
    let query = SearchQuery {
        city: search.city,
        max_nightly_price_minor: search.max_price.map(|price| (price * 100.0).round() as i64),
        min_rating_tenths: search.min_rating.map(|stars| (stars * 10.0).round() as u8),
        amenities: search.amenities,
        sort: match search.sort.as_str() {
            "rating" => SortBy::RatingDescending,
            _ => SortBy::PriceAscending,
        },
    };

    let cards = app.search_hotels().execute(&query).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No hotels match.");
    }
    for card in cards {
        let heart = if card.is_favorite { "♥" } else { " " };
        println!(
            "{heart} {id:<24} {name:<24} {city:<12} {rating}★  from {price}/night",
            id = card.hotel_id,
            name = card.name,
            city = card.city,
            rating = card.rating,
            price = format_price(card.nightly_price_minor),
        );
    }
    Ok(())
}

async fn run_hotel(app: &App, hotel_id: &HotelId, json: bool) -> Result<()> {
    let detail = app.get_hotel_detail().execute(hotel_id).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    let heart = if detail.is_favorite { " ♥" } else { "" };
    println!("{} — {}{heart}", detail.hotel.name, detail.hotel.city);
    println!("{}", detail.hotel.description);
    println!(
        "Rated {}★. Amenities: {}",
        detail.hotel.rating,
        detail
            .hotel
            .amenities
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
    for view in &detail.rooms {
        let marker = if view.in_comparison {
            " [in comparison]"
        } else if view.comparison_full {
            " [comparison full]"
        } else {
            ""
        };
        println!(
            "  {id:<18} {name:<24} sleeps {sleeps}, {size} m², {price}/night{marker}",
            id = view.room.room_id,
            name = view.room.name,
            sleeps = view.room.sleeps,
            size = view.room.size_sqm,
            price = format_price(view.room.nightly_price_minor),
        );
    }
    Ok(())
}

async fn run_favorites(app: &App, json: bool) -> Result<()> {
    let favorites = app.list_favorites().execute().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&favorites)?);
        return Ok(());
    }

    if favorites.is_empty() {
        println!("No favorites saved.");
    }
    for entry in favorites {
        println!(
            "♥ {id:<24} {name:<24} {city:<12} {rating}★  from {price}/night",
            id = entry.hotel_id,
            name = entry.snapshot.name,
            city = entry.snapshot.city,
            rating = entry.snapshot.rating,
            price = format_price(entry.snapshot.nightly_price_minor),
        );
    }
    Ok(())
}

async fn run_compare(app: &App, command: CompareCommand, json: bool) -> Result<()> {
    match command {
        CompareCommand::Add { hotel_id, room_id } => {
            let outcome = app
                .add_room_to_comparison()
                .execute(&HotelId::from_string(hotel_id), &RoomId::from_string(room_id))
                .await?;
            match outcome {
                InsertOutcome::Inserted => println!("Added to comparison"),
                InsertOutcome::AlreadyPresent => println!("Already in comparison"),
                InsertOutcome::Full => {
                    println!("Comparison tray is full (max 4 rooms)")
                }
            }
        }
        CompareCommand::Remove { hotel_id, room_id } => {
            let removed = app
                .remove_room_from_comparison()
                .execute(&HotelId::from_string(hotel_id), &RoomId::from_string(room_id))
                .await;
            if removed {
                println!("Removed from comparison");
            } else {
                println!("Not in comparison");
            }
        }
        CompareCommand::List => {
            let table = app.build_comparison_table().execute().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
                return Ok(());
            }
            if table.is_empty() {
                println!("Comparison tray is empty.");
                return Ok(());
            }
            println!("{:<16}{}", "", table.columns.join("  |  "));
            for row in &table.rows {
                println!("{:<16}{}", row.label, row.cells.join("  |  "));
            }
        }
        CompareCommand::Clear => {
            app.clear_comparison().execute().await;
            println!("Comparison tray cleared");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_amenity_flags_collect_into_the_query() {
        let cli = Cli::try_parse_from([
            "tripnest", "search", "--amenity", "wifi", "--amenity", "sea_view",
        ])
        .unwrap();

        let Command::Search(search) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(search.amenities, vec![Amenity::Wifi, Amenity::SeaView]);
    }

    #[test]
    fn amenity_names_match_the_serialized_form() {
        assert_eq!(parse_amenity("room_service").unwrap(), Amenity::RoomService);
        assert_eq!(parse_amenity(" pool ").unwrap(), Amenity::Pool);
        assert!(parse_amenity("jacuzzi").is_err());
    }

    #[test]
    fn unknown_amenity_is_a_parse_error() {
        let result = Cli::try_parse_from(["tripnest", "search", "--amenity", "jacuzzi"]);
        assert!(result.is_err());
    }
}
