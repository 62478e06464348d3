//! civicpin-geo: CLI for privacy-preserving location tags.

use civicpin_geocoding::{GeocoderConfig, ReverseGeocoder};
use civicpin_geotag::{
    contains, extract_tags, is_valid_tag, nearby_tags_scaled, reconstruct, truncate,
};
use clap::{Parser, Subcommand};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "civicpin-geo")]
#[command(about = "Privacy-preserving location tags for CivicPin reports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tag a coordinate, revealing only a ~1km area
    Tag {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Optional human annotation
        #[arg(long)]
        label: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the area a tag reveals
    Area {
        /// A geo tag, e.g. #geo9c3xgv
        tag: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract tags from text (argument or stdin)
    Extract {
        /// Text to scan; stdin when omitted
        text: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List nearby tags for proximity search
    Nearby {
        /// A geo tag
        tag: String,
        /// Radius multiplier for the neighbor step
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a coordinate falls inside a tag's area
    Contains {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// A geo tag
        tag: String,
    },
    /// Reverse geocode a tag to a place name
    Lookup {
        /// A geo tag
        tag: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tag {
            lat,
            lng,
            label,
            json,
        } => match truncate(lat, lng, label.as_deref()) {
            Ok(location) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&location)?);
                } else {
                    println!("Tag: {}", location.tag);
                    println!(
                        "Center: {:.4}, {:.4}",
                        location.center_lat, location.center_lng
                    );
                    println!("Precision: ~{}km", location.precision_km);
                    if let Some(label) = &location.label {
                        println!("Label: {label}");
                    }
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },

        Commands::Area { tag, json } => match reconstruct(&tag) {
            Some(area) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&area)?);
                } else {
                    println!(
                        "South-west: {:.4}, {:.4}",
                        area.south_west.latitude, area.south_west.longitude
                    );
                    println!(
                        "North-east: {:.4}, {:.4}",
                        area.north_east.latitude, area.north_east.longitude
                    );
                    println!(
                        "Center: {:.4}, {:.4}",
                        area.center.latitude, area.center.longitude
                    );
                }
            }
            None => {
                eprintln!("Invalid tag: {tag}");
                std::process::exit(1);
            }
        },

        Commands::Extract { text, json } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let tags = extract_tags(&text);
            if json {
                println!("{}", serde_json::to_string(&tags)?);
            } else {
                for tag in tags {
                    println!("{tag}");
                }
            }
        }

        Commands::Nearby { tag, radius, json } => {
            if !is_valid_tag(&tag) {
                eprintln!("Invalid tag: {tag}");
                std::process::exit(1);
            }

            let tags = nearby_tags_scaled(&tag, radius);
            if json {
                println!("{}", serde_json::to_string(&tags)?);
            } else {
                for tag in tags {
                    println!("{tag}");
                }
            }
        }

        Commands::Contains { lat, lng, tag } => {
            let inside = contains(lat, lng, &tag);
            println!("{inside}");
            if !inside {
                std::process::exit(1);
            }
        }

        Commands::Lookup { tag } => {
            let geocoder = ReverseGeocoder::with_config(GeocoderConfig::from_env()?)?;
            let runtime = tokio::runtime::Runtime::new()?;
            match runtime.block_on(geocoder.place_name(&tag)) {
                Ok(Some(name)) => println!("{name}"),
                Ok(None) => println!("(no place name for this area)"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
