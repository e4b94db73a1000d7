use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use umkm_application::prelude as flows;
use umkm_core::{
    entities::*,
    gateways::location::{self, LocationGateway},
    proximity,
    repositories::PointRepo,
    usecases::{self, CategoryFilter, MoodFilter, NewPoint, PointFilter},
};
use umkm_db_jfs::JsonStore;
use umkm_gateways::{
    location::{DeniedLocation, FixedLocation},
    notify::{LogNotifier, Notify, SendToJsonFile},
};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "umkm-finder")]
#[command(author, version, about = "Find handicraft workshops (UMKM) nearby")]
pub struct Cli {
    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all points
    List {
        /// Category (`batik`, `gerabah`, ...) or `all`
        #[arg(long, default_value = "all")]
        category: String,
        /// Mood (`heritage`, `modern`, ...) or `all`
        #[arg(long, default_value = "all")]
        mood: String,
        /// Search text for the name
        #[arg(short, long)]
        search: Option<String>,
        /// Only points that can be shown on a map
        #[arg(long)]
        geo_only: bool,
    },
    /// List points ordered by distance from the device, if it has a position
    Nearby,
    /// Look for a hidden gem around the device
    HiddenGem,
    /// Add a new point
    Add(PointArgs),
    /// Replace the details of a point
    Edit {
        id: String,
        #[command(flatten)]
        point: PointArgs,
    },
    /// Delete a point
    Delete { id: String },
    /// Set the mood of a point (`none` to clear it)
    Mood { id: String, mood: String },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Show how the moods are distributed
    Moods,
    /// Pick a random point
    Gacha {
        #[arg(long, default_value = "all")]
        category: String,
    },
}

#[derive(Subcommand)]
pub enum CartAction {
    /// Put a point into the cart
    Add { id: String },
    /// Remove a point from the cart
    Remove { id: String },
    /// List the points in the cart
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(Args)]
pub struct PointArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    category: String,
    #[arg(long, allow_hyphen_values = true)]
    lat: String,
    #[arg(long, allow_hyphen_values = true)]
    lng: String,
    #[arg(long)]
    image_uri: Option<String>,
}

impl From<PointArgs> for NewPoint {
    fn from(from: PointArgs) -> Self {
        let PointArgs {
            name,
            description,
            category,
            lat,
            lng,
            image_uri,
        } = from;
        Self {
            name,
            description,
            category,
            lat,
            lng,
            image_uri,
        }
    }
}

fn open_store(cfg: &Config) -> Result<JsonStore> {
    match &cfg.store.file {
        Some(file) => {
            log::debug!("Using JSON store {}", file.display());
            Ok(JsonStore::try_open(file)?)
        }
        None => {
            log::warn!("No store file configured, changes will be lost");
            Ok(JsonStore::in_memory())
        }
    }
}

fn current_location(gw: &dyn LocationGateway) -> Option<UserLocation> {
    match location::locate(gw) {
        Ok(location) => Some(location),
        Err(err) => {
            log::info!("{err}, distances are not available");
            None
        }
    }
}

fn location_gateway(cfg: &Config) -> Box<dyn LocationGateway> {
    match cfg.location {
        Some(location) => Box::new(FixedLocation::new(location)),
        None => Box::new(DeniedLocation),
    }
}

fn notifier(cfg: &Config) -> Result<Notify> {
    let mut notify = Notify::new().with(LogNotifier);
    if let Some(dir) = &cfg.hidden_gem.alert_dir {
        notify = notify.with(SendToJsonFile::try_new(dir)?);
    }
    Ok(notify)
}

fn print_point(point: &Point, distance: Option<Distance>) {
    let assets = AssetTable::default();
    let category = point
        .category
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".into());
    let distance = distance.map(|d| d.to_string()).unwrap_or_else(|| "-".into());
    let image = match point.image.resolve(&assets) {
        ImageSource::Url(url) => url.to_owned(),
        ImageSource::Asset(key) => key.to_owned(),
        ImageSource::Placeholder => PLACEHOLDER_ASSET.to_owned(),
    };
    println!(
        "{}  {}  [{category}]  {}  {distance}  {image}",
        point.id,
        point.name,
        Mood::encode(point.mood),
    );
}

pub fn run(cfg: Config, command: Command) -> Result<()> {
    let db = open_store(&cfg)?;
    match command {
        Command::List {
            category,
            mood,
            search,
            geo_only,
        } => {
            let filter = PointFilter {
                category: category.parse::<CategoryFilter>()?,
                mood: mood.parse::<MoodFilter>()?,
                text: search,
                geo_only,
            };
            for point in usecases::load_points(&db, &filter)? {
                print_point(&point, None);
            }
        }
        Command::Nearby => {
            let points = db.all_points()?;
            match current_location(&*location_gateway(&cfg)) {
                Some(location) => {
                    for (point, distance) in proximity::sort_by_distance(&points, location.pos) {
                        print_point(point, distance);
                    }
                }
                None => {
                    for point in &points {
                        print_point(point, None);
                    }
                }
            }
        }
        Command::HiddenGem => {
            let config = flows::WatcherConfig {
                radius: cfg.hidden_gem.radius,
                display_duration: cfg.hidden_gem.display_duration,
            };
            let mut watcher = flows::HiddenGemWatcher::new(notifier(&cfg)?, config);
            watcher.activate(&db)?;
            let location = watcher.locate(&*location_gateway(&cfg));
            match watcher.current_alert() {
                Some(point) => {
                    let distance = location.and_then(|l| point.distance_to(l.pos));
                    print_point(&point, distance);
                }
                None => println!("No hidden gem nearby"),
            }
            watcher.deactivate();
        }
        Command::Add(args) => {
            let point = flows::create_point(&db, args.into())?;
            println!("{}", point.id);
        }
        Command::Edit { id, point } => {
            flows::update_point(&db, &id, point.into())?;
        }
        Command::Delete { id } => {
            flows::delete_point(&db, &id)?;
        }
        Command::Mood { id, mood } => {
            let mood = Mood::parse_optional(&mood).map_err(usecases::Error::from)?;
            flows::set_mood(&db, &id, mood)?;
        }
        Command::Cart { action } => match action {
            CartAction::Add { id } => flows::add_to_cart(&db, &cfg.user.id, &id)?,
            CartAction::Remove { id } => flows::remove_from_cart(&db, &cfg.user.id, &id)?,
            CartAction::List { search } => {
                for point in flows::load_cart(&db, &cfg.user.id, search.as_deref())? {
                    print_point(&point, None);
                }
            }
        },
        Command::Moods => {
            let stats = usecases::mood_stats(&db.all_points()?);
            for (mood, count) in &stats.tally {
                println!("{:<14} {count}", mood.label());
            }
            match stats.most_common {
                Some((mood, count)) => println!("Most common: {} ({count})", mood.label()),
                None => println!("No moods assigned yet"),
            }
        }
        Command::Gacha { category } => {
            let filter = PointFilter {
                category: category.parse()?,
                ..Default::default()
            };
            let points = usecases::load_points(&db, &filter)?;
            match usecases::pick_random(&points, &mut rand::thread_rng()) {
                Some(point) => print_point(point, None),
                None => println!("Nothing to pick"),
            }
        }
    }
    Ok(())
}
