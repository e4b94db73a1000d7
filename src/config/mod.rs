use anyhow::{anyhow, bail, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use umkm_core::entities::{Distance, MapPoint, UserId, UserLocation};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "umkm-finder.toml";

const ENV_NAME_STORE_FILE: &str = "UMKM_STORE_FILE";
const ENV_NAME_USER_ID: &str = "UMKM_USER_ID";

#[derive(Debug)]
pub struct Config {
    pub store: Store,
    pub user: User,
    pub hidden_gem: HiddenGem,
    pub location: Option<UserLocation>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let raw_config = match file_path {
            Some(file_path) => {
                let file_path = file_path.as_ref();
                let cfg_string = fs::read_to_string(file_path).map_err(|err| {
                    anyhow!("Unable to read configuration {}: {err}", file_path.display())
                })?;
                toml::from_str(&cfg_string)?
            }
            None => {
                log::debug!("No configuration file specified, load {DEFAULT_CONFIG_FILE_NAME}");
                match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                    Ok(cfg_string) => toml::from_str(&cfg_string)?,
                    Err(err) if err.kind() == ErrorKind::NotFound => {
                        log::debug!(
                            "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                        );
                        raw::Config::default()
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(file) = env::var(ENV_NAME_STORE_FILE) {
            cfg.store.file = Some(file.into()).filter(|f: &PathBuf| !f.as_os_str().is_empty());
        }
        if let Ok(id) = env::var(ENV_NAME_USER_ID) {
            cfg.user.id = parse_user_id(&id)
                .map_err(|err| anyhow!("{ENV_NAME_USER_ID}: {err}"))?;
        }
        Ok(cfg)
    }
}

/// A user id names a single path segment of the store.
fn parse_user_id(id: &str) -> Result<UserId> {
    let id = id.trim();
    if id.is_empty() || id.contains('/') {
        bail!("Invalid user id '{id}'");
    }
    Ok(id.into())
}

#[derive(Debug)]
pub struct Store {
    /// Volatile in-memory store if missing.
    pub file: Option<PathBuf>,
}

#[derive(Debug)]
pub struct User {
    pub id: UserId,
}

#[derive(Debug)]
pub struct HiddenGem {
    pub radius: Distance,
    pub display_duration: Duration,
    /// File system directory for writing alerts into JSON files.
    pub alert_dir: Option<PathBuf>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            store,
            user,
            hidden_gem,
            location,
        } = from;

        let raw::Store { file } = store.unwrap_or_default();
        let store = Store { file };

        let raw::User { id } = user.unwrap_or_default();
        let user = User {
            id: parse_user_id(&id)?,
        };

        let raw::HiddenGem {
            radius_meters,
            display_duration,
            alert_dir,
        } = hidden_gem.unwrap_or_default();
        let radius = Distance::from_meters(radius_meters);
        if !radius.is_valid() || radius_meters <= 0.0 {
            bail!("Invalid hidden gem radius: {radius_meters}");
        }
        let hidden_gem = HiddenGem {
            radius,
            display_duration,
            alert_dir,
        };

        let location = location
            .map(|raw::Location { lat, lng, accuracy }| {
                MapPoint::try_from_lat_lng_deg(lat, lng)
                    .map(|pos| UserLocation { pos, accuracy })
                    .ok_or_else(|| anyhow!("Invalid location: {lat},{lng}"))
            })
            .transpose()?;

        Ok(Self {
            store,
            user,
            hidden_gem,
            location,
        })
    }
}
