use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("umkm-finder.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub store: Option<Store>,
    pub user: Option<User>,
    pub hidden_gem: Option<HiddenGem>,
    pub location: Option<Location>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Store {
    pub file: Option<PathBuf>,
}

impl Default for Store {
    fn default() -> Self {
        Config::default().store.expect("Store configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct User {
    pub id: String,
}

impl Default for User {
    fn default() -> Self {
        Config::default().user.expect("User configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HiddenGem {
    pub radius_meters: f64,
    #[serde(deserialize_with = "deserialize_duration")]
    pub display_duration: Duration,
    pub alert_dir: Option<PathBuf>,
}

impl Default for HiddenGem {
    fn default() -> Self {
        Config::default()
            .hidden_gem
            .expect("Hidden gem configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub accuracy: Option<f64>,
}
