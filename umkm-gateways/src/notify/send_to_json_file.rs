use jfs::Store;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};
use umkm_core::{
    entities::{Distance, Id, Point, TimestampMs},
    gateways::notify::NotificationGateway,
};

/// Records hidden gem alerts as JSON files for inspection.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonAlert {
    point_id: String,
    name: String,
    coordinates: String,
    distance_meters: f64,
    alerted_at: i64,
}

impl JsonAlert {
    fn new(point: &Point, distance: Distance, now: TimestampMs) -> Self {
        Self {
            point_id: point.id.to_string(),
            name: point.name.clone(),
            coordinates: point.coordinates.clone(),
            distance_meters: distance.to_meters(),
            alerted_at: now.as_millis(),
        }
    }
}

impl NotificationGateway for SendToJsonFile {
    fn hidden_gem_found(&self, point: &Point, distance: Distance) {
        let now = TimestampMs::now();
        let key = format!("{}-{}", now.as_millis(), point.id);
        let alert = JsonAlert::new(point, distance, now);
        if let Err(err) = self.json_store.save_with_id(&alert, &key) {
            log::warn!("Unable to save alert in JSON file: {err}");
        }
    }

    fn hidden_gem_dismissed(&self, _: &Id) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use umkm_entities::builders::Builder;

    #[test]
    fn save_one_file_per_alert() {
        let dir = tempfile::tempdir().unwrap();
        let gw = SendToJsonFile::try_new(dir.path()).unwrap();
        let point = Point::build()
            .id("a")
            .name("Batik Sabdo")
            .pos(-7.8995, 110.331)
            .finish();
        gw.hidden_gem_found(&point, Distance::from_meters(42.0));
        let alerts = gw.json_store.all::<JsonAlert>().unwrap();
        assert_eq!(1, alerts.len());
        let (key, alert) = alerts.into_iter().next().unwrap();
        assert!(key.ends_with("-a"));
        assert_eq!("a", alert.point_id);
        assert_eq!("Batik Sabdo", alert.name);
        assert_eq!(42.0, alert.distance_meters);
    }
}
