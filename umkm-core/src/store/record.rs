use super::Snapshot;
use crate::entities::*;
use serde::{Deserialize, Deserializer, Serialize};

/// Stored representation of a point below `points/<id>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    /// Anything but a string is kept as unparsable coordinates.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub coordinates: String,
    #[serde(default)]
    pub image_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_local: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Snapshot::deserialize(deserializer)? {
        Snapshot::String(s) => s,
        _ => String::new(),
    })
}

impl PointRecord {
    pub fn into_point(self, id: Id) -> Point {
        let Self {
            name,
            description,
            category,
            tags,
            coordinates,
            image_uri,
            image_local,
            created_at,
            mood,
        } = self;
        let category = category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(Category::decode);
        Point {
            id,
            name,
            description,
            category,
            tags,
            coordinates,
            image: ImageRef {
                uri: image_uri,
                local: image_local,
            },
            mood: Mood::decode(mood.as_deref()),
            created_at: created_at
                .filter(|ms| ms.is_finite())
                .map(|ms| TimestampMs::from_millis(ms as i64)),
        }
    }

    fn has_unknown_mood(&self) -> bool {
        self.mood
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty() && !m.eq_ignore_ascii_case(Mood::NONE))
            .is_some_and(|m| m.parse::<Mood>().is_err())
    }
}

impl From<&Point> for PointRecord {
    fn from(from: &Point) -> Self {
        let Point {
            id: _,
            name,
            description,
            category,
            tags,
            coordinates,
            image,
            mood,
            created_at,
        } = from;
        Self {
            name: name.clone(),
            description: description.clone(),
            category: category.as_ref().map(ToString::to_string),
            tags: tags.clone(),
            coordinates: coordinates.clone(),
            image_uri: image.uri.clone(),
            image_local: image.local.clone(),
            created_at: created_at.map(|ts| ts.as_millis() as f64),
            mood: Some(Mood::encode(*mood).to_owned()),
        }
    }
}

/// Decodes all points of a `points/` snapshot in key order.
///
/// Records that cannot be decoded are skipped.
pub fn points_from_snapshot(snapshot: &Snapshot) -> Vec<Point> {
    let Some(records) = snapshot.as_object() else {
        if !snapshot.is_null() {
            log::warn!("Ignoring points snapshot that is not an object");
        }
        return vec![];
    };
    records
        .iter()
        .filter_map(|(id, value)| point_from_snapshot(id, value))
        .collect()
}

/// Decodes a single `points/<id>` snapshot.
pub fn point_from_snapshot(id: &str, value: &Snapshot) -> Option<Point> {
    if value.is_null() {
        return None;
    }
    match PointRecord::deserialize(value) {
        Ok(record) => {
            if record.has_unknown_mood() {
                log::warn!("Point {id} has an unknown mood {:?}", record.mood);
            }
            Some(record.into_point(id.into()))
        }
        Err(err) => {
            log::warn!("Skipping malformed point {id}: {err}");
            None
        }
    }
}

/// Decodes the point ids of a `cart/<user>` snapshot in key order.
pub fn cart_ids_from_snapshot(snapshot: &Snapshot) -> Vec<Id> {
    snapshot
        .as_object()
        .map(|entries| {
            entries
                .iter()
                .filter(|(_, present)| !present.is_null() && present.as_bool() != Some(false))
                .map(|(id, _)| Id::from(id.as_str()))
                .collect()
        })
        .unwrap_or_default()
}
