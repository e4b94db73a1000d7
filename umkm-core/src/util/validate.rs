use crate::entities::MapPoint;
use thiserror::Error;

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Strips everything from a coordinate input that can not be part of a
/// decimal degree, e.g. `"-7.8995°"` becomes `"-7.8995"`.
pub fn clean_coordinate(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinateInvalidation {
    #[error("Missing latitude or longitude")]
    Missing,
    #[error("Latitude or longitude is not a number")]
    NotANumber,
    #[error("Latitude or longitude is out of range")]
    OutOfRange,
}

/// Parses separate latitude and longitude inputs of a form.
pub fn parse_lat_lng(lat: &str, lng: &str) -> Result<MapPoint, CoordinateInvalidation> {
    let lat = clean_coordinate(lat);
    let lng = clean_coordinate(lng);
    if lat.is_empty() || lng.is_empty() {
        return Err(CoordinateInvalidation::Missing);
    }
    match (lat.parse::<f64>(), lng.parse::<f64>()) {
        (Ok(lat), Ok(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or(CoordinateInvalidation::OutOfRange),
        _ => Err(CoordinateInvalidation::NotANumber),
    }
}
