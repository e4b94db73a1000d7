//! Geo-proximity evaluation ("hidden gem" detection).
//!
//! Malformed coordinates are never an error here: such points are
//! simply excluded from every geo-aware result.

use crate::entities::*;
use itertools::Itertools as _;
use std::{cmp::Ordering, time::Duration};

pub use umkm_entities::geo::haversine_distance_meters;

pub const HIDDEN_GEM_RADIUS: Distance = Distance::from_meters(150.0);
pub const HIDDEN_GEM_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Latitude and longitude in degrees if both parts are finite numbers.
pub fn parse_coordinates(raw: &str) -> Option<(f64, f64)> {
    parse_lat_lng_deg(raw).ok()
}

/// Selects the nearest point that is strictly closer than `radius_meters`.
///
/// The first of several equally near points wins.
pub fn find_nearest_within_radius(
    points: &[Point],
    user_lat: f64,
    user_lng: f64,
    radius_meters: f64,
) -> Option<&Point> {
    points
        .iter()
        .filter_map(|p| {
            let (lat, lng) = parse_coordinates(&p.coordinates)?;
            let distance = haversine_distance_meters(user_lat, user_lng, lat, lng);
            Some((p, distance))
        })
        .filter(|(_, distance)| *distance < radius_meters)
        .fold(None, |nearest: Option<(&Point, f64)>, (p, distance)| {
            match nearest {
                Some((_, min)) if min <= distance => nearest,
                _ => Some((p, distance)),
            }
        })
        .map(|(p, _)| p)
}

/// The nearest point within `radius` together with its distance.
pub fn nearest_hidden_gem<'a>(
    points: &'a [Point],
    location: &UserLocation,
    radius: Distance,
) -> Option<(&'a Point, Distance)> {
    let (lat, lng) = location.pos.to_lat_lng_deg();
    let nearest = find_nearest_within_radius(points, lat, lng, radius.to_meters())?;
    let distance = nearest.distance_to(location.pos)?;
    Some((nearest, distance))
}

/// Orders points by ascending distance from `pos`.
///
/// Points without valid coordinates are kept at the end, in their
/// original order.
pub fn sort_by_distance(points: &[Point], pos: MapPoint) -> Vec<(&Point, Option<Distance>)> {
    points
        .iter()
        .map(|p| (p, p.distance_to(pos)))
        .sorted_by(|(_, a), (_, b)| match (a, b) {
            (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .collect()
}
