use crate::{category::*, geo::*, id::*, image::*, mood::*, time::*};

/// A catalogued handicraft business.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub tags: Vec<String>,
    /// `"<lat>,<lng>"`, possibly malformed
    pub coordinates: String,
    pub image: ImageRef,
    pub mood: Option<Mood>,
    pub created_at: Option<TimestampMs>,
}

impl Point {
    pub const DEFAULT_TAG: &'static str = "artisan";

    /// Latitude and longitude in degrees if the coordinates are well-formed.
    ///
    /// Finite values outside the valid lat/lng range are kept.
    pub fn lat_lng_deg(&self) -> Option<(f64, f64)> {
        parse_lat_lng_deg(&self.coordinates).ok()
    }

    pub fn has_valid_pos(&self) -> bool {
        self.lat_lng_deg().is_some()
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    pub fn distance_to(&self, pos: MapPoint) -> Option<Distance> {
        let (lat, lng) = pos.to_lat_lng_deg();
        self.lat_lng_deg()
            .map(|(p_lat, p_lng)| haversine_distance_meters(lat, lng, p_lat, p_lng))
            .map(Distance::from_meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::Builder;

    #[test]
    fn valid_position() {
        let p = Point::build().coordinates(" -7.8995, 110.3310 ").finish();
        assert!(p.has_valid_pos());
        assert_eq!(Some((-7.8995, 110.331)), p.lat_lng_deg());
    }

    #[test]
    fn keep_out_of_range_position() {
        let p = Point::build().coordinates("0,181").finish();
        assert!(p.has_valid_pos());
        let d = p.distance_to(MapPoint::from_lat_lng_deg(0.0, 180.0)).unwrap();
        assert!(d.to_meters() > 100_000.0 && d.to_meters() < 120_000.0);
    }

    #[test]
    fn invalid_position() {
        let p = Point::build().coordinates("not-a-coord").finish();
        assert!(!p.has_valid_pos());
        assert_eq!(None, p.distance_to(MapPoint::from_lat_lng_deg(0, 0)));
    }
}
