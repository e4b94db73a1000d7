use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg.is_finite());
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg.is_finite());
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapPointParseError {
    #[error("Empty coordinates")]
    Empty,
    #[error("Expected exactly two comma separated values: {0}")]
    Format(String),
    #[error("Invalid latitude: {0}")]
    Latitude(String),
    #[error("Invalid longitude: {0}")]
    Longitude(String),
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    /// Great-circle distance on the surface of the earth (haversine).
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1, lng1) = p1.to_lat_lng_deg();
        let (lat2, lng2) = p2.to_lat_lng_deg();
        Distance::from_meters(haversine_distance_meters(lat1, lng1, lat2, lng2))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses the `"<lat>,<lng>"` encoding into decimal degrees, ignoring all whitespace.
///
/// Both values only need to be finite numbers, the range is not checked.
pub fn parse_lat_lng_deg(s: &str) -> Result<(f64, f64), MapPointParseError> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Err(MapPointParseError::Empty);
    }
    let Some((lat_deg_str, lng_deg_str)) = cleaned.split(',').collect_tuple() else {
        return Err(MapPointParseError::Format(cleaned));
    };
    let lat = lat_deg_str
        .parse::<f64>()
        .ok()
        .filter(|deg| deg.is_finite())
        .ok_or_else(|| MapPointParseError::Latitude(lat_deg_str.to_owned()))?;
    let lng = lng_deg_str
        .parse::<f64>()
        .ok()
        .filter(|deg| deg.is_finite())
        .ok_or_else(|| MapPointParseError::Longitude(lng_deg_str.to_owned()))?;
    Ok((lat, lng))
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = parse_lat_lng_deg(s)?;
        let lat = LatCoord::try_from_deg(lat)
            .ok_or_else(|| MapPointParseError::Latitude(lat.to_string()))?;
        let lng = LngCoord::try_from_deg(lng)
            .ok_or_else(|| MapPointParseError::Longitude(lng.to_string()))?;
        Ok(Self::new(lat, lng))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if self.0 < 1_000.0 {
            write!(f, "{:.0} m", self.0)
        } else {
            write!(f, "{:.2} km", self.0 / 1_000.0)
        }
    }
}

pub const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

/// Great-circle distance in meters between two positions given in degrees.
///
/// Swapping both positions yields the bit-identical result.
pub fn haversine_distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).abs().to_radians();
    let dlng = (lon2 - lon1).abs().to_radians();

    let dlat_sin = (dlat / 2.0).sin();
    let dlng_sin = (dlng / 2.0).sin();
    let a = dlat_sin * dlat_sin + lat1_rad.cos() * lat2_rad.cos() * dlng_sin * dlng_sin;
    // rounding may push `a` slightly above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    MEAN_EARTH_RADIUS.to_meters() * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn latitude() {
        assert_eq!(0.0, LatCoord::from_deg(0).to_deg());
        assert_eq!(LatCoord::min(), LatCoord::from_deg(-90));
        assert_eq!(LatCoord::max(), LatCoord::from_deg(90));
        assert_eq!(None, LatCoord::try_from_deg(-90.000001));
        assert_eq!(None, LatCoord::try_from_deg(90.000001));
        assert_eq!(None, LatCoord::try_from_deg(f64::NAN));
    }

    #[test]
    fn longitude() {
        assert_eq!(LngCoord::min(), LngCoord::from_deg(-180));
        assert_eq!(LngCoord::max(), LngCoord::from_deg(180));
        assert_eq!(None, LngCoord::try_from_deg(-180.000001));
        assert_eq!(None, LngCoord::try_from_deg(180.000001));
        assert_eq!(None, LngCoord::try_from_deg(f64::INFINITY));
    }

    #[test]
    fn parse_map_point() {
        let p: MapPoint = "-7.8995,110.3310".parse().unwrap();
        assert_eq!((-7.8995, 110.331), p.to_lat_lng_deg());
        let p: MapPoint = " -7.8995 , 110.3310\n".parse().unwrap();
        assert_eq!((-7.8995, 110.331), p.to_lat_lng_deg());
        let p: MapPoint = "- 7.8995,1 10.3310".parse().unwrap();
        assert_eq!((-7.8995, 110.331), p.to_lat_lng_deg());
    }

    #[test]
    fn parse_invalid_map_points() {
        assert_eq!(Err(MapPointParseError::Empty), "".parse::<MapPoint>());
        assert_eq!(Err(MapPointParseError::Empty), "  \t ".parse::<MapPoint>());
        assert!(matches!(
            "-7.8995".parse::<MapPoint>(),
            Err(MapPointParseError::Format(_))
        ));
        assert!(matches!(
            "1,2,3".parse::<MapPoint>(),
            Err(MapPointParseError::Format(_))
        ));
        assert!(matches!(
            "abc,110.3".parse::<MapPoint>(),
            Err(MapPointParseError::Latitude(_))
        ));
        assert!(matches!(
            "-7.8,xyz".parse::<MapPoint>(),
            Err(MapPointParseError::Longitude(_))
        ));
        assert!(matches!(
            "NaN,110".parse::<MapPoint>(),
            Err(MapPointParseError::Latitude(_))
        ));
        assert!(matches!(
            "1,inf".parse::<MapPoint>(),
            Err(MapPointParseError::Longitude(_))
        ));
        assert!(matches!(
            "91,0".parse::<MapPoint>(),
            Err(MapPointParseError::Latitude(_))
        ));
        assert!(",".parse::<MapPoint>().is_err());
    }

    #[test]
    fn parse_degrees_without_range_check() {
        assert_eq!(Ok((95.0, 10.0)), parse_lat_lng_deg("95,10"));
        assert_eq!(Ok((0.0, 181.0)), parse_lat_lng_deg(" 0 , 181"));
        assert!(matches!(
            parse_lat_lng_deg("1,-inf"),
            Err(MapPointParseError::Longitude(_))
        ));
        assert!(matches!(
            "0,181".parse::<MapPoint>(),
            Err(MapPointParseError::Longitude(_))
        ));
    }

    #[test]
    fn display_and_parse_again() {
        let p = MapPoint::from_lat_lng_deg(-7.8995, 110.331);
        assert_eq!("-7.8995,110.331", p.to_string());
        assert_eq!(p, p.to_string().parse().unwrap());
    }

    #[test]
    fn no_distance() {
        let p1 = MapPoint::from_lat_lng_deg(0.0, 0.0);
        assert_eq!(MapPoint::distance(p1, p1).to_meters(), 0.0);

        let p2 = MapPoint::from_lat_lng_deg(-25.0, 55.0);
        assert_eq!(MapPoint::distance(p2, p2).to_meters(), 0.0);

        let p1 = MapPoint::from_lat_lng_deg(-15.0, -180.0);
        let p2 = MapPoint::from_lat_lng_deg(-15.0, 180.0);
        assert!(MapPoint::distance(p1, p2).to_meters() < 0.000001);
    }

    #[test]
    fn real_distance() {
        let stuttgart = MapPoint::from_lat_lng_deg(48.7755, 9.1827);
        let mannheim = MapPoint::from_lat_lng_deg(49.4836, 8.4630);
        assert!(MapPoint::distance(stuttgart, mannheim) > Distance::from_meters(94_000.0));
        assert!(MapPoint::distance(stuttgart, mannheim) < Distance::from_meters(95_000.0));

        let new_york = MapPoint::from_lat_lng_deg(40.714268, -74.005974);
        let sidney = MapPoint::from_lat_lng_deg(-33.867138, 151.207108);
        assert!(MapPoint::distance(new_york, sidney) > Distance::from_meters(15_980_000.0));
        assert!(MapPoint::distance(new_york, sidney) < Distance::from_meters(15_995_000.0));
    }

    #[test]
    fn short_distances_around_bantul() {
        let d = haversine_distance_meters(-7.8995, 110.3310, -7.8990, 110.3310);
        assert!(d > 55.0 && d < 56.0, "{d}");
        let d = haversine_distance_meters(-7.8995, 110.3310, -7.9500, 110.3310);
        assert!(d > 150.0, "{d}");
    }

    #[test]
    fn antimeridian_is_not_a_wraparound() {
        let d = haversine_distance_meters(0.0, 179.9995, 0.0, -179.9995);
        assert!(d > 100.0 && d < 120.0, "{d}");
    }

    #[test]
    fn symetric_distance() {
        let a = MapPoint::from_lat_lng_deg(80.0, 0.0);
        let b = MapPoint::from_lat_lng_deg(90.0, 20.0);
        assert_eq!(MapPoint::distance(a, b), MapPoint::distance(b, a));
    }

    fn random_map_point<T: Rng>(rng: &mut T) -> MapPoint {
        let lat = rng.gen_range(LatCoord::min().to_deg()..=LatCoord::max().to_deg());
        let lng = rng.gen_range(LngCoord::min().to_deg()..=LngCoord::max().to_deg());
        MapPoint::from_lat_lng_deg(lat, lng)
    }

    #[test]
    fn random_distances_are_symetric_and_positive() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let p1 = random_map_point(&mut rng);
            let p2 = random_map_point(&mut rng);
            let d = MapPoint::distance(p1, p2);
            assert!(d.is_valid());
            assert_eq!(d, MapPoint::distance(p2, p1));
            assert_eq!(0.0, MapPoint::distance(p1, p1).to_meters());
        }
    }

    #[test]
    fn format_distance() {
        assert_eq!("56 m", Distance::from_meters(55.6).to_string());
        assert_eq!("5.62 km", Distance::from_meters(5_615.0).to_string());
    }
}
