use super::prelude::*;
use crate::util::validate::is_blank;
use std::str::FromStr;

const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Option<&Category>) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => category == Some(c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        Ok(Self::Only(s.parse()?))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoodFilter {
    #[default]
    All,
    Only(Mood),
}

impl MoodFilter {
    pub fn matches(self, mood: Option<Mood>) -> bool {
        match self {
            Self::All => true,
            Self::Only(m) => mood == Some(m),
        }
    }
}

impl FromStr for MoodFilter {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        s.parse()
            .map(Self::Only)
            .map_err(|_| Error::UnknownMood(s.to_owned()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointFilter {
    pub category: CategoryFilter,
    pub mood: MoodFilter,
    pub text: Option<String>,
    /// Only points that can be placed on a map.
    pub geo_only: bool,
}

impl PointFilter {
    pub fn matches(&self, point: &Point) -> bool {
        self.category.matches(point.category.as_ref())
            && self.mood.matches(point.mood)
            && matches_text(point, self.text.as_deref().unwrap_or_default())
            && (!self.geo_only || point.has_valid_pos())
    }
}

/// Case-insensitive substring search on the name.
pub fn matches_text(point: &Point, text: &str) -> bool {
    is_blank(text)
        || point
            .name
            .to_lowercase()
            .contains(&text.trim().to_lowercase())
}

pub fn filter_points(points: &[Point], filter: &PointFilter) -> Vec<Point> {
    points
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}
