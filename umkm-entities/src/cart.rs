use crate::id::Id;
use std::fmt;

pub const DEFAULT_USER_ID: &str = "demo_user";

/// Namespace of a personal cart.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(String);

impl Default for UserId {
    fn default() -> Self {
        Self(DEFAULT_USER_ID.to_owned())
    }
}

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for UserId {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.0)
    }
}

/// The shortlist of a single user: a set of point ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    pub user: UserId,
    pub point_ids: Vec<Id>,
}

impl Cart {
    pub fn contains(&self, point_id: &str) -> bool {
        self.point_ids.iter().any(|id| id.as_str() == point_id)
    }

    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.point_ids.len()
    }
}
