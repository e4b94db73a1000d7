// Low-level data access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("Invalid store path: {0}")]
    InvalidPath(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait PointRepo {
    /// Allocates the id of a point that is about to be created.
    fn new_point_id(&self) -> Result<Id>;

    fn get_point(&self, id: &str) -> Result<Point>;
    fn all_points(&self) -> Result<Vec<Point>>;
    fn count_points(&self) -> Result<usize> {
        Ok(self.all_points()?.len())
    }

    /// Overwrites the whole record.
    fn create_or_replace_point(&self, point: &Point) -> Result<()>;

    /// Only touches the mood, all other fields are kept.
    fn update_point_mood(&self, id: &str, mood: Option<Mood>) -> Result<()>;

    fn delete_point(&self, id: &str) -> Result<()>;
}

pub trait CartRepo {
    fn load_cart(&self, user: &UserId) -> Result<Cart>;
    fn add_to_cart(&self, user: &UserId, point_id: &str) -> Result<()>;
    fn remove_from_cart(&self, user: &UserId, point_id: &str) -> Result<()>;
}
