mod cart;
mod create_point;
mod delete_point;
mod error;
mod filter_points;
mod mood_stats;
mod pick_random;
mod set_mood;
mod update_point;

#[cfg(test)]
pub mod tests;

pub use self::{
    cart::*, create_point::*, delete_point::*, error::Error, filter_points::*, mood_stats::*,
    pick_random::*, set_mood::*, update_point::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
    pub use crate::repositories::Error as RepoError;
}
use self::prelude::*;

pub fn load_point<R>(repo: &R, id: &str) -> Result<Point>
where
    R: PointRepo,
{
    Ok(repo.get_point(id)?)
}

pub fn load_points<R>(repo: &R, filter: &PointFilter) -> Result<Vec<Point>>
where
    R: PointRepo,
{
    let points = repo.all_points()?;
    Ok(filter_points(&points, filter))
}
