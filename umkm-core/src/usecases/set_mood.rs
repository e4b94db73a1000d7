use super::prelude::*;

/// Only the mood of the point is changed.
pub fn set_mood<R>(repo: &R, id: &str, mood: Option<Mood>) -> Result<()>
where
    R: PointRepo,
{
    // The store would silently create a record for an unknown id.
    repo.get_point(id)?;
    log::debug!("Setting mood of point {id} to {}", Mood::encode(mood));
    Ok(repo.update_point_mood(id, mood)?)
}
