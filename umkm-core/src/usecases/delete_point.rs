use super::prelude::*;

pub fn delete_point<R>(repo: &R, id: &str) -> Result<()>
where
    R: PointRepo,
{
    log::debug!("Deleting point {id}");
    Ok(repo.delete_point(id)?)
}
