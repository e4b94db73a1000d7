use super::{filter_points::matches_text, prelude::*};
use crate::util::validate::is_blank;

pub fn add_to_cart<R>(repo: &R, user: &UserId, point_id: &str) -> Result<()>
where
    R: PointRepo + CartRepo,
{
    repo.get_point(point_id)?;
    log::debug!("Adding point {point_id} to the cart of {user}");
    Ok(repo.add_to_cart(user, point_id)?)
}

pub fn remove_from_cart<R>(repo: &R, user: &UserId, point_id: &str) -> Result<()>
where
    R: CartRepo,
{
    log::debug!("Removing point {point_id} from the cart of {user}");
    Ok(repo.remove_from_cart(user, point_id)?)
}

/// Resolves the cart of `user` to its points in cart order.
///
/// Entries whose point no longer exists or has no name are skipped.
pub fn load_cart<R>(repo: &R, user: &UserId, search: Option<&str>) -> Result<Vec<Point>>
where
    R: PointRepo + CartRepo,
{
    let cart = repo.load_cart(user)?;
    let mut points = Vec::with_capacity(cart.len());
    for id in &cart.point_ids {
        match repo.get_point(id.as_str()) {
            Ok(point) if !is_blank(&point.name) => points.push(point),
            Ok(_) => log::debug!("Skipping unnamed point {id} in cart"),
            Err(RepoError::NotFound) => log::debug!("Skipping missing point {id} in cart"),
            Err(err) => return Err(err.into()),
        }
    }
    let search = search.unwrap_or_default();
    points.retain(|p| matches_text(p, search));
    Ok(points)
}
