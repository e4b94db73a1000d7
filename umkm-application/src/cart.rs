use super::*;

pub fn add_to_cart(db: &JsonStore, user: &UserId, point_id: &str) -> Result<()> {
    usecases::add_to_cart(db, user, point_id).map_err(|err| {
        warn!("Failed to add point {point_id} to the cart: {err}");
        err
    })?;
    Ok(())
}

pub fn remove_from_cart(db: &JsonStore, user: &UserId, point_id: &str) -> Result<()> {
    usecases::remove_from_cart(db, user, point_id).map_err(|err| {
        warn!("Failed to remove point {point_id} from the cart: {err}");
        err
    })?;
    Ok(())
}

pub fn load_cart(db: &JsonStore, user: &UserId, search: Option<&str>) -> Result<Vec<Point>> {
    Ok(usecases::load_cart(db, user, search)?)
}
