use super::*;

pub fn create_point(db: &JsonStore, new_point: usecases::NewPoint) -> Result<Point> {
    let point = usecases::create_point(db, new_point).map_err(|err| {
        warn!("Failed to create point: {err}");
        err
    })?;
    info!("Created point {} ({})", point.id, point.name);
    Ok(point)
}
