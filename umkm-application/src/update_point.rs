use super::*;

pub fn update_point(db: &JsonStore, id: &str, update: usecases::NewPoint) -> Result<Point> {
    let point = usecases::update_point(db, id, update).map_err(|err| {
        warn!("Failed to update point {id}: {err}");
        err
    })?;
    info!("Updated point {} ({})", point.id, point.name);
    Ok(point)
}
