use super::{create_point::validate_new_point, prelude::*, NewPoint};

/// Overwrites the editable fields of an existing point.
///
/// Id, tags, mood, creation time and a bundled image are kept.
pub fn update_point<R>(repo: &R, id: &str, update: NewPoint) -> Result<Point>
where
    R: PointRepo,
{
    let valid = validate_new_point(update)?;
    let old = repo.get_point(id)?;
    let coordinates = valid.coordinates();
    let point = Point {
        name: valid.name,
        description: Some(valid.description),
        category: Some(valid.category),
        coordinates,
        image: ImageRef {
            uri: valid.image_uri,
            local: old.image.local.clone(),
        },
        ..old
    };
    log::debug!("Updating point {}", point.id);
    repo.create_or_replace_point(&point)?;
    Ok(point)
}
