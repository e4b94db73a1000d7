use super::*;

pub fn delete_point(db: &JsonStore, id: &str) -> Result<()> {
    usecases::delete_point(db, id).map_err(|err| {
        warn!("Failed to delete point {id}: {err}");
        err
    })?;
    info!("Deleted point {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::prelude::*;

    #[test]
    fn delete_created_point() {
        let db = JsonStore::in_memory();
        let point = create_point(&db, new_point("Kayu")).unwrap();
        delete_point(&db, point.id.as_str()).unwrap();
        assert!(db.all_points().unwrap().is_empty());
        assert!(delete_point(&db, point.id.as_str()).unwrap_err().is_not_found());
    }
}
