use super::*;

impl JsonStore {
    fn existing_point(&self, id: &str) -> Result<Snapshot> {
        check_key(id)?;
        let snapshot = self.read_once(&store::point_path(id))?;
        if snapshot.is_null() {
            return Err(Error::NotFound);
        }
        Ok(snapshot)
    }
}

impl PointRepo for JsonStore {
    fn new_point_id(&self) -> Result<Id> {
        self.generate_key(POINTS_PATH).map(Id::from)
    }

    fn get_point(&self, id: &str) -> Result<Point> {
        let snapshot = self.existing_point(id)?;
        // Malformed records are as good as missing
        store::point_from_snapshot(id, &snapshot).ok_or(Error::NotFound)
    }

    fn all_points(&self) -> Result<Vec<Point>> {
        let snapshot = self.read_once(POINTS_PATH)?;
        Ok(store::points_from_snapshot(&snapshot))
    }

    fn create_or_replace_point(&self, point: &Point) -> Result<()> {
        check_key(point.id.as_str())?;
        let record = serde_json::to_value(PointRecord::from(point))?;
        self.write_record(&store::point_path(point.id.as_str()), record)?;
        log::info!("Stored point {} ({})", point.id, point.name);
        Ok(())
    }

    fn update_point_mood(&self, id: &str, mood: Option<Mood>) -> Result<()> {
        self.existing_point(id)?;
        let mut partial = serde_json::Map::new();
        partial.insert("mood".into(), Mood::encode(mood).into());
        self.update_record(&store::point_path(id), partial.into())?;
        log::info!("Changed mood of point {id} to {}", Mood::encode(mood));
        Ok(())
    }

    fn delete_point(&self, id: &str) -> Result<()> {
        self.existing_point(id)?;
        self.delete_record(&store::point_path(id))?;
        log::info!("Deleted point {id}");
        Ok(())
    }
}
