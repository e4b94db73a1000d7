use super::*;

pub fn set_mood(db: &JsonStore, id: &str, mood: Option<Mood>) -> Result<()> {
    usecases::set_mood(db, id, mood).map_err(|err| {
        warn!("Failed to set mood of point {id}: {err}");
        err
    })?;
    info!("Mood of point {id} is now {}", Mood::encode(mood));
    Ok(())
}
