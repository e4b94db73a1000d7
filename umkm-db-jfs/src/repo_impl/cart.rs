use super::*;

impl CartRepo for JsonStore {
    fn load_cart(&self, user: &UserId) -> Result<Cart> {
        check_key(user.as_str())?;
        let snapshot = self.read_once(&store::cart_path(user.as_str()))?;
        Ok(Cart {
            user: user.clone(),
            point_ids: store::cart_ids_from_snapshot(&snapshot),
        })
    }

    fn add_to_cart(&self, user: &UserId, point_id: &str) -> Result<()> {
        check_key(user.as_str())?;
        check_key(point_id)?;
        self.write_record(
            &store::cart_entry_path(user.as_str(), point_id),
            Value::Bool(true),
        )?;
        log::info!("Added point {point_id} to the cart of {user}");
        Ok(())
    }

    fn remove_from_cart(&self, user: &UserId, point_id: &str) -> Result<()> {
        check_key(user.as_str())?;
        check_key(point_id)?;
        self.delete_record(&store::cart_entry_path(user.as_str(), point_id))?;
        log::info!("Removed point {point_id} from the cart of {user}");
        Ok(())
    }
}
