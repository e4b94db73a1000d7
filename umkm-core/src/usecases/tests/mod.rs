use crate::{entities::*, repositories::*};
use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet},
};

pub mod builders;

pub mod prelude {
    pub use super::builders::*;
    pub use crate::{
        entities::*,
        repositories::{CartRepo, Error as RepoError, PointRepo},
    };
}

#[derive(Default)]
pub struct MockDb {
    pub points: RefCell<Vec<Point>>,
    pub carts: RefCell<BTreeMap<UserId, BTreeSet<Id>>>,
    next_id: Cell<usize>,
}

impl PointRepo for MockDb {
    fn new_point_id(&self) -> Result<Id> {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        Ok(Id::from(format!("point{n}")))
    }

    fn get_point(&self, id: &str) -> Result<Point> {
        self.points
            .borrow()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_points(&self) -> Result<Vec<Point>> {
        Ok(self.points.borrow().clone())
    }

    fn create_or_replace_point(&self, point: &Point) -> Result<()> {
        let mut points = self.points.borrow_mut();
        if let Some(pos) = points.iter().position(|p| p.id == point.id) {
            points[pos] = point.clone();
        } else {
            points.push(point.clone());
        }
        Ok(())
    }

    fn update_point_mood(&self, id: &str, mood: Option<Mood>) -> Result<()> {
        let mut points = self.points.borrow_mut();
        let point = points
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(Error::NotFound)?;
        point.mood = mood;
        Ok(())
    }

    fn delete_point(&self, id: &str) -> Result<()> {
        let mut points = self.points.borrow_mut();
        let pos = points
            .iter()
            .position(|p| p.id.as_str() == id)
            .ok_or(Error::NotFound)?;
        points.remove(pos);
        Ok(())
    }
}

impl CartRepo for MockDb {
    fn load_cart(&self, user: &UserId) -> Result<Cart> {
        let point_ids = self
            .carts
            .borrow()
            .get(user)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default();
        Ok(Cart {
            user: user.clone(),
            point_ids,
        })
    }

    fn add_to_cart(&self, user: &UserId, point_id: &str) -> Result<()> {
        self.carts
            .borrow_mut()
            .entry(user.clone())
            .or_default()
            .insert(point_id.into());
        Ok(())
    }

    fn remove_from_cart(&self, user: &UserId, point_id: &str) -> Result<()> {
        if let Some(ids) = self.carts.borrow_mut().get_mut(user) {
            ids.remove(point_id);
        }
        Ok(())
    }
}
