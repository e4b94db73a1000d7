use crate::entities::{Distance, Id, Point};

pub trait NotificationGateway {
    fn hidden_gem_found(&self, point: &Point, distance: Distance);
    fn hidden_gem_dismissed(&self, point_id: &Id);
}
