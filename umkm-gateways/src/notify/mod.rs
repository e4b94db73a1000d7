use std::sync::Arc;
use umkm_core::{
    entities::{Distance, Id, Point},
    gateways::notify::NotificationGateway,
};

mod log_only;
mod send_to_json_file;

pub use self::{log_only::*, send_to_json_file::*};

/// Forwards every notification to all registered gateways.
#[derive(Clone, Default)]
pub struct Notify {
    gateways: Vec<Arc<dyn NotificationGateway + Send + Sync + 'static>>,
}

impl Notify {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<G>(mut self, gw: G) -> Self
    where
        G: NotificationGateway + Send + Sync + 'static,
    {
        self.gateways.push(Arc::new(gw));
        self
    }
}

impl NotificationGateway for Notify {
    fn hidden_gem_found(&self, point: &Point, distance: Distance) {
        for gw in &self.gateways {
            gw.hidden_gem_found(point, distance);
        }
    }

    fn hidden_gem_dismissed(&self, point_id: &Id) {
        for gw in &self.gateways {
            gw.hidden_gem_dismissed(point_id);
        }
    }
}
