use umkm_core::{
    entities::{Distance, Id, Point},
    gateways::notify::NotificationGateway,
};

/// Reports hidden gems through the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationGateway for LogNotifier {
    fn hidden_gem_found(&self, point: &Point, distance: Distance) {
        let category = point
            .category
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        log::info!(
            "Hidden gem nearby: {} [{category}] {distance} away",
            point.name
        );
    }

    fn hidden_gem_dismissed(&self, point_id: &Id) {
        log::debug!("Hidden gem alert for {point_id} dismissed");
    }
}
