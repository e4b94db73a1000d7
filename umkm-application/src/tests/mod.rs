pub mod prelude {
    use parking_lot::Mutex;
    use std::sync::Arc;

    pub use crate::{error::*, prelude::*};
    pub use umkm_core::{
        gateways::{
            location::{LocationError, LocationGateway, Permission},
            notify::NotificationGateway,
        },
        store::RemoteStore,
        usecases::NewPoint,
    };

    pub fn new_point(name: &str) -> NewPoint {
        let _ = env_logger::builder().is_test(true).try_init();
        NewPoint {
            name: name.into(),
            description: "Kerajinan tangan".into(),
            category: "batik".into(),
            lat: "-7.8995".into(),
            lng: "110.3310".into(),
            image_uri: None,
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        Found(Id),
        Dismissed(Id),
    }

    pub type Recorded = Arc<Mutex<Vec<Event>>>;

    pub struct RecordingNotifier {
        events: Recorded,
    }

    impl RecordingNotifier {
        pub fn new() -> (Self, Recorded) {
            let events = Recorded::default();
            let notifier = Self {
                events: Arc::clone(&events),
            };
            (notifier, events)
        }
    }

    impl NotificationGateway for RecordingNotifier {
        fn hidden_gem_found(&self, point: &Point, _: Distance) {
            self.events.lock().push(Event::Found(point.id.clone()));
        }
        fn hidden_gem_dismissed(&self, point_id: &Id) {
            self.events.lock().push(Event::Dismissed(point_id.clone()));
        }
    }

    /// Permission is granted but the device never gets a fix.
    pub struct NoFixLocation;

    impl LocationGateway for NoFixLocation {
        fn request_permission(&self) -> Permission {
            Permission::Granted
        }
        fn current_position(&self) -> std::result::Result<UserLocation, LocationError> {
            Err(LocationError::Unavailable("no gps fix".into()))
        }
    }

    pub use umkm_core::{
        entities::*,
        repositories::{CartRepo, PointRepo},
        usecases,
    };
    pub use umkm_db_jfs::JsonStore;
    pub use umkm_gateways::location::{DeniedLocation, FixedLocation};
}
