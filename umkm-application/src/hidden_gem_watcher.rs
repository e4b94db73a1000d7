//! Live "hidden gem" detection on top of the remote store.
//!
//! The watcher keeps the latest point snapshot together with the
//! latest user location and re-evaluates the nearest point whenever
//! either of them changes.

use super::*;
use parking_lot::Mutex;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use umkm_core::{
    gateways::{
        location::{self, LocationGateway},
        notify::NotificationGateway,
    },
    hidden_gem::HiddenGemAlert,
    proximity,
    store::{self, RemoteStore, Snapshot, Subscription},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatcherConfig {
    pub radius: Distance,
    pub display_duration: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            radius: proximity::HIDDEN_GEM_RADIUS,
            display_duration: proximity::HIDDEN_GEM_DISPLAY_DURATION,
        }
    }
}

struct WatcherState {
    radius: Distance,
    points: Vec<Point>,
    location: Option<UserLocation>,
    // Unavailability is only reported once until the next successful fix.
    unavailable_reported: bool,
    alert: HiddenGemAlert,
}

enum Notification {
    Found(Point, Distance),
    Dismissed(Id),
}

struct Shared {
    state: Mutex<WatcherState>,
    notify: Box<dyn NotificationGateway + Send + Sync>,
}

impl Shared {
    fn update<F>(&self, now: Instant, change: F)
    where
        F: FnOnce(&mut WatcherState),
    {
        let notifications = {
            let mut state = self.state.lock();
            change(&mut state);
            state.evaluate(now)
        };
        self.dispatch(notifications);
    }

    fn dispatch(&self, notifications: Vec<Notification>) {
        for n in notifications {
            match n {
                Notification::Found(point, distance) => {
                    self.notify.hidden_gem_found(&point, distance)
                }
                Notification::Dismissed(id) => self.notify.hidden_gem_dismissed(&id),
            }
        }
    }
}

impl WatcherState {
    fn evaluate(&mut self, now: Instant) -> Vec<Notification> {
        let mut notifications = vec![];
        if let Some(id) = self.alert.tick(now) {
            notifications.push(Notification::Dismissed(id));
        }
        let nearest = self
            .location
            .as_ref()
            .and_then(|location| proximity::nearest_hidden_gem(&self.points, location, self.radius));
        let previous = self.alert.target().cloned();
        if let Some(id) = self.alert.evaluate(nearest.map(|(p, _)| p), now) {
            if let Some(previous) = previous.filter(|p| *p != id) {
                notifications.push(Notification::Dismissed(previous));
            }
            if let Some((point, distance)) = nearest {
                info!("Found hidden gem {} at {distance}", point.id);
                notifications.push(Notification::Found(point.clone(), distance));
            }
        }
        notifications
    }
}

/// Watches the points of a [`RemoteStore`] while it is active.
pub struct HiddenGemWatcher {
    shared: Arc<Shared>,
    subscription: Option<Subscription>,
}

impl HiddenGemWatcher {
    pub fn new<N>(notify: N, config: WatcherConfig) -> Self
    where
        N: NotificationGateway + Send + Sync + 'static,
    {
        let state = WatcherState {
            radius: config.radius,
            points: vec![],
            location: None,
            unavailable_reported: false,
            alert: HiddenGemAlert::new(config.display_duration),
        };
        let shared = Shared {
            state: Mutex::new(state),
            notify: Box::new(notify),
        };
        Self {
            shared: Arc::new(shared),
            subscription: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Starts listening to all points of the store.
    pub fn activate(&mut self, db: &dyn RemoteStore) -> Result<()> {
        if self.is_active() {
            return Ok(());
        }
        let shared = Arc::clone(&self.shared);
        let subscription = db.subscribe(
            store::POINTS_PATH,
            Box::new(move |snapshot: &Snapshot| {
                let points = store::points_from_snapshot(snapshot);
                debug!("Received snapshot with {} points", points.len());
                shared.update(Instant::now(), |state| state.points = points);
            }),
        )?;
        self.subscription = Some(subscription);
        Ok(())
    }

    /// Releases the subscription and dismisses a pending alert.
    pub fn deactivate(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            debug!("Hidden gem watcher deactivated");
        }
        let dismissed = self.shared.state.lock().alert.leave();
        self.shared
            .dispatch(dismissed.map(Notification::Dismissed).into_iter().collect());
    }

    pub fn set_location(&self, location: Option<UserLocation>) {
        self.set_location_at(location, Instant::now());
    }

    pub fn set_location_at(&self, location: Option<UserLocation>, now: Instant) {
        self.shared.update(now, |state| state.location = location);
    }

    /// Requests a position fix from the device.
    ///
    /// Without permission or without a fix the watcher forgets the
    /// last position and stays idle.
    pub fn locate(&self, gw: &dyn LocationGateway) -> Option<UserLocation> {
        match location::locate(gw) {
            Ok(location) => {
                self.shared.update(Instant::now(), |state| {
                    state.unavailable_reported = false;
                    state.location = Some(location);
                });
                Some(location)
            }
            Err(err) => {
                self.shared.update(Instant::now(), |state| {
                    if !state.unavailable_reported {
                        info!("{err}, hidden gems are disabled");
                        state.unavailable_reported = true;
                    }
                    state.location = None;
                });
                None
            }
        }
    }

    pub fn tick(&self) {
        self.tick_at(Instant::now());
    }

    /// Expires a displayed alert.
    pub fn tick_at(&self, now: Instant) {
        self.shared.update(now, |_| {});
    }

    /// The point that is currently alerted.
    pub fn current_alert(&self) -> Option<Point> {
        let state = self.shared.state.lock();
        let target = state.alert.target()?;
        state.points.iter().find(|p| &p.id == target).cloned()
    }

    pub fn point_count(&self) -> usize {
        self.shared.state.lock().points.len()
    }
}

impl Drop for HiddenGemWatcher {
    fn drop(&mut self) {
        self.deactivate();
    }
}
