//! Contract of the remote point store.
//!
//! The store is a tree of JSON values addressed by `/`-separated
//! paths. Subscribers always receive the complete current value
//! below the subscribed path, never deltas.

use crate::repositories::Result;
use std::fmt;

mod record;

pub use self::record::*;

/// The full current state below a path, `Null` if absent.
pub type Snapshot = serde_json::Value;

pub type SnapshotCallback = Box<dyn Fn(&Snapshot) + Send + Sync>;

pub const POINTS_PATH: &str = "points";
pub const CART_PATH: &str = "cart";

pub trait RemoteStore {
    /// Registers `on_snapshot` for all changes at or below `path`.
    ///
    /// The callback is invoked once with the current snapshot before
    /// this function returns and then after every committed change.
    fn subscribe(&self, path: &str, on_snapshot: SnapshotCallback) -> Result<Subscription>;

    fn read_once(&self, path: &str) -> Result<Snapshot>;

    /// Replaces the value at `path`.
    fn write_record(&self, path: &str, value: Snapshot) -> Result<()>;

    /// Merges the fields of `partial` into the object at `path`.
    fn update_record(&self, path: &str, partial: Snapshot) -> Result<()>;

    fn delete_record(&self, path: &str) -> Result<()>;

    /// Allocates a new unique child location below `path`.
    fn generate_key(&self, path: &str) -> Result<String>;
}

/// Keeps a subscription alive.
///
/// The registration is released by [`Subscription::unsubscribe`]
/// or when the handle is dropped.
#[must_use = "dropping a subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Splits a path into its non-empty segments: `"points/"` equals `"points"`.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

pub fn point_path(id: &str) -> String {
    format!("{POINTS_PATH}/{id}")
}

pub fn cart_path(user: &str) -> String {
    format!("{CART_PATH}/{user}")
}

pub fn cart_entry_path(user: &str, point_id: &str) -> String {
    format!("{CART_PATH}/{user}/{point_id}")
}
