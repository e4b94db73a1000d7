//! A JSON document store with push subscriptions.
//!
//! The whole tree is kept in memory. If opened with a file it is
//! persisted through a single-file [`jfs`] store that holds one
//! record per top-level path segment (`points`, `cart`, ...).

use anyhow::anyhow;
use parking_lot::{Mutex, ReentrantMutex, RwLock};
use serde_json::{Map, Value};
use std::{
    cell::Cell,
    collections::HashMap,
    io,
    path::Path,
    sync::{Arc, Weak},
};
use umkm_core::{
    entities::{Id, TimestampMs},
    repositories::{Error, Result},
    store::{path_segments, RemoteStore, Snapshot, SnapshotCallback, Subscription},
};

mod repo_impl;

#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<Inner>,
}

struct Inner {
    tree: RwLock<Tree>,
    file: Option<jfs::Store>,
    subscribers: Mutex<Subscribers>,
}

#[derive(Default)]
struct Tree {
    root: Map<String, Value>,
    // Incremented on every commit
    seq: u64,
}

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    active: HashMap<u64, Arc<Subscriber>>,
}

struct Subscriber {
    segments: Vec<String>,
    callback: SnapshotCallback,
    // 1 + sequence number of the last delivered snapshot
    delivered: ReentrantMutex<Cell<u64>>,
}

impl Subscriber {
    fn is_affected_by(&self, changed: &[&str]) -> bool {
        self.segments
            .iter()
            .zip(changed)
            .all(|(s, c)| s == c)
    }

    fn deliver(&self, seq: u64, snapshot: &Snapshot) {
        let delivered = self.delivered.lock();
        if delivered.get() > seq {
            // A newer snapshot has already been delivered
            return;
        }
        delivered.set(seq + 1);
        (self.callback)(snapshot);
    }
}

impl Tree {
    fn snapshot(&self, segments: &[&str]) -> Snapshot {
        let Some((first, rest)) = segments.split_first() else {
            return Value::Object(self.root.clone());
        };
        let mut node = match self.root.get(*first) {
            Some(node) => node,
            None => return Value::Null,
        };
        for segment in rest {
            match node.get(*segment) {
                Some(child) => node = child,
                None => return Value::Null,
            }
        }
        node.clone()
    }
}

fn is_empty(value: &Value) -> bool {
    value.is_null() || value.as_object().is_some_and(Map::is_empty)
}

/// Replaces the value below `node` at `segments`.
///
/// Empty values remove the entry and objects that become
/// empty are removed as well.
fn set_at(node: &mut Value, segments: &[&str], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        *node = if is_empty(&value) { Value::Null } else { value };
        return;
    };
    if !node.is_object() {
        if is_empty(&value) {
            return;
        }
        *node = Value::Object(Map::new());
    }
    if let Value::Object(children) = node {
        let child = children.entry(*first).or_insert(Value::Null);
        set_at(child, rest, value);
        if child.is_null() {
            children.remove(*first);
        }
        if children.is_empty() {
            *node = Value::Null;
        }
    }
}

fn new_key() -> String {
    let millis = TimestampMs::now().as_millis();
    let unique = Id::new();
    format!("{millis:012x}-{}", &unique.as_str()[..12])
}

impl JsonStore {
    /// A volatile store that is lost when dropped.
    pub fn in_memory() -> Self {
        Self::with_file(None, Map::new())
    }

    /// Opens or creates the JSON file at `path`.
    pub fn try_open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let cfg = jfs::Config {
            single: true,
            pretty: true,
            ..Default::default()
        };
        let file = jfs::Store::new_with_cfg(path, cfg)?;
        let root = file.all::<Value>()?.into_iter().collect();
        log::debug!("Opened JSON store {}", file.path().display());
        Ok(Self::with_file(Some(file), root))
    }

    fn with_file(file: Option<jfs::Store>, root: Map<String, Value>) -> Self {
        let inner = Inner {
            tree: RwLock::new(Tree { root, seq: 0 }),
            file,
            subscribers: Default::default(),
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.inner.file.as_ref().map(jfs::Store::path)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().active.len()
    }

    fn commit<F>(&self, path: &str, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Value, &[&str]) -> Result<()>,
    {
        let segments = path_segments(path);
        let Some((top, rest)) = segments.split_first() else {
            return Err(Error::InvalidPath(path.to_owned()));
        };
        let (seq, deliveries) = {
            let mut tree = self.inner.tree.write();
            let mut node = tree.root.get(*top).cloned().unwrap_or_default();
            mutate(&mut node, rest)?;
            self.persist(top, &node)?;
            if node.is_null() {
                tree.root.remove(*top);
            } else {
                tree.root.insert((*top).to_owned(), node);
            }
            tree.seq += 1;
            let subscribers = self.inner.subscribers.lock();
            let deliveries: Vec<_> = subscribers
                .active
                .values()
                .filter(|s| s.is_affected_by(&segments))
                .map(|s| {
                    let segments: Vec<_> = s.segments.iter().map(String::as_str).collect();
                    (Arc::clone(s), tree.snapshot(&segments))
                })
                .collect();
            (tree.seq, deliveries)
        };
        log::debug!(
            "Committed change at {path}, notifying {} subscriber(s)",
            deliveries.len()
        );
        for (subscriber, snapshot) in deliveries {
            subscriber.deliver(seq, &snapshot);
        }
        Ok(())
    }

    fn persist(&self, top: &str, node: &Value) -> Result<()> {
        let Some(file) = &self.inner.file else {
            return Ok(());
        };
        if node.is_null() {
            match file.delete(top) {
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                res => res?,
            }
        } else {
            file.save_with_id(node, top)?;
        }
        Ok(())
    }
}

fn release(inner: &Weak<Inner>, id: u64) {
    if let Some(inner) = inner.upgrade() {
        if inner.subscribers.lock().active.remove(&id).is_some() {
            log::debug!("Released subscription #{id}");
        }
    }
}

impl RemoteStore for JsonStore {
    fn subscribe(&self, path: &str, on_snapshot: SnapshotCallback) -> Result<Subscription> {
        let subscriber = Arc::new(Subscriber {
            segments: path_segments(path).into_iter().map(str::to_owned).collect(),
            callback: on_snapshot,
            delivered: ReentrantMutex::new(Cell::new(0)),
        });
        let (seq, snapshot, id) = {
            let tree = self.inner.tree.read();
            let mut subscribers = self.inner.subscribers.lock();
            let id = subscribers.next_id;
            subscribers.next_id += 1;
            subscribers.active.insert(id, Arc::clone(&subscriber));
            (tree.seq, tree.snapshot(&path_segments(path)), id)
        };
        log::debug!("Subscribed #{id} to {path:?}");
        let weak = Arc::downgrade(&self.inner);
        let subscription = Subscription::new(move || release(&weak, id));
        subscriber.deliver(seq, &snapshot);
        Ok(subscription)
    }

    fn read_once(&self, path: &str) -> Result<Snapshot> {
        Ok(self.inner.tree.read().snapshot(&path_segments(path)))
    }

    fn write_record(&self, path: &str, value: Snapshot) -> Result<()> {
        self.commit(path, |node, segments| {
            set_at(node, segments, value);
            Ok(())
        })
    }

    fn update_record(&self, path: &str, partial: Snapshot) -> Result<()> {
        let Value::Object(fields) = partial else {
            return Err(Error::Other(anyhow!(
                "Partial update of {path} is not an object"
            )));
        };
        self.commit(path, |node, segments| {
            for (key, value) in fields {
                let mut target = segments.to_vec();
                target.extend(path_segments(&key));
                if target.len() == segments.len() {
                    return Err(Error::InvalidPath(key));
                }
                set_at(node, &target, value);
            }
            Ok(())
        })
    }

    fn delete_record(&self, path: &str) -> Result<()> {
        self.commit(path, |node, segments| {
            set_at(node, segments, Value::Null);
            Ok(())
        })
    }

    fn generate_key(&self, path: &str) -> Result<String> {
        if path_segments(path).is_empty() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        Ok(new_key())
    }
}
