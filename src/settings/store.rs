//! Key/value preference store and change subscriptions.

use crossbeam::channel::{unbounded, Receiver, Sender};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

/// A registered change listener.
///
/// The receiver yields the raw key of every preference written while the
/// subscription is live.
#[derive(Debug)]
pub struct Subscription {
    pub id: Uuid,
    pub changes: Receiver<String>,
}

/// Source of raw preference strings.
pub trait PreferenceStore: Send + Sync {
    /// Read a value, returning `default` when the key is absent.
    fn get_string(&self, key: &str, default: &str) -> String;

    /// Register a change listener.
    fn subscribe(&self) -> Subscription;

    /// Remove a change listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: &Uuid);
}

/// In-memory preference store.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
    listeners: RwLock<HashMap<Uuid, Sender<String>>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given values. No listeners are notified.
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(values),
            listeners: RwLock::new(HashMap::new()),
        }
    }

    /// Write a value and notify listeners.
    pub fn set_string(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone(), value.into());
        self.notify(&key);
    }

    /// Remove a value and notify listeners.
    pub fn remove(&self, key: &str) {
        let removed = self
            .values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        if removed.is_some() {
            self.notify(key);
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, key: &str) {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Drop listeners whose receiver is gone
        listeners.retain(|id, tx| {
            let alive = tx.send(key.to_string()).is_ok();
            if !alive {
                tracing::debug!("Dropping disconnected preference listener {}", id);
            }
            alive
        });
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn subscribe(&self) -> Subscription {
        let (tx, rx) = unbounded();
        let id = Uuid::new_v4();
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, tx);
        tracing::debug!("Registered preference listener {}", id);
        Subscription { id, changes: rx }
    }

    fn unsubscribe(&self, id: &Uuid) {
        let removed = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
        if removed.is_some() {
            tracing::debug!("Unregistered preference listener {}", id);
        }
    }
}
