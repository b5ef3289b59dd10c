//! Thread-safe handle around a [`RelationshipStore`].
//!
//! One mutex guards both the records and the pending tier-change event, so
//! `add_points` (read, clamp, write, maybe overwrite the event) stays atomic
//! as a unit. Hosts that run scripts and UI on one thread can use the plain
//! store instead.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::stats::StatsReport;
use crate::store::{PointsChange, RelationshipStore};
use crate::tier::RelationshipTier;

/// Cloneable, lock-protected relationship store.
#[derive(Debug, Clone, Default)]
pub struct SharedRelationshipStore {
    inner: Arc<Mutex<RelationshipStore>>,
}

impl SharedRelationshipStore {
    /// Wrap an existing store.
    #[must_use]
    pub fn new(store: RelationshipStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access, for compound reads or writes.
    pub fn with<R>(&self, f: impl FnOnce(&mut RelationshipStore) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`RelationshipStore::register`].
    pub fn register(&self, name: &str, max_points: u32) -> bool {
        self.inner.lock().register(name, max_points)
    }

    /// See [`RelationshipStore::add_points`].
    pub fn add_points(&self, name: &str, delta: i32) -> Option<PointsChange> {
        self.inner.lock().add_points(name, delta)
    }

    /// See [`RelationshipStore::reset`].
    pub fn reset(&self, name: Option<&str>) -> bool {
        self.inner.lock().reset(name)
    }

    /// See [`RelationshipStore::points`].
    #[must_use]
    pub fn points(&self, name: &str) -> u32 {
        self.inner.lock().points(name)
    }

    /// See [`RelationshipStore::percentage`].
    #[must_use]
    pub fn percentage(&self, name: &str) -> f32 {
        self.inner.lock().percentage(name)
    }

    /// See [`RelationshipStore::tier`].
    #[must_use]
    pub fn tier(&self, name: &str) -> RelationshipTier {
        self.inner.lock().tier(name)
    }

    /// See [`RelationshipStore::reaction_text`].
    #[must_use]
    pub fn reaction_text(&self, name: &str) -> &'static str {
        self.inner.lock().reaction_text(name)
    }

    /// See [`RelationshipStore::consume_tier_up_reaction`].
    pub fn consume_tier_up_reaction(&self, name: &str) -> &'static str {
        self.inner.lock().consume_tier_up_reaction(name)
    }

    /// See [`RelationshipStore::dump_stats`].
    #[must_use]
    pub fn dump_stats(&self) -> StatsReport {
        self.inner.lock().dump_stats()
    }
}

impl From<RelationshipStore> for SharedRelationshipStore {
    fn from(store: RelationshipStore) -> Self {
        Self::new(store)
    }
}
