//! The relationship store — registry of per-character affection counters.
//!
//! Lookups are case-insensitive exact matches over a short, insertion-ordered
//! list. Nothing in here fails its caller: mutations on unknown names are
//! logged no-ops and queries on unknown names return defaults, so narrative
//! scripts keep playing when a reference is malformed.
//!
//! The store tracks a single pending tier-change event. A new tier change for
//! any character overwrites an unread one (last write wins).

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::RosterConfig;
use crate::reaction::{UNKNOWN_CHARACTER_REACTION, reaction_line, tier_up_line};
use crate::record::{DEFAULT_MAX_POINTS, RelationshipRecord, normalize};
use crate::stats::{StatsReport, StatsRow};
use crate::tier::RelationshipTier;

/// Characters registered when a session starts without a configured roster.
pub const DEFAULT_ROSTER: [&str; 5] = [
    "brownsugar",
    "character2",
    "character3",
    "character4",
    "character5",
];

/// A pending tier change, waiting for dialogue to react to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierUpEvent {
    /// Registered name of the character.
    pub character: String,
    /// Tier before the change.
    pub from: RelationshipTier,
    /// Tier after the change.
    pub to: RelationshipTier,
}

/// Summary of a successful [`RelationshipStore::add_points`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsChange {
    /// Points before the call.
    pub before: u32,
    /// Points after clamping.
    pub after: u32,
    /// Points ceiling of the record.
    pub max_points: u32,
    /// Tier before the call.
    pub from: RelationshipTier,
    /// Tier after the call.
    pub to: RelationshipTier,
}

impl PointsChange {
    /// Whether the call moved the character into a different tier.
    #[must_use]
    pub fn tier_changed(&self) -> bool {
        self.from != self.to
    }
}

/// In-memory registry of relationship records for one game session.
#[derive(Debug, Clone, Default)]
pub struct RelationshipStore {
    records: Vec<RelationshipRecord>,
    last_tier_up: Option<TierUpEvent>,
}

impl RelationshipStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `names` pre-registered at zero points.
    #[must_use]
    pub fn with_roster<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        store.register_roster(names);
        store
    }

    /// Create a store from the roster section of the configuration.
    #[must_use]
    pub fn from_config(roster: &RosterConfig) -> Self {
        let mut store = Self::new();
        for name in &roster.characters {
            store.register(name, roster.default_max_points);
        }
        info!(characters = store.len(), "Relationship store initialized");
        store
    }

    // -- Registration --------------------------------------------------------

    /// Register `name` with the given ceiling, at zero points.
    ///
    /// No-op when the name is already present, so existing points are never
    /// reset. Returns whether a record was inserted.
    pub fn register(&mut self, name: &str, max_points: u32) -> bool {
        if name.is_empty() {
            warn!("register called with empty character name");
            return false;
        }
        if self.find(name).is_some() {
            return false;
        }
        let record = RelationshipRecord::new(name, max_points);
        debug!(character = %name, max_points = record.max_points(), "Registered character");
        self.records.push(record);
        true
    }

    /// Register `name` with the default ceiling of 100.
    pub fn register_default(&mut self, name: &str) -> bool {
        self.register(name, DEFAULT_MAX_POINTS)
    }

    /// Register every missing name in `names`; existing records are untouched.
    ///
    /// Returns how many records were inserted.
    pub fn register_roster<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = names
            .into_iter()
            .filter(|name| self.register_default(name.as_ref()))
            .count();
        info!(added, characters = self.len(), "Relationship roster initialized");
        added
    }

    // -- Mutation ------------------------------------------------------------

    /// Add `delta` points (may be negative) to `name`, clamped to the record's range.
    ///
    /// Unknown or empty names are logged and ignored. When the call moves the
    /// character into a different tier, the pending tier-change event is
    /// replaced. Only the tiers before and after this one call are compared;
    /// bands skipped in between produce no events of their own.
    pub fn add_points(&mut self, name: &str, delta: i32) -> Option<PointsChange> {
        if name.is_empty() {
            warn!("add_points called with empty character name");
            return None;
        }
        let Some(idx) = self.position(name) else {
            warn!(character = %name, "Character not found in relationships");
            return None;
        };

        let record = &mut self.records[idx];
        let before = record.points();
        let from = record.tier();
        let after = record.apply_delta(delta);
        let to = record.tier();
        let change = PointsChange {
            before,
            after,
            max_points: record.max_points(),
            from,
            to,
        };

        debug!(
            character = %record.name(),
            delta,
            points = after,
            max_points = change.max_points,
            tier = %to,
            "Relationship points changed"
        );

        if change.tier_changed() {
            info!(character = %record.name(), from = %from, to = %to, "Relationship tier changed");
            self.last_tier_up = Some(TierUpEvent {
                character: record.name().to_string(),
                from,
                to,
            });
        }

        Some(change)
    }

    /// Zero one character's points, or every character's when `name` is `None`.
    ///
    /// Never emits a tier-change event. Returns false only when a named
    /// character is unknown.
    pub fn reset(&mut self, name: Option<&str>) -> bool {
        match name {
            Some(name) => {
                let Some(idx) = self.position(name) else {
                    warn!(character = %name, "Cannot reset unknown character");
                    return false;
                };
                self.records[idx].reset();
                debug!(character = %name, "Relationship reset");
                true
            }
            None => {
                self.reset_all();
                true
            }
        }
    }

    /// Zero every character's points.
    pub fn reset_all(&mut self) {
        for record in &mut self.records {
            record.reset();
        }
        info!(characters = self.len(), "All relationships reset to 0");
    }

    // -- Queries -------------------------------------------------------------

    /// Record for `name`, if registered.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&RelationshipRecord> {
        self.find(name)
    }

    /// Current points for `name`; 0 when unknown.
    #[must_use]
    pub fn points(&self, name: &str) -> u32 {
        self.find(name).map_or(0, RelationshipRecord::points)
    }

    /// Progress fraction in `[0, 1]` for `name`; 0 when unknown.
    #[must_use]
    pub fn percentage(&self, name: &str) -> f32 {
        self.find(name).map_or(0.0, RelationshipRecord::percentage)
    }

    /// Tier for `name`; Stranger when unknown.
    #[must_use]
    pub fn tier(&self, name: &str) -> RelationshipTier {
        self.find(name).map_or(RelationshipTier::Stranger, RelationshipRecord::tier)
    }

    /// Everyday reaction line for `name`'s current standing.
    #[must_use]
    pub fn reaction_text(&self, name: &str) -> &'static str {
        self.find(name).map_or(UNKNOWN_CHARACTER_REACTION, |rec| {
            reaction_line(rec.tier(), rec.points())
        })
    }

    /// Take the pending tier-change line for `name`.
    ///
    /// Returns the line once and clears the event; returns an empty string
    /// when nothing is pending for this character. A pending event for a
    /// different character is left in place.
    pub fn consume_tier_up_reaction(&mut self, name: &str) -> &'static str {
        let key = normalize(name);
        match self.last_tier_up.take() {
            Some(event) if normalize(&event.character) == key => tier_up_line(event.to),
            other => {
                self.last_tier_up = other;
                ""
            }
        }
    }

    /// Peek at the pending tier-change event without consuming it.
    #[must_use]
    pub fn pending_tier_up(&self) -> Option<&TierUpEvent> {
        self.last_tier_up.as_ref()
    }

    /// Snapshot of every record in registration order.
    #[must_use]
    pub fn dump_stats(&self) -> StatsReport {
        StatsReport {
            rows: self.records.iter().map(StatsRow::from).collect(),
        }
    }

    /// Records in registration order.
    pub fn records(&self) -> impl Iterator<Item = &RelationshipRecord> {
        self.records.iter()
    }

    /// Number of registered characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no characters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        let key = normalize(name);
        self.records.iter().position(|r| r.key() == key)
    }

    fn find(&self, name: &str) -> Option<&RelationshipRecord> {
        self.position(name).map(|idx| &self.records[idx])
    }
}
