//! Per-character relationship record.

use serde::Serialize;

use crate::tier::RelationshipTier;

/// Default ceiling for a character's points.
pub const DEFAULT_MAX_POINTS: u32 = 100;

/// Smallest ceiling a record may be created with.
pub const MIN_MAX_POINTS: u32 = 50;

/// Largest ceiling a record may be created with.
pub const MAX_MAX_POINTS: u32 = 200;

/// One character's affection state.
///
/// Invariant: `points <= max_points`. Only [`crate::RelationshipStore`]
/// mutates points, so the fields are private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipRecord {
    name: String,
    #[serde(skip)]
    key: String,
    points: u32,
    max_points: u32,
}

impl RelationshipRecord {
    /// Create a record at zero points.
    ///
    /// `max_points` is clamped into `MIN_MAX_POINTS..=MAX_MAX_POINTS`.
    #[must_use]
    pub fn new(name: impl Into<String>, max_points: u32) -> Self {
        let name = name.into();
        Self {
            key: normalize(&name),
            name,
            points: 0,
            max_points: max_points.clamp(MIN_MAX_POINTS, MAX_MAX_POINTS),
        }
    }

    /// Name as it was registered.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current points.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Points ceiling, fixed at creation.
    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    /// Tier derived from the current points.
    #[must_use]
    pub fn tier(&self) -> RelationshipTier {
        RelationshipTier::from_points(self.points)
    }

    /// Progress towards the ceiling as a fraction in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f32 {
        self.points as f32 / self.max_points as f32
    }

    /// Whether this record answers to `name` (case-insensitive, full match).
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.key == normalize(name)
    }

    /// Lower-cased lookup key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Apply `delta` and clamp into `0..=max_points`. Returns the new total.
    pub(crate) fn apply_delta(&mut self, delta: i32) -> u32 {
        let raw = i64::from(self.points) + i64::from(delta);
        let clamped = raw.clamp(0, i64::from(self.max_points));
        self.points = u32::try_from(clamped).unwrap_or(self.max_points);
        self.points
    }

    pub(crate) fn reset(&mut self) {
        self.points = 0;
    }
}

/// Lookup key for a character name.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}
