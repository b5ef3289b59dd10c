//! Relationship tiers — five ordered bands derived from a point total.
//!
//! A tier is never stored. It is a pure function of the current points, so
//! records only carry the number and derive the band on demand.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Relationship tier, ordered from coldest to warmest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RelationshipTier {
    /// Points 0–19: just met.
    #[default]
    Stranger,
    /// Points 20–39: on speaking terms.
    Acquaintance,
    /// Points 40–59: friends.
    Friend,
    /// Points 60–79: trusted confidant.
    CloseFriend,
    /// Points 80 and above.
    Soulmate,
}

impl RelationshipTier {
    /// Every tier in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Stranger,
        Self::Acquaintance,
        Self::Friend,
        Self::CloseFriend,
        Self::Soulmate,
    ];

    /// Classify a point total into a tier.
    ///
    /// Lower bounds are inclusive: 20 is already an acquaintance.
    #[must_use]
    pub fn from_points(points: u32) -> Self {
        match points {
            p if p >= 80 => Self::Soulmate,
            p if p >= 60 => Self::CloseFriend,
            p if p >= 40 => Self::Friend,
            p if p >= 20 => Self::Acquaintance,
            _ => Self::Stranger,
        }
    }

    /// Inclusive lower bound of this tier's band.
    #[must_use]
    pub fn lower_bound(self) -> u32 {
        match self {
            Self::Stranger => 0,
            Self::Acquaintance => 20,
            Self::Friend => 40,
            Self::CloseFriend => 60,
            Self::Soulmate => 80,
        }
    }

    /// Name shown to players and in stat dumps.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Stranger => "Stranger",
            Self::Acquaintance => "Acquaintance",
            Self::Friend => "Friend",
            Self::CloseFriend => "Close Friend",
            Self::Soulmate => "Soulmate",
        }
    }
}

impl fmt::Display for RelationshipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
