//! # Affinity Core Library
//!
//! Engine-agnostic relationship tracking for visual-novel characters.
//!
//! Every character gets a [`RelationshipRecord`] holding a point total in
//! `0..=max_points`. Points map onto five ordered tiers:
//!
//! - **Stranger** — 0 to 19
//! - **Acquaintance** — 20 to 39
//! - **Friend** — 40 to 59
//! - **Close Friend** — 60 to 79
//! - **Soulmate** — 80 and above
//!
//! A [`RelationshipStore`] owns the records for one game session, remembers
//! the most recent tier change for one-shot dialogue, and serves reaction
//! lines. Queries on unknown characters return defaults instead of errors.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod reaction;
pub mod record;
pub mod shared;
pub mod stats;
pub mod store;
pub mod tier;

pub use config::AffinityConfig;
pub use error::AffinityError;
pub use record::RelationshipRecord;
pub use shared::SharedRelationshipStore;
pub use stats::{StatsReport, StatsRow};
pub use store::{DEFAULT_ROSTER, PointsChange, RelationshipStore, TierUpEvent};
pub use tier::RelationshipTier;
