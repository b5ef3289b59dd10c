//! # affinity-script — Narrative Script Integration for Affinity
//!
//! Bridges a visual-novel script runner to the engine-agnostic
//! `affinity-core` store.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │           Narrative script host          │
//! │   "@addlove brownsugar points:10"        │
//! │  ┌────────────────────────────────────┐  │
//! │  │         affinity-script            │  │
//! │  │  ┌──────────┐   ┌──────────────┐   │  │
//! │  │  │ command  │──▶│   session    │──▶ sink
//! │  │  └──────────┘   └──────┬───────┘   │  │
//! │  │                        ▼           │  │
//! │  │            ┌──────────────────┐    │  │
//! │  │            │  affinity-core   │    │  │
//! │  │            └──────────────────┘    │  │
//! │  └────────────────────────────────────┘  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `command` — `@addlove` / `@showstats` parsing
//! - `session` — store ownership and never-failing command execution
//! - `sink` — where stat dumps are written
//! - `error` — parse errors

#![deny(clippy::unwrap_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod error;
pub mod session;
pub mod sink;

pub use command::ScriptCommand;
pub use error::ScriptError;
pub use session::{CommandOutcome, ScriptReport, ScriptSession, SkipReason};
pub use sink::{BufferSink, StatsSink, TracingSink};
