//! Script session — owns the relationship store for one play-through and
//! executes commands against it.
//!
//! The session is handed to whatever drives the narrative script. A command
//! never fails the host: problems are logged and the command is skipped, so
//! the script keeps playing.

use affinity_core::{AffinityConfig, PointsChange, RelationshipStore};
use tracing::{debug, debug_span, error, info, warn};

use crate::command::ScriptCommand;
use crate::sink::{StatsSink, TracingSink};

/// Why a command did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The session has no store attached.
    NoStore,
    /// `@addlove` was issued without a character name.
    MissingCharacter,
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Points were applied.
    PointsAdded {
        /// Character as named in the script.
        character: String,
        /// Before/after summary.
        change: PointsChange,
    },
    /// The store does not know this character; nothing changed.
    UnknownCharacter(String),
    /// A stat dump was written to the sink.
    StatsShown {
        /// Number of characters in the dump.
        characters: usize,
    },
    /// The command was aborted before reaching the store.
    Skipped(SkipReason),
}

/// Tally of a whole script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    /// Commands that reached the store and did something.
    pub executed: usize,
    /// Commands that were skipped or targeted unknown characters.
    pub skipped: usize,
    /// Lines that failed to parse.
    pub parse_errors: usize,
}

/// Owner of one session's store plus the sink `@showstats` writes to.
#[derive(Debug)]
pub struct ScriptSession<S: StatsSink = TracingSink> {
    store: Option<RelationshipStore>,
    sink: S,
    default_points: i32,
}

/// Points `@addlove` adds when the script does not say.
pub const DEFAULT_ADD_POINTS: i32 = 5;

impl ScriptSession<TracingSink> {
    /// Start a session from configuration, logging stats through `tracing`.
    #[must_use]
    pub fn from_config(config: &AffinityConfig) -> Self {
        let mut session = Self::new(RelationshipStore::from_config(&config.roster), TracingSink);
        session.default_points = config.script.default_add_points;
        session
    }
}

impl<S: StatsSink> ScriptSession<S> {
    /// Start a session around `store`.
    #[must_use]
    pub fn new(store: RelationshipStore, sink: S) -> Self {
        Self {
            store: Some(store),
            sink,
            default_points: DEFAULT_ADD_POINTS,
        }
    }

    /// A session with no store attached; every command is skipped until one is.
    #[must_use]
    pub fn detached(sink: S) -> Self {
        Self {
            store: None,
            sink,
            default_points: DEFAULT_ADD_POINTS,
        }
    }

    /// Override the points `@addlove` adds by default.
    #[must_use]
    pub fn with_default_points(mut self, points: i32) -> Self {
        self.default_points = points;
        self
    }

    /// Attach a store, returning the one it replaces.
    pub fn attach_store(&mut self, store: RelationshipStore) -> Option<RelationshipStore> {
        self.store.replace(store)
    }

    /// The session's store, if attached.
    #[must_use]
    pub fn store(&self) -> Option<&RelationshipStore> {
        self.store.as_ref()
    }

    /// Mutable access for dialogue code consuming tier-change lines.
    pub fn store_mut(&mut self) -> Option<&mut RelationshipStore> {
        self.store.as_mut()
    }

    /// The stats sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// End the session, handing back the store.
    pub fn end(self) -> Option<RelationshipStore> {
        info!("Script session ended");
        self.store
    }

    /// Execute one command.
    pub fn execute(&mut self, command: &ScriptCommand) -> CommandOutcome {
        let _span = debug_span!("script_command", command = command.alias()).entered();
        debug!(%command, "Command start");

        let Some(store) = self.store.as_mut() else {
            error!(%command, "No relationship store attached to session; command skipped");
            return CommandOutcome::Skipped(SkipReason::NoStore);
        };

        let outcome = match command {
            ScriptCommand::AddLove { character, points } => {
                let Some(character) = character.as_deref() else {
                    error!("characterName parameter not assigned in @addlove command");
                    return CommandOutcome::Skipped(SkipReason::MissingCharacter);
                };
                let points = points.unwrap_or(self.default_points);
                debug!(character, points, "Adding relationship points");
                match store.add_points(character, points) {
                    Some(change) => CommandOutcome::PointsAdded {
                        character: character.to_string(),
                        change,
                    },
                    None => CommandOutcome::UnknownCharacter(character.to_string()),
                }
            }
            ScriptCommand::ShowStats => {
                let report = store.dump_stats();
                self.sink.emit(&report);
                CommandOutcome::StatsShown {
                    characters: report.rows.len(),
                }
            }
        };

        debug!(?outcome, "Command end");
        outcome
    }

    /// Parse and execute one script line. Parse failures are logged and
    /// yield `None`.
    pub fn run_line(&mut self, line: &str) -> Option<CommandOutcome> {
        match ScriptCommand::parse(line) {
            Ok(command) => Some(self.execute(&command)),
            Err(err) => {
                warn!(line, error = %err, "Skipping unparseable script line");
                None
            }
        }
    }

    /// Run every command line in `script`.
    ///
    /// Blank lines and `;` comments are ignored; only lines starting with
    /// `@` are commands, everything else is narration and passes through.
    pub fn run_script(&mut self, script: &str) -> ScriptReport {
        let mut report = ScriptReport::default();
        for line in script.lines().map(str::trim) {
            if !line.starts_with('@') {
                continue;
            }
            match self.run_line(line) {
                Some(CommandOutcome::PointsAdded { .. } | CommandOutcome::StatsShown { .. }) => {
                    report.executed += 1;
                }
                Some(CommandOutcome::UnknownCharacter(_) | CommandOutcome::Skipped(_)) => {
                    report.skipped += 1;
                }
                None => report.parse_errors += 1,
            }
        }
        info!(
            executed = report.executed,
            skipped = report.skipped,
            parse_errors = report.parse_errors,
            "Script finished"
        );
        report
    }
}
