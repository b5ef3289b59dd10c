//! Script commands issued by narrative content.
//!
//! Two commands are understood:
//!
//! ```text
//! @addlove characterName:brownsugar points:10
//! @addlove brownsugar            ; nameless character, default points
//! @showstats
//! ```
//!
//! Aliases and parameter names are case-insensitive; the leading `@` is
//! optional. Anything after a `;` is a comment.

use std::fmt;

use crate::error::ScriptError;

/// Alias of the add-points command.
pub const ADD_LOVE_ALIAS: &str = "addlove";

/// Alias of the stat-dump command.
pub const SHOW_STATS_ALIAS: &str = "showstats";

/// A parsed script command.
///
/// Parameters stay optional here; defaults and missing-value handling belong
/// to the session that executes the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Add affection points to a character.
    AddLove {
        /// Target character, if assigned.
        character: Option<String>,
        /// Points to add, if assigned.
        points: Option<i32>,
    },
    /// Dump every character's standing to the stats sink.
    ShowStats,
}

impl ScriptCommand {
    /// Shorthand for a fully assigned `@addlove`.
    #[must_use]
    pub fn add_love(character: impl Into<String>, points: i32) -> Self {
        Self::AddLove {
            character: Some(character.into()),
            points: Some(points),
        }
    }

    /// Command alias as written in scripts.
    #[must_use]
    pub fn alias(&self) -> &'static str {
        match self {
            Self::AddLove { .. } => ADD_LOVE_ALIAS,
            Self::ShowStats => SHOW_STATS_ALIAS,
        }
    }

    /// Parse one script line.
    ///
    /// # Errors
    /// Returns a [`ScriptError`] describing the first problem found.
    pub fn parse(line: &str) -> Result<Self, ScriptError> {
        let line = line.split_once(';').map_or(line, |(command, _)| command).trim();
        let line = line.strip_prefix('@').unwrap_or(line);
        let mut tokens = line.split_whitespace();
        let Some(alias) = tokens.next() else {
            return Err(ScriptError::Empty);
        };

        match alias.to_lowercase().as_str() {
            ADD_LOVE_ALIAS => parse_add_love(tokens),
            SHOW_STATS_ALIAS => match tokens.next() {
                None => Ok(Self::ShowStats),
                Some(token) => Err(ScriptError::UnknownParameter {
                    command: SHOW_STATS_ALIAS.to_string(),
                    parameter: token.split(':').next().unwrap_or(token).to_string(),
                }),
            },
            _ => Err(ScriptError::UnknownCommand(alias.to_string())),
        }
    }
}

fn parse_add_love<'a>(
    tokens: impl Iterator<Item = &'a str>,
) -> Result<ScriptCommand, ScriptError> {
    let mut character = None;
    let mut points = None;

    for token in tokens {
        match token.split_once(':') {
            Some((key, value)) => match key.to_lowercase().as_str() {
                "charactername" | "character" => {
                    if value.is_empty() || character.is_some() {
                        return Err(ScriptError::MalformedParameter(token.to_string()));
                    }
                    character = Some(value.to_string());
                }
                "points" => {
                    let parsed = value
                        .parse::<i32>()
                        .map_err(|_| ScriptError::InvalidPoints(value.to_string()))?;
                    points = Some(parsed);
                }
                _ => {
                    return Err(ScriptError::UnknownParameter {
                        command: ADD_LOVE_ALIAS.to_string(),
                        parameter: key.to_string(),
                    });
                }
            },
            // Nameless parameter: the character.
            None if character.is_none() => character = Some(token.to_string()),
            None => return Err(ScriptError::MalformedParameter(token.to_string())),
        }
    }

    Ok(ScriptCommand::AddLove { character, points })
}

impl fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.alias())?;
        if let Self::AddLove { character, points } = self {
            if let Some(character) = character {
                write!(f, " characterName:{character}")?;
            }
            if let Some(points) = points {
                write!(f, " points:{points}")?;
            }
        }
        Ok(())
    }
}
