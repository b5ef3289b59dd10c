//! Errors raised while parsing script command lines.

use thiserror::Error;

/// A script line that could not be turned into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The line had no command after trimming.
    #[error("Empty command line")]
    Empty,

    /// The command alias is not one this crate handles.
    #[error("Unknown command: @{0}")]
    UnknownCommand(String),

    /// A parameter the command does not accept.
    #[error("Unknown parameter `{parameter}` for @{command}")]
    UnknownParameter {
        /// Command alias.
        command: String,
        /// Offending parameter name.
        parameter: String,
    },

    /// A token that is neither `key:value` nor an allowed nameless value.
    #[error("Malformed parameter `{0}`")]
    MalformedParameter(String),

    /// `points` was not an integer.
    #[error("Invalid points value `{0}`")]
    InvalidPoints(String),
}
