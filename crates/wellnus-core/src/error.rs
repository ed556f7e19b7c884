//! Error taxonomy shared by every feature
//!
//! Every kind is recoverable: the shell reports it and reads the next line.

use thiserror::Error;

/// Malformed raw command text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Command is empty - type 'help' to see what you can do")]
    Empty,

    #[error("Command must start with a keyword, not '{0}'")]
    MissingKeyword(String),

    #[error("Found '--' without an argument name after it")]
    EmptyFlag,

    #[error("Argument '{0}' was given more than once")]
    DuplicateArgument(String),
}

/// Well-formed arguments that break a command's rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Sorry, you seem to have added too many arguments to '{0}'!")]
    TooManyArguments(String),

    #[error("Sorry, you seem to have not added in any arguments to '{0}'!")]
    TooFewArguments(String),

    #[error("Unknown argument '--{argument}' for '{command}'")]
    UnknownArgument { command: String, argument: String },

    #[error("'{0}' does not take a payload")]
    UnexpectedPayload(String),

    #[error("'{field}' needs a whole number, got '{value}'")]
    NotANumber { field: String, value: String },

    #[error("'{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: i64,
        min: u32,
        max: u32,
    },

    #[error("{0}")]
    Invalid(String),
}

/// Failures crossing the persistence boundary
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not convert '{feature}' data for storage: {reason}")]
    Tokenize { feature: String, reason: String },

    #[error("Saved '{feature}' data is unreadable: {reason}")]
    Detokenize { feature: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Umbrella error returned by every command handler
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Operation not allowed in the feature's current state
    #[error("{0}")]
    State(String),

    /// A value validated once failed its second check at mutation time
    #[error("Something went wrong on our side ({0}), nothing was changed")]
    Invariant(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CommandError {
    /// Hint printed under the error message
    pub fn hint(&self) -> &'static str {
        match self {
            CommandError::Parse(_) | CommandError::Validation(_) => {
                "Check 'help' for valid commands!"
            }
            CommandError::State(_) => "Check 'help' for when each command can be used.",
            CommandError::Invariant(_) => "This is a bug, please report it.",
            CommandError::Storage(_) => "Your data for this feature may not have been saved.",
        }
    }
}
