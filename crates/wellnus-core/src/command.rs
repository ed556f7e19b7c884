//! Command validation contract
//!
//! Features turn an [`ArgumentMap`] into one of a closed set of commands.
//! The helpers here are the shared arity and payload rules they check with.

use tracing::debug;

use crate::error::{CommandError, ValidationError};
use crate::parser::ArgumentMap;

/// What the outer loop should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show the message and stay in the feature
    Continue(String),
    /// Show the message and return to the feature selection
    Home(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Continue(m) | Outcome::Home(m) => m,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Outcome::Home(_))
    }
}

/// A feature driven by the line-oriented shell
pub trait Feature {
    /// Keyword that enters the feature from the top level
    fn name(&self) -> &'static str;

    /// One-line summary shown in the top-level help
    fn brief_description(&self) -> &'static str;

    /// Banner printed when the feature is entered
    fn greeting(&self) -> String;

    /// Parse, validate and run one line of input
    fn execute(&mut self, line: &str) -> Result<Outcome, CommandError>;
}

/// Description and usage of a single command, used to build help text
#[derive(Debug, Clone, Copy)]
pub struct CommandHelp {
    pub description: &'static str,
    pub usage: &'static str,
}

/// Render a numbered help listing
pub fn render_help(preamble: &str, commands: &[CommandHelp]) -> String {
    let mut out = String::from(preamble);
    out.push_str("\nHere are all the commands available for you!\n\n");
    for (i, cmd) in commands.iter().enumerate() {
        out.push_str(&format!("{}. {}\n{}\n", i + 1, cmd.description, cmd.usage));
    }
    out
}

/// Require the entry count (keyword included) to lie in `min..=max`
pub fn expect_arity(args: &ArgumentMap, min: usize, max: usize) -> Result<(), ValidationError> {
    let command = args.keyword().to_string();
    if args.len() > max {
        debug!(command, count = args.len(), max, "too many arguments");
        return Err(ValidationError::TooManyArguments(command));
    }
    if args.len() < min {
        debug!(command, count = args.len(), min, "too few arguments");
        return Err(ValidationError::TooFewArguments(command));
    }
    Ok(())
}

/// Require a bare keyword: no payload and no flags
pub fn expect_bare(args: &ArgumentMap) -> Result<(), ValidationError> {
    expect_arity(args, 1, 1)?;
    expect_no_payload(args)
}

/// Require the keyword itself to carry no payload
pub fn expect_no_payload(args: &ArgumentMap) -> Result<(), ValidationError> {
    if !args.keyword_payload().is_empty() {
        return Err(ValidationError::UnexpectedPayload(args.keyword().to_string()));
    }
    Ok(())
}

/// Reject any flag not in `known`
pub fn expect_known_flags(args: &ArgumentMap, known: &[&str]) -> Result<(), ValidationError> {
    match args.flags().find(|flag| !known.contains(flag)) {
        Some(unknown) => Err(ValidationError::UnknownArgument {
            command: args.keyword().to_string(),
            argument: unknown.to_string(),
        }),
        None => Ok(()),
    }
}

/// Parse a payload as an integer within `min..=max`
pub fn parse_bounded(field: &str, payload: &str, min: u32, max: u32) -> Result<u32, ValidationError> {
    let value: i64 = payload
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field: field.to_string(),
            value: payload.to_string(),
        })?;
    check_bounds(field, value, min, max)
}

/// Check an already-numeric value against `min..=max`
pub fn check_bounds(field: &str, value: i64, min: u32, max: u32) -> Result<u32, ValidationError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    // In range of u32 by the check above
    Ok(value as u32)
}
