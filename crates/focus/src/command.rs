//! Focus timer commands
//!
//! Usage:
//!   start                      Start a focus session
//!   pause / resume             Freeze or continue the current countdown
//!   stop                       End the session
//!   next                       Move on once a countdown has run out
//!   check                      Show time left
//!   config [--cycle N] [--work MINS] [--break MINS] [--longbreak MINS]
//!   help                       List commands
//!   home                       Return to the main menu

use wellnus_core::command::{
    expect_arity, expect_bare, expect_known_flags, expect_no_payload, parse_bounded, render_help,
    CommandHelp,
};
use wellnus_core::{format, ArgumentMap, CommandError, Outcome, ValidationError};

use crate::session::{
    ConfigUpdate, Session, SessionConfig, SessionState, MAX_CYCLES, MAX_MINUTES, MIN_CYCLES,
    MIN_MINUTES,
};

pub const ARGUMENT_CYCLE: &str = "cycle";
pub const ARGUMENT_WORK: &str = "work";
pub const ARGUMENT_BREAK: &str = "break";
pub const ARGUMENT_LONG_BREAK: &str = "longbreak";

/// Keyword plus at least one and at most four settings
const CONFIG_MIN_ARGUMENTS: usize = 2;
const CONFIG_MAX_ARGUMENTS: usize = 5;

pub const FEATURE_HELP_DESCRIPTION: &str = "Focus Timer helps you get things done in short \
    bursts of work separated by breaks, with a longer rest after every few cycles.";

/// A validated focus command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCommand {
    Start,
    Pause,
    Resume,
    Stop,
    Next,
    Check,
    Config(ConfigUpdate),
    Help,
    Home,
}

impl FocusCommand {
    /// Every command, in help order
    pub const HELP: &'static [CommandHelp] = &[
        CommandHelp {
            description: "check - Show the time left on the current countdown.",
            usage: "usage: check",
        },
        CommandHelp {
            description: "config - Change the number of cycles and the length of work, break \
                and long break. Cycles go from 2 to 5, times from 1 to 60 minutes.",
            usage: "usage: config [--cycle number] [--work minutes] [--break minutes] \
                [--longbreak minutes]",
        },
        CommandHelp {
            description: "help - Get help on what commands can be used in Focus Timer.",
            usage: "usage: help",
        },
        CommandHelp {
            description: "home - Return to the main menu.",
            usage: "usage: home",
        },
        CommandHelp {
            description: "next - Move on to the next countdown. Only works once a countdown \
                has ended.",
            usage: "usage: next",
        },
        CommandHelp {
            description: "pause - Pause the current countdown.",
            usage: "usage: pause",
        },
        CommandHelp {
            description: "resume - Continue a paused countdown.",
            usage: "usage: resume",
        },
        CommandHelp {
            description: "start - Start a focus session with the current configuration.",
            usage: "usage: start",
        },
        CommandHelp {
            description: "stop - End the focus session.",
            usage: "usage: stop",
        },
    ];

    /// Pick and validate the command named by the keyword
    pub fn from_arguments(args: &ArgumentMap) -> Result<Self, ValidationError> {
        let command = match args.keyword() {
            "start" => FocusCommand::Start,
            "pause" => FocusCommand::Pause,
            "resume" => FocusCommand::Resume,
            "stop" => FocusCommand::Stop,
            "next" => FocusCommand::Next,
            "check" => FocusCommand::Check,
            "help" => FocusCommand::Help,
            "home" => FocusCommand::Home,
            "config" => return Ok(FocusCommand::Config(config_update(args)?)),
            other => return Err(ValidationError::UnknownCommand(other.to_string())),
        };
        expect_bare(args)?;
        Ok(command)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            FocusCommand::Start => "start",
            FocusCommand::Pause => "pause",
            FocusCommand::Resume => "resume",
            FocusCommand::Stop => "stop",
            FocusCommand::Next => "next",
            FocusCommand::Check => "check",
            FocusCommand::Config(_) => "config",
            FocusCommand::Help => "help",
            FocusCommand::Home => "home",
        }
    }

    /// Run the command against the session
    pub fn execute(&self, session: &mut Session) -> Result<Outcome, CommandError> {
        let message = match self {
            FocusCommand::Start => {
                if session.state().is_terminal() {
                    session.reset()?;
                }
                session.start()?.description()
            }
            FocusCommand::Pause => {
                let remaining = session.pause()?;
                format!(
                    "Timer paused with {} left. Use `resume` to continue.",
                    format::clock(remaining.num_seconds())
                )
            }
            FocusCommand::Resume => {
                let remaining = session.resume()?;
                format!(
                    "Timer resumed, {} to go.",
                    format::clock(remaining.num_seconds())
                )
            }
            FocusCommand::Stop => {
                session.stop()?;
                "Focus session stopped. Use `start` to begin a new one.".to_string()
            }
            FocusCommand::Next => session.next()?.description(),
            FocusCommand::Check => {
                let status = session.check()?;
                let mut message = format!(
                    "{} ({} of {}): {} left",
                    status.phase.as_str(),
                    status.index + 1,
                    status.count,
                    format::clock(status.remaining.num_seconds())
                );
                match status.state {
                    SessionState::Paused => message.push_str(" (paused)"),
                    SessionState::Waiting => {
                        message.push_str(". Time's up! Use `next` to move on.")
                    }
                    _ => {}
                }
                message
            }
            FocusCommand::Config(update) => describe_config(&session.configure(update)?),
            FocusCommand::Help => render_help(FEATURE_HELP_DESCRIPTION, Self::HELP),
            FocusCommand::Home => return Ok(Outcome::Home("Leaving Focus Timer.".to_string())),
        };
        Ok(Outcome::Continue(message))
    }
}

/// Validate a `config` command. Every field is parsed before anything is applied.
fn config_update(args: &ArgumentMap) -> Result<ConfigUpdate, ValidationError> {
    expect_arity(args, CONFIG_MIN_ARGUMENTS, CONFIG_MAX_ARGUMENTS)?;
    expect_no_payload(args)?;
    expect_known_flags(
        args,
        &[ARGUMENT_CYCLE, ARGUMENT_WORK, ARGUMENT_BREAK, ARGUMENT_LONG_BREAK],
    )?;

    let minutes = |field: &str| {
        args.payload(field)
            .map(|p| parse_bounded(field, p, MIN_MINUTES, MAX_MINUTES))
            .transpose()
    };

    Ok(ConfigUpdate {
        cycles: args
            .payload(ARGUMENT_CYCLE)
            .map(|p| parse_bounded(ARGUMENT_CYCLE, p, MIN_CYCLES, MAX_CYCLES))
            .transpose()?,
        work: minutes(ARGUMENT_WORK)?,
        break_minutes: minutes(ARGUMENT_BREAK)?,
        long_break: minutes(ARGUMENT_LONG_BREAK)?,
    })
}

fn describe_config(config: &SessionConfig) -> String {
    format!(
        "Okay, here's your new session details!\n\
         Cycles: {}\n\
         Work: {}\n\
         Break: {}\n\
         Long break: {}",
        config.cycles(),
        format::minutes(config.work()),
        format::minutes(config.break_minutes()),
        format::minutes(config.long_break())
    )
}
