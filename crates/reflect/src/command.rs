//! Reflection commands

use rand::Rng;
use wellnus_core::command::{expect_arity, expect_bare, parse_bounded, render_help, CommandHelp};
use wellnus_core::{ArgumentMap, CommandError, Outcome, ValidationError};

use crate::question::QuestionList;

pub const FEATURE_HELP_DESCRIPTION: &str = "Self Reflection gives you a few questions at a \
    time to think about. Keep the ones that matter to you as favourites.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectCommand {
    Get,
    /// 1-based position within the last drawn set
    Like(usize),
    Fav,
    Help,
    Home,
}

impl ReflectCommand {
    pub const HELP: &'static [CommandHelp] = &[
        CommandHelp {
            description: "fav - View the questions in your favourite list.",
            usage: "usage: fav",
        },
        CommandHelp {
            description: "get - Get a set of random questions to reflect on.",
            usage: "usage: get",
        },
        CommandHelp {
            description: "help - Get help on what commands can be used in Self Reflection.",
            usage: "usage: help",
        },
        CommandHelp {
            description: "home - Return to the main menu.",
            usage: "usage: home",
        },
        CommandHelp {
            description: "like (index) - Add a question from the last set to your favourite list.",
            usage: "usage: like (index)",
        },
    ];

    /// Pick and validate a command. `set_size` bounds the index `like` accepts.
    pub fn from_arguments(args: &ArgumentMap, set_size: usize) -> Result<Self, ValidationError> {
        let command = match args.keyword() {
            "get" => ReflectCommand::Get,
            "fav" => ReflectCommand::Fav,
            "help" => ReflectCommand::Help,
            "home" => ReflectCommand::Home,
            "like" => {
                expect_arity(args, 1, 1)?;
                let max = u32::try_from(set_size.max(1)).unwrap_or(u32::MAX);
                let position = parse_bounded("like", args.keyword_payload(), 1, max)?;
                return Ok(ReflectCommand::Like(position as usize));
            }
            other => return Err(ValidationError::UnknownCommand(other.to_string())),
        };
        expect_bare(args)?;
        Ok(command)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            ReflectCommand::Get => "get",
            ReflectCommand::Like(_) => "like",
            ReflectCommand::Fav => "fav",
            ReflectCommand::Help => "help",
            ReflectCommand::Home => "home",
        }
    }

    pub fn execute<R: Rng + ?Sized>(
        &self,
        questions: &mut QuestionList,
        set_size: usize,
        rng: &mut R,
    ) -> Result<Outcome, CommandError> {
        let message = match self {
            ReflectCommand::Get => {
                if questions.is_empty() {
                    return Err(CommandError::State(
                        "There are no reflection questions to choose from.".to_string(),
                    ));
                }
                numbered(&questions.draw(set_size, rng))
            }
            ReflectCommand::Like(position) => {
                let (question, added) = questions.like(*position)?;
                if added {
                    format!("You have added question: [{}] into favourite list!", question)
                } else {
                    format!("[{}] is already in your favourite list.", question)
                }
            }
            ReflectCommand::Fav => {
                let favourites = questions.favourites();
                if favourites.is_empty() {
                    "Your favourite list is empty. Use `like` after `get` to add questions."
                        .to_string()
                } else {
                    numbered(&favourites)
                }
            }
            ReflectCommand::Help => render_help(FEATURE_HELP_DESCRIPTION, Self::HELP),
            ReflectCommand::Home => {
                return Ok(Outcome::Home("Leaving Self Reflection.".to_string()))
            }
        };
        Ok(Outcome::Continue(message))
    }
}

fn numbered(lines: &[&str]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}
