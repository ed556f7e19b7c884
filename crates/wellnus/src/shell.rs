//! Interactive shell
//!
//! The top level picks a feature by keyword; inside a feature every line goes
//! to that feature until it answers with [`Outcome::Home`].

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};
use wellnus_core::{parser, CommandError, Feature, Outcome, ValidationError};

const BANNER: &str = r#"
 __        __   _ _ _   _ _   _ ____
 \ \      / /__| | | \ | | | | / ___|  _     _
  \ \ /\ / / _ \ | |  \| | | | \___ \ | |_ _| |_
   \ V  V /  __/ | | |\  | |_| |___) |_   _|_   _|
    \_/\_/ \___|_|_|_| \_|\___/|____/  |_|   |_|
"#;

/// Response to one input line
#[derive(Debug)]
pub enum Reply {
    Message(String),
    Error(CommandError),
    Exit,
}

pub struct Shell {
    features: Vec<Box<dyn Feature>>,
    /// Index into `features` of the feature receiving lines
    active: Option<usize>,
}

impl Shell {
    pub fn new(features: Vec<Box<dyn Feature>>) -> Self {
        Self {
            features,
            active: None,
        }
    }

    pub fn active_feature(&self) -> Option<&'static str> {
        self.active.map(|i| self.features[i].name())
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.active_feature().unwrap_or("wellnus"))
    }

    pub fn greeting(&self) -> String {
        format!(
            "{}\nWelcome to WellNUS++! Type a feature name to enter it, or `help`.",
            BANNER
        )
    }

    /// Route one line to the top level or the active feature
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match self.active {
            Some(i) => match self.features[i].execute(line) {
                Ok(Outcome::Home(message)) => {
                    debug!(feature = self.features[i].name(), "returned home");
                    self.active = None;
                    Reply::Message(message)
                }
                Ok(Outcome::Continue(message)) => Reply::Message(message),
                Err(e) => Reply::Error(e),
            },
            None => self.handle_top_level(line),
        }
    }

    fn handle_top_level(&mut self, line: &str) -> Reply {
        let args = match parser::parse(line) {
            Ok(args) => args,
            Err(e) => return Reply::Error(e.into()),
        };
        if let Err(e) = wellnus_core::command::expect_bare(&args) {
            return Reply::Error(e.into());
        }

        match args.keyword() {
            "exit" => Reply::Exit,
            "help" => Reply::Message(self.help()),
            keyword => match self.features.iter().position(|f| f.name() == keyword) {
                Some(i) => {
                    self.active = Some(i);
                    Reply::Message(self.features[i].greeting())
                }
                None => Reply::Error(ValidationError::UnknownCommand(keyword.to_string()).into()),
            },
        }
    }

    fn help(&self) -> String {
        let mut out = String::from("Here are the features available to you:\n\n");
        for (i, feature) in self.features.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} - {}\n",
                i + 1,
                feature.name(),
                feature.brief_description()
            ));
        }
        out.push_str("\nType a feature name to enter it, `exit` to leave WellNUS++.");
        out
    }
}

/// Run the shell until `exit` or Ctrl-D
pub fn run(shell: &mut Shell, history: Option<PathBuf>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &history {
        let _ = rl.load_history(path);
    }

    println!("{}", shell.greeting().cyan());

    loop {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match shell.handle_line(&line) {
                    Reply::Message(message) => println!("{}", message),
                    Reply::Error(e) => {
                        eprintln!("{} {}", "Error:".red(), e);
                        eprintln!("{}", e.hint().dimmed());
                    }
                    Reply::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - cancel current input
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break;
            }
            Err(err) => {
                eprintln!("{} {:?}", "Error:".red(), err);
                break;
            }
        }
    }

    println!("Hope you have a wonderful day ahead!");

    if let Some(path) = &history {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = rl.save_history(path) {
            warn!(error = %e, "failed to save shell history");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Echoes lines back and leaves on `home`
    struct Echo;

    impl Feature for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn brief_description(&self) -> &'static str {
            "Echo - repeats what you say"
        }

        fn greeting(&self) -> String {
            "hello from echo".to_string()
        }

        fn execute(&mut self, line: &str) -> Result<Outcome, CommandError> {
            let args = parser::parse(line)?;
            if args.keyword() == "home" {
                return Ok(Outcome::Home("bye".to_string()));
            }
            Ok(Outcome::Continue(line.trim().to_string()))
        }
    }

    fn shell() -> Shell {
        Shell::new(vec![Box::new(Echo)])
    }

    #[test]
    fn test_enter_and_leave_feature() {
        let mut shell = shell();
        assert_eq!(shell.prompt(), "wellnus> ");

        assert!(matches!(shell.handle_line("echo"), Reply::Message(m) if m == "hello from echo"));
        assert_eq!(shell.active_feature(), Some("echo"));
        assert_eq!(shell.prompt(), "echo> ");

        assert!(matches!(shell.handle_line(" hi there "), Reply::Message(m) if m == "hi there"));
        // `exit` belongs to the feature while inside it
        assert!(matches!(shell.handle_line("exit"), Reply::Message(_)));

        assert!(matches!(shell.handle_line("home"), Reply::Message(m) if m == "bye"));
        assert_eq!(shell.active_feature(), None);
        assert!(matches!(shell.handle_line("exit"), Reply::Exit));
    }

    #[test]
    fn test_top_level_errors() {
        let mut shell = shell();
        assert!(matches!(
            shell.handle_line("dance"),
            Reply::Error(CommandError::Validation(ValidationError::UnknownCommand(_)))
        ));
        assert!(matches!(
            shell.handle_line("--echo"),
            Reply::Error(CommandError::Parse(_))
        ));
        assert!(matches!(
            shell.handle_line("exit now"),
            Reply::Error(CommandError::Validation(_))
        ));
    }

    #[test]
    fn test_help_lists_features() {
        let mut shell = shell();
        match shell.handle_line("help") {
            Reply::Message(m) => assert!(m.contains("1. echo - Echo - repeats what you say")),
            other => panic!("unexpected reply {:?}", other),
        }
    }
}
