//! Focus Timer feature driver

use std::sync::Arc;

use tracing::{debug, warn};
use wellnus_core::config::FocusDefaults;
use wellnus_core::{parser, CommandError, Feature, Outcome, Storage};

use crate::clock::Clock;
use crate::command::FocusCommand;
use crate::session::{Session, SessionConfig, SessionHandle};
use crate::store::{ConfigTokenizer, FEATURE};

const GREETING_MESSAGE: &str = "Welcome to Focus Timer! Type `help` to see what you can do.";

pub struct FocusManager {
    session: SessionHandle,
    storage: Option<Storage>,
}

impl FocusManager {
    /// Build the feature. A configuration saved by an earlier run takes
    /// precedence over `defaults`.
    pub fn new(defaults: SessionConfig, clock: Arc<dyn Clock>, storage: Option<Storage>) -> Self {
        let config = storage
            .as_ref()
            .and_then(|s| s.restore_with(FEATURE, &ConfigTokenizer))
            .unwrap_or(defaults);
        debug!(?config, "focus timer ready");

        Self {
            session: SessionHandle::new(Session::new(config, clock)),
            storage,
        }
    }

    /// Build from user configuration, keeping built-in defaults if it is out of bounds
    pub fn from_defaults(
        defaults: &FocusDefaults,
        clock: Arc<dyn Clock>,
        storage: Option<Storage>,
    ) -> Self {
        let config = SessionConfig::from_defaults(defaults).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring focus defaults from config file");
            SessionConfig::default()
        });
        Self::new(config, clock, storage)
    }

    /// Handle to the session, for hosts that watch it from another thread
    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    fn persist(&self, config: SessionConfig) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.save_with(FEATURE, &ConfigTokenizer, &config) {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "failed to save focus configuration");
                Some(format!("\n(These settings could not be saved: {})", e))
            }
        }
    }
}

impl Feature for FocusManager {
    fn name(&self) -> &'static str {
        FEATURE
    }

    fn brief_description(&self) -> &'static str {
        "Focus Timer - work in focused bursts with regular breaks"
    }

    fn greeting(&self) -> String {
        GREETING_MESSAGE.to_string()
    }

    fn execute(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let args = parser::parse(line)?;
        let command = FocusCommand::from_arguments(&args)?;
        debug!(command = command.keyword(), "running focus command");

        let (outcome, config) = self.session.with(|session| {
            command
                .execute(session)
                .map(|outcome| (outcome, session.config()))
        })??;

        if let (FocusCommand::Config(_), Outcome::Continue(message)) = (&command, &outcome) {
            if let Some(note) = self.persist(config) {
                return Ok(Outcome::Continue(format!("{}{}", message, note)));
            }
        }
        Ok(outcome)
    }
}
