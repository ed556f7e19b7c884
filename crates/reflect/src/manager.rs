//! Self Reflection feature driver

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};
use wellnus_core::config::ReflectSettings;
use wellnus_core::{parser, CommandError, Feature, Outcome, Storage};

use crate::command::ReflectCommand;
use crate::question::QuestionList;
use crate::store::{FavouritesTokenizer, FEATURE};

const GREETING_MESSAGE: &str = "Welcome to Self Reflection!\n\
    Feel very occupied and cannot find time to self reflect?\n\
    No worries, this section gives you the opportunity to reflect and improve on yourself!";

pub struct ReflectManager {
    questions: QuestionList,
    set_size: usize,
    rng: StdRng,
    storage: Option<Storage>,
}

impl ReflectManager {
    /// Build the feature around a caller-supplied question list. Favourites
    /// saved by an earlier run are restored.
    pub fn new(
        mut questions: QuestionList,
        settings: &ReflectSettings,
        rng: StdRng,
        storage: Option<Storage>,
    ) -> Self {
        if let Some(saved) = storage
            .as_ref()
            .and_then(|s| s.restore_with(FEATURE, &FavouritesTokenizer))
        {
            debug!(count = saved.len(), "restored favourite questions");
            questions.set_favourites(saved);
        }

        Self {
            questions,
            set_size: settings.questions_per_set.max(1),
            rng,
            storage,
        }
    }

    /// Same as [`ReflectManager::new`] with an entropy-seeded generator
    pub fn with_entropy(
        questions: QuestionList,
        settings: &ReflectSettings,
        storage: Option<Storage>,
    ) -> Self {
        Self::new(questions, settings, StdRng::from_entropy(), storage)
    }

    pub fn questions(&self) -> &QuestionList {
        &self.questions
    }

    fn persist(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.save_with(FEATURE, &FavouritesTokenizer, &self.questions.favourite_indices()) {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "failed to save favourite questions");
                Some(format!("\n(Your favourites could not be saved: {})", e))
            }
        }
    }
}

impl Feature for ReflectManager {
    fn name(&self) -> &'static str {
        FEATURE
    }

    fn brief_description(&self) -> &'static str {
        "Self Reflection - questions to think about, and a list of favourites"
    }

    fn greeting(&self) -> String {
        GREETING_MESSAGE.to_string()
    }

    fn execute(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let args = parser::parse(line)?;
        let command = ReflectCommand::from_arguments(&args, self.set_size)?;
        debug!(command = command.keyword(), "running reflect command");

        let outcome = command.execute(&mut self.questions, self.set_size, &mut self.rng)?;
        if let (ReflectCommand::Like(_), Outcome::Continue(message)) = (&command, &outcome) {
            if let Some(note) = self.persist() {
                return Ok(Outcome::Continue(format!("{}{}", message, note)));
            }
        }
        Ok(outcome)
    }
}
