//! Reflection questions, the last drawn set and favourites
//!
//! The list is built by the caller and owned by the feature; nothing here is
//! global.

use std::collections::BTreeSet;

use rand::seq::index;
use rand::Rng;
use thiserror::Error;
use tracing::debug;
use wellnus_core::{CommandError, ValidationError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("A set of questions has not been gotten yet. Use `get` before adding to favourites!")]
    NoSetDrawn,

    #[error("Please input the index of a question from the last set (1 to {0})")]
    BadIndex(usize),
}

impl From<QuestionError> for CommandError {
    fn from(err: QuestionError) -> Self {
        match err {
            QuestionError::NoSetDrawn => CommandError::State(err.to_string()),
            QuestionError::BadIndex(_) => {
                CommandError::Validation(ValidationError::Invalid(err.to_string()))
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuestionList {
    questions: Vec<String>,
    /// Question indices shown by the last `draw`, in display order
    current_set: Vec<usize>,
    favourites: BTreeSet<usize>,
}

impl QuestionList {
    pub fn new(questions: Vec<String>) -> Self {
        Self {
            questions,
            current_set: Vec::new(),
            favourites: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    /// Draw up to `count` distinct questions, replacing the previous set
    pub fn draw<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<&str> {
        let amount = count.min(self.questions.len());
        self.current_set = index::sample(rng, self.questions.len(), amount).into_vec();
        debug!(drawn = ?self.current_set, "drew reflection questions");
        self.current_set
            .iter()
            .map(|&i| self.questions[i].as_str())
            .collect()
    }

    pub fn current_set(&self) -> &[usize] {
        &self.current_set
    }

    pub fn has_current_set(&self) -> bool {
        !self.current_set.is_empty()
    }

    /// Add question `position` (1-based, within the last set) to favourites.
    /// Returns the question and whether it was newly added.
    pub fn like(&mut self, position: usize) -> Result<(&str, bool), QuestionError> {
        if !self.has_current_set() {
            return Err(QuestionError::NoSetDrawn);
        }
        let index = position
            .checked_sub(1)
            .and_then(|p| self.current_set.get(p).copied())
            .ok_or(QuestionError::BadIndex(self.current_set.len()))?;

        let added = self.favourites.insert(index);
        Ok((self.questions[index].as_str(), added))
    }

    /// Favourite questions, in list order
    pub fn favourites(&self) -> Vec<&str> {
        self.favourites
            .iter()
            .filter_map(|&i| self.question(i))
            .collect()
    }

    pub fn favourite_indices(&self) -> Vec<usize> {
        self.favourites.iter().copied().collect()
    }

    /// Replace favourites, dropping indices the list does not have
    pub fn set_favourites(&mut self, indices: impl IntoIterator<Item = usize>) {
        let len = self.questions.len();
        self.favourites = indices.into_iter().filter(|&i| i < len).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn list() -> QuestionList {
        QuestionList::new((0..10).map(|i| format!("Question {}?", i)).collect())
    }

    #[test]
    fn test_draw_distinct() {
        let mut questions = list();
        let mut rng = StdRng::seed_from_u64(7);
        let drawn: Vec<String> = questions
            .draw(5, &mut rng)
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(drawn.len(), 5);

        let unique: BTreeSet<usize> = questions.current_set().iter().copied().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_draw_caps_at_list_length() {
        let mut questions = QuestionList::new(vec!["Only one?".to_string()]);
        let drawn = questions.draw(5, &mut StdRng::seed_from_u64(1));
        assert_eq!(drawn, vec!["Only one?"]);
    }

    #[test]
    fn test_like_requires_a_set() {
        let mut questions = list();
        assert_eq!(questions.like(1).unwrap_err(), QuestionError::NoSetDrawn);
    }

    #[test]
    fn test_like_maps_position_to_question() {
        let mut questions = list();
        questions.draw(5, &mut StdRng::seed_from_u64(3));
        let third = questions.current_set()[2];

        let (question, added) = questions.like(3).unwrap();
        assert_eq!(question, format!("Question {}?", third));
        assert!(added);

        let (_, added) = questions.like(3).unwrap();
        assert!(!added);
        assert_eq!(questions.favourite_indices(), vec![third]);
    }

    #[test]
    fn test_like_out_of_set() {
        let mut questions = list();
        questions.draw(5, &mut StdRng::seed_from_u64(3));
        assert_eq!(questions.like(0).unwrap_err(), QuestionError::BadIndex(5));
        assert_eq!(questions.like(6).unwrap_err(), QuestionError::BadIndex(5));
    }

    #[test]
    fn test_set_favourites_drops_unknown() {
        let mut questions = list();
        questions.set_favourites([1, 4, 99]);
        assert_eq!(questions.favourites(), vec!["Question 1?", "Question 4?"]);
    }
}
