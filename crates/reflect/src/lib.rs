//! reflect - Self-reflection prompts
//!
//! Draws a handful of reflection questions at a time and lets the user keep
//! the ones worth coming back to.
//!
//! Commands:
//! - get: draw a new set of questions
//! - like N: add question N of the last set to favourites
//! - fav: list favourites

pub mod command;
pub mod manager;
pub mod question;
pub mod store;

pub use command::ReflectCommand;
pub use manager::ReflectManager;
pub use question::{QuestionError, QuestionList};
