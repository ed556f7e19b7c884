//! WellNUS Core - Shared functionality for all WellNUS features
//!
//! Every feature speaks the same command-line dialect:
//! `<keyword> [payload] [--flag [payload]]...`
//!
//! This crate owns the pieces every feature needs to take part in that dialect:
//! - [`parser`]: raw line to [`ArgumentMap`]
//! - [`command`]: the validation contract and the [`Feature`] trait
//! - [`error`]: the shared error taxonomy
//! - [`storage`]: the persistence boundary
//! - [`config`] / [`paths`]: where things live and how they are tuned

pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod paths;
pub mod storage;

pub use command::{Feature, Outcome};
pub use config::Config;
pub use error::{CommandError, ParseError, StorageError, ValidationError};
pub use parser::ArgumentMap;
pub use paths::Paths;
pub use storage::{Storage, Tokenizer};
