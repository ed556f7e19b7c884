//! focus - Pomodoro-style focus timer
//!
//! "Work in bursts, rest on purpose."
//!
//! A session cycles through Work and Break countdowns a configured number of
//! times, then ends with a Long break:
//! - Configurable cycles (2-5) and phase lengths (1-60 minutes)
//! - Pause and resume without losing time
//! - Explicit `next` between phases so nothing starts behind your back
//!
//! Commands:
//! - start / stop: begin or abandon a session
//! - pause / resume: freeze the current countdown
//! - next: move on once a countdown has run out
//! - check: time left
//! - config: change cycles and phase lengths

pub mod clock;
pub mod command;
pub mod countdown;
pub mod manager;
pub mod session;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use command::FocusCommand;
pub use countdown::{Countdown, Phase};
pub use manager::FocusManager;
pub use session::{ConfigUpdate, Session, SessionConfig, SessionHandle, SessionState, StateError};
