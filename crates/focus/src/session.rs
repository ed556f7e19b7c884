//! Focus session state machine
//!
//! A session runs `cycles` rounds of Work and Break, then one Long break:
//!
//! ```text
//! Work, Break, Work, Break, ..., Work, Break, LongBreak
//! ```
//!
//! Lifecycle:
//!
//! ```text
//! Ready --start--> Counting <--pause/resume--> Paused
//!                     |  (phase time runs out)
//!                     v
//!                  Waiting --next--> Counting
//!
//! last phase runs out  -> Ended
//! stop (any live state) -> Stopped
//! ```
//!
//! Time is never ticked in the background. The active countdown is brought up
//! to date from two clock readings whenever an operation runs.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};
use wellnus_core::command::check_bounds;
use wellnus_core::config::FocusDefaults;
use wellnus_core::{CommandError, ValidationError};

use crate::clock::Clock;
use crate::countdown::{Countdown, Phase};

pub const MIN_CYCLES: u32 = 2;
pub const MAX_CYCLES: u32 = 5;
pub const MIN_MINUTES: u32 = 1;
pub const MAX_MINUTES: u32 = 60;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Configured, nothing counting yet
    Ready,
    /// A phase is counting down
    Counting,
    /// A phase is frozen
    Paused,
    /// A phase ran out, waiting for `next`
    Waiting,
    /// Stopped by the user
    Stopped,
    /// Every phase ran out
    Ended,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Ready => "ready",
            SessionState::Counting => "counting",
            SessionState::Paused => "paused",
            SessionState::Waiting => "waiting",
            SessionState::Stopped => "stopped",
            SessionState::Ended => "ended",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Stopped | SessionState::Ended)
    }
}

/// Operation not valid in the current state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("A focus session has not started yet, try `start`ing one first!")]
    NotStarted,

    #[error("A focus session is already running! Use `stop` to end it first.")]
    AlreadyStarted,

    #[error("The timer is not counting, so there is nothing to pause.")]
    NotCounting,

    #[error("The timer is not paused, so there is nothing to resume.")]
    NotPaused,

    #[error("Oops, your timer for this session is still ticking!")]
    TimerRunning,

    #[error("This countdown is over. Use `next` to move on.")]
    PhaseOver,

    #[error("This focus session is over. Use `start` to begin a new one.")]
    Over,

    #[error("You can only change the configuration before a session starts or after it stops.")]
    ConfigLocked,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Invariant(String),
}

impl From<SessionError> for CommandError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::State(e) => CommandError::State(e.to_string()),
            SessionError::Validation(e) => CommandError::Validation(e),
            SessionError::Invariant(msg) => CommandError::Invariant(msg),
        }
    }
}

/// Cycle count and phase lengths, every field always within bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    cycles: u32,
    work: u32,
    #[serde(rename = "break")]
    break_minutes: u32,
    #[serde(rename = "longbreak")]
    long_break: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cycles: 4,
            work: 25,
            break_minutes: 5,
            long_break: 15,
        }
    }
}

impl SessionConfig {
    /// Build a config, rejecting any out-of-bound field
    pub fn new(
        cycles: u32,
        work: u32,
        break_minutes: u32,
        long_break: u32,
    ) -> Result<Self, ValidationError> {
        let config = Self {
            cycles,
            work,
            break_minutes,
            long_break,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_defaults(defaults: &FocusDefaults) -> Result<Self, ValidationError> {
        Self::new(
            defaults.cycles,
            defaults.work,
            defaults.break_minutes,
            defaults.long_break,
        )
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_cycles(i64::from(self.cycles))?;
        check_minutes("work", i64::from(self.work))?;
        check_minutes("break", i64::from(self.break_minutes))?;
        check_minutes("longbreak", i64::from(self.long_break))?;
        Ok(())
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn work(&self) -> u32 {
        self.work
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    pub fn long_break(&self) -> u32 {
        self.long_break
    }

    /// Total number of phases this config materializes
    pub fn phase_count(&self) -> usize {
        self.cycles as usize * 2 + 1
    }

    fn phases(&self) -> Vec<Countdown> {
        let mut phases = Vec::with_capacity(self.phase_count());
        for _ in 0..self.cycles {
            phases.push(Countdown::new(Phase::Work, self.work));
            phases.push(Countdown::new(Phase::Break, self.break_minutes));
        }
        phases.push(Countdown::new(Phase::LongBreak, self.long_break));
        phases
    }
}

pub fn check_cycles(value: i64) -> Result<u32, ValidationError> {
    check_bounds("cycle", value, MIN_CYCLES, MAX_CYCLES)
}

pub fn check_minutes(field: &str, value: i64) -> Result<u32, ValidationError> {
    check_bounds(field, value, MIN_MINUTES, MAX_MINUTES)
}

/// Fields to change in one `configure` call; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub cycles: Option<u32>,
    pub work: Option<u32>,
    pub break_minutes: Option<u32>,
    pub long_break: Option<u32>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.cycles.is_none()
            && self.work.is_none()
            && self.break_minutes.is_none()
            && self.long_break.is_none()
    }

    /// Apply on top of `base`, re-checking every supplied field
    fn apply_to(&self, base: SessionConfig) -> Result<SessionConfig, ValidationError> {
        let mut next = base;
        if let Some(cycles) = self.cycles {
            next.cycles = check_cycles(i64::from(cycles))?;
        }
        if let Some(work) = self.work {
            next.work = check_minutes("work", i64::from(work))?;
        }
        if let Some(brk) = self.break_minutes {
            next.break_minutes = check_minutes("break", i64::from(brk))?;
        }
        if let Some(long_break) = self.long_break {
            next.long_break = check_minutes("longbreak", i64::from(long_break))?;
        }
        Ok(next)
    }
}

/// Snapshot returned by [`Session::check`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatus {
    pub state: SessionState,
    pub phase: Phase,
    pub remaining: Duration,
    pub total: Duration,
    /// Zero-based index of the active phase
    pub index: usize,
    pub count: usize,
}

/// The focus timer
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    phases: Vec<Countdown>,
    cursor: usize,
    state: SessionState,
    /// Last time the active countdown was brought up to date, set while counting
    synced_at: Option<DateTime<Utc>>,
    clock: Arc<dyn Clock>,
}

impl Session {
    pub fn new(config: SessionConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            phases: Vec::new(),
            cursor: 0,
            state: SessionState::Ready,
            synced_at: None,
            clock,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Current state, counting any time that ran out since the last operation
    pub fn state(&self) -> SessionState {
        if self.state == SessionState::Counting && self.live_remaining() <= Duration::zero() {
            return self.expired_state();
        }
        self.state
    }

    /// Active countdown, `None` until started and after a stop
    pub fn current_countdown(&self) -> Option<&Countdown> {
        self.phases.get(self.cursor)
    }

    pub fn phase_index(&self) -> usize {
        self.cursor
    }

    /// Number of materialized phases (zero before `start`)
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Materialize the phases and start the first one
    pub fn start(&mut self) -> Result<&Countdown, SessionError> {
        match self.state {
            SessionState::Ready => {}
            s if s.is_terminal() => return Err(StateError::Over.into()),
            _ => return Err(StateError::AlreadyStarted.into()),
        }

        self.phases = self.config.phases();
        self.cursor = 0;
        self.state = SessionState::Counting;
        self.synced_at = Some(self.clock.now());
        info!(phases = self.phases.len(), "focus session started");

        self.active()
    }

    /// Freeze the active countdown
    pub fn pause(&mut self) -> Result<Duration, SessionError> {
        self.sync();
        match self.state {
            SessionState::Counting => {
                self.state = SessionState::Paused;
                self.synced_at = None;
                let remaining = self.active()?.remaining();
                debug!(remaining_secs = remaining.num_seconds(), "paused");
                Ok(remaining)
            }
            other => Err(self.reject(other, StateError::NotCounting)),
        }
    }

    /// Continue the frozen countdown from where it stopped
    pub fn resume(&mut self) -> Result<Duration, SessionError> {
        self.sync();
        match self.state {
            SessionState::Paused => {
                self.state = SessionState::Counting;
                self.synced_at = Some(self.clock.now());
                let remaining = self.active()?.remaining();
                debug!(remaining_secs = remaining.num_seconds(), "resumed");
                Ok(remaining)
            }
            other => Err(self.reject(other, StateError::NotPaused)),
        }
    }

    /// Abandon the remaining phases
    pub fn stop(&mut self) -> Result<(), SessionError> {
        self.sync();
        if self.state.is_terminal() {
            return Err(StateError::Over.into());
        }

        info!(
            phase = self.cursor,
            state = self.state.as_str(),
            "focus session stopped"
        );
        self.phases.clear();
        self.cursor = 0;
        self.state = SessionState::Stopped;
        self.synced_at = None;
        Ok(())
    }

    /// Move on to the next phase once the active one has run out
    pub fn next(&mut self) -> Result<&Countdown, SessionError> {
        self.sync();
        match self.state {
            SessionState::Waiting => {}
            SessionState::Ready => return Err(StateError::NotStarted.into()),
            SessionState::Counting | SessionState::Paused => {
                return Err(StateError::TimerRunning.into())
            }
            _ => return Err(StateError::Over.into()),
        }

        if self.cursor + 1 >= self.phases.len() {
            return Err(self.invariant("waiting after the final phase"));
        }

        self.cursor += 1;
        self.state = SessionState::Counting;
        self.synced_at = Some(self.clock.now());
        debug!(phase = self.cursor, "advanced to next phase");

        self.active()
    }

    /// Report the active countdown without changing anything
    pub fn check(&self) -> Result<SessionStatus, SessionError> {
        let state = self.state();
        match state {
            SessionState::Ready => return Err(StateError::NotStarted.into()),
            s if s.is_terminal() => return Err(StateError::Over.into()),
            _ => {}
        }

        let countdown = self.active()?;
        Ok(SessionStatus {
            state,
            phase: countdown.phase(),
            remaining: self.live_remaining(),
            total: countdown.total(),
            index: self.cursor,
            count: self.phases.len(),
        })
    }

    /// Change any subset of the configuration. Either every supplied field is
    /// applied or none is. An update with no fields is rejected.
    pub fn configure(&mut self, update: &ConfigUpdate) -> Result<SessionConfig, SessionError> {
        if update.is_empty() {
            return Err(ValidationError::TooFewArguments("config".to_string()).into());
        }
        self.sync();
        if !(self.state == SessionState::Ready || self.state.is_terminal()) {
            return Err(StateError::ConfigLocked.into());
        }

        let next = update.apply_to(self.config).map_err(|e| {
            error!(
                error = %e,
                "configuration value passed validation but failed the second check, \
                 this may be a developer error"
            );
            SessionError::Invariant(e.to_string())
        })?;

        self.config = next;
        info!(
            cycles = next.cycles,
            work = next.work,
            break_minutes = next.break_minutes,
            long_break = next.long_break,
            "focus session configured"
        );
        Ok(next)
    }

    /// Return a finished session to `Ready`
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.sync();
        match self.state {
            SessionState::Ready => Ok(()),
            s if s.is_terminal() => {
                self.phases.clear();
                self.cursor = 0;
                self.state = SessionState::Ready;
                self.synced_at = None;
                debug!("focus session reset");
                Ok(())
            }
            _ => Err(StateError::AlreadyStarted.into()),
        }
    }

    fn active(&self) -> Result<&Countdown, SessionError> {
        self.phases
            .get(self.cursor)
            .ok_or_else(|| self.invariant("no countdown at the session cursor"))
    }

    fn live_remaining(&self) -> Duration {
        let Some(countdown) = self.phases.get(self.cursor) else {
            return Duration::zero();
        };
        match (self.state, self.synced_at) {
            (SessionState::Counting, Some(at)) => {
                let elapsed = (self.clock.now() - at).max(Duration::zero());
                (countdown.remaining() - elapsed).max(Duration::zero())
            }
            _ => countdown.remaining(),
        }
    }

    fn expired_state(&self) -> SessionState {
        if self.cursor + 1 >= self.phases.len() {
            SessionState::Ended
        } else {
            SessionState::Waiting
        }
    }

    /// Fold elapsed time into the active countdown and record expiry
    fn sync(&mut self) {
        if self.state != SessionState::Counting {
            return;
        }
        let now = self.clock.now();
        let elapsed = self.synced_at.map(|at| now - at).unwrap_or_else(Duration::zero);
        self.synced_at = Some(now);

        let expired = match self.phases.get_mut(self.cursor) {
            Some(countdown) => {
                countdown.tick(elapsed);
                countdown.is_expired()
            }
            None => true,
        };

        if expired {
            self.state = self.expired_state();
            self.synced_at = None;
            info!(phase = self.cursor, state = self.state.as_str(), "countdown finished");
        }
    }

    /// Pick the error for an operation attempted in the wrong state
    fn reject(&self, state: SessionState, fallback: StateError) -> SessionError {
        match state {
            SessionState::Ready => StateError::NotStarted.into(),
            SessionState::Waiting => StateError::PhaseOver.into(),
            s if s.is_terminal() => StateError::Over.into(),
            _ => fallback.into(),
        }
    }

    fn invariant(&self, what: &str) -> SessionError {
        error!(
            what,
            cursor = self.cursor,
            phases = self.phases.len(),
            state = self.state.as_str(),
            "session invariant violated"
        );
        SessionError::Invariant(what.to_string())
    }
}

/// Shared, lock-guarded access to a session.
///
/// Every operation holds the lock for its whole duration, so transitions and
/// `check` never interleave.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Result<R, SessionError> {
        let mut session = self.inner.lock().map_err(|_| {
            error!("focus session lock poisoned");
            SessionError::Invariant("focus session lock poisoned".to_string())
        })?;
        Ok(f(&mut session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn session_with(config: SessionConfig) -> (Session, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        (Session::new(config, clock.clone()), clock)
    }

    fn fresh() -> (Session, Arc<ManualClock>) {
        session_with(SessionConfig::default())
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(
            (config.cycles(), config.work(), config.break_minutes(), config.long_break()),
            (4, 25, 5, 15)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_phase_layout() {
        let (mut session, _) = session_with(SessionConfig::new(2, 10, 3, 20).unwrap());
        session.start().unwrap();
        let phases: Vec<(Phase, u32)> = session
            .phases
            .iter()
            .map(|c| (c.phase(), c.minutes()))
            .collect();
        assert_eq!(
            phases,
            vec![
                (Phase::Work, 10),
                (Phase::Break, 3),
                (Phase::Work, 10),
                (Phase::Break, 3),
                (Phase::LongBreak, 20),
            ]
        );
        assert_eq!(session.phase_count(), SessionConfig::new(2, 10, 3, 20).unwrap().phase_count());
    }

    #[test]
    fn test_start_pause_resume_keeps_remaining() {
        let (mut session, clock) = fresh();
        assert_eq!(session.state(), SessionState::Ready);

        let first = session.start().unwrap();
        assert_eq!(first.phase(), Phase::Work);
        assert_eq!(first.minutes(), 25);
        assert_eq!(session.state(), SessionState::Counting);

        clock.advance(Duration::minutes(10));
        let frozen = session.pause().unwrap();
        assert_eq!(frozen, Duration::minutes(15));
        assert_eq!(session.state(), SessionState::Paused);

        // Time spent paused does not count
        clock.advance(Duration::minutes(30));
        assert_eq!(session.check().unwrap().remaining, Duration::minutes(15));

        assert_eq!(session.resume().unwrap(), Duration::minutes(15));
        assert_eq!(session.state(), SessionState::Counting);

        clock.advance(Duration::minutes(5));
        assert_eq!(session.check().unwrap().remaining, Duration::minutes(10));
    }

    #[test]
    fn test_start_twice_fails() {
        let (mut session, _) = fresh();
        session.start().unwrap();
        assert_eq!(
            session.start().unwrap_err(),
            SessionError::State(StateError::AlreadyStarted)
        );
    }

    #[test]
    fn test_next_while_counting_reports_running() {
        let (mut session, clock) = fresh();
        session.start().unwrap();
        clock.advance(Duration::minutes(1));

        assert_eq!(
            session.next().unwrap_err(),
            SessionError::State(StateError::TimerRunning)
        );
        assert_eq!(session.phase_index(), 0);

        session.pause().unwrap();
        assert_eq!(
            session.next().unwrap_err(),
            SessionError::State(StateError::TimerRunning)
        );
        assert_eq!(session.phase_index(), 0);
    }

    #[test]
    fn test_next_before_start_reports_not_started() {
        let (mut session, _) = fresh();
        assert_eq!(
            session.next().unwrap_err(),
            SessionError::State(StateError::NotStarted)
        );
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.phase_count(), 0);
    }

    #[test]
    fn test_expiry_then_next() {
        let (mut session, clock) = fresh();
        session.start().unwrap();
        clock.advance(Duration::minutes(26));

        assert_eq!(session.state(), SessionState::Waiting);
        let status = session.check().unwrap();
        assert_eq!(status.remaining, Duration::zero());
        assert_eq!(status.state, SessionState::Waiting);

        assert_eq!(
            session.pause().unwrap_err(),
            SessionError::State(StateError::PhaseOver)
        );

        let next = session.next().unwrap();
        assert_eq!(next.phase(), Phase::Break);
        assert_eq!(next.remaining(), Duration::minutes(5));
        assert_eq!(session.state(), SessionState::Counting);
        assert_eq!(session.phase_index(), 1);
    }

    #[test]
    fn test_long_gap_does_not_overrun_next_phase() {
        let (mut session, clock) = fresh();
        session.start().unwrap();
        clock.advance(Duration::hours(5));
        session.next().unwrap();
        // The five hours belong to the first phase only
        assert_eq!(session.check().unwrap().remaining, Duration::minutes(5));
    }

    #[test]
    fn test_full_run_ends_after_long_break() {
        let (mut session, clock) = session_with(SessionConfig::new(2, 1, 1, 1).unwrap());
        session.start().unwrap();
        for _ in 0..4 {
            clock.advance(Duration::minutes(1));
            session.next().unwrap();
        }
        assert_eq!(session.current_countdown().unwrap().phase(), Phase::LongBreak);

        clock.advance(Duration::minutes(1));
        assert_eq!(session.state(), SessionState::Ended);
        assert_eq!(session.next().unwrap_err(), SessionError::State(StateError::Over));
        assert_eq!(session.check().unwrap_err(), SessionError::State(StateError::Over));
    }

    #[test]
    fn test_stop_is_terminal() {
        for setup in 0..4 {
            let (mut session, clock) = fresh();
            match setup {
                1 => {
                    session.start().unwrap();
                }
                2 => {
                    session.start().unwrap();
                    session.pause().unwrap();
                }
                3 => {
                    session.start().unwrap();
                    clock.advance(Duration::minutes(30));
                }
                _ => {}
            }

            session.stop().unwrap();
            assert_eq!(session.state(), SessionState::Stopped);
            assert!(session.current_countdown().is_none());

            let over = SessionError::State(StateError::Over);
            assert_eq!(session.check().unwrap_err(), over);
            assert_eq!(session.pause().unwrap_err(), over);
            assert_eq!(session.resume().unwrap_err(), over);
            assert_eq!(session.stop().unwrap_err(), over);
            assert_eq!(session.start().unwrap_err(), over);
        }
    }

    #[test]
    fn test_reset_after_stop_allows_start() {
        let (mut session, _) = fresh();
        session.start().unwrap();
        assert!(session.reset().is_err());
        session.stop().unwrap();
        session.reset().unwrap();
        assert_eq!(session.state(), SessionState::Ready);
        assert!(session.start().is_ok());
    }

    #[test]
    fn test_pause_resume_wrong_state() {
        let (mut session, _) = fresh();
        assert_eq!(
            session.pause().unwrap_err(),
            SessionError::State(StateError::NotStarted)
        );
        session.start().unwrap();
        assert_eq!(
            session.resume().unwrap_err(),
            SessionError::State(StateError::NotPaused)
        );
        session.pause().unwrap();
        assert_eq!(
            session.pause().unwrap_err(),
            SessionError::State(StateError::NotCounting)
        );
    }

    #[test]
    fn test_configure_partial_keeps_other_fields() {
        let (mut session, _) = fresh();
        let update = ConfigUpdate {
            cycles: Some(3),
            work: Some(10),
            ..Default::default()
        };
        let config = session.configure(&update).unwrap();
        assert_eq!(
            (config.cycles(), config.work(), config.break_minutes(), config.long_break()),
            (3, 10, 5, 15)
        );
    }

    #[test]
    fn test_configure_bounds() {
        for cycles in [2, 5] {
            let (mut session, _) = fresh();
            let update = ConfigUpdate { cycles: Some(cycles), ..Default::default() };
            assert_eq!(session.configure(&update).unwrap().cycles(), cycles);
        }
        for cycles in [0, 1, 6] {
            let (mut session, _) = fresh();
            let update = ConfigUpdate { cycles: Some(cycles), ..Default::default() };
            assert!(matches!(session.configure(&update), Err(SessionError::Invariant(_))));
            assert_eq!(session.config(), SessionConfig::default());
        }
        for minutes in [1, 60] {
            let (mut session, _) = fresh();
            let update = ConfigUpdate {
                work: Some(minutes),
                break_minutes: Some(minutes),
                long_break: Some(minutes),
                ..Default::default()
            };
            let config = session.configure(&update).unwrap();
            assert_eq!(config.work(), minutes);
            assert_eq!(config.break_minutes(), minutes);
            assert_eq!(config.long_break(), minutes);
        }
        for minutes in [0, 61] {
            let updates = [
                ConfigUpdate { work: Some(minutes), ..Default::default() },
                ConfigUpdate { break_minutes: Some(minutes), ..Default::default() },
                ConfigUpdate { long_break: Some(minutes), ..Default::default() },
            ];
            for update in updates {
                let (mut session, _) = fresh();
                assert!(
                    matches!(session.configure(&update), Err(SessionError::Invariant(_))),
                    "{:?} was accepted",
                    update
                );
                assert_eq!(session.config(), SessionConfig::default());
            }
        }
    }

    #[test]
    fn test_configure_empty_update_fails() {
        let (mut session, _) = fresh();
        assert_eq!(
            session.configure(&ConfigUpdate::default()).unwrap_err(),
            SessionError::Validation(ValidationError::TooFewArguments("config".to_string()))
        );
        assert_eq!(session.config(), SessionConfig::default());

        let err: CommandError = session.configure(&ConfigUpdate::default()).unwrap_err().into();
        assert!(matches!(
            err,
            CommandError::Validation(ValidationError::TooFewArguments(_))
        ));
    }

    #[test]
    fn test_configure_is_all_or_nothing() {
        let (mut session, _) = fresh();
        let update = ConfigUpdate {
            cycles: Some(3),
            work: Some(30),
            break_minutes: Some(61),
            long_break: None,
        };
        assert!(session.configure(&update).is_err());
        assert_eq!(session.config(), SessionConfig::default());
    }

    #[test]
    fn test_configure_locked_while_running() {
        let (mut session, clock) = fresh();
        session.start().unwrap();
        let update = ConfigUpdate { work: Some(10), ..Default::default() };
        assert_eq!(
            session.configure(&update).unwrap_err(),
            SessionError::State(StateError::ConfigLocked)
        );
        session.pause().unwrap();
        assert!(session.configure(&update).is_err());
        session.resume().unwrap();
        clock.advance(Duration::minutes(25));
        assert!(session.configure(&update).is_err());

        session.stop().unwrap();
        assert_eq!(session.configure(&update).unwrap().work(), 10);
    }

    #[test]
    fn test_config_from_defaults_rejects_out_of_bounds() {
        let mut defaults = FocusDefaults::default();
        assert_eq!(
            SessionConfig::from_defaults(&defaults).unwrap(),
            SessionConfig::default()
        );
        defaults.cycles = 9;
        assert!(SessionConfig::from_defaults(&defaults).is_err());
    }

    #[test]
    fn test_handle_serializes_access() {
        let (session, clock) = fresh();
        let handle = SessionHandle::new(session);
        let worker = handle.clone();

        handle.with(|s| s.start().map(|_| ())).unwrap().unwrap();
        clock.advance(Duration::minutes(1));

        let remaining = std::thread::spawn(move || {
            worker.with(|s| s.check().map(|st| st.remaining)).unwrap().unwrap()
        })
        .join()
        .unwrap();
        assert_eq!(remaining, Duration::minutes(24));
    }
}
