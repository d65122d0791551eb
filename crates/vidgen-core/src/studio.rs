//! Generate-and-record state machine.
//!
//! A [`Studio`] owns the session state of a front end: whether a request is
//! in flight, the video being previewed, the history, and the transient
//! notice shown to the user. Every change goes through a [`StudioState`]
//! transition that consumes the old state and returns the new one.
//!
//! ```text
//! Idle --submit--> Submitting --ok--> (append + persist) --> Idle
//!                             --err--> Idle
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, warn};

use crate::Result;
use crate::client::GenerationClient;
use crate::error::Error;
use crate::generation::GenerationRequest;
use crate::history::HistoryList;
use crate::record::VideoRecord;
use crate::store::HistoryStore;
use crate::traits::{GenerationBackend, KeyValueStore};
use crate::types::{Prompt, Style, VideoDuration};

/// How long a success notice stays visible, in seconds.
pub const SUCCESS_NOTICE_SECS: i64 = 3;

/// Message shown after a successful generation.
pub const SUCCESS_MESSAGE: &str = "Video generated successfully!";

/// Whether a generation request is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// When the notice stops being shown. `None` keeps it until replaced.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notice {
    fn success(now: DateTime<Utc>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
            expires_at: Some(now + TimeDelta::seconds(SUCCESS_NOTICE_SECS)),
        }
    }

    fn warning(message: String) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message,
            expires_at: None,
        }
    }

    fn error(message: String) -> Self {
        Self {
            kind: NoticeKind::Error,
            message,
            expires_at: None,
        }
    }

    /// Returns true if the notice should still be shown at `now`.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

/// Snapshot of a studio session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudioState {
    pub phase: Phase,
    /// The most recently generated video in this session.
    pub current: Option<VideoRecord>,
    pub history: HistoryList,
    pub notice: Option<Notice>,
}

impl StudioState {
    /// Initial state for a session with previously stored history.
    pub fn new(history: HistoryList) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    /// Returns true while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// The notice to show at `now`, if any.
    pub fn visible_notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|notice| notice.is_visible_at(now))
    }

    /// Input was rejected before submitting.
    pub fn reject(self, error: &Error) -> Self {
        Self {
            notice: Some(Notice::error(error_message(error))),
            ..self
        }
    }

    /// Idle to Submitting. Clears any notice.
    pub fn begin(self) -> Self {
        Self {
            phase: Phase::Submitting,
            notice: None,
            ..self
        }
    }

    /// The backend answered. Records the video and shows a success notice
    /// that expires [`SUCCESS_NOTICE_SECS`] after `now`, replacing any
    /// earlier one.
    pub fn succeed(self, record: VideoRecord, now: DateTime<Utc>) -> Self {
        Self {
            history: self.history.append(record.clone()),
            current: Some(record),
            notice: Some(Notice::success(now)),
            ..self
        }
    }

    /// The backend call failed. History is left as it was.
    pub fn fail(self, error: &Error) -> Self {
        Self {
            notice: Some(Notice::error(format!(
                "Failed to generate video: {}",
                error
            ))),
            ..self
        }
    }

    /// The history could not be written. In-memory history stays as is.
    pub fn persist_failed(self, error: &Error) -> Self {
        Self {
            notice: Some(Notice::warning(format!(
                "Video generated, but history could not be saved: {}",
                error
            ))),
            ..self
        }
    }

    /// Back to Idle, whatever the outcome.
    pub fn settle(self) -> Self {
        Self {
            phase: Phase::Idle,
            ..self
        }
    }
}

fn error_message(error: &Error) -> String {
    match error {
        Error::InvalidInput(inner) => inner.to_string(),
        other => other.to_string(),
    }
}

fn lock(state: &Mutex<StudioState>) -> MutexGuard<'_, StudioState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn apply(state: &Mutex<StudioState>, transition: impl FnOnce(StudioState) -> StudioState) {
    let mut guard = lock(state);
    let current = std::mem::take(&mut *guard);
    *guard = transition(current);
}

/// Returns the studio to Idle when dropped, on every exit path of a
/// submission including a dropped future.
struct SubmitGuard<'a> {
    state: &'a Mutex<StudioState>,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        apply(self.state, StudioState::settle);
    }
}

/// Session front end over a generation backend and durable history.
#[derive(Debug)]
pub struct Studio<B, S> {
    client: GenerationClient<B>,
    store: HistoryStore<S>,
    state: Mutex<StudioState>,
}

impl<B, S> Studio<B, S>
where
    B: GenerationBackend,
    S: KeyValueStore,
{
    /// Start a session, loading stored history once.
    pub async fn open(backend: B, storage: S) -> Self {
        let store = HistoryStore::new(storage);
        let history = store.load().await;
        Self::with_history(backend, store, history)
    }

    /// Start a session with an already loaded history.
    pub fn with_history(backend: B, store: HistoryStore<S>, history: HistoryList) -> Self {
        Self {
            client: GenerationClient::new(backend),
            store,
            state: Mutex::new(StudioState::new(history)),
        }
    }

    /// Returns the generation client.
    pub fn client(&self) -> &GenerationClient<B> {
        &self.client
    }

    /// Returns the history store.
    pub fn store(&self) -> &HistoryStore<S> {
        &self.store
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> StudioState {
        lock(&self.state).clone()
    }

    /// Returns true while a request is in flight.
    pub fn is_busy(&self) -> bool {
        lock(&self.state).is_busy()
    }

    /// The most recently generated video in this session.
    pub fn current(&self) -> Option<VideoRecord> {
        lock(&self.state).current.clone()
    }

    /// The history, most recent first.
    pub fn history(&self) -> HistoryList {
        lock(&self.state).history.clone()
    }

    /// The notice to show at `now`, if any.
    pub fn visible_notice(&self, now: DateTime<Utc>) -> Option<Notice> {
        lock(&self.state).visible_notice(now).cloned()
    }

    /// Generate a video and record it.
    ///
    /// Fails with [`Error::Busy`] while another submission is in flight and
    /// with an empty-prompt error before contacting the backend. On success
    /// the history is persisted once; a persistence failure only leaves a
    /// warning notice and the record is still returned.
    pub async fn submit(
        &self,
        prompt: &str,
        style: Style,
        duration: VideoDuration,
    ) -> Result<VideoRecord> {
        let (prompt, _guard) = self.start(prompt)?;
        let request = GenerationRequest::new(prompt, style, duration);

        let record = match self.client.generate_request(&request).await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "video generation failed");
                apply(&self.state, |state| state.fail(&e));
                return Err(e);
            }
        };

        let history = {
            let mut guard = lock(&self.state);
            let current = std::mem::take(&mut *guard);
            *guard = current.succeed(record.clone(), Utc::now());
            guard.history.clone()
        };

        info!(id = %record.id, title = %record.title, "video recorded");

        if let Err(e) = self.store.persist(&history).await {
            warn!(error = %e, "failed to persist video history");
            apply(&self.state, |state| state.persist_failed(&e));
        }

        Ok(record)
    }

    fn start(&self, prompt: &str) -> Result<(Prompt, SubmitGuard<'_>)> {
        let mut guard = lock(&self.state);

        if guard.is_busy() {
            debug!("rejecting submission while busy");
            return Err(Error::Busy);
        }

        let prompt = match Prompt::new(prompt) {
            Ok(prompt) => prompt,
            Err(e) => {
                let current = std::mem::take(&mut *guard);
                *guard = current.reject(&e);
                return Err(e);
            }
        };

        let current = std::mem::take(&mut *guard);
        *guard = current.begin();
        drop(guard);

        Ok((prompt, SubmitGuard { state: &self.state }))
    }
}
