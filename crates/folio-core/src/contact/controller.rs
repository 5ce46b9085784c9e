// Submission lifecycle: idle → submitting → submitted | error → idle.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::form::{Field, FieldError, FormState};
use super::relay::{Relay, compose};

/// How long a success or error stays on screen.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

/// Shown for every delivery failure; the cause goes to the log.
pub const SEND_ERROR: &str =
    "Hubo un error al enviar el mensaje. Por favor, intenta de nuevo más tarde.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Submission progress. An error only ever accompanies `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub phase: Phase,
    pub error: Option<String>,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }
}

/// Everything a renderer needs, published on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSnapshot {
    pub form: FormState,
    pub status: SubmissionStatus,
}

/// What [`ContactForm::submit`] did with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Handed to the relay.
    Dispatched,
    /// A submission is already in flight.
    Ignored,
    /// Refused before reaching the relay.
    Invalid(FieldError),
}

/// Owns the contact form state and its submission tasks.
///
/// Each submission runs on a spawned task tied to a child of the
/// controller's cancellation token. The task delivers the message, records
/// the outcome, then waits [`RESET_DELAY`] before returning to idle. A new
/// submission cancels a pending reset; [`shutdown`](Self::shutdown) (or drop)
/// cancels everything.
pub struct ContactForm<R: Relay> {
    relay: Arc<R>,
    state: Arc<watch::Sender<ContactSnapshot>>,
    cancel: CancellationToken,
    pending: Option<CancellationToken>,
}

impl<R: Relay> ContactForm<R> {
    pub fn new(relay: R) -> Self {
        let (state, _) = watch::channel(ContactSnapshot::default());
        Self {
            relay: Arc::new(relay),
            state: Arc::new(state),
            cancel: CancellationToken::new(),
            pending: None,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> ContactSnapshot {
        self.state.borrow().clone()
    }

    pub fn form(&self) -> FormState {
        self.state.borrow().form.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().status.clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<ContactSnapshot> {
        self.state.subscribe()
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Replace one field's value.
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.form.set(field, value));
    }

    /// Apply an in-place edit to one field (typing, backspace).
    pub fn edit_field(&self, field: Field, edit: impl FnOnce(&mut String)) {
        self.state.send_modify(|s| edit(s.form.get_mut(field)));
    }

    /// Validate and dispatch the current form.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> SubmitOutcome {
        let snapshot = self.snapshot();
        if snapshot.status.is_submitting() {
            debug!("submit ignored: already submitting");
            return SubmitOutcome::Ignored;
        }
        if let Err(err) = snapshot.form.validate() {
            debug!(field = %err.field(), "submit refused");
            return SubmitOutcome::Invalid(err);
        }

        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
        let token = self.cancel.child_token();
        self.pending = Some(token.clone());

        self.state.send_modify(|s| {
            s.status.phase = Phase::Submitting;
            s.status.error = None;
        });

        let params = compose(&snapshot.form, &Local::now());
        let relay = Arc::clone(&self.relay);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let result = tokio::select! {
                () = token.cancelled() => return,
                result = relay.deliver(&params) => result,
            };

            match result {
                Ok(()) => {
                    info!(title = %params.title, "contact message delivered");
                    state.send_modify(|s| {
                        s.form = FormState::default();
                        s.status.phase = Phase::Submitted;
                        s.status.error = None;
                    });
                }
                Err(e) => {
                    warn!(error = %e, "contact message failed");
                    state.send_modify(|s| {
                        s.status.phase = Phase::Idle;
                        s.status.error = Some(SEND_ERROR.to_owned());
                    });
                }
            }

            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(RESET_DELAY) => {
                    debug!("submission status reset");
                    state.send_modify(|s| s.status = SubmissionStatus::default());
                }
            }
        });

        SubmitOutcome::Dispatched
    }

    /// Cancel any in-flight delivery and pending reset.
    pub fn shutdown(&mut self) {
        self.pending = None;
        self.cancel.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl<R: Relay> Drop for ContactForm<R> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
