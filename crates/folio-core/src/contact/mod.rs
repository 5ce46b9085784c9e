//! Contact form: field state, validation, and the submission lifecycle.

mod controller;
mod form;
mod relay;

pub use controller::{
    ContactForm, ContactSnapshot, Phase, RESET_DELAY, SEND_ERROR, SubmissionStatus, SubmitOutcome,
};
pub use form::{Field, FieldError, FormState, is_valid_email};
pub use relay::{Relay, compose};
