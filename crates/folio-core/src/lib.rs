//! Display content and interaction logic for the folio portfolio.
//!
//! Everything here is headless; the terminal binary supplies the surface.
//!
//! - **[`content`]** holds the hard-coded registries (navigation, hero,
//!   technologies, projects, contact channels, footer).
//!
//! - **[`motion`]** is the reveal engine: viewport- and time-triggered
//!   tweens over a [`motion::Surface`] capability.
//!
//! - **[`NavBar`]** tracks the scrolled/solid state and the mobile menu, and
//!   follows in-page anchors through a [`nav::Document`].
//!
//! - **[`ContactForm`]** owns the form draft and the submission lifecycle
//!   against a [`contact::Relay`], with a cancellable auto-reset.
//!
//! - **[`Page`]** composes the above: global motion defaults, per-section
//!   choreography, smooth scrolling, and teardown.

pub mod config;
pub mod contact;
pub mod content;
pub mod description;
pub mod error;
pub mod motion;
pub mod nav;
pub mod page;
pub mod scroll;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::RelayConfig;
pub use contact::{ContactForm, ContactSnapshot, Field, FormState, Phase, SubmitOutcome};
pub use description::{ProjectDescription, parse_description};
pub use error::CoreError;
pub use motion::{RevealAnimator, Surface, TargetId, VisualState};
pub use nav::{Appearance, NavBar};
pub use page::{AnchorMap, Page, PageOptions};
