//! Common types used throughout wheelhouse.
//!
//! These are plain data carriers shared by the engine and any frontends:
//! the [`Participant`] read projection, the request-scoped [`PageWindow`],
//! and the [`SpinResult`] value returned by a completed spin.

mod page;
mod participant;
mod spin;

pub use page::PageWindow;
pub use participant::{NameError, Participant, MAX_NAME_LENGTH};
pub use spin::SpinResult;
