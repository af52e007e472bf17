//! Fair elimination selection engine.
//!
//! Given a requesting participant and a windowed slice of the population,
//! the engine builds a candidate list with the requester pinned at index 0,
//! draws one winner uniformly, and commits two mutations as a single
//! all-or-nothing unit: the winner is eliminated and the requester's action
//! counter goes up by exactly 1.
//!
//! The engine is stateless across requests. All state lives behind the
//! [`Directory`] abstraction, and all randomness comes through an injected
//! [`RandomSource`], so a test harness can substitute deterministic
//! implementations of both.

pub mod directory;
pub mod error;
pub mod participants;
pub mod selector;
pub mod spin;
pub mod transaction;
pub mod window;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;


pub use directory::{CommitError, Directory};
pub use error::SpinError;
pub use selector::{EntropySource, RandomSource};
pub use spin::SpinEngine;
