use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum name length for participant registration.
pub const MAX_NAME_LENGTH: usize = 32;

/// Errors produced when constructing a participant from an invalid name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("participant name is empty")]
    Empty,
    #[error("participant name is {0} bytes, maximum is {MAX_NAME_LENGTH}")]
    TooLong(usize),
}

/// Read projection of a user record, as seen by the selection engine.
///
/// Two fields carry one-way invariants that only the mutators below may
/// touch: `action_count` never decreases and `eliminated` never reverts
/// to `false`. The `version` field is the directory's optimistic-locking
/// token; it is bumped by the directory on every successful save and is
/// opaque to everything else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable unique identifier, assigned by the directory.
    pub id: u64,
    /// Unique human-readable identifier.
    pub name: String,
    /// Number of successful spins this participant has performed as requester.
    pub action_count: u32,
    /// One-way elimination flag.
    pub eliminated: bool,
    /// Optimistic-concurrency token.
    pub version: u64,
}

impl Participant {
    /// Create a fresh, live participant with a validated name.
    pub fn new(id: u64, name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(NameError::TooLong(name.len()));
        }
        Ok(Self {
            id,
            name,
            action_count: 0,
            eliminated: false,
            version: 0,
        })
    }

    /// Record one successful spin performed by this participant as requester.
    pub fn record_spin(&mut self) {
        self.action_count = self.action_count.saturating_add(1);
    }

    /// Mark this participant as eliminated. There is no inverse operation.
    pub fn eliminate(&mut self) {
        self.eliminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_participant_is_live() {
        let p = Participant::new(1, "alice").unwrap();
        assert_eq!(p.name, "alice");
        assert_eq!(p.action_count, 0);
        assert!(!p.eliminated);
        assert_eq!(p.version, 0);
    }

    #[test]
    fn test_name_validation() {
        assert_eq!(Participant::new(1, "").unwrap_err(), NameError::Empty);
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            Participant::new(1, long).unwrap_err(),
            NameError::TooLong(MAX_NAME_LENGTH + 1)
        );
        assert!(Participant::new(1, "y".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_record_spin_increments_by_one() {
        let mut p = Participant::new(1, "alice").unwrap();
        p.record_spin();
        assert_eq!(p.action_count, 1);
        p.record_spin();
        assert_eq!(p.action_count, 2);
    }

    #[test]
    fn test_record_spin_saturates() {
        let mut p = Participant::new(1, "alice").unwrap();
        p.action_count = u32::MAX;
        p.record_spin();
        assert_eq!(p.action_count, u32::MAX);
    }

    #[test]
    fn test_eliminate_is_one_way() {
        let mut p = Participant::new(1, "alice").unwrap();
        p.eliminate();
        assert!(p.eliminated);
        p.eliminate();
        assert!(p.eliminated);
    }
}
