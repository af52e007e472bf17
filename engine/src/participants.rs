//! Participant list construction.

/// Build the final ordered participant list for one spin.
///
/// The requester is pinned at index 0 and every occurrence of their name is
/// removed from the window, so the requester appears exactly once, the list
/// is duplicate-free, and the ordering is reproducible for a given window.
/// An empty window degenerates to `[requester_name]`: the requester is
/// always eligible to win their own spin.
pub fn build_participants(requester_name: &str, window_names: Vec<String>) -> Vec<String> {
    let mut participants = Vec::with_capacity(window_names.len() + 1);
    participants.push(requester_name.to_string());
    for name in window_names {
        // Windows are at most PageWindow::MAX_SIZE entries, so the linear
        // duplicate scan is fine.
        if !participants.contains(&name) {
            participants.push(name);
        }
    }
    participants
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_requester_pinned_first() {
        let participants = build_participants("alice", names(&["bob", "carol"]));
        assert_eq!(participants, names(&["alice", "bob", "carol"]));
    }

    #[test]
    fn test_requester_moved_from_window() {
        let participants = build_participants("bob", names(&["alice", "bob", "carol"]));
        assert_eq!(participants, names(&["bob", "alice", "carol"]));
    }

    #[test]
    fn test_requester_appears_exactly_once() {
        let participants = build_participants("bob", names(&["bob", "alice", "bob"]));
        assert_eq!(
            participants
                .iter()
                .filter(|name| name.as_str() == "bob")
                .count(),
            1
        );
        assert_eq!(participants, names(&["bob", "alice"]));
    }

    #[test]
    fn test_window_duplicates_removed() {
        let participants = build_participants("alice", names(&["bob", "bob", "carol"]));
        assert_eq!(participants, names(&["alice", "bob", "carol"]));
    }

    #[test]
    fn test_empty_window_degenerates_to_requester() {
        let participants = build_participants("alice", Vec::new());
        assert_eq!(participants, names(&["alice"]));
    }
}
