//! Dispatcher - Keyword routing of free-text commands
//!
//! Kinds are checked in `MissionKind::PRIORITY` order and the first kind
//! with any keyword present wins, even when a later kind matches more
//! keywords.

use crate::domain::value_objects::MissionKind;

/// Pick the mission for a command, or `None` when nothing matches
pub fn dispatch(command: &str) -> Option<MissionKind> {
    let lowered = command.to_lowercase();
    MissionKind::PRIORITY
        .into_iter()
        .find(|kind| kind.matches(&lowered))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_routes_to_scout_anywhere() {
        assert_eq!(dispatch("Find me 5 condos in Phuket under 10M THB"), Some(MissionKind::Scout));
        assert_eq!(dispatch("condos, please FIND them"), Some(MissionKind::Scout));
        assert_eq!(dispatch("I want to look for a villa"), Some(MissionKind::Scout));
    }

    #[test]
    fn test_write_routes_to_writer() {
        assert_eq!(
            dispatch("Write a listing for a beachfront villa"),
            Some(MissionKind::Writer)
        );
    }

    #[test]
    fn test_social_and_admin_keywords() {
        assert_eq!(dispatch("Share this on Facebook"), Some(MissionKind::Social));
        assert_eq!(dispatch("manage my leads"), Some(MissionKind::Admin));
        assert_eq!(dispatch("weekly REPORT"), Some(MissionKind::Admin));
    }

    #[test]
    fn test_earlier_kind_wins_on_overlap() {
        assert_eq!(dispatch("find and post this"), Some(MissionKind::Scout));
        assert_eq!(dispatch("post a description"), Some(MissionKind::Writer));
        assert_eq!(dispatch("share the viewing schedule"), Some(MissionKind::Social));
    }

    #[test]
    fn test_substring_matching_is_not_word_bound() {
        // "online" contains "line"
        assert_eq!(dispatch("go online"), Some(MissionKind::Social));
    }

    #[test]
    fn test_unmatched_commands() {
        assert_eq!(dispatch("asdf qwerty"), None);
        assert_eq!(dispatch(""), None);
        assert_eq!(dispatch("look at this"), None);
    }
}
