//! Recent Activity Feed
//!
//! A fixed list of recent customer events, newest first.

use serde::{Deserialize, Serialize};

/// One feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub user: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    pub time: String,
}

impl ActivityEntry {
    pub fn new(user: &str, action: &str, amount: Option<&str>, time: &str) -> Self {
        Self {
            user: user.to_string(),
            action: action.to_string(),
            amount: amount.map(str::to_string),
            time: time.to_string(),
        }
    }

    /// First letter of each name part: "Sarah Chen" -> "SC"
    pub fn initials(&self) -> String {
        self.user
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// The mock feed shown on every dashboard
pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry::new("Sarah Chen", "completed purchase", Some("$234.00"), "2m ago"),
        ActivityEntry::new("Mike Johnson", "signed up", None, "5m ago"),
        ActivityEntry::new("Emma Wilson", "completed purchase", Some("$89.99"), "8m ago"),
        ActivityEntry::new("James Brown", "abandoned cart", Some("$156.00"), "12m ago"),
        ActivityEntry::new("Lisa Anderson", "completed purchase", Some("$445.00"), "15m ago"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_list() {
        let feed = recent_activity();
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[0].user, "Sarah Chen");
        assert_eq!(feed[1].amount, None);
        assert_eq!(feed[4].time, "15m ago");
    }

    #[test]
    fn test_initials() {
        let feed = recent_activity();
        let initials: Vec<_> = feed.iter().map(ActivityEntry::initials).collect();
        assert_eq!(initials, vec!["SC", "MJ", "EW", "JB", "LA"]);
    }

    #[test]
    fn test_amount_omitted_when_absent() {
        let json = serde_json::to_string(&recent_activity()[1]).unwrap();
        assert!(!json.contains("amount"));
    }
}
