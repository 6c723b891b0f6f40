//! Tasks belonging to a quest.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// A single verifiable action within a quest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTask {
    pub id: u64,
    #[serde(default)]
    pub quest_id: u64,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub verify_endpoint: String,
    #[serde(default)]
    pub completed: bool,
}

impl UserTask {
    /// URL the task's verify action calls for `address`.
    pub fn verify_url(&self, address: &Address) -> String {
        format!("{}?address={}", self.verify_endpoint, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_url_carries_hex_address() {
        let task = UserTask {
            id: 1,
            quest_id: 7,
            name: "Join".into(),
            desc: String::new(),
            href: "https://discord.gg/x".into(),
            cta: "Join now".into(),
            verify_endpoint: "https://api.example/verify_discord".into(),
            completed: false,
        };
        let address = Address::parse("0xabc").unwrap();
        assert_eq!(
            task.verify_url(&address),
            "https://api.example/verify_discord?address=0xabc"
        );
    }

    #[test]
    fn completed_defaults_to_false() {
        let task: UserTask = serde_json::from_str(r#"{"id": 3, "name": "Follow"}"#).unwrap();
        assert!(!task.completed);
    }
}
