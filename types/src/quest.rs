//! Quest documents as served by the backend.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric quest identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestId(u64);

impl QuestId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for QuestId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for QuestId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TypesError::InvalidQuestId(s.to_string()))
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An NFT shown in the quest's reward showcase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftItem {
    pub img: String,
    pub level: u32,
}

/// Quest identity and display metadata.
///
/// Replaced wholesale on every refetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDocument {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub category: String,
    /// Endpoint listing the rewards an address is eligible for. Empty when the
    /// quest has none.
    #[serde(default)]
    pub rewards_endpoint: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub rewards_img: String,
    #[serde(default)]
    pub rewards_title: String,
    #[serde(default)]
    pub rewards_nfts: Vec<NftItem>,
}

impl QuestDocument {
    /// A document without a name is treated as a malformed response.
    pub fn is_well_formed(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn rewards_endpoint(&self) -> Option<&str> {
        Some(self.rewards_endpoint.as_str()).filter(|e| !e.is_empty())
    }
}

/// Error shape returned by the backend in place of a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_document() {
        let json = r#"{
            "id": 7,
            "name": "Discord quest",
            "desc": "Link your discord",
            "issuer": "Starknet ID",
            "category": "Social",
            "rewards_endpoint": "https://api.example/quests/7/claimable",
            "logo": "/logo.svg",
            "rewards_img": "/nft.webp",
            "rewards_title": "1 NFT",
            "rewards_nfts": [{ "img": "/nft.webp", "level": 1 }]
        }"#;
        let quest: QuestDocument = serde_json::from_str(json).unwrap();
        assert!(quest.is_well_formed());
        assert_eq!(quest.rewards_nfts.len(), 1);
        assert_eq!(
            quest.rewards_endpoint(),
            Some("https://api.example/quests/7/claimable")
        );
    }

    #[test]
    fn empty_name_is_malformed() {
        let quest: QuestDocument = serde_json::from_str(r#"{"id": 1, "name": ""}"#).unwrap();
        assert!(!quest.is_well_formed());
        assert_eq!(quest.rewards_endpoint(), None);
    }

    #[test]
    fn quest_id_parses_from_route_segment() {
        assert_eq!("42".parse::<QuestId>().unwrap(), QuestId::new(42));
        assert!("abc".parse::<QuestId>().is_err());
    }
}
