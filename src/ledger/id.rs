//! `shard.realm.num` entity identifiers.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InvalidEntityId;

static ENTITY_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").expect("entity id pattern is valid")
});

/// Identifier of an account, token, schedule or any other ledger entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

pub type AccountId = EntityId;
pub type TokenId = EntityId;
pub type ScheduleId = EntityId;

impl EntityId {
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }
}

/// Whether `s` matches the three-segment numeric id grammar.
pub fn is_entity_id(s: &str) -> bool {
    s.parse::<EntityId>().is_ok()
}

impl FromStr for EntityId {
    type Err = InvalidEntityId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidEntityId(s.to_string());
        let caps = ENTITY_ID_RE.captures(s).ok_or_else(invalid)?;
        // Digits-only segments can still overflow u64.
        let segment = |i: usize| caps[i].parse::<u64>().map_err(|_| invalid());
        Ok(Self {
            shard: segment(1)?,
            realm: segment(2)?,
            num: segment(3)?,
        })
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: EntityId = "0.0.12345".parse().unwrap();
        assert_eq!(id, EntityId::new(0, 0, 12345));
        assert_eq!(id.to_string(), "0.0.12345");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "abc",
            "",
            "0.0",
            "0.0.1.2",
            "0.0.-1",
            " 0.0.1",
            "0.0.1 ",
            "0..1",
            "0.0.x",
            "99999999999999999999.0.1",
        ] {
            assert!(!is_entity_id(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_error_names_input() {
        let err = "abc".parse::<EntityId>().unwrap_err();
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_serde_as_string() {
        let id = EntityId::new(0, 0, 7);
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("0.0.7"));
        let back: EntityId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_value::<EntityId>(serde_json::json!("nope")).is_err());
    }
}
