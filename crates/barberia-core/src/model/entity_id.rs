// ── Core identity type ──
//
// EntityId is the identifier of every domain type. It hides whether the
// server issued a numeric key or an opaque string.

use std::fmt;
use std::str::FromStr;

use barberia_api::models::ResourceId;
use serde::{Deserialize, Serialize};

/// Canonical identifier for any booking entity.
///
/// Numeric ids round-trip as JSON numbers, which is what the server
/// expects in `clienteId` / `barberoId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Numeric(i64),
    Opaque(String),
}

impl EntityId {
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Opaque(_) => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Opaque(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self::Numeric(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Opaque(trimmed.to_owned()),
        }
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ResourceId> for EntityId {
    fn from(id: ResourceId) -> Self {
        match id {
            ResourceId::Number(n) => Self::Numeric(n),
            ResourceId::Text(s) => Self::Opaque(s),
        }
    }
}

impl From<&EntityId> for ResourceId {
    fn from(id: &EntityId) -> Self {
        match id {
            EntityId::Numeric(n) => Self::Number(*n),
            EntityId::Opaque(s) => Self::Text(s.clone()),
        }
    }
}
