use serde::{Deserialize, Serialize};

use super::EntityId;

/// A barber. Never mutated or deleted client-side; `active` only drives
/// display filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barber {
    pub id: EntityId,
    pub name: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
}
