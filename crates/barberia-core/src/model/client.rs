use serde::{Deserialize, Serialize};

use super::EntityId;

/// A registered client (customer).
///
/// `document` and `phone` are unique system-wide, but only the server
/// enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub document: String,
    pub phone: String,
}
