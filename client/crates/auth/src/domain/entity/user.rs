//! Session User Entity
//!
//! Profile of the signed-in account as returned by login and kept in the
//! persisted session copy.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_role::Role;

/// Signed-in user
///
/// Serialized with `_id` so the persisted copy matches the server's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Server identifier (`_id`, some endpoints send `id`)
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Login email
    #[serde(default)]
    pub email: String,
    /// Role deciding which portal area is accessible
    pub role: Role,
}

impl SessionUser {
    /// Check whether this user may enter an area requiring `role`
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Name for greetings, falling back to the email
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}
