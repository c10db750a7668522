use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role as issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Student,
    Institute,
    Member,
}

/// Role code the backend does not know
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role code: {0:?}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Student, Role::Institute, Role::Member];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Admin => "ADMIN",
            Student => "STUDENT",
            Institute => "INSTITUTE",
            Member => "MEMBER",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Case-insensitive, so CLI input such as `admin` is accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(&s.trim().to_ascii_uppercase()).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
