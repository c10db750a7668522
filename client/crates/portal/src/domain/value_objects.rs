//! Domain Value Objects
//!
//! Closed vocabularies of the portal records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a scholarship exam is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemeMode {
    Online,
    Offline,
    Hybrid,
}

/// Notification category (`type` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    Update,
    Message,
    Academic,
    Event,
}

/// Review state of a scheme application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Approved => "APPROVED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    /// Approved or rejected
    #[inline]
    pub const fn is_decided(&self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(ApplicationStatus::Pending),
            "APPROVED" => Ok(ApplicationStatus::Approved),
            "REJECTED" => Ok(ApplicationStatus::Rejected),
            _ => Err(format!("unknown application status: {s:?}")),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(serde_json::to_string(&SchemeMode::Hybrid).unwrap(), r#""Hybrid""#);
        assert_eq!(
            serde_json::to_string(&NotificationKind::Academic).unwrap(),
            r#""academic""#
        );
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Approved).unwrap(),
            r#""APPROVED""#
        );
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("approved".parse(), Ok(ApplicationStatus::Approved));
        assert_eq!("REJECTED".parse(), Ok(ApplicationStatus::Rejected));
        assert!("DONE".parse::<ApplicationStatus>().is_err());
        assert!(!ApplicationStatus::default().is_decided());
    }
}
