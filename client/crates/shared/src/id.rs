//! Common ID Types
//!
//! Type-safe wrappers for server-issued record identifiers (`_id`).
//! The server owns the format; the client only compares and echoes them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type MemberId = Id<markers::Member>;
/// let id = MemberId::new("101");
/// assert_eq!(id.as_str(), "101");
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a server-issued identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the raw identifier
    pub fn into_string(self) -> String {
        self.value
    }
}

// Manual impls so that markers need not implement anything.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for authenticated account IDs
    pub struct User;

    /// Marker for trust member IDs
    pub struct Member;

    /// Marker for institute IDs
    pub struct Institute;

    /// Marker for student IDs
    pub struct Student;

    /// Marker for scholarship scheme IDs
    pub struct Scheme;

    /// Marker for notification IDs
    pub struct Notification;

    /// Marker for scheme application IDs
    pub struct Application;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type MemberId = Id<markers::Member>;
pub type InstituteId = Id<markers::Institute>;
pub type StudentId = Id<markers::Student>;
pub type SchemeId = Id<markers::Scheme>;
pub type NotificationId = Id<markers::Notification>;
pub type ApplicationId = Id<markers::Application>;
