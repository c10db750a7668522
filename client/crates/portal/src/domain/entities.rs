//! Domain Entities
//!
//! Records as the backend serves them. Fields the client does not model
//! are kept in `extra` so nothing is lost when a record is shown or cached.

use auth::Role;
use kernel::id::{
    ApplicationId, Id, InstituteId, MemberId, NotificationId, SchemeId, StudentId, markers,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::drafts::{
    InstituteDraft, MemberDraft, NotificationDraft, SchemeDraft, StudentDraft,
};
use crate::domain::repository::{Editable, Record};
use crate::domain::services::ListShape;
use crate::domain::value_objects::{ApplicationStatus, NotificationKind, SchemeMode};

fn member_role() -> Role {
    Role::Member
}

/// Trust member account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: MemberId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "member_role")]
    pub role: Role,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partner institute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institute {
    #[serde(rename = "_id")]
    pub id: InstituteId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Student account as managed by admins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: StudentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub course: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Scholarship scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    #[serde(rename = "_id")]
    pub id: SchemeId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub eligibility_criteria: String,
    /// ISO date string as sent by the server
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub exam_date: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub mode: Option<SchemeMode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Portal notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The scheme an application points at: populated or just its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemeRef {
    Id(SchemeId),
    Populated(Box<Scheme>),
}

impl SchemeRef {
    pub fn id(&self) -> &SchemeId {
        match self {
            SchemeRef::Id(id) => id,
            SchemeRef::Populated(scheme) => &scheme.id,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            SchemeRef::Populated(scheme) if !scheme.title.is_empty() => Some(&scheme.title),
            _ => None,
        }
    }
}

/// Student application to a scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: ApplicationId,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub scheme: Option<SchemeRef>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub family_income: Option<f64>,
    #[serde(default)]
    pub statement: String,
    /// Supporting document URL
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub applied_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Student's admit card; no URL means not issued yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmitCard {
    #[serde(default)]
    pub url: Option<String>,
}

impl AdmitCard {
    pub fn is_issued(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

macro_rules! record {
    ($ty:ty, $marker:ident, $collection:literal) => {
        record!($ty, $marker, $collection, ListShape::DATA);
    };
    ($ty:ty, $marker:ident, $collection:literal, $shape:expr) => {
        impl Record for $ty {
            type Marker = markers::$marker;
            const COLLECTION: &'static str = $collection;
            const LIST_SHAPE: ListShape = $shape;

            fn id(&self) -> &Id<markers::$marker> {
                &self.id
            }
        }
    };
}

record!(Member, Member, "members");
record!(Institute, Institute, "institutes");
record!(Student, Student, "students");
record!(Scheme, Scheme, "schemes", ListShape::SCHEMES);
record!(Notification, Notification, "notifications");
record!(Application, Application, "applications", ListShape::DATA_OR_EMPTY);

impl Editable for Member {
    type Draft = MemberDraft;
}

impl Editable for Institute {
    type Draft = InstituteDraft;
}

impl Editable for Student {
    type Draft = StudentDraft;
}

impl Editable for Scheme {
    type Draft = SchemeDraft;
}

impl Editable for Notification {
    type Draft = NotificationDraft;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let wire = json!({
            "_id": "101", "name": "A", "email": "a@x.com", "role": "MEMBER",
            "createdAt": "2024-06-01T00:00:00.000Z", "__v": 0
        });
        let member: Member = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(member.id.as_str(), "101");
        assert_eq!(member.extra["__v"], 0);
        assert_eq!(serde_json::to_value(&member).unwrap(), wire);
    }

    #[test]
    fn test_member_role_defaults() {
        let member: Member = serde_json::from_value(json!({"_id": "1"})).unwrap();
        assert_eq!(member.role, Role::Member);
    }

    #[test]
    fn test_application_scheme_populated_or_id() {
        let populated: Application = serde_json::from_value(json!({
            "_id": "55", "status": "PENDING", "fullName": "Asha",
            "scheme": {"_id": "s1", "title": "Merit Scholarship"},
            "gpa": 3.8, "familyIncome": 250000
        }))
        .unwrap();
        let scheme = populated.scheme.as_ref().unwrap();
        assert_eq!(scheme.id().as_str(), "s1");
        assert_eq!(scheme.title(), Some("Merit Scholarship"));
        assert_eq!(populated.family_income, Some(250000.0));

        let bare: Application =
            serde_json::from_value(json!({"_id": "56", "scheme": "s2"})).unwrap();
        assert_eq!(bare.scheme.unwrap().id().as_str(), "s2");
        assert_eq!(bare.status, ApplicationStatus::Pending);
    }

    #[test]
    fn test_notification_type_field() {
        let n: Notification =
            serde_json::from_value(json!({"_id": "n1", "type": "event", "message": "Exam on 3rd"}))
                .unwrap();
        assert_eq!(n.kind, NotificationKind::Event);
    }

    #[test]
    fn test_admit_card_issued() {
        assert!(!AdmitCard::default().is_issued());
        let card = AdmitCard {
            url: Some("https://cdn/card.pdf".into()),
        };
        assert!(card.is_issued());
    }

    #[test]
    fn test_record_metadata() {
        assert_eq!(<Scheme as Record>::LIST_SHAPE, ListShape::SCHEMES);
        assert_eq!(<Application as Record>::LIST_SHAPE, ListShape::DATA_OR_EMPTY);
        assert_eq!(<Member as Record>::COLLECTION, "members");
    }
}
