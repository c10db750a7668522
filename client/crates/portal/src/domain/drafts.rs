//! Drafts
//!
//! Bodies sent on create and update, and the scheme application form.
//! A `None` password on update keeps the current one.

use auth::Role;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::value_objects::{NotificationKind, SchemeMode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstituteDraft {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub roll_number: String,
    pub course: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeDraft {
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub eligibility_criteria: String,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<String>,
    pub duration: String,
    pub mode: SchemeMode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationDraft {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
}

/// Student's application form for one scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeApplication {
    pub full_name: String,
    /// `YYYY-MM-DD`; sent as midnight UTC in ISO-8601
    #[serde(serialize_with = "iso_midnight")]
    pub date_of_birth: String,
    pub phone_number: String,
    pub address: String,
    pub institution: String,
    pub gpa: f64,
    pub family_income: u64,
    pub statement: String,
    /// Supporting document URL
    pub document: String,
}

fn iso_midnight<S: Serializer>(date: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{date}T00:00:00.000Z"))
}

fn is_calendar_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl SchemeApplication {
    /// Form-level checks run before the application is sent
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.full_name.trim().is_empty() {
            return Err("Full name is required");
        }
        if !is_calendar_date(&self.date_of_birth) {
            return Err("Use YYYY-MM-DD format");
        }
        if self.phone_number.len() < 10 {
            return Err("Phone must be at least 10 digits");
        }
        if !self.phone_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err("Phone must be numeric");
        }
        if self.address.chars().count() < 10 {
            return Err("Address must be at least 10 characters");
        }
        if self.institution.trim().is_empty() {
            return Err("Institution is required");
        }
        if !(0.0..10.0).contains(&self.gpa) {
            return Err("Invalid GPA");
        }
        if self.statement.chars().count() < 10 {
            return Err("Statement must be at least 10 characters");
        }
        if self.document.trim().is_empty() {
            return Err("Document URL is required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn application() -> SchemeApplication {
        SchemeApplication {
            full_name: "Asha Rao".to_string(),
            date_of_birth: "2004-03-09".to_string(),
            phone_number: "9876543210".to_string(),
            address: "12 Lake Road, Pune".to_string(),
            institution: "Fergusson College".to_string(),
            gpa: 3.75,
            family_income: 240000,
            statement: "First in family to attend college.".to_string(),
            document: "https://drive/doc.pdf".to_string(),
        }
    }

    #[test]
    fn test_application_wire_shape() {
        let body = serde_json::to_value(application()).unwrap();
        assert_eq!(body["dateOfBirth"], "2004-03-09T00:00:00.000Z");
        assert_eq!(body["familyIncome"], 240000);
        assert_eq!(body["fullName"], "Asha Rao");
    }

    #[test]
    fn test_application_validation() {
        assert!(application().validate().is_ok());

        let mut bad = application();
        bad.date_of_birth = "09/03/2004".to_string();
        assert_eq!(bad.validate(), Err("Use YYYY-MM-DD format"));

        let mut bad = application();
        bad.phone_number = "98765-4321".to_string();
        assert_eq!(bad.validate(), Err("Phone must be numeric"));

        let mut bad = application();
        bad.gpa = 12.0;
        assert_eq!(bad.validate(), Err("Invalid GPA"));
    }

    #[test]
    fn test_blank_password_is_omitted() {
        let draft = MemberDraft {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            role: Role::Member,
            password: None,
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"name": "A", "email": "a@x.com", "role": "MEMBER"})
        );

        let draft = NotificationDraft {
            kind: NotificationKind::Alert,
            message: "Portal closes Friday".to_string(),
        };
        assert_eq!(serde_json::to_value(&draft).unwrap()["type"], "alert");
    }
}
