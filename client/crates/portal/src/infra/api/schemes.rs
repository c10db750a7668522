//! Schemes API (`/schemes`)
//!
//! Admin CRUD plus the student-facing detail and apply endpoints.

use std::sync::Arc;

use kernel::id::SchemeId;
use platform::{ApiClient, HttpTransport};
use serde_json::Value;

use crate::domain::drafts::SchemeApplication;
use crate::domain::entities::Scheme;
use crate::domain::repository::SchemeApplicant;
use crate::error::PortalResult;
use crate::infra::rest::RestCollection;

pub const SCHEMES_PATH: &str = "/schemes";

pub type SchemesApi<T> = RestCollection<Scheme, T>;

impl<T> RestCollection<Scheme, T>
where
    T: HttpTransport + Sync,
{
    pub fn schemes(client: Arc<ApiClient<T>>) -> Self {
        Self::new(client, SCHEMES_PATH)
    }

    /// `GET /schemes/:id`
    pub async fn get_by_id(&self, id: &SchemeId) -> PortalResult<Scheme> {
        self.fetch_one(id).await
    }
}

impl<T> SchemeApplicant for RestCollection<Scheme, T>
where
    T: HttpTransport + Sync,
{
    /// `POST /schemes/:id/apply`
    async fn apply_for_scheme(
        &self,
        id: &SchemeId,
        application: &SchemeApplication,
    ) -> PortalResult<Value> {
        let path = format!("{}/apply", self.path_for(id));
        let envelope = self.client().post(&path, application).await?;
        tracing::info!(scheme_id = %id, "Application submitted");
        Ok(envelope.into_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::Method;
    use platform::testing::{Reply, ScriptedTransport};
    use serde_json::json;

    fn api(transport: &ScriptedTransport) -> SchemesApi<ScriptedTransport> {
        SchemesApi::schemes(Arc::new(ApiClient::anonymous(transport.clone())))
    }

    fn form() -> SchemeApplication {
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

    #[tokio::test]
    async fn test_get_by_id_accepts_bare_record() {
        let transport = ScriptedTransport::new();
        transport.enqueue(
            Method::GET,
            "/schemes/s1",
            Reply::json(200, json!({"_id": "s1", "title": "Merit", "mode": "Online"})),
        );

        let scheme = api(&transport).get_by_id(&SchemeId::new("s1")).await.unwrap();
        assert_eq!(scheme.title, "Merit");
    }

    #[tokio::test]
    async fn test_apply_posts_to_apply_path() {
        let transport = ScriptedTransport::new();
        let reply = json!({"success": true, "message": "Application submitted"});
        transport.enqueue(Method::POST, "/schemes/s1/apply", Reply::json(201, reply.clone()));

        let body = api(&transport)
            .apply_for_scheme(&SchemeId::new("s1"), &form())
            .await
            .unwrap();
        assert_eq!(body, reply);

        let sent = &transport.requests()[0];
        assert_eq!(sent.body.as_ref().unwrap()["dateOfBirth"], "2004-03-09T00:00:00.000Z");
    }

    #[tokio::test]
    async fn test_duplicate_application_surfaces_server_message() {
        let transport = ScriptedTransport::new();
        transport.enqueue(
            Method::POST,
            "/schemes/s1/apply",
            Reply::error(409, "You have already applied to this scheme"),
        );

        let err = api(&transport)
            .apply_for_scheme(&SchemeId::new("s1"), &form())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(
            err.to_app_error().message(),
            "You have already applied to this scheme"
        );
    }
}
