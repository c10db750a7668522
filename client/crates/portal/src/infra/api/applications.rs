//! Applications API (`/admin/applications`)

use std::sync::Arc;

use kernel::id::ApplicationId;
use platform::{ApiClient, HttpTransport};
use serde_json::json;

use crate::domain::entities::Application;
use crate::domain::repository::StatusWriter;
use crate::domain::value_objects::ApplicationStatus;
use crate::error::PortalResult;
use crate::infra::rest::RestCollection;

pub const APPLICATIONS_PATH: &str = "/admin/applications";

pub type ApplicationsApi<T> = RestCollection<Application, T>;

impl<T> RestCollection<Application, T>
where
    T: HttpTransport + Sync,
{
    pub fn applications(client: Arc<ApiClient<T>>) -> Self {
        Self::new(client, APPLICATIONS_PATH)
    }

    /// `GET /admin/applications/:id`
    pub async fn get_by_id(&self, id: &ApplicationId) -> PortalResult<Application> {
        self.fetch_one(id).await
    }
}

impl<T> StatusWriter for RestCollection<Application, T>
where
    T: HttpTransport + Sync,
{
    /// `PUT /admin/applications/:id/status` with `{ status }`
    async fn update_status(&self, id: &ApplicationId, status: ApplicationStatus) -> PortalResult<()> {
        let path = format!("{}/status", self.path_for(id));
        self.client().put(&path, &json!({ "status": status })).await?;
        tracing::info!(application_id = %id, %status, "Application status updated");
        Ok(())
    }
}
