//! REST Collection
//!
//! `GET base`, `POST base`, `PUT base/:id`, `DELETE base/:id` for any
//! [`Editable`] record.

use std::marker::PhantomData;
use std::sync::Arc;

use platform::{ApiClient, HttpTransport};

use crate::domain::repository::{Editable, ListSource, Record, RecordId, RecordWriter};
use crate::domain::services::{decode_item, decode_list, extract_item, extract_list};
use crate::error::PortalResult;

/// Generic CRUD API over one collection path
pub struct RestCollection<R, T> {
    client: Arc<ApiClient<T>>,
    base: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<R, T> RestCollection<R, T>
where
    R: Record,
    T: HttpTransport + Sync,
{
    pub fn new(client: Arc<ApiClient<T>>, base: &'static str) -> Self {
        Self {
            client,
            base,
            _record: PhantomData,
        }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn client(&self) -> &Arc<ApiClient<T>> {
        &self.client
    }

    pub(crate) fn path_for(&self, id: &RecordId<R>) -> String {
        format!("{}/{}", self.base, id)
    }

    /// `GET base` with the record's list-shape rules
    pub async fn fetch_all(&self) -> PortalResult<Vec<R>> {
        let envelope = self.client.get(self.base).await?;
        let items = extract_list(envelope.as_value(), R::LIST_SHAPE)?;
        let records = decode_list(items)?;
        tracing::debug!(collection = R::COLLECTION, count = records.len(), "Collection fetched");
        Ok(records)
    }

    /// `GET base/:id`
    pub async fn fetch_one(&self, id: &RecordId<R>) -> PortalResult<R> {
        let envelope = self.client.get(&self.path_for(id)).await?;
        Ok(decode_item(extract_item(envelope.as_value())?)?)
    }
}

impl<R, T> ListSource for RestCollection<R, T>
where
    R: Record,
    T: HttpTransport + Sync,
{
    type Item = R;

    async fn list(&self) -> PortalResult<Vec<R>> {
        self.fetch_all().await
    }
}

impl<R, T> RecordWriter for RestCollection<R, T>
where
    R: Editable,
    T: HttpTransport + Sync,
{
    type Item = R;

    async fn create(&self, draft: &R::Draft) -> PortalResult<R> {
        let envelope = self.client.post(self.base, draft).await?;
        let created: R = decode_item(extract_item(envelope.as_value())?)?;
        tracing::info!(collection = R::COLLECTION, id = %created.id(), "Record created");
        Ok(created)
    }

    async fn update(&self, id: &RecordId<R>, draft: &R::Draft) -> PortalResult<R> {
        let envelope = self.client.put(&self.path_for(id), draft).await?;
        let updated: R = decode_item(extract_item(envelope.as_value())?)?;
        tracing::info!(collection = R::COLLECTION, id = %id, "Record updated");
        Ok(updated)
    }

    async fn remove(&self, id: &RecordId<R>) -> PortalResult<()> {
        self.client.delete(&self.path_for(id)).await?;
        tracing::info!(collection = R::COLLECTION, id = %id, "Record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drafts::{NotificationDraft, StudentDraft};
    use crate::domain::entities::Student;
    use crate::domain::value_objects::NotificationKind;
    use crate::error::{PayloadError, PortalError};
    use crate::infra::api::notifications::NotificationsApi;
    use crate::infra::api::students::StudentsApi;
    use kernel::id::{NotificationId, StudentId};
    use platform::Method;
    use platform::testing::{Reply, ScriptedTransport};
    use serde_json::json;

    fn client(transport: &ScriptedTransport) -> Arc<ApiClient<ScriptedTransport>> {
        Arc::new(ApiClient::anonymous(transport.clone()))
    }

    #[tokio::test]
    async fn test_student_create_body_is_camel_case() {
        let transport = ScriptedTransport::new();
        transport.enqueue(
            Method::POST,
            "/students",
            Reply::json(201, json!({"data": {"_id": "s7", "name": "Asha", "rollNumber": "CS-07", "course": "B.Sc"}})),
        );

        let draft = StudentDraft {
            name: "Asha".to_string(),
            email: "asha@college.edu".to_string(),
            roll_number: "CS-07".to_string(),
            course: "B.Sc".to_string(),
            password: None,
        };
        let created: Student = StudentsApi::students(client(&transport))
            .create(&draft)
            .await
            .unwrap();

        assert_eq!(created.id, StudentId::new("s7"));
        assert_eq!(created.roll_number, "CS-07");
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"name": "Asha", "email": "asha@college.edu", "rollNumber": "CS-07", "course": "B.Sc"}))
        );
    }

    #[tokio::test]
    async fn test_update_and_remove_address_the_record() {
        let transport = ScriptedTransport::new();
        transport.enqueue(
            Method::PUT,
            "/notifications/n1",
            Reply::ok(json!({"_id": "n1", "type": "alert", "message": "Exam moved"})),
        );
        transport.enqueue(Method::DELETE, "/notifications/n1", Reply::ok(json!(null)));

        let api = NotificationsApi::notifications(client(&transport));
        let id = NotificationId::new("n1");
        let draft = NotificationDraft {
            kind: NotificationKind::Alert,
            message: "Exam moved".to_string(),
        };

        let updated = api.update(&id, &draft).await.unwrap();
        assert_eq!(updated.kind, NotificationKind::Alert);
        api.remove(&id).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].body, Some(json!({"type": "alert", "message": "Exam moved"})));
        assert_eq!(sent[1].method, Method::DELETE);
        assert_eq!(sent[1].path, "/notifications/n1");
    }

    #[tokio::test]
    async fn test_non_object_record_is_rejected() {
        let transport = ScriptedTransport::new();
        transport.enqueue(Method::GET, "/students/s1", Reply::ok(json!(["s1"])));

        let err = StudentsApi::students(client(&transport))
            .fetch_one(&StudentId::new("s1"))
            .await
            .unwrap_err();
        assert!(matches!(err, PortalError::Payload(PayloadError::InvalidFormat)));
    }
}
