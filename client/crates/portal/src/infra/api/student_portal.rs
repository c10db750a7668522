//! Student Self-Service API
//!
//! The signed-in student's own applications and admit card.

use std::sync::Arc;

use platform::{ApiClient, HttpTransport};
use serde::Deserialize;

use crate::domain::entities::{AdmitCard, Application};
use crate::domain::repository::{ListSource, Record};
use crate::domain::services::{decode_list, extract_list};
use crate::error::{PayloadError, PortalResult};

pub const MY_APPLICATIONS_PATH: &str = "/me/applications";
pub const MY_ADMIT_CARD_PATH: &str = "/students/me/admit-card";

pub struct StudentPortalApi<T> {
    client: Arc<ApiClient<T>>,
}

impl<T> StudentPortalApi<T>
where
    T: HttpTransport + Sync,
{
    pub fn new(client: Arc<ApiClient<T>>) -> Self {
        Self { client }
    }

    /// `GET /me/applications`
    pub async fn my_applications(&self) -> PortalResult<Vec<Application>> {
        let envelope = self.client.get(MY_APPLICATIONS_PATH).await?;
        let items = extract_list(envelope.as_value(), Application::LIST_SHAPE)?;
        Ok(decode_list(items)?)
    }

    /// `GET /students/me/admit-card`
    ///
    /// The URL is read from the body itself, then from `data`. Neither
    /// means the card is not issued yet.
    pub async fn my_admit_card(&self) -> PortalResult<AdmitCard> {
        let envelope = self.client.get(MY_ADMIT_CARD_PATH).await?;
        let body = envelope.as_value();

        let source = if body.get("url").is_some() {
            Some(body)
        } else {
            envelope.data().filter(|data| data.is_object())
        };

        match source {
            Some(value) => Ok(AdmitCard::deserialize(value).map_err(PayloadError::from)?),
            None => Ok(AdmitCard::default()),
        }
    }
}

impl<T> ListSource for StudentPortalApi<T>
where
    T: HttpTransport + Sync,
{
    type Item = Application;

    async fn list(&self) -> PortalResult<Vec<Application>> {
        self.my_applications().await
    }
}
