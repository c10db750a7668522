//! Notifications API (`/notifications`)

use std::sync::Arc;

use platform::{ApiClient, HttpTransport};

use crate::domain::entities::Notification;
use crate::infra::rest::RestCollection;

pub const NOTIFICATIONS_PATH: &str = "/notifications";

pub type NotificationsApi<T> = RestCollection<Notification, T>;

impl<T> RestCollection<Notification, T>
where
    T: HttpTransport + Sync,
{
    pub fn notifications(client: Arc<ApiClient<T>>) -> Self {
        Self::new(client, NOTIFICATIONS_PATH)
    }
}
