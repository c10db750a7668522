//! Institutes API (`/institutes`)

use std::sync::Arc;

use platform::{ApiClient, HttpTransport};

use crate::domain::entities::Institute;
use crate::infra::rest::RestCollection;

pub const INSTITUTES_PATH: &str = "/institutes";

pub type InstitutesApi<T> = RestCollection<Institute, T>;

impl<T> RestCollection<Institute, T>
where
    T: HttpTransport + Sync,
{
    pub fn institutes(client: Arc<ApiClient<T>>) -> Self {
        Self::new(client, INSTITUTES_PATH)
    }
}
