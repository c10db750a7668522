//! Members API (`/members`)

use std::sync::Arc;

use platform::{ApiClient, HttpTransport};

use crate::domain::entities::Member;
use crate::infra::rest::RestCollection;

pub const MEMBERS_PATH: &str = "/members";

pub type MembersApi<T> = RestCollection<Member, T>;

impl<T> RestCollection<Member, T>
where
    T: HttpTransport + Sync,
{
    pub fn members(client: Arc<ApiClient<T>>) -> Self {
        Self::new(client, MEMBERS_PATH)
    }
}
