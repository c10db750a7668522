//! Students API (`/students`)

use std::sync::Arc;

use platform::{ApiClient, HttpTransport};

use crate::domain::entities::Student;
use crate::infra::rest::RestCollection;

pub const STUDENTS_PATH: &str = "/students";

pub type StudentsApi<T> = RestCollection<Student, T>;

impl<T> RestCollection<Student, T>
where
    T: HttpTransport + Sync,
{
    pub fn students(client: Arc<ApiClient<T>>) -> Self {
        Self::new(client, STUDENTS_PATH)
    }
}
