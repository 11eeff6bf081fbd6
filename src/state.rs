use std::sync::Arc;

use sqlx::PgPool;

use crate::employees::repo::{EmployeeStore, PgEmployeeStore};

/// Per-process resources handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn postgres(db: PgPool) -> Self {
        Self::from_parts(Arc::new(PgEmployeeStore::new(db)))
    }

    pub fn from_parts(employees: Arc<dyn EmployeeStore>) -> Self {
        Self { employees }
    }
}
