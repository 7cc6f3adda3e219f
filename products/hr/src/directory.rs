use async_trait::async_trait;
use thiserror::Error;

use crate::{duplicate::DuplicateField, employee::EmployeeRecord};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("{0}")]
    Backend(String),
}

/// Data-access collaborator behind the org chart and duplicate checks.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// All active employees, in the directory's natural order.
    async fn active_employees(&self) -> Result<Vec<EmployeeRecord>, DirectoryError>;

    /// Whether any employee other than `exclude_id` already holds `value`.
    async fn value_exists(
        &self,
        field: DuplicateField,
        value: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, DirectoryError>;

    /// Cheap liveness check for health reporting.
    async fn ping(&self) -> Result<(), DirectoryError> {
        Ok(())
    }
}
