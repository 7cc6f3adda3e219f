use std::sync::Arc;

use async_graphql::{Error, ErrorExtensions};
use products_hr::{DirectoryError, DuplicateCheckError, OrgTreeError};
use thiserror::Error;
use tracing::error;

/// Shared GraphQL result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("bad request: {0}")]
    InvalidInput(String),
    #[error("dependency failed: {0}")]
    Dependency(String),
    #[error("{0}")]
    ManagerCycle(String),
    #[error("internal server error")]
    Internal(Arc<anyhow::Error>),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Dependency(_) => "DEPENDENCY_FAILED",
            ApiError::ManagerCycle(_) => "MANAGER_CYCLE",
            ApiError::Internal(_) => "INTERNAL",
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        error!(error = %err, "internal error");
        Self::Internal(Arc::new(err))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        Self::internal(value)
    }
}

impl From<DuplicateCheckError> for ApiError {
    fn from(value: DuplicateCheckError) -> Self {
        match value {
            DuplicateCheckError::Validation(message) => Self::InvalidInput(message.to_string()),
            DuplicateCheckError::Dependency(message) => Self::Dependency(message),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(value: DirectoryError) -> Self {
        Self::Dependency(value.to_string())
    }
}

impl From<OrgTreeError> for ApiError {
    fn from(value: OrgTreeError) -> Self {
        Self::ManagerCycle(value.to_string())
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        let mut err = Error::new(self.to_string());
        err = err.extend_with(|_err, e| {
            e.set("code", self.code());
        });
        if let ApiError::InvalidInput(_) = self {
            err = err.extend_with(|_err, e| {
                e.set("type", "BAD_REQUEST");
            });
        }
        err
    }
}

/// Convert any error into a GraphQL error payload while hiding internals.
pub fn internal_error(err: impl Into<anyhow::Error>) -> Error {
    ApiError::internal(err.into()).extend()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    fn code_of(err: &Error) -> Option<Value> {
        err.extensions
            .as_ref()
            .and_then(|map| map.get("code"))
            .cloned()
    }

    #[test]
    fn internal_errors_are_masked() {
        let err = internal_error(anyhow::anyhow!("boom"));
        assert_eq!(err.message, "internal server error");
        assert_eq!(code_of(&err), Some(Value::from("INTERNAL")));
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = ApiError::from(DuplicateCheckError::Validation("unsupported field")).extend();
        assert_eq!(err.message, "bad request: unsupported field");
        assert_eq!(code_of(&err), Some(Value::from("INVALID_INPUT")));
        let kind = err
            .extensions
            .as_ref()
            .and_then(|map| map.get("type"))
            .cloned();
        assert_eq!(kind, Some(Value::from("BAD_REQUEST")));
    }

    #[test]
    fn dependency_failures_keep_the_message() {
        let err = ApiError::from(DuplicateCheckError::Dependency("timeout".into())).extend();
        assert_eq!(err.message, "dependency failed: timeout");
        assert_eq!(code_of(&err), Some(Value::from("DEPENDENCY_FAILED")));
    }

    #[test]
    fn cycles_have_their_own_code() {
        let err = ApiError::from(OrgTreeError::ManagerCycle {
            employee_id: "7".into(),
        })
        .extend();
        assert_eq!(err.message, "manager cycle detected at employee 7");
        assert_eq!(code_of(&err), Some(Value::from("MANAGER_CYCLE")));
    }
}
