//! Uniqueness check used by the employee forms before saving.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{instrument, warn};

use crate::directory::EmployeeDirectory;

pub const MISSING_FIELDS: &str = "field and value are required";
pub const UNSUPPORTED_FIELD: &str = "unsupported field";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DuplicateCheckError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("duplicate check failed: {0}")]
    Dependency(String),
}

/// Columns that may be checked for an existing value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateField {
    EmployeeNumber,
    Email,
}

impl DuplicateField {
    pub fn as_str(self) -> &'static str {
        match self {
            DuplicateField::EmployeeNumber => "employee_number",
            DuplicateField::Email => "email",
        }
    }
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicateField {
    type Err = DuplicateCheckError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "employee_number" => Ok(DuplicateField::EmployeeNumber),
            "email" => Ok(DuplicateField::Email),
            _ => Err(DuplicateCheckError::Validation(UNSUPPORTED_FIELD)),
        }
    }
}

/// Raw request as received from a client; every field may be absent.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DuplicateCheckRequest {
    pub field: Option<String>,
    pub value: Option<String>,
    #[serde(default, alias = "excludeId")]
    pub exclude_id: Option<String>,
}

/// A request that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateCheck {
    pub field: DuplicateField,
    pub value: String,
    pub exclude_id: Option<String>,
}

impl DuplicateCheckRequest {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            value: Some(value.into()),
            exclude_id: None,
        }
    }

    /// Presence is checked before the field name, so a missing value is
    /// reported the same way whatever `field` holds.
    pub fn validate(self) -> Result<DuplicateCheck, DuplicateCheckError> {
        let field = self.field.filter(|f| !f.is_empty());
        let value = self.value.filter(|v| !v.is_empty());
        let (Some(field), Some(value)) = (field, value) else {
            return Err(DuplicateCheckError::Validation(MISSING_FIELDS));
        };
        Ok(DuplicateCheck {
            field: field.parse()?,
            value,
            exclude_id: self.exclude_id.filter(|id| !id.is_empty()),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DuplicateCheckResponse {
    pub exists: bool,
}

/// Validate the request, then ask the directory once. No retries.
#[instrument(name = "hr.check_duplicate", skip_all)]
pub async fn check_duplicate<D>(
    directory: &D,
    request: DuplicateCheckRequest,
) -> Result<DuplicateCheckResponse, DuplicateCheckError>
where
    D: EmployeeDirectory + ?Sized,
{
    let check = request.validate()?;
    let exists = directory
        .value_exists(check.field, &check.value, check.exclude_id.as_deref())
        .await
        .map_err(|err| {
            warn!(field = %check.field, error = %err, "duplicate check failed");
            DuplicateCheckError::Dependency(err.to_string())
        })?;
    Ok(DuplicateCheckResponse { exists })
}
