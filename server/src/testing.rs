use async_trait::async_trait;
use products_hr::{DirectoryError, DuplicateField, EmployeeDirectory, EmployeeRecord};

/// In-memory directory for router and schema tests.
#[derive(Clone, Debug, Default)]
pub struct FakeDirectory {
    records: Vec<EmployeeRecord>,
    exists: bool,
    failure: Option<String>,
}

impl FakeDirectory {
    pub fn with_records(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn exists(mut self, exists: bool) -> Self {
        self.exists = exists;
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    fn check(&self) -> Result<(), DirectoryError> {
        match &self.failure {
            Some(message) => Err(DirectoryError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmployeeDirectory for FakeDirectory {
    async fn active_employees(&self) -> Result<Vec<EmployeeRecord>, DirectoryError> {
        self.check()?;
        Ok(self.records.clone())
    }

    async fn value_exists(
        &self,
        _field: DuplicateField,
        _value: &str,
        _exclude_id: Option<&str>,
    ) -> Result<bool, DirectoryError> {
        self.check()?;
        Ok(self.exists)
    }

    async fn ping(&self) -> Result<(), DirectoryError> {
        self.check()
    }
}
