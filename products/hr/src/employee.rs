use serde::{Deserialize, Serialize};

/// A single employee as supplied by the directory.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmployeeRecord {
    pub id: String,
    pub full_name: String,
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub manager_id: Option<String>,
}

impl EmployeeRecord {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            job_title: String::new(),
            department: String::new(),
            email: String::new(),
            phone: None,
            avatar_url: None,
            manager_id: None,
        }
    }

    pub fn reporting_to(mut self, manager_id: impl Into<String>) -> Self {
        self.manager_id = Some(manager_id.into());
        self
    }

    pub fn with_role(mut self, job_title: impl Into<String>, department: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self.department = department.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn is_top_level(&self) -> bool {
        self.manager_id.is_none()
    }
}
