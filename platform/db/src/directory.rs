use async_trait::async_trait;
use entity::employees;
use products_hr::{DirectoryError, DuplicateField, EmployeeDirectory, EmployeeRecord};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use crate::DbPool;

/// [`EmployeeDirectory`] over the `employees` table.
#[derive(Clone, Debug)]
pub struct SeaOrmDirectory {
    pool: DbPool,
}

impl SeaOrmDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

pub fn employee_record(model: employees::Model) -> EmployeeRecord {
    EmployeeRecord {
        id: model.id.to_string(),
        full_name: model.full_name,
        job_title: model.job_title,
        department: model.department,
        email: model.email,
        phone: model.phone,
        avatar_url: model.avatar_url,
        manager_id: model.manager_id.map(|id| id.to_string()),
    }
}

fn backend(err: DbErr) -> DirectoryError {
    DirectoryError::Backend(err.to_string())
}

#[async_trait]
impl EmployeeDirectory for SeaOrmDirectory {
    #[instrument(name = "db.active_employees", skip_all)]
    async fn active_employees(&self) -> Result<Vec<EmployeeRecord>, DirectoryError> {
        let rows = employees::Entity::find()
            .filter(employees::Column::IsActive.eq(true))
            .order_by_asc(employees::Column::CreatedAt)
            .order_by_asc(employees::Column::EmployeeNumber)
            .all(&self.pool)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(employee_record).collect())
    }

    #[instrument(name = "db.value_exists", skip(self, value))]
    async fn value_exists(
        &self,
        field: DuplicateField,
        value: &str,
        exclude_id: Option<&str>,
    ) -> Result<bool, DirectoryError> {
        let column = match field {
            DuplicateField::EmployeeNumber => employees::Column::EmployeeNumber,
            DuplicateField::Email => employees::Column::Email,
        };
        let mut query = employees::Entity::find().filter(column.eq(value));
        // An id that is not a UUID cannot belong to any row, so there is
        // nothing to exclude.
        if let Some(id) = exclude_id.and_then(|raw| Uuid::parse_str(raw).ok()) {
            query = query.filter(employees::Column::Id.ne(id));
        }
        let count = query.count(&self.pool).await.map_err(backend)?;
        Ok(count > 0)
    }

    async fn ping(&self) -> Result<(), DirectoryError> {
        self.pool.ping().await.map_err(backend)
    }
}
