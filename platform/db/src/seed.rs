use chrono::{Duration, Utc};
use entity::employees;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DbErr, TransactionTrait};
use uuid::Uuid;

use crate::DbPool;

struct SeedEmployee {
    number: &'static str,
    name: &'static str,
    title: &'static str,
    department: &'static str,
    email: &'static str,
    manager: Option<&'static str>,
}

const DEMO_ORG: &[SeedEmployee] = &[
    SeedEmployee {
        number: "E-0001",
        name: "Grace Hopper",
        title: "Chief Executive Officer",
        department: "Executive",
        email: "grace@hr.test",
        manager: None,
    },
    SeedEmployee {
        number: "E-0002",
        name: "Ada Lovelace",
        title: "Chief Technology Officer",
        department: "Engineering",
        email: "ada@hr.test",
        manager: Some("E-0001"),
    },
    SeedEmployee {
        number: "E-0003",
        name: "Katherine Johnson",
        title: "Head of Finance",
        department: "Finance",
        email: "katherine@hr.test",
        manager: Some("E-0001"),
    },
    SeedEmployee {
        number: "E-0004",
        name: "Alan Turing",
        title: "Staff Engineer",
        department: "Engineering",
        email: "alan@hr.test",
        manager: Some("E-0002"),
    },
    SeedEmployee {
        number: "E-0005",
        name: "Margaret Hamilton",
        title: "Engineering Manager",
        department: "Engineering",
        email: "margaret@hr.test",
        manager: Some("E-0002"),
    },
    SeedEmployee {
        number: "E-0006",
        name: "Dorothy Vaughan",
        title: "Accountant",
        department: "Finance",
        email: "dorothy@hr.test",
        manager: Some("E-0003"),
    },
];

#[derive(Clone, Debug, Default)]
pub struct SeededEmployees {
    pub employees: Vec<employees::Model>,
}

impl SeededEmployees {
    pub fn by_number(&self, number: &str) -> Option<&employees::Model> {
        self.employees
            .iter()
            .find(|model| model.employee_number == number)
    }

    pub fn by_email(&self, email: &str) -> Option<&employees::Model> {
        self.employees.iter().find(|model| model.email == email)
    }
}

/// Insert a small demo organisation. Managers are inserted before their
/// reports; creation times are staggered so listing order is stable.
pub async fn seed_demo_org(pool: &DbPool) -> Result<SeededEmployees, DbErr> {
    let txn = pool.begin().await?;
    let base = Utc::now();
    let mut seeded = SeededEmployees::default();
    for (offset, row) in (0i64..).zip(DEMO_ORG) {
        let manager_id = match row.manager {
            Some(number) => Some(
                seeded
                    .by_number(number)
                    .map(|model| model.id)
                    .ok_or_else(|| DbErr::Custom(format!("seed manager {number} missing")))?,
            ),
            None => None,
        };
        let created_at = base + Duration::seconds(offset);
        let model = employees::ActiveModel {
            id: Set(Uuid::new_v4()),
            employee_number: Set(row.number.into()),
            full_name: Set(row.name.into()),
            job_title: Set(row.title.into()),
            department: Set(row.department.into()),
            email: Set(row.email.into()),
            phone: Set(None),
            avatar_url: Set(None),
            manager_id: Set(manager_id),
            is_active: Set(true),
            created_at: Set(created_at.into()),
            updated_at: Set(created_at.into()),
        }
        .insert(&txn)
        .await?;
        seeded.employees.push(model);
    }
    txn.commit().await?;
    Ok(seeded)
}
