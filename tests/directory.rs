use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use entity::employees;
use migration::{Migrator, MigratorTrait};
use platform_db::{SeaOrmDirectory, seed_demo_org};
use products_hr::{
    DuplicateCheckRequest, DuplicateField, EmployeeDirectory, build_org_tree, check_duplicate,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use suite_tests::migrated_memory_db;
use uuid::Uuid;

#[tokio::test]
async fn seeded_org_builds_reporting_tree() -> Result<()> {
    let pool = migrated_memory_db().await?;
    seed_demo_org(&pool).await?;
    let directory = SeaOrmDirectory::new(pool);

    let records = directory.active_employees().await?;
    let names: Vec<_> = records.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Grace Hopper",
            "Ada Lovelace",
            "Katherine Johnson",
            "Alan Turing",
            "Margaret Hamilton",
            "Dorothy Vaughan",
        ]
    );

    let root = build_org_tree(&records, None)?.context("expected a tree")?;
    assert_eq!(root.full_name, "Grace Hopper");
    assert_eq!(root.headcount(), 6);
    assert_eq!(root.depth(), 3);
    let direct: Vec<_> = root.children.iter().map(|n| n.full_name.as_str()).collect();
    assert_eq!(direct, vec!["Ada Lovelace", "Katherine Johnson"]);
    let cto_reports: Vec<_> = root.children[0]
        .children
        .iter()
        .map(|n| n.full_name.as_str())
        .collect();
    assert_eq!(cto_reports, vec!["Alan Turing", "Margaret Hamilton"]);
    Ok(())
}

#[tokio::test]
async fn explicit_root_uses_database_ids() -> Result<()> {
    let pool = migrated_memory_db().await?;
    let seeded = seed_demo_org(&pool).await?;
    let finance = seeded.by_number("E-0003").context("finance lead")?.id.to_string();
    let directory = SeaOrmDirectory::new(pool);

    let records = directory.active_employees().await?;
    let root = build_org_tree(&records, Some(finance.as_str()))?.context("expected a tree")?;
    assert_eq!(root.id, finance);
    assert_eq!(root.headcount(), 2);
    assert_eq!(root.children[0].full_name, "Dorothy Vaughan");
    Ok(())
}

#[tokio::test]
async fn empty_directory_has_no_chart() -> Result<()> {
    let pool = migrated_memory_db().await?;
    let directory = SeaOrmDirectory::new(pool);
    let records = directory.active_employees().await?;
    assert!(records.is_empty());
    assert_eq!(build_org_tree(&records, None)?, None);
    Ok(())
}

#[tokio::test]
async fn inactive_employees_are_left_out() -> Result<()> {
    let pool = migrated_memory_db().await?;
    let seeded = seed_demo_org(&pool).await?;
    let ada = seeded.by_email("ada@hr.test").context("ada")?.id;
    let later = Utc::now() + Duration::minutes(5);
    employees::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_number: Set("E-0099".into()),
        full_name: Set("Former Engineer".into()),
        job_title: Set("Engineer".into()),
        department: Set("Engineering".into()),
        email: Set("former@hr.test".into()),
        phone: Set(None),
        avatar_url: Set(None),
        manager_id: Set(Some(ada)),
        is_active: Set(false),
        created_at: Set(later.into()),
        updated_at: Set(later.into()),
    }
    .insert(&pool)
    .await?;
    assert_eq!(employees::Entity::find().all(&pool).await?.len(), 7);

    let directory = SeaOrmDirectory::new(pool);
    let records = directory.active_employees().await?;
    assert_eq!(records.len(), 6);
    assert!(records.iter().all(|r| r.email != "former@hr.test"));

    // Uniqueness still covers inactive rows.
    assert!(
        directory
            .value_exists(DuplicateField::Email, "former@hr.test", None)
            .await?
    );
    Ok(())
}

#[tokio::test]
async fn value_exists_matches_field_and_honours_exclusion() -> Result<()> {
    let pool = migrated_memory_db().await?;
    let seeded = seed_demo_org(&pool).await?;
    let ada = seeded.by_email("ada@hr.test").context("ada")?.id.to_string();
    let directory = SeaOrmDirectory::new(pool);

    assert!(
        directory
            .value_exists(DuplicateField::Email, "ada@hr.test", None)
            .await?
    );
    assert!(
        directory
            .value_exists(DuplicateField::EmployeeNumber, "E-0002", None)
            .await?
    );
    assert!(
        !directory
            .value_exists(DuplicateField::Email, "E-0002", None)
            .await?
    );
    assert!(
        !directory
            .value_exists(DuplicateField::Email, "ada@hr.test", Some(ada.as_str()))
            .await?
    );
    assert!(
        directory
            .value_exists(DuplicateField::Email, "ada@hr.test", Some("not-a-uuid"))
            .await?
    );
    assert!(
        !directory
            .value_exists(DuplicateField::EmployeeNumber, "E-9999", None)
            .await?
    );
    Ok(())
}

#[tokio::test]
async fn duplicate_check_runs_against_database() -> Result<()> {
    let pool = migrated_memory_db().await?;
    seed_demo_org(&pool).await?;
    let directory = SeaOrmDirectory::new(pool);

    let response =
        check_duplicate(&directory, DuplicateCheckRequest::new("email", "grace@hr.test")).await?;
    assert!(response.exists);
    let response =
        check_duplicate(&directory, DuplicateCheckRequest::new("email", "new@hr.test")).await?;
    assert!(!response.exists);
    assert!(
        check_duplicate(&directory, DuplicateCheckRequest::new("ssn", "123"))
            .await
            .is_err()
    );
    Ok(())
}

#[tokio::test]
async fn ping_and_rollback() -> Result<()> {
    let pool = migrated_memory_db().await?;
    let directory = SeaOrmDirectory::new(pool.clone());
    directory.ping().await?;
    assert!(Migrator::get_pending_migrations(&pool).await?.is_empty());

    Migrator::down(&pool, Some(1)).await?;
    assert_eq!(Migrator::get_pending_migrations(&pool).await?.len(), 1);
    assert!(directory.active_employees().await.is_err());
    Ok(())
}
