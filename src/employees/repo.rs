use async_trait::async_trait;
use sqlx::PgPool;

use super::dto::EmployeeInput;
use super::repo_types::{DeletedEmployee, Employee};
use crate::db::StoreError;

macro_rules! employee_columns {
    () => {
        "id, first_name, last_name, email, contact_number, salary::float8 AS salary, \
         address, dob, age, image_url, created_at, updated_at"
    };
}

/// Access to the employees table.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All employees ordered by id ascending.
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;
    async fn find(&self, id: i32) -> Result<Employee, StoreError>;
    async fn exists(&self, id: i32) -> Result<bool, StoreError>;
    async fn create(&self, input: &EmployeeInput) -> Result<Employee, StoreError>;
    /// Full-record replace; refreshes `updated_at`.
    async fn update(&self, id: i32, input: &EmployeeInput) -> Result<Employee, StoreError>;
    async fn delete(&self, id: i32) -> Result<DeletedEmployee, StoreError>;
    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgEmployeeStore {
    db: PgPool,
}

impl PgEmployeeStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = sqlx::query_as::<_, Employee>(concat!(
            "SELECT ",
            employee_columns!(),
            " FROM employees ORDER BY id"
        ))
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i32) -> Result<Employee, StoreError> {
        let row = sqlx::query_as::<_, Employee>(concat!(
            "SELECT ",
            employee_columns!(),
            " FROM employees WHERE id = $1"
        ))
        .bind(id)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        let found: Option<i32> = sqlx::query_scalar("SELECT id FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(found.is_some())
    }

    async fn create(&self, input: &EmployeeInput) -> Result<Employee, StoreError> {
        let row = sqlx::query_as::<_, Employee>(concat!(
            r#"
            INSERT INTO employees
                (first_name, last_name, email, contact_number, salary, address, dob, age, image_url)
            VALUES ($1, $2, $3, $4, $5::numeric, $6, $7, $8, $9)
            RETURNING "#,
            employee_columns!()
        ))
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.contact_number)
        .bind(input.salary)
        .bind(&input.address)
        .bind(input.dob)
        .bind(input.age)
        .bind(&input.image_url)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, input: &EmployeeInput) -> Result<Employee, StoreError> {
        let row = sqlx::query_as::<_, Employee>(concat!(
            r#"
            UPDATE employees
            SET first_name = $1,
                last_name = $2,
                email = $3,
                contact_number = $4,
                salary = $5::numeric,
                address = $6,
                dob = $7,
                age = $8,
                image_url = $9,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $10
            RETURNING "#,
            employee_columns!()
        ))
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.contact_number)
        .bind(input.salary)
        .bind(&input.address)
        .bind(input.dob)
        .bind(input.age)
        .bind(&input.image_url)
        .bind(id)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<DeletedEmployee, StoreError> {
        let row = sqlx::query_as::<_, DeletedEmployee>(
            r#"
            DELETE FROM employees
            WHERE id = $1
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(id)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}
