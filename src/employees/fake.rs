//! In-memory `EmployeeStore` for router tests. Mirrors the table's constraints:
//! serial ids, NOT NULL columns, unique email, and a strictly advancing `updated_at`.

use std::sync::Mutex;

use async_trait::async_trait;
use time::{macros::date, Duration, OffsetDateTime};

use super::dto::EmployeeInput;
use super::repo::EmployeeStore;
use super::repo_types::{DeletedEmployee, Employee};
use crate::db::StoreError;

#[derive(Default)]
struct Table {
    rows: Vec<Employee>,
    last_id: i32,
}

pub struct InMemoryEmployees {
    table: Mutex<Table>,
    available: Mutex<bool>,
}

impl Default for InMemoryEmployees {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table::default()),
            available: Mutex::new(true),
        }
    }
}

impl InMemoryEmployees {
    /// When false every call fails the way an unreachable database does.
    pub fn set_available(&self, available: bool) {
        *self.available.lock().unwrap() = available;
    }

    pub fn snapshot(&self) -> Vec<Employee> {
        self.table.lock().unwrap().rows.clone()
    }

    /// Inserts rows with explicit ids, in the given order.
    pub fn seed_with_ids(&self, rows: &[(i32, &str)]) {
        let mut table = self.table.lock().unwrap();
        let now = OffsetDateTime::now_utc();
        for (id, email) in rows {
            table.rows.push(Employee {
                id: *id,
                first_name: "Seed".into(),
                last_name: format!("No{id}"),
                email: (*email).into(),
                contact_number: "000".into(),
                salary: 1.0,
                address: "Somewhere".into(),
                dob: date!(1980 - 06 - 15),
                age: None,
                image_url: None,
                created_at: now,
                updated_at: now,
            });
            table.last_id = table.last_id.max(*id);
        }
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if *self.available.lock().unwrap() {
            Ok(())
        } else {
            Err(StoreError::Other(sqlx::Error::PoolTimedOut))
        }
    }
}

struct Columns {
    first_name: String,
    last_name: String,
    email: String,
    contact_number: String,
    salary: f64,
    address: String,
    dob: time::Date,
}

fn required(input: &EmployeeInput) -> Result<Columns, StoreError> {
    let missing = || StoreError::RequiredFieldMissing;
    Ok(Columns {
        first_name: input.first_name.clone().ok_or_else(missing)?,
        last_name: input.last_name.clone().ok_or_else(missing)?,
        email: input.email.clone().ok_or_else(missing)?,
        contact_number: input.contact_number.clone().ok_or_else(missing)?,
        salary: input.salary.ok_or_else(missing)?,
        address: input.address.clone().ok_or_else(missing)?,
        dob: input.dob.ok_or_else(missing)?,
    })
}

#[async_trait]
impl EmployeeStore for InMemoryEmployees {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        self.check_available()?;
        let mut rows = self.snapshot();
        rows.sort_by_key(|e| e.id);
        Ok(rows)
    }

    async fn find(&self, id: i32) -> Result<Employee, StoreError> {
        self.check_available()?;
        let table = self.table.lock().unwrap();
        table
            .rows
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self.table.lock().unwrap().rows.iter().any(|e| e.id == id))
    }

    async fn create(&self, input: &EmployeeInput) -> Result<Employee, StoreError> {
        self.check_available()?;
        let cols = required(input)?;
        let mut table = self.table.lock().unwrap();
        if table.rows.iter().any(|e| e.email == cols.email) {
            return Err(StoreError::UniqueViolation);
        }
        table.last_id += 1;
        let now = OffsetDateTime::now_utc();
        let employee = Employee {
            id: table.last_id,
            first_name: cols.first_name,
            last_name: cols.last_name,
            email: cols.email,
            contact_number: cols.contact_number,
            salary: cols.salary,
            address: cols.address,
            dob: cols.dob,
            age: input.age,
            image_url: input.image_url.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i32, input: &EmployeeInput) -> Result<Employee, StoreError> {
        self.check_available()?;
        let cols = required(input)?;
        let mut table = self.table.lock().unwrap();
        if table.rows.iter().any(|e| e.id != id && e.email == cols.email) {
            return Err(StoreError::UniqueViolation);
        }
        let row = table
            .rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        let now = OffsetDateTime::now_utc();
        row.first_name = cols.first_name;
        row.last_name = cols.last_name;
        row.email = cols.email;
        row.contact_number = cols.contact_number;
        row.salary = cols.salary;
        row.address = cols.address;
        row.dob = cols.dob;
        row.age = input.age;
        row.image_url = input.image_url.clone();
        row.updated_at = now.max(row.updated_at + Duration::microseconds(1));
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<DeletedEmployee, StoreError> {
        self.check_available()?;
        let mut table = self.table.lock().unwrap();
        let pos = table
            .rows
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        let removed = table.rows.remove(pos);
        Ok(DeletedEmployee {
            id: removed.id,
            first_name: removed.first_name,
            last_name: removed.last_name,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
