//! Employee Repository

use super::RepoResult;
use shared::models::Employee;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, first_name, last_name, email, role";

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find all employees
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees =
            sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employee ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let employee =
            sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employee WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(employee)
    }

    /// Insert or update by identifier
    ///
    /// Without an id the store assigns one. With an id, the row's four fields
    /// are replaced, or a row with that id is inserted if none exists.
    pub async fn save(&self, employee: Employee) -> RepoResult<Employee> {
        let saved = sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employee (id, first_name, last_name, email, role) VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
                first_name = excluded.first_name, \
                last_name = excluded.last_name, \
                email = excluded.email, \
                role = excluded.role \
             RETURNING {COLUMNS}"
        ))
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.role)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(employee_id = ?saved.id, "Employee saved");
        Ok(saved)
    }

    /// Delete employee by id; absent ids are a no-op
    pub async fn delete_by_id(&self, id: i64) -> RepoResult<()> {
        let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(
            employee_id = id,
            deleted = rows.rows_affected(),
            "Employee delete"
        );
        Ok(())
    }

    /// Number of stored employees
    pub async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employee")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
