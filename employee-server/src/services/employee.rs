//! Employee Service
//!
//! Straight delegation to [`EmployeeRepository`]; keeps the HTTP layer
//! independent of the persistence layer.

use shared::models::Employee;

use crate::db::repository::{EmployeeRepository, RepoResult};

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        self.repo.find_by_id(id).await
    }

    pub async fn save(&self, employee: Employee) -> RepoResult<Employee> {
        self.repo.save(employee).await
    }

    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        self.repo.delete_by_id(id).await
    }

    pub async fn count(&self) -> RepoResult<i64> {
        self.repo.count().await
    }
}
