use std::time::Instant;

use shared::error::AppError;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::EmployeeRepository;
use crate::services::EmployeeService;

/// Server state - shared handles for every request
///
/// Cheap to clone: the pool inside [`DbService`] is reference counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Configuration (immutable) |
/// | db | DbService | SQLite pool |
/// | employees | EmployeeService | Employee operations |
/// | started_at | Instant | Process start, for uptime |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub employees: EmployeeService,
    pub started_at: Instant,
}

impl ServerState {
    /// Open the configured store and wire the services onto it
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = if config.is_in_memory() {
            DbService::in_memory().await?
        } else {
            DbService::new(&config.database_url, config.db_max_connections).await?
        };
        Ok(Self::with_db(config.clone(), db))
    }

    /// Build state around an already-open database
    pub fn with_db(config: Config, db: DbService) -> Self {
        let employees = EmployeeService::new(EmployeeRepository::new(db.pool.clone()));
        Self {
            config,
            db,
            employees,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
