//! Employee Server - REST API over an employee directory
//!
//! # Module structure
//!
//! ```text
//! employee-server/src/
//! ├── core/          # configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging
//! ├── services/      # service layer
//! ├── db/            # SQLite pool and repositories
//! └── utils/         # logging setup
//! ```
//!
//! Request flow: handler → [`services::EmployeeService`] →
//! [`db::repository::EmployeeRepository`] → SQLite.

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export public types
pub use api::build_app;
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use services::EmployeeService;

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
