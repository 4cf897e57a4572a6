//! Service layer
//!
//! Sits between the HTTP handlers and the repositories.

pub mod employee;

pub use employee::EmployeeService;
