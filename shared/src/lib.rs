//! Shared types for the employee directory
//!
//! Types that cross the HTTP boundary: the employee model and the
//! error body returned by the server.

pub mod error;
pub mod models;
