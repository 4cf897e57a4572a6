//! Unified error system
//!
//! - [`ErrorCode`]: numeric codes, each mapped to an HTTP status
//! - [`AppError`]: code plus message, returned by every handler
//! - [`ErrorResponse`]: JSON body sent to clients
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorResponse};
//!
//! let err = AppError::database("connection refused");
//! let body = ErrorResponse::from(&err);
//! assert_eq!(body.code, 9002);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorResponse};
