//! Error codes
//!
//! - 0xxx: Request errors
//! - 9xxx: System errors

use std::fmt;

/// Numeric error code carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Request ====================
    /// Body was well-formed JSON but not a valid employee
    ValidationFailed = 2,
    /// Malformed body, wrong content type or bad path parameter
    InvalidRequest = 5,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
