//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity
///
/// `id` is `None` until the store assigns one; once persisted it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

/// Create/update employee payload
///
/// Any `id` in the request body is accepted and ignored: creates always get a
/// store-assigned id and updates take theirs from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl Employee {
    /// Build a not-yet-persisted employee from a request payload
    pub fn new_unsaved(payload: EmployeePayload) -> Self {
        Self {
            id: None,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            role: payload.role,
        }
    }

    /// Overwrite the mutable fields, leaving `id` untouched
    pub fn apply(&mut self, payload: EmployeePayload) {
        self.first_name = payload.first_name;
        self.last_name = payload.last_name;
        self.email = payload.email;
        self.role = payload.role;
    }
}
