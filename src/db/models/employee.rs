//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity
///
/// `created_at` / `updated_at` are unix milliseconds, stamped by the
/// service layer: `created_at` once at creation, `updated_at` on every
/// write.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    /// Storage-assigned identifier
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub position: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload
///
/// Timestamps are never accepted from the caller; the service stamps them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: Option<String>,
    pub position: Option<String>,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
}
