//! Service Layer
//!
//! - [`EmployeeService`] - CRUD over employee records
//! - [`MetricsService`] - Prometheus exposition with live gauges

pub mod employee;
pub mod metrics;

pub use employee::EmployeeService;
pub use self::metrics::MetricsService;
