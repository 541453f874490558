//! Employee Directory Service
//!
//! CRUD over employee records. The service is the sole mutator: it stamps
//! timestamps, decides what absence means per operation, and delegates
//! durable storage to the repository. At construction it registers the
//! `employees_count` gauge, whose supplier re-queries storage on every
//! scrape.

use std::sync::Arc;

use futures::FutureExt;
use sqlx::SqlitePool;

use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository;
use crate::services::metrics::MetricsService;
use crate::utils::{AppError, AppResult, now_millis};

#[derive(Clone)]
pub struct EmployeeService {
    pool: SqlitePool,
}

impl EmployeeService {
    /// Construct the service and register the live row-count gauge
    pub fn new(pool: SqlitePool, metrics: &MetricsService) -> Self {
        let gauge_pool = pool.clone();
        metrics.register_gauge(
            "employees_count",
            "The current number of employees in the database",
            Arc::new(move || {
                let pool = gauge_pool.clone();
                async move {
                    match repository::employee::count(&pool).await {
                        Ok(count) => count as f64,
                        Err(e) => {
                            tracing::warn!(error = %e, "Failed to read employee count for gauge");
                            f64::NAN
                        }
                    }
                }
                .boxed()
            }),
        );

        Self { pool }
    }

    /// Every stored employee, in storage order
    pub async fn list_all(&self) -> AppResult<Vec<Employee>> {
        Ok(repository::employee::find_all(&self.pool).await?)
    }

    /// Look up a single employee; absence is a regular result, not an error
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        let employee = repository::employee::find_by_id(&self.pool, id).await?;
        if employee.is_none() {
            tracing::info!(employee_id = id, "Employee does not exist");
        }
        Ok(employee)
    }

    /// Persist a new employee
    ///
    /// Both timestamps are stamped here; callers cannot supply them.
    pub async fn create(&self, data: EmployeeCreate) -> AppResult<Employee> {
        let now = now_millis();
        let employee = repository::employee::insert(&self.pool, &data, now).await?;
        tracing::info!(employee_id = employee.id, "Employee saved successfully");
        Ok(employee)
    }

    /// Update an existing employee
    ///
    /// `created_at` is preserved from the stored record, `updated_at`
    /// refreshed. A missing id is a typed NotFound, never a crash.
    pub async fn update(&self, id: i64, data: EmployeeUpdate) -> AppResult<Employee> {
        if repository::employee::find_by_id(&self.pool, id).await?.is_none() {
            return Err(AppError::not_found(format!("Employee {id} not found")));
        }

        let now = now_millis();
        repository::employee::update(&self.pool, id, &data, now).await?;

        let employee = repository::employee::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
        tracing::info!(employee_id = id, "Employee updated successfully");
        Ok(employee)
    }

    /// Delete by id; deleting a missing id is a no-op
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let rows = repository::employee::delete(&self.pool, id).await?;
        if rows == 0 {
            tracing::debug!(employee_id = id, "Delete of missing employee ignored");
        } else {
            tracing::info!(employee_id = id, "Employee deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use std::time::Duration;
    use tempfile::TempDir;

    async fn service() -> (EmployeeService, MetricsService, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = DbService::new(&db_path.to_string_lossy()).await.unwrap();
        let metrics = MetricsService::new();
        let employees = EmployeeService::new(db.pool, &metrics);
        (employees, metrics, dir)
    }

    fn alice() -> EmployeeCreate {
        EmployeeCreate {
            name: "Alice".to_string(),
            email: Some("alice@example.com".to_string()),
            position: Some("Engineer".to_string()),
        }
    }

    #[tokio::test]
    async fn create_stamps_matching_timestamps() {
        let (employees, _metrics, _dir) = service().await;
        let before = now_millis();
        let created = employees.create(alice()).await.unwrap();
        let after = now_millis();

        assert!(created.id > 0);
        assert_eq!(created.created_at, created.updated_at);
        assert!(created.created_at >= before && created.created_at <= after);
    }

    #[tokio::test]
    async fn update_preserves_created_at_and_advances_updated_at() {
        let (employees, _metrics, _dir) = service().await;
        let created = employees.create(alice()).await.unwrap();

        // Guarantee a distinct millisecond for the second stamp
        tokio::time::sleep(Duration::from_millis(5)).await;

        let updated = employees
            .update(
                created.id,
                EmployeeUpdate {
                    name: Some("Alicia".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        // Untouched fields survive a partial update
        assert_eq!(updated.email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn update_missing_id_is_a_typed_not_found() {
        let (employees, _metrics, _dir) = service().await;
        let err = employees
            .update(9999, EmployeeUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_by_id_missing_returns_none() {
        let (employees, _metrics, _dir) = service().await;
        assert!(employees.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (employees, _metrics, _dir) = service().await;
        let created = employees.create(alice()).await.unwrap();

        employees.delete_by_id(created.id).await.unwrap();
        assert!(employees.get_by_id(created.id).await.unwrap().is_none());
        // Second delete of the same id must not error
        employees.delete_by_id(created.id).await.unwrap();
    }

    #[tokio::test]
    async fn list_all_is_empty_on_a_fresh_store() {
        let (employees, _metrics, _dir) = service().await;
        assert!(employees.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn gauge_tracks_live_row_count() {
        let (employees, metrics, _dir) = service().await;

        assert!(metrics.render().await.contains("employees_count 0"));

        employees.create(alice()).await.unwrap();
        let second = employees
            .create(EmployeeCreate {
                name: "Bob".to_string(),
                email: None,
                position: None,
            })
            .await
            .unwrap();
        assert!(metrics.render().await.contains("employees_count 2"));

        employees.delete_by_id(second.id).await.unwrap();
        assert!(metrics.render().await.contains("employees_count 1"));
    }

    #[tokio::test]
    async fn crud_scenario_round_trip() {
        let (employees, _metrics, _dir) = service().await;

        let created = employees.create(alice()).await.unwrap();
        assert_eq!(created.created_at, created.updated_at);

        tokio::time::sleep(Duration::from_millis(5)).await;
        let updated = employees
            .update(
                created.id,
                EmployeeUpdate {
                    name: Some("Alicia".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        employees.delete_by_id(created.id).await.unwrap();
        assert!(employees.get_by_id(created.id).await.unwrap().is_none());
        employees.delete_by_id(created.id).await.unwrap();
    }
}
