//! Employee Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

/// Find all employees, oldest id first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, position, created_at, updated_at FROM employee ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Find employee by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, position, created_at, updated_at FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Insert a new employee with both timestamps set to `now`
pub async fn insert(pool: &SqlitePool, data: &EmployeeCreate, now: i64) -> RepoResult<Employee> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO employee (name, email, position, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.position)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to read back created employee".into()))
}

/// Partial update; `created_at` is never touched. Returns rows affected.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &EmployeeUpdate,
    now: i64,
) -> RepoResult<u64> {
    let result = sqlx::query(
        "UPDATE employee SET
            name = COALESCE(?1, name),
            email = COALESCE(?2, email),
            position = COALESCE(?3, position),
            updated_at = ?4
         WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.position)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Hard delete by id. Returns rows affected (0 when the id was absent).
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Live row count
pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employee")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
