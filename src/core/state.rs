//! Server State

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{AccessPolicy, PrincipalStore, ROLE_ACTUATOR_ADMIN};
use crate::core::config::Config;
use crate::core::shutdown::ShutdownHandle;
use crate::db::DbService;
use crate::services::{EmployeeService, MetricsService};
use crate::utils::{AppError, AppResult};

/// Server state - shared references to every service
///
/// Cloning is shallow; all fields are cheap handles.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | pool | SQLite connection pool |
/// | principals | credential store for the provisioned admin |
/// | policy | ordered access rules |
/// | metrics | Prometheus sink with live gauges |
/// | employees | employee directory service |
/// | shutdown | graceful shutdown signal |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub principals: Arc<PrincipalStore>,
    pub policy: Arc<AccessPolicy>,
    pub metrics: MetricsService,
    pub employees: EmployeeService,
    pub shutdown: ShutdownHandle,
}

impl ServerState {
    /// Initialize all services in dependency order
    ///
    /// 1. Working directory structure
    /// 2. Database (work_dir/database/roster.db, migrations applied)
    /// 3. Principal store (admin secret hashed here)
    /// 4. Metrics service, then the employee directory (registers its gauge)
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config.ensure_work_dir_structure().map_err(|e| {
            AppError::internal(format!("Failed to create work directory structure: {e}"))
        })?;

        let db_path = config.database_dir().join("roster.db");
        let db = DbService::new(&db_path.to_string_lossy()).await?;

        if config.uses_default_admin_credentials() {
            tracing::warn!(
                username = %config.admin_username,
                "Default admin credentials are in use; set ADMIN_USERNAME/ADMIN_PASSWORD"
            );
        }
        let principals = Arc::new(PrincipalStore::bootstrap(
            &config.admin_username,
            &config.admin_password,
            ROLE_ACTUATOR_ADMIN,
        )?);
        let policy = Arc::new(AccessPolicy::default_rules());

        let metrics = MetricsService::new();
        let employees = EmployeeService::new(db.pool.clone(), &metrics);

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            principals,
            policy,
            metrics,
            employees,
            shutdown: ShutdownHandle::new(),
        })
    }
}
