//! roster-server - minimal employee directory backend
//!
//! # Architecture overview
//!
//! - **Access control** (`auth`): ordered path rules + HTTP Basic
//!   authentication against a single provisioned admin principal
//! - **Database** (`db`): embedded SQLite storage via sqlx
//! - **Services** (`services`): employee directory and metrics sink
//! - **HTTP API** (`api`): REST surface and actuator endpoints
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # configuration, state, server, shutdown
//! ├── auth/          # access policy, Basic auth, principal store
//! ├── services/      # employee directory, metrics
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # pool, models, repositories
//! └── utils/         # errors, logging, time
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{AccessPolicy, Principal, PrincipalStore};
pub use self::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured events under a dedicated target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
