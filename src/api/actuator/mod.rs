//! Actuator API Module
//!
//! Operational endpoints. Access is decided by the access policy, not here:
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /actuator/health | GET | none |
//! | /actuator/metrics | GET | none |
//! | /actuator/shutdown | POST | ACTUATOR_ADMIN |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/actuator/health", get(handler::health))
        .route("/actuator/metrics", get(handler::metrics))
        .route("/actuator/shutdown", post(handler::shutdown))
}
