//! Access Control Middleware
//!
//! Evaluates the [`AccessPolicy`](crate::auth::AccessPolicy) for every
//! request before any handler runs. Protected requests carry HTTP Basic
//! credentials; the authenticated [`Principal`] is injected into request
//! extensions for downstream handlers.
//!
//! # Failure mapping
//!
//! | Failure | HTTP status |
//! |---------|-------------|
//! | Missing or malformed Authorization header | 401 |
//! | Unknown user or wrong secret | 401 (uniform) |
//! | Authenticated but missing the required role | 403 |

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::basic;
use crate::auth::policy::Requirement;
use crate::auth::principal::Principal;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Gate every request on the access policy
pub async fn enforce_access(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight is never authenticated
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    match state.policy.requirement_for(req.uri().path()) {
        Requirement::PermitAll => Ok(next.run(req).await),
        Requirement::Authenticated => {
            let principal = authenticate(&state, &req)?;
            req.extensions_mut().insert(principal);
            Ok(next.run(req).await)
        }
        Requirement::Role(role) => {
            let principal = authenticate(&state, &req)?;
            if principal.role != role {
                security_log!(
                    "WARN",
                    "role_denied",
                    username = principal.username.clone(),
                    required_role = role,
                    path = req.uri().path().to_string()
                );
                return Err(AppError::forbidden(format!("Role {role} required")));
            }
            req.extensions_mut().insert(principal);
            Ok(next.run(req).await)
        }
    }
}

/// Resolve the Basic credentials on the request against the principal store
fn authenticate(state: &ServerState, req: &Request) -> Result<Principal, AppError> {
    let header_value = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(header_value) = header_value else {
        security_log!("WARN", "auth_missing", path = req.uri().path().to_string());
        return Err(AppError::unauthorized());
    };

    let Some(credentials) = basic::parse_basic_header(header_value) else {
        security_log!("WARN", "auth_malformed", path = req.uri().path().to_string());
        return Err(AppError::unauthorized());
    };

    state
        .principals
        .authenticate(&credentials.username, &credentials.password)
        .inspect_err(|_| {
            security_log!(
                "WARN",
                "auth_failed",
                username = credentials.username.clone(),
                path = req.uri().path().to_string()
            );
        })
}
