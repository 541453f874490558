//! Authentication and Access Control
//!
//! HTTP Basic authentication against a statically-provisioned principal
//! store, and a declarative path policy enforced by middleware before any
//! handler runs.

pub mod basic;
pub mod middleware;
pub mod password;
pub mod policy;
pub mod principal;

pub use middleware::enforce_access;
pub use policy::{AccessPolicy, Requirement};
pub use principal::{Principal, PrincipalStore, ROLE_ACTUATOR_ADMIN};
