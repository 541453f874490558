//! Core module - server configuration, state and lifecycle
//!
//! # Structure
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - server state
//! - [`Server`] - HTTP server
//! - [`ShutdownHandle`] - graceful shutdown signal

pub mod config;
pub mod server;
pub mod shutdown;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use shutdown::ShutdownHandle;
pub use state::ServerState;
