//! Shared helpers for integration tests

use std::net::SocketAddr;

use roster_server::api;
use roster_server::{Config, ServerState};
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// Provisioned admin credentials (template defaults)
pub const ADMIN_USER: &str = "actuator";
pub const ADMIN_PASS: &str = "actuator";

pub struct TestServer {
    pub addr: SocketAddr,
    pub handle: JoinHandle<()>,
    _work_dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// Spin up a full server on an ephemeral port with a throwaway work dir
pub async fn spawn_server() -> TestServer {
    let work_dir = tempfile::tempdir().expect("temp work dir");
    let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("server state");

    let app = api::build_app(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let shutdown = state.shutdown.clone();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await
            .expect("server run");
    });

    TestServer {
        addr,
        handle,
        _work_dir: work_dir,
    }
}
