#![allow(dead_code)]

use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use login_demo::domain::entities::Credential;
use login_demo::infrastructure::memory::InMemoryCredentialRepository;
use login_demo::routes::{app_router, router};
use login_demo::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryCredentialRepository::with_defaults()))
}

pub fn create_state_with(credentials: Vec<Credential>) -> AppState {
    AppState::new(Arc::new(InMemoryCredentialRepository::new(credentials)))
}

pub fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

/// Serves the full application on an ephemeral local port.
pub async fn spawn_app() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app_router(create_test_state());

    tokio::spawn(async move {
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .await
            .unwrap();
    });

    addr
}

/// Serves an arbitrary router on an ephemeral local port.
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Returns a local address with nothing listening on it.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
