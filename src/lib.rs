//! # Login Demo
//!
//! A minimal login service: `POST /login` checks a username/password pair
//! against a fixed, read-only credential list and answers with a
//! `{ success, message }` body. A terminal login form (`login` binary) posts
//! to it and shows the returned message.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Credential record and store trait
//! - **Application Layer** ([`application`]) - Credential check service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory credential store
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//! - **Client** ([`client`]) - HTTP client and login form state
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the backend (port 5000 by default)
//! cargo run
//!
//! curl -X POST localhost:5000/login \
//!   -H 'Content-Type: application/json' \
//!   -d '{"username":"admin","password":"1234"}'
//!
//! # Or use the terminal form
//! cargo run --bin login
//! ```
//!
//! ## Configuration
//!
//! Server configuration is loaded from environment variables via
//! [`config::Config`]. The client's API base URL is fixed at build time, see
//! [`client::DEFAULT_API_URL`].

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::login::{LoginRequest, LoginResult};
    pub use crate::application::services::AuthService;
    pub use crate::client::{LoginClient, LoginForm};
    pub use crate::domain::entities::Credential;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryCredentialRepository;
    pub use crate::state::AppState;
}
