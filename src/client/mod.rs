//! Client side of the login flow.
//!
//! - [`LoginClient`] - one `POST /login` per call
//! - [`LoginForm`] - input values and the displayed message

mod form;
mod http;

pub use form::{FALLBACK_MESSAGE, LoginForm};
pub use http::{ClientError, DEFAULT_API_URL, LoginClient};
