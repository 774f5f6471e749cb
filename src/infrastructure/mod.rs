//! Infrastructure layer implementing domain repository traits.
//!
//! # Modules
//!
//! - [`memory`] - Fixed in-process credential store
//!
//! # Design
//!
//! Infrastructure components implement traits defined in [`crate::domain`],
//! so the credential store can be replaced without touching the services or
//! handlers that use it.

pub mod memory;
