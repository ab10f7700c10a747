//! Networking for the sign-up endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines the JSON schema shared
//! with the endpoint.

pub mod api;
pub mod types;
