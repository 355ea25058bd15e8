//! Networking modules for the auth HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines their JSON shapes.

pub mod api;
pub mod types;
