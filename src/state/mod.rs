//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components can depend on small focused models.
//! Only authentication state lives here today.

pub mod auth;
