//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, navigation,
//! redirects) from session logic to improve reuse and testability.

pub mod auth;
pub mod navigate;
pub mod storage;
