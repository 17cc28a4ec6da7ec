//! Core business logic, framework-agnostic.
//!
//! These modules operate on a `DatabaseConnection` and entity models only, so
//! the same operations back both the Discord commands and the HTTP routes.

/// Wallet access contract - lookup and creation operations
pub mod wallet;
