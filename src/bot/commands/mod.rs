//! Discord command implementations organized by category.

/// General utility commands
pub mod general;

/// Wallet commands
pub mod wallet;

// Export commands
pub use general::*;
pub use wallet::*;
