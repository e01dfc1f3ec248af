//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Enumerated command options
pub mod choices;

/// General utility commands
pub mod general;

/// Pricing commands
pub mod pricing;

// Export commands
pub use general::*;
pub use pricing::*;
