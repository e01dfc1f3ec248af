//! Unified error types for the pricing bot.
//!
//! Pricing errors (`InvalidSelection`, `OutOfRange`) are raised by the core when a
//! request slips past the command-input constraints. They are never replaced with
//! defaults. The remaining variants cover startup and framework failures.

use thiserror::Error;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// An identifier was not found in one of the price tables
    #[error("Invalid selection: '{identifier}' is not in the {table} table")]
    InvalidSelection {
        /// Name of the table that was searched
        table: &'static str,
        /// The identifier that was requested
        identifier: String,
    },

    /// A numeric request parameter fell outside its declared bounds
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        /// Name of the offending parameter
        field: &'static str,
        /// The rejected value
        value: u32,
        /// Inclusive lower bound
        min: u32,
        /// Inclusive upper bound
        max: u32,
    },

    /// Configuration file or environment values could not be used
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// A required environment variable is missing or not unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Error raised by serenity or poise
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_message_names_table_and_identifier() {
        let err = Error::InvalidSelection {
            table: "necklace",
            identifier: "four-name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid selection: 'four-name' is not in the necklace table"
        );
    }

    #[test]
    fn test_out_of_range_message_includes_bounds() {
        let err = Error::OutOfRange {
            field: "quantity",
            value: 11,
            min: 1,
            max: 10,
        };
        assert_eq!(err.to_string(), "quantity out of range: 11 (expected 1..=10)");
    }
}
