//! Error types for the Cost-Plus Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a quote.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Cost-Plus Pricing Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use quote_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Combined income-tax and contribution rates leave no net share of the
    /// gross salary, so the gross-up divisor is non-positive.
    #[error(
        "Invalid contribution rates: income tax {income_tax_rate}% + contributions \
         {contribution_rate}% must stay below 100%"
    )]
    InvalidContributionRates {
        /// The personal income-tax (IRPEF) rate that was supplied.
        income_tax_rate: Decimal,
        /// The social-contribution (INPS) rate that was supplied.
        contribution_rate: Decimal,
    },

    /// The active project id was not found in the project plan.
    #[error("Project not found: {id}")]
    ProjectNotFound {
        /// The project id that was not found.
        id: String,
    },

    /// A project record was invalid or contained inconsistent data.
    #[error("Invalid project '{project_id}': {message}")]
    InvalidProject {
        /// The id of the invalid project.
        project_id: String,
        /// A description of what made the project invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
