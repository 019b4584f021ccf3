//! # Error Types
//!
//! Domain-specific error types for petboard-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  petboard-core errors (this file)                                       │
//! │  ├── CoreError        - Domain rule violations                          │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller-facing error (external)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculators themselves never return errors: pricing is total over its
//! documented input domain. These types exist for the layers that hand
//! records to the engine and choose to fail fast on malformed data (see
//! [`crate::validation`]).
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (pet name, field, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule violations around one quote request.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Boarding group exceeds the per-visit cap.
    ///
    /// ## When This Occurs
    /// - A caller assembles more pets into one visit than
    ///   [`crate::MAX_PETS_PER_VISIT`] allows
    #[error("Boarding group cannot have more than {max} pets")]
    TooManyPets { max: usize },

    /// A pet record handed over by the record layer breaks its contract.
    ///
    /// ## When This Occurs
    /// - Birth date in the future
    /// - Missing or malformed identity fields
    ///
    /// The supplying layer owns the contract; this variant is how a caller
    /// that re-checks the records reports the breach.
    #[error("Invalid pet record {name}: {reason}")]
    InvalidPetRecord { name: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a field of a quote request doesn't meet requirements.
/// Used for early validation before the pricing rules run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Monetary amount is NaN or infinite.
    #[error("{field} must be a finite amount")]
    MustBeFinite { field: String },

    /// Monetary amount is below zero.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// A date lies in the future where only the past is allowed.
    #[error("{field} must not be in the future")]
    FutureDate { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
