//! # petboard-core: Pure Business Logic for PetBoard
//!
//! This crate is the **heart** of PetBoard. It contains the pricing rules for
//! boarding visits as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PetBoard Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend / Request Handlers                  │   │
//! │  │    Visit intake ──► Quote screen ──► Checkout ──► Receipt       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ already-validated records              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ petboard-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  pricing  │  │   error   │  │ validation│   │   │
//! │  │   │  Pet      │  │ calc_price│  │  CoreError│  │   rules   │   │   │
//! │  │   │  UserType │  │  policies │  │           │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ one f64 total                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Record storage / rendering (external)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Pet, PetType, UserType, DiscountPolicy)
//! - [`pricing`] - The price calculators and per-pet cost rules
//! - [`error`] - Domain error types
//! - [`validation`] - Record validation for the surrounding layers
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is a function of its arguments
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Plain Floats**: Totals are `f64`; formatting and rounding belong to
//!    the layers that display or persist them
//! 4. **Explicit Errors**: Validation failures are typed, never strings or
//!    panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use petboard_core::pricing::{CustomerDependentPriceCalculator, PriceCalculator};
//! use petboard_core::{Pet, PetType, UserType};
//!
//! let iguana = PetType {
//!     id: "3f0c8f5e-6f5a-4f0e-9c41-89a1d3f6b2aa".to_string(),
//!     name: "iguana".to_string(),
//!     rare: true,
//! };
//! let pet = Pet {
//!     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
//!     name: "Ziggy".to_string(),
//!     pet_type: iguana,
//!     birth_date: Utc.with_ymd_and_hms(1997, 3, 1, 0, 0, 0).unwrap(),
//! };
//!
//! // One rare adult pet for a new customer: 1000 + 25 × 1.2
//! let total = CustomerDependentPriceCalculator.calc_price(&[pet], 1000.0, 25.0, UserType::New);
//! assert!((total - 1030.0).abs() < 1e-3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use petboard_core::Pet` instead of
// `use petboard_core::types::Pet`

pub use error::{CoreError, ValidationError};
pub use pricing::{CustomerDependentPriceCalculator, PriceCalculator, SimplePriceCalculator};
pub use types::*;

// =============================================================================
// Crate-Level Pricing Constants
// =============================================================================
// The numeric policy of the engine lives here as named constants so each one
// is independently tunable and independently testable. Nothing below is read
// from configuration at runtime; these are fixed business policy.

/// Price coefficient applied to every pet whose type is flagged rare.
///
/// ## Business Reason
/// Rare species need specialised housing and handling, so each rare pet
/// contributes `base_price_per_pet × BASE_RARE_COEF` instead of the plain
/// per-pet price.
pub const BASE_RARE_COEF: f64 = 1.2;

/// Infancy coefficient for rare pets (tier-dependent calculator only).
///
/// Applied on top of [`BASE_RARE_COEF`] when a rare pet is below the
/// infancy age cutoff. Independent from [`COMMON_INFANCY_COEF`]; the two
/// values are separate policy knobs even when they happen to coincide.
pub const RARE_INFANCY_COEF: f64 = 1.4;

/// Infancy coefficient for common pets (tier-dependent calculator only).
pub const COMMON_INFANCY_COEF: f64 = 1.2;

/// Minimum number of pets in one visit for the volume discount rules of the
/// tier-dependent calculator to switch over.
///
/// ## Business Reason
/// Below this count a new customer pays full price and a gold customer's
/// discount covers only the pets; from this count on the discount reaches
/// further (see [`pricing::CustomerDependentPriceCalculator`]).
pub const DISCOUNT_MIN_SCORE: usize = 2;

/// Age cutoff, in years, below which a pet is classified as an infant.
///
/// Infants incur the infancy coefficients under the tier-dependent
/// calculator. See [`types::Pet::is_infant_at`].
pub const INFANCY_AGE_YEARS: i64 = 2;

/// Maximum pets allowed in a single boarding visit.
///
/// ## Business Reason
/// Prevents runaway quote requests and keeps one visit a reasonable size.
/// Enforced by [`validation::validate_pets`], never by the pure
/// calculation itself.
pub const MAX_PETS_PER_VISIT: usize = 100;
