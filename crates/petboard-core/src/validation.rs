//! # Validation Module
//!
//! Record validation utilities for PetBoard.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Record storage (external)                                     │
//! │  ├── Owns the data contract: valid ids, past birth dates               │
//! │  └── Hands already-validated snapshots to the engine                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (optional re-check)                               │
//! │  ├── Callers that fail fast on malformed records run these             │
//! │  └── The pricing rules themselves never call them                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: calc_price (pure, total, unvalidated)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use petboard_core::validation::{validate_base_charge, validate_pets};
//!
//! # let pets = Vec::new();
//! // Re-check the quote request before pricing it
//! validate_base_charge(1000.0).unwrap();
//! validate_pets(&pets).unwrap();
//! ```

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Pet;
use crate::MAX_PETS_PER_VISIT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a pet's display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
///
/// ## Example
/// ```rust
/// use petboard_core::validation::validate_pet_name;
///
/// assert!(validate_pet_name("Ziggy").is_ok());
/// assert!(validate_pet_name("").is_err());
/// ```
pub fn validate_pet_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a record identifier.
///
/// ## Rules
/// - Must be a valid UUID format
/// - 36 characters with hyphens: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
///
/// ## Example
/// ```rust
/// use petboard_core::validation::validate_record_id;
///
/// assert!(validate_record_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_record_id("not-a-uuid").is_err());
/// ```
pub fn validate_record_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the flat visit charge.
///
/// ## Rules
/// - Must be finite (not NaN, not infinite)
/// - Must be non-negative; zero is allowed (promotional visits)
pub fn validate_base_charge(charge: f64) -> ValidationResult<()> {
    validate_amount("base_charge", charge)
}

/// Validates the undiscounted price of one common adult pet.
///
/// Same rules as [`validate_base_charge`].
pub fn validate_price_per_pet(price: f64) -> ValidationResult<()> {
    validate_amount("base_price_per_pet", price)
}

fn validate_amount(field: &str, amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::MustBeFinite {
            field: field.to_string(),
        });
    }

    if amount < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a birth date against an explicit instant.
///
/// ## Rules
/// - Must not lie after `at` (a pet's age is always non-negative)
pub fn validate_birth_date_at(birth_date: DateTime<Utc>, at: DateTime<Utc>) -> ValidationResult<()> {
    if birth_date > at {
        return Err(ValidationError::FutureDate {
            field: "birth_date".to_string(),
        });
    }

    Ok(())
}

/// Validates a birth date against the current instant.
pub fn validate_birth_date(birth_date: DateTime<Utc>) -> ValidationResult<()> {
    validate_birth_date_at(birth_date, Utc::now())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Re-checks one pet record snapshot.
///
/// ## Rules
/// - `id` is a valid UUID
/// - `name` passes [`validate_pet_name`]
/// - `pet_type.id` is a valid UUID, `pet_type.name` is present
/// - `birth_date` is not in the future
///
/// Failures are reported as [`CoreError::InvalidPetRecord`] carrying the
/// pet's name, since the record layer broke its contract rather than the
/// caller mistyping a field.
pub fn validate_pet(pet: &Pet) -> CoreResult<()> {
    let breach = |err: ValidationError| CoreError::InvalidPetRecord {
        name: pet.name.clone(),
        reason: err.to_string(),
    };

    validate_record_id(&pet.id).map_err(breach)?;
    validate_pet_name(&pet.name).map_err(breach)?;
    validate_record_id(&pet.pet_type.id).map_err(breach)?;
    if pet.pet_type.name.trim().is_empty() {
        return Err(breach(ValidationError::Required {
            field: "pet_type.name".to_string(),
        }));
    }
    validate_birth_date(pet.birth_date).map_err(breach)?;

    Ok(())
}

/// Re-checks a whole boarding group before it is priced.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Quote request arrives with N pet records                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_pets(&pets) ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── N > 100?        → Error: TooManyPets                          │
/// │       │                                                                 │
/// │       ├── bad record?     → Error: InvalidPetRecord (first offender)    │
/// │       │                                                                 │
/// │       └── OK → calc_price(...)                                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// An empty group is valid; it prices to the base charge rules.
pub fn validate_pets(pets: &[Pet]) -> CoreResult<()> {
    if pets.len() > MAX_PETS_PER_VISIT {
        return Err(CoreError::TooManyPets {
            max: MAX_PETS_PER_VISIT,
        });
    }

    for pet in pets {
        validate_pet(pet)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
