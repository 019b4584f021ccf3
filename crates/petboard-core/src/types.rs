//! # Domain Types
//!
//! Core domain types used throughout PetBoard.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │     PetType     │   │      Pet        │   │    UserType     │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  New            │        │
//! │  │  name           │   │  name           │   │  Silver         │        │
//! │  │  rare           │   │  pet_type       │   │  Gold           │        │
//! │  └─────────────────┘   │  birth_date     │   └─────────────────┘        │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │ DiscountPolicy  │   behavior class a tier carries for the            │
//! │  │  ─────────────  │   tier-dependent calculator                        │
//! │  │  AlwaysOnPets   │                                                    │
//! │  │  ThresholdGated │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `Pet` and `PetType` are frozen copies of record data handed over by the
//! storage layer for the duration of one quote. The engine never mutates
//! them and never looks the records up itself.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::INFANCY_AGE_YEARS;

// =============================================================================
// Pet Type
// =============================================================================

/// A catalog classification of a pet species/breed.
///
/// ## Invariant
/// Immutable once constructed; a pet's rarity is entirely determined by its
/// type, never by the individual animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PetType {
    /// Unique identifier (UUID v4), assigned by the catalog.
    pub id: String,

    /// Display name shown on the quote (e.g. "hamster", "iguana").
    pub name: String,

    /// Whether this species/breed is rare.
    ///
    /// Rare types incur the rarity price coefficient on every visit.
    pub rare: bool,
}

// =============================================================================
// Pet
// =============================================================================

/// A pet record snapshot supplied by the record-management layer.
///
/// ## Design Notes
/// - `pet_type` is a frozen copy of the catalog entry at quote time, so a
///   quote stays consistent even if the catalog is edited mid-request.
/// - `birth_date` must not be in the future; the record layer owns that
///   contract and [`crate::validation::validate_pet`] can re-check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pet {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown to the owner and on the receipt.
    pub name: String,

    /// Catalog classification (frozen).
    pub pet_type: PetType,

    /// Date of birth.
    #[ts(as = "String")]
    pub birth_date: DateTime<Utc>,
}

impl Pet {
    /// Whether this pet's type is flagged rare.
    #[inline]
    pub fn is_rare(&self) -> bool {
        self.pet_type.rare
    }

    /// The pet's age at the given instant.
    #[inline]
    pub fn age_at(&self, at: DateTime<Utc>) -> Duration {
        at.signed_duration_since(self.birth_date)
    }

    /// Classifies the pet as an infant at the given instant.
    ///
    /// A pet is an infant while its age is below the
    /// [`INFANCY_AGE_YEARS`] cutoff. Infants incur the infancy price
    /// coefficients under the tier-dependent calculator.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{Duration, Utc};
    /// use petboard_core::{Pet, PetType};
    ///
    /// let now = Utc::now();
    /// let pup = Pet {
    ///     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
    ///     name: "Pup".to_string(),
    ///     pet_type: PetType {
    ///         id: "3f0c8f5e-6f5a-4f0e-9c41-89a1d3f6b2aa".to_string(),
    ///         name: "dog".to_string(),
    ///         rare: false,
    ///     },
    ///     birth_date: now - Duration::days(30),
    /// };
    /// assert!(pup.is_infant_at(now));
    /// ```
    pub fn is_infant_at(&self, at: DateTime<Utc>) -> bool {
        self.age_at(at) < Duration::days(INFANCY_AGE_YEARS * 365)
    }

    /// Classifies the pet as an infant right now.
    ///
    /// Convenience wrapper over [`Pet::is_infant_at`] with the current
    /// instant; callers that need a reproducible classification should pass
    /// their own clock to `is_infant_at`.
    #[inline]
    pub fn is_infant(&self) -> bool {
        self.is_infant_at(Utc::now())
    }
}

// =============================================================================
// User Type
// =============================================================================

/// Membership tier of the customer booking the visit.
///
/// ## Closed Enumeration
/// Tiers are compile-time constants, never constructed dynamically. Each
/// tier carries exactly one discount rate and one [`DiscountPolicy`]
/// behavior class; adding a tier means classifying it here, not duplicating
/// branch logic in the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// First-time customer.
    New,
    /// Returning customer.
    Silver,
    /// Long-standing customer with the always-on discount.
    Gold,
}

impl UserType {
    /// Every tier, in catalog order.
    pub const ALL: [UserType; 3] = [UserType::New, UserType::Silver, UserType::Gold];

    /// The discount-rate multiplier for this tier.
    ///
    /// A rate of `1.0` is a no-op; the engine does not otherwise constrain
    /// the range.
    #[inline]
    pub const fn discount_rate(&self) -> f64 {
        match self {
            UserType::New => 0.95,
            UserType::Silver => 1.0,
            UserType::Gold => 0.8,
        }
    }

    /// The behavior class this tier follows under the tier-dependent
    /// calculator.
    ///
    /// See [`DiscountPolicy`] for what each class means.
    #[inline]
    pub const fn discount_policy(&self) -> DiscountPolicy {
        match self {
            UserType::Gold => DiscountPolicy::AlwaysOnPets,
            UserType::New | UserType::Silver => DiscountPolicy::ThresholdGated,
        }
    }
}

impl Default for UserType {
    fn default() -> Self {
        UserType::New
    }
}

// =============================================================================
// Discount Policy
// =============================================================================

/// How a tier's discount applies under the tier-dependent calculator.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  policy          │ below volume threshold   │ at/above threshold        │
/// │  ────────────────┼──────────────────────────┼─────────────────────────  │
/// │  AlwaysOnPets    │ discount on pets only    │ discount on everything    │
/// │  ThresholdGated  │ no discount              │ discount on pets only     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// The base charge is never discounted for `ThresholdGated` tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// The discount always covers the pet costs; once the visit reaches the
    /// volume threshold it covers the base charge too.
    AlwaysOnPets,
    /// No discount until the visit reaches the volume threshold; from there
    /// the discount covers the pet costs only.
    ThresholdGated,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pet_type(rare: bool) -> PetType {
        PetType {
            id: "3f0c8f5e-6f5a-4f0e-9c41-89a1d3f6b2aa".to_string(),
            name: if rare { "iguana" } else { "hamster" }.to_string(),
            rare,
        }
    }

    fn pet_born(birth_date: DateTime<Utc>) -> Pet {
        Pet {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Ziggy".to_string(),
            pet_type: pet_type(false),
            birth_date,
        }
    }

    #[test]
    fn test_newborn_is_infant() {
        let now = Utc::now();
        let pet = pet_born(now);
        assert!(pet.is_infant_at(now));
    }

    #[test]
    fn test_old_pet_is_adult() {
        let now = Utc::now();
        let pet = pet_born(Utc.with_ymd_and_hms(1997, 3, 1, 0, 0, 0).unwrap());
        assert!(!pet.is_infant_at(now));
    }

    #[test]
    fn test_infancy_cutoff_boundary() {
        let now = Utc::now();
        let cutoff = Duration::days(INFANCY_AGE_YEARS * 365);

        let just_under = pet_born(now - cutoff + Duration::days(1));
        assert!(just_under.is_infant_at(now));

        let exactly_at = pet_born(now - cutoff);
        assert!(!exactly_at.is_infant_at(now));
    }

    #[test]
    fn test_rarity_comes_from_type() {
        let mut pet = pet_born(Utc::now());
        assert!(!pet.is_rare());

        pet.pet_type = pet_type(true);
        assert!(pet.is_rare());
    }

    #[test]
    fn test_discount_rates() {
        assert!((UserType::New.discount_rate() - 0.95).abs() < 1e-9);
        assert!((UserType::Silver.discount_rate() - 1.0).abs() < 1e-9);
        assert!((UserType::Gold.discount_rate() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_discount_policy_mapping() {
        assert_eq!(UserType::Gold.discount_policy(), DiscountPolicy::AlwaysOnPets);
        assert_eq!(UserType::New.discount_policy(), DiscountPolicy::ThresholdGated);
        assert_eq!(
            UserType::Silver.discount_policy(),
            DiscountPolicy::ThresholdGated
        );
    }

    #[test]
    fn test_every_tier_is_classified() {
        // Exhaustiveness guard: each catalog tier must carry a rate and a
        // policy without panicking.
        for tier in UserType::ALL {
            let _ = tier.discount_rate();
            let _ = tier.discount_policy();
        }
    }

    #[test]
    fn test_user_type_default() {
        assert_eq!(UserType::default(), UserType::New);
    }

    #[test]
    fn test_user_type_serializes_snake_case() {
        // The IPC layer matches on these exact strings.
        assert_eq!(serde_json::to_string(&UserType::New).unwrap(), "\"new\"");
        assert_eq!(serde_json::to_string(&UserType::Gold).unwrap(), "\"gold\"");
    }
}
