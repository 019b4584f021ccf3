//! # Pricing Module
//!
//! The price calculators for boarding visits.
//!
//! ## Quote Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Total Is Computed                              │
//! │                                                                         │
//! │  pets ──► per-pet cost rule ──► Σ pets_cost ──┐                         │
//! │           (rarity, infancy)                   │                         │
//! │                                               ▼                         │
//! │  base_charge ───────────────────────► tier discount rule ──► total      │
//! │                                               ▲                         │
//! │  user_type ───────────────────────────────────┘                         │
//! │                                                                         │
//! │  SimplePriceCalculator:            discount covers everything, always   │
//! │  CustomerDependentPriceCalculator: discount depends on tier policy and  │
//! │                                    on reaching the volume threshold     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both calculators are stateless unit structs: every call is an independent
//! pure computation over its arguments.

use chrono::{DateTime, Utc};

use crate::types::{DiscountPolicy, Pet, UserType};
use crate::{BASE_RARE_COEF, COMMON_INFANCY_COEF, DISCOUNT_MIN_SCORE, RARE_INFANCY_COEF};

// =============================================================================
// Calculator Capability
// =============================================================================

/// The single pricing operation every calculator provides.
///
/// ## Calculator Selection
/// The set of calculators is closed and small, so the caller simply picks
/// one; there is no registration mechanism.
///
/// ```rust
/// use petboard_core::pricing::{
///     CustomerDependentPriceCalculator, PriceCalculator, SimplePriceCalculator,
/// };
/// use petboard_core::UserType;
///
/// let tiered_pricing = true;
/// let calculator: &dyn PriceCalculator = if tiered_pricing {
///     &CustomerDependentPriceCalculator
/// } else {
///     &SimplePriceCalculator
/// };
///
/// let total = calculator.calc_price(&[], 1000.0, 25.0, UserType::Gold);
/// assert!((total - 1000.0).abs() < 1e-3);
/// ```
pub trait PriceCalculator {
    /// Computes the total charged for boarding `pets`.
    ///
    /// ## Arguments
    /// * `pets` - the boarding group; may be empty
    /// * `base_charge` - flat charge for the visit itself
    /// * `base_price_per_pet` - undiscounted price of one common adult pet
    /// * `user_type` - the customer's membership tier
    ///
    /// Input validation is the caller's responsibility (see
    /// [`crate::validation`]); the calculation itself is total over finite
    /// inputs and never fails.
    fn calc_price(
        &self,
        pets: &[Pet],
        base_charge: f64,
        base_price_per_pet: f64,
        user_type: UserType,
    ) -> f64;
}

// =============================================================================
// Per-Pet Cost Rules
// =============================================================================

/// Rarity coefficient of one pet: [`BASE_RARE_COEF`] for rare types, `1.0`
/// otherwise.
#[inline]
pub fn rarity_coefficient(pet: &Pet) -> f64 {
    if pet.is_rare() {
        BASE_RARE_COEF
    } else {
        1.0
    }
}

/// Infancy coefficient of one pet at the given instant.
///
/// Adults contribute `1.0`. Infants contribute [`RARE_INFANCY_COEF`] or
/// [`COMMON_INFANCY_COEF`] depending on rarity; the two values are
/// independent policy constants.
#[inline]
pub fn infancy_coefficient(pet: &Pet, as_of: DateTime<Utc>) -> f64 {
    if !pet.is_infant_at(as_of) {
        1.0
    } else if pet.is_rare() {
        RARE_INFANCY_COEF
    } else {
        COMMON_INFANCY_COEF
    }
}

/// Cost contribution of one pet before any tier discount, rarity rule only.
///
/// This is the per-pet rule of [`SimplePriceCalculator`]; age never enters
/// the simple calculation.
#[inline]
pub fn pet_cost(pet: &Pet, base_price_per_pet: f64) -> f64 {
    base_price_per_pet * rarity_coefficient(pet)
}

/// Cost contribution of one pet before any tier discount, rarity and
/// infancy rules combined.
///
/// This is the per-pet rule of [`CustomerDependentPriceCalculator`]. The
/// caller supplies the instant so every pet in one quote is classified
/// against the same clock reading.
#[inline]
pub fn pet_cost_with_infancy(pet: &Pet, base_price_per_pet: f64, as_of: DateTime<Utc>) -> f64 {
    base_price_per_pet * rarity_coefficient(pet) * infancy_coefficient(pet, as_of)
}

// =============================================================================
// Simple Price Calculator
// =============================================================================

/// Uniform discount policy: rarity affects the per-pet cost and the tier
/// discount multiplies the grand total unconditionally.
///
/// `total = (base_charge + Σ pet_cost) × discount_rate`
///
/// An empty boarding group yields `base_charge × discount_rate`; tiers whose
/// rate is `1.0` are no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePriceCalculator;

impl PriceCalculator for SimplePriceCalculator {
    fn calc_price(
        &self,
        pets: &[Pet],
        base_charge: f64,
        base_price_per_pet: f64,
        user_type: UserType,
    ) -> f64 {
        let pets_cost: f64 = pets.iter().map(|pet| pet_cost(pet, base_price_per_pet)).sum();

        (base_charge + pets_cost) * user_type.discount_rate()
    }
}

// =============================================================================
// Customer Dependent Price Calculator
// =============================================================================

/// Tier- and volume-sensitive discount policy.
///
/// Rarity and infancy both affect the per-pet cost; whether and how the tier
/// discount applies depends on the tier's [`DiscountPolicy`] and on whether
/// the group reaches [`DISCOUNT_MIN_SCORE`] pets:
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  policy          │ below threshold           │ at/above threshold       │
/// │  ────────────────┼───────────────────────────┼────────────────────────  │
/// │  AlwaysOnPets    │ base + pets_cost × rate   │ (base + pets_cost) × rate│
/// │  ThresholdGated  │ base + pets_cost          │ base + pets_cost × rate  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Invariants
/// - The base charge is never discounted for `ThresholdGated` tiers.
/// - An empty boarding group yields `base_charge` unmodified for every tier.
/// - Crossing the threshold changes only how the discount applies, never
///   the undiscounted `pets_cost` sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerDependentPriceCalculator;

impl PriceCalculator for CustomerDependentPriceCalculator {
    fn calc_price(
        &self,
        pets: &[Pet],
        base_charge: f64,
        base_price_per_pet: f64,
        user_type: UserType,
    ) -> f64 {
        // One clock reading per quote: every pet is classified against the
        // same instant.
        let as_of = Utc::now();

        let pets_cost: f64 = pets
            .iter()
            .map(|pet| pet_cost_with_infancy(pet, base_price_per_pet, as_of))
            .sum();

        let reached_threshold = pets.len() >= DISCOUNT_MIN_SCORE;
        let rate = user_type.discount_rate();

        match user_type.discount_policy() {
            DiscountPolicy::AlwaysOnPets => {
                if reached_threshold {
                    (base_charge + pets_cost) * rate
                } else {
                    base_charge + pets_cost * rate
                }
            }
            DiscountPolicy::ThresholdGated => {
                if reached_threshold {
                    base_charge + pets_cost * rate
                } else {
                    base_charge + pets_cost
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
