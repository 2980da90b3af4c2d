//! Request and response types for price quotes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inputs to a suggested-price computation.
///
/// # Examples
///
/// ```
/// use parcelway_pricing::QuoteRequest;
///
/// let request = QuoteRequest {
///     distance_km: 450.0,
///     weight_g: 2_300,
///     fragile: true,
///     perishable: false,
///     origin_city: "Tehran".to_owned(),
///     destination_city: "Yazd".to_owned(),
/// };
/// assert!(request.fragile);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuoteRequest {
    /// Trip distance in kilometres.
    pub distance_km: f64,
    /// Package weight in grams.
    pub weight_g: u32,
    /// Whether the package needs fragile handling.
    pub fragile: bool,
    /// Whether the package is perishable.
    pub perishable: bool,
    /// City of the pickup point.
    pub origin_city: String,
    /// City of the drop-off point.
    pub destination_city: String,
}

/// Cost components behind a suggested price.
///
/// Costs are the pre-multiplier amounts; the two multipliers are reported as
/// factors. Deviation surcharges are computed and reported separately, never
/// as part of the suggested-price breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Breakdown {
    /// Fixed component.
    pub base_price: f64,
    /// Fuel plus banded marginal distance cost.
    pub distance_cost: f64,
    /// Weight cost; zero below the configured threshold.
    pub weight_cost: f64,
    /// Fragile/perishable factor applied to the subtotal.
    pub special_handling_multiplier: f64,
    /// Major/minor city factor applied to the subtotal.
    pub city_premium: f64,
}

/// A complete price quote with revenue split and breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quote {
    /// Suggested delivery price, rounded to the nearest thousand.
    pub suggested_price: i64,
    /// The transporter's share of the suggested price, floored.
    pub transporter_earnings: i64,
    /// The platform's share of the suggested price, floored.
    pub platform_commission: i64,
    /// Component costs and factors behind the price.
    pub breakdown: Breakdown,
}
