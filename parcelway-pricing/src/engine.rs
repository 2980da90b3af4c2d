//! The tariff engine.

use crate::config::PricingConfig;
use crate::quote::{Breakdown, Quote, QuoteRequest};

/// Computes suggested prices, deviation surcharges, and the revenue split.
///
/// Configuration is captured at construction; every quote from one engine
/// uses the same tariff.
///
/// # Examples
///
/// ```
/// use parcelway_pricing::{PricingEngine, QuoteRequest};
///
/// let engine = PricingEngine::new();
/// let quote = engine.suggested_price(&QuoteRequest {
///     distance_km: 50.0,
///     weight_g: 0,
///     fragile: false,
///     perishable: false,
///     origin_city: "Tehran".to_owned(),
///     destination_city: "Mashhad".to_owned(),
/// });
/// // base 50 000 + fuel 10 000 + first-band 50 000, rounded to thousands.
/// assert_eq!(quote.suggested_price, 110_000);
/// assert_eq!(quote.suggested_price % 1_000, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Construct an engine with the default tariff.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an engine with an explicit tariff.
    #[must_use]
    pub const fn with_config(config: PricingConfig) -> Self {
        Self { config }
    }

    /// The tariff this engine quotes with.
    #[must_use]
    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Compute the suggested price, revenue split, and breakdown for a
    /// delivery.
    #[must_use]
    pub fn suggested_price(&self, request: &QuoteRequest) -> Quote {
        let base_price = self.config.base_price;
        let distance_cost = self.distance_cost(request.distance_km);
        let weight_cost = self.weight_cost(request.weight_g);
        let special_handling_multiplier = self
            .config
            .special_handling
            .multiplier(request.fragile, request.perishable);
        let city_premium = self.city_premium(&request.origin_city, &request.destination_city);

        let subtotal =
            (base_price + distance_cost + weight_cost) * special_handling_multiplier * city_premium;
        let suggested_price = round_to_thousand(subtotal);

        Quote {
            suggested_price,
            transporter_earnings: floor_share(suggested_price, self.config.driver_share),
            platform_commission: floor_share(suggested_price, 1.0 - self.config.driver_share),
            breakdown: Breakdown {
                base_price,
                distance_cost,
                weight_cost,
                special_handling_multiplier,
                city_premium,
            },
        }
    }

    /// Surcharge for a detour of `additional_km` and `additional_minutes`
    /// beyond the transporter's original route.
    #[must_use]
    pub fn deviation_cost(&self, additional_km: f64, additional_minutes: f64) -> i64 {
        let cost = additional_km.max(0.0) * self.config.deviation_rate_per_km
            + additional_minutes.max(0.0) * self.config.deviation_rate_per_minute;
        cost.round() as i64
    }

    /// The transporter's take for an accepted price plus any deviation
    /// surcharge. The surcharge is passed through whole; only the price is
    /// split.
    #[must_use]
    pub fn transporter_earnings(&self, final_price: i64, deviation_price: i64) -> i64 {
        floor_share(final_price, self.config.driver_share) + deviation_price
    }

    /// Flat fuel rate over the whole distance plus banded marginal rates,
    /// each band's capacity consumed before the next band's rate applies.
    fn distance_cost(&self, distance_km: f64) -> f64 {
        let distance = distance_km.max(0.0);
        let mut marginal = 0.0;
        let mut band_floor = 0.0;
        for band in &self.config.distance_bands {
            if distance <= band_floor {
                break;
            }
            let band_ceiling = band.upper_km.unwrap_or(f64::INFINITY);
            let taken = (distance - band_floor).min(band_ceiling - band_floor);
            marginal += taken * band.rate_per_km;
            band_floor = band_ceiling;
        }
        distance * self.config.fuel_rate_per_km + marginal
    }

    /// Zero below the threshold, otherwise the rate per 100 g applied to
    /// the full weight.
    fn weight_cost(&self, weight_g: u32) -> f64 {
        if weight_g < self.config.weight_threshold_g {
            return 0.0;
        }
        f64::from(weight_g) / 100.0 * self.config.weight_base_rate
    }

    fn city_premium(&self, origin_city: &str, destination_city: &str) -> f64 {
        let premiums = self.config.city_premiums;
        match (
            self.config.is_major_city(origin_city),
            self.config.is_major_city(destination_city),
        ) {
            (true, true) => premiums.major_major,
            (true, false) => premiums.major_minor,
            (false, true) => premiums.minor_major,
            (false, false) => premiums.minor_minor,
        }
    }
}

/// Round to the nearest multiple of 1000, then floor to an integer.
fn round_to_thousand(amount: f64) -> i64 {
    ((amount / 1_000.0).round() * 1_000.0).floor() as i64
}

/// Floored share of an integer price.
fn floor_share(price: i64, share: f64) -> i64 {
    (price as f64 * share).floor() as i64
}
