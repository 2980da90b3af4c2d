//! Tunable tariff parameters.
//!
//! Every rate has a documented default; callers override the lot through
//! [`PricingEngine::with_config`](crate::PricingEngine::with_config). Prices
//! are in the platform's smallest currency unit.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A marginal per-kilometre rate applied within one distance band.
///
/// Bands are consumed in order: each band charges its rate for the portion
/// of the trip distance falling between the previous band's upper bound and
/// its own. The final band should leave `upper_km` unset so the tariff
/// covers arbitrary distances.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceBand {
    /// Inclusive upper bound of the band in kilometres; `None` means
    /// open-ended.
    pub upper_km: Option<f64>,
    /// Marginal rate charged per kilometre inside the band.
    pub rate_per_km: f64,
}

/// Multipliers for fragile and perishable handling.
///
/// Applied multiplicatively to the cost subtotal. The combined rate is
/// configured separately rather than derived, and is typically larger than
/// either single rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecialHandlingRates {
    /// Multiplier when the package is fragile only.
    pub fragile: f64,
    /// Multiplier when the package is perishable only.
    pub perishable: f64,
    /// Multiplier when the package is both fragile and perishable.
    pub both: f64,
}

impl SpecialHandlingRates {
    /// The multiplier for a given flag combination; `1.0` when neither flag
    /// is set.
    #[must_use]
    pub const fn multiplier(&self, fragile: bool, perishable: bool) -> f64 {
        match (fragile, perishable) {
            (true, true) => self.both,
            (true, false) => self.fragile,
            (false, true) => self.perishable,
            (false, false) => 1.0,
        }
    }
}

impl Default for SpecialHandlingRates {
    fn default() -> Self {
        Self {
            fragile: 1.2,
            perishable: 1.3,
            both: 1.4,
        }
    }
}

/// Premium factors for the four major/minor city combinations.
///
/// Applied multiplicatively to the cost subtotal. By default the
/// minor-to-minor factor is the largest: deliveries between unlisted towns
/// carry the thinnest transporter supply.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CityPremiums {
    /// Factor when both cities are major.
    pub major_major: f64,
    /// Factor for a major origin and minor destination.
    pub major_minor: f64,
    /// Factor for a minor origin and major destination.
    pub minor_major: f64,
    /// Factor when both cities are minor.
    pub minor_minor: f64,
}

impl Default for CityPremiums {
    fn default() -> Self {
        Self {
            major_major: 1.0,
            major_minor: 1.1,
            minor_major: 1.1,
            minor_minor: 1.2,
        }
    }
}

/// Full tariff configuration, captured once at engine construction.
///
/// # Examples
///
/// ```
/// use parcelway_pricing::PricingConfig;
///
/// let config = PricingConfig::default();
/// assert_eq!(config.fuel_rate_per_km, 200.0);
/// assert!(config.is_major_city("TEHRAN"));
/// assert!(!config.is_major_city("Qeshm"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingConfig {
    /// Fixed component of every quote.
    pub base_price: f64,
    /// Flat fuel rate charged per kilometre over the whole distance.
    pub fuel_rate_per_km: f64,
    /// Marginal per-kilometre rates by distance band, in band order.
    pub distance_bands: Vec<DistanceBand>,
    /// Weights below this many grams cost nothing.
    pub weight_threshold_g: u32,
    /// Rate charged per 100 g once the threshold is reached.
    pub weight_base_rate: f64,
    /// Fragile/perishable multipliers.
    pub special_handling: SpecialHandlingRates,
    /// Major/minor city premium factors.
    pub city_premiums: CityPremiums,
    /// Cities considered major, matched case-insensitively.
    pub major_cities: Vec<String>,
    /// Fraction of the final price paid to the transporter.
    pub driver_share: f64,
    /// Deviation surcharge per additional kilometre.
    pub deviation_rate_per_km: f64,
    /// Deviation surcharge per additional minute.
    pub deviation_rate_per_minute: f64,
}

impl PricingConfig {
    /// Whether `city` is on the configured major-city list
    /// (case-insensitive exact match).
    #[must_use]
    pub fn is_major_city(&self, city: &str) -> bool {
        self.major_cities
            .iter()
            .any(|major| major.eq_ignore_ascii_case(city))
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: 50_000.0,
            fuel_rate_per_km: 200.0,
            distance_bands: vec![
                DistanceBand {
                    upper_km: Some(100.0),
                    rate_per_km: 1_000.0,
                },
                DistanceBand {
                    upper_km: Some(300.0),
                    rate_per_km: 950.0,
                },
                DistanceBand {
                    upper_km: Some(600.0),
                    rate_per_km: 850.0,
                },
                DistanceBand {
                    upper_km: Some(1_000.0),
                    rate_per_km: 750.0,
                },
                DistanceBand {
                    upper_km: None,
                    rate_per_km: 600.0,
                },
            ],
            weight_threshold_g: 500,
            weight_base_rate: 500.0,
            special_handling: SpecialHandlingRates::default(),
            city_premiums: CityPremiums::default(),
            major_cities: vec![
                "Tehran".to_owned(),
                "Mashhad".to_owned(),
                "Isfahan".to_owned(),
                "Karaj".to_owned(),
                "Shiraz".to_owned(),
                "Tabriz".to_owned(),
            ],
            driver_share: 0.7,
            deviation_rate_per_km: 15_000.0,
            deviation_rate_per_minute: 5_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, true, 1.4)]
    #[case(true, false, 1.2)]
    #[case(false, true, 1.3)]
    #[case(false, false, 1.0)]
    fn handling_multiplier_by_flags(
        #[case] fragile: bool,
        #[case] perishable: bool,
        #[case] expected: f64,
    ) {
        let rates = SpecialHandlingRates::default();
        assert_eq!(rates.multiplier(fragile, perishable), expected);
    }

    #[rstest]
    #[case("tehran", true)]
    #[case("TABRIZ", true)]
    #[case("Qeshm", false)]
    fn major_city_match_ignores_case(#[case] city: &str, #[case] expected: bool) {
        assert_eq!(PricingConfig::default().is_major_city(city), expected);
    }

    #[rstest]
    fn default_bands_end_open() {
        let config = PricingConfig::default();
        assert_eq!(config.distance_bands.last().and_then(|b| b.upper_km), None);
    }
}
