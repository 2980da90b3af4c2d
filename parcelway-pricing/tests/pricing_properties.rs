//! Property-based tests for tariff invariants.
//!
//! These hold for all valid inputs, complementing the fixed-tariff
//! behaviour tests:
//!
//! - Suggested prices are whole thousands and never negative.
//! - The revenue split never exceeds the price.
//! - Cost components are non-negative.
//! - Deviation surcharges scale monotonically with the detour.

use proptest::prelude::*;

use parcelway_pricing::{PricingEngine, QuoteRequest};

fn request(distance_km: f64, weight_g: u32, fragile: bool, perishable: bool) -> QuoteRequest {
    QuoteRequest {
        distance_km,
        weight_g,
        fragile,
        perishable,
        origin_city: "Tehran".to_owned(),
        destination_city: "Zanjan".to_owned(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn price_is_a_non_negative_whole_thousand(
        distance_km in 0.0_f64..10_000.0,
        weight_g in 0_u32..100_000,
        fragile in any::<bool>(),
        perishable in any::<bool>(),
    ) {
        let quote = PricingEngine::new()
            .suggested_price(&request(distance_km, weight_g, fragile, perishable));
        prop_assert_eq!(quote.suggested_price % 1_000, 0);
        prop_assert!(quote.suggested_price >= 0);
    }

    #[test]
    fn split_never_exceeds_the_price(
        distance_km in 0.0_f64..10_000.0,
        weight_g in 0_u32..100_000,
    ) {
        let quote = PricingEngine::new()
            .suggested_price(&request(distance_km, weight_g, false, false));
        prop_assert!(quote.transporter_earnings >= 0);
        prop_assert!(quote.platform_commission >= 0);
        prop_assert!(
            quote.transporter_earnings + quote.platform_commission <= quote.suggested_price
        );
    }

    #[test]
    fn cost_components_are_non_negative(
        distance_km in 0.0_f64..10_000.0,
        weight_g in 0_u32..100_000,
    ) {
        let quote = PricingEngine::new()
            .suggested_price(&request(distance_km, weight_g, false, false));
        prop_assert!(quote.breakdown.distance_cost >= 0.0);
        prop_assert!(quote.breakdown.weight_cost >= 0.0);
    }

    #[test]
    fn special_handling_never_lowers_the_price(
        distance_km in 0.0_f64..10_000.0,
        weight_g in 0_u32..100_000,
    ) {
        let engine = PricingEngine::new();
        let plain = engine
            .suggested_price(&request(distance_km, weight_g, false, false))
            .suggested_price;
        let flagged = engine
            .suggested_price(&request(distance_km, weight_g, true, true))
            .suggested_price;
        prop_assert!(flagged >= plain);
    }

    #[test]
    fn deviation_cost_grows_with_the_detour(
        km in 0.0_f64..1_000.0,
        extra_km in 1.0_f64..100.0,
        minutes in 0.0_f64..600.0,
    ) {
        let engine = PricingEngine::new();
        prop_assert!(
            engine.deviation_cost(km + extra_km, minutes) > engine.deviation_cost(km, minutes)
        );
    }
}
