//! Boundary serialization contract: decimal fields travel as exact
//! decimal strings, score fields as plain numbers, enums as snake_case.

use std::str::FromStr;

use triad_core::decimal::Decimal;
use triad_core::models::*;
use triad_core::resources::*;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn bundle_deserializes_from_decimal_strings() {
    let bundle: ResourceBundle = serde_json::from_str(
        r#"{
            "land": [{
                "category": "agricultural",
                "area": "1000",
                "fertility": 0.8,
                "accessibility": 0.9,
                "sovereignty": "sovereign",
                "wisdom_value": 0.5
            }],
            "air": [],
            "water": [],
            "collateral": "160.218",
            "wisdom_coefficient": 0.5
        }"#,
    )
    .unwrap();

    assert_eq!(bundle.land.len(), 1);
    assert_eq!(bundle.land[0].category, LandCategory::Agricultural);
    assert_eq!(bundle.land[0].area, dec("1000"));
    assert_eq!(bundle.land[0].sovereignty, SovereigntyStatus::Sovereign);
    assert_eq!(bundle.collateral, dec("160.218"));
}

#[test]
fn bundle_rejects_binary_float_for_decimal_fields() {
    let result = serde_json::from_str::<ResourceBundle>(
        r#"{
            "land": [],
            "air": [],
            "water": [],
            "collateral": 160.218,
            "wisdom_coefficient": 0.5
        }"#,
    );
    assert!(result.is_err());
}

#[test]
fn components_serialize_decimals_as_strings_and_scores_as_numbers() {
    let components = LiquidityComponents {
        land: LandLiquidity {
            base_value: dec("864"),
            productivity_multiplier: 0.92,
            sovereignty_bonus: 0.25,
            wisdom_bonus: 0.075,
            total_liquidity: dec("1068.12"),
        },
        air: AirLiquidity {
            base_value: Decimal::ZERO,
            purity_multiplier: 0.5,
            energy_potential_bonus: 0.0,
            communication_value: 0.0,
            total_liquidity: Decimal::ZERO,
        },
        water: WaterLiquidity {
            base_value: Decimal::ZERO,
            purity_multiplier: 0.6,
            flow_rate_bonus: 0.0,
            sacred_value_bonus: 0.0,
            total_liquidity: Decimal::ZERO,
        },
        harmony_balance: Harmony::new(0.4),
        sustainability_index: SustainabilityIndex::new(46.0),
    };

    let value = serde_json::to_value(&components).unwrap();
    assert_eq!(value["land"]["base_value"], "864");
    assert_eq!(value["land"]["total_liquidity"], "1068.12");
    assert!(value["land"]["productivity_multiplier"].is_f64());
    assert!(value["harmony_balance"].is_f64());
    assert!(value["sustainability_index"].is_f64());

    // Round trip preserves equality.
    let back: LiquidityComponents = serde_json::from_value(value).unwrap();
    assert_eq!(back, components);
}

#[test]
fn collateral_assessment_uses_snake_case_status() {
    let assessment = CollateralAssessment {
        required: dec("160.218"),
        available: dec("100"),
        required_ounces: dec("0.033034639"),
        status: CollateralStatus::Insufficient,
    };
    let value = serde_json::to_value(&assessment).unwrap();
    assert_eq!(value["status"], "insufficient");
    assert_eq!(value["required"], "160.218");
}

#[test]
fn rating_classifies_the_reference_index() {
    assert_eq!(
        SustainabilityIndex::new(46.0).rating(),
        SustainabilityRating::Transitioning
    );
}
