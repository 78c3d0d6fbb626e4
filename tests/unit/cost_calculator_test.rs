// Property-based tests for the net cost calculation
//
// - Credits are rounded one by one, then summed
// - Net cost is purchase value minus the rounded total, rounded again
// - Closed gates zero the credits whatever the rates
// - PIS and COFINS follow the same gate

use netcost::core::round_amount;
use netcost::{compute_net_cost, TaxScenario};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Purchase values with up to 4 fractional digits, 0.0000 to 10,000,000.0000
fn purchase_value() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

/// Rates in [0, 100] with up to 2 fractional digits
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn scenario() -> impl Strategy<Value = TaxScenario> {
    (
        purchase_value(),
        rate(),
        rate(),
        rate(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(purchase_value, icms_rate, pis_rate, cofins_rate, has_icms, has_pis_cofins)| {
                TaxScenario {
                    purchase_value,
                    icms_rate,
                    pis_rate,
                    cofins_rate,
                    has_icms_credit: has_icms,
                    has_pis_cofins_credit: has_pis_cofins,
                }
            },
        )
}

proptest! {
    #[test]
    fn test_total_is_sum_of_rounded_credits(scenario in scenario()) {
        let result = compute_net_cost(&scenario);

        prop_assert_eq!(
            result.total_credits,
            result.icms_credit + result.pis_credit + result.cofins_credit
        );
    }

    #[test]
    fn test_net_cost_is_purchase_minus_total(scenario in scenario()) {
        let result = compute_net_cost(&scenario);

        prop_assert_eq!(
            result.net_cost,
            round_amount(scenario.purchase_value - result.total_credits)
        );
    }

    #[test]
    fn test_credits_match_rounded_products(scenario in scenario()) {
        let result = compute_net_cost(&scenario);
        let hundred = Decimal::ONE_HUNDRED;

        let expected_icms = if scenario.has_icms_credit {
            round_amount(scenario.purchase_value * scenario.icms_rate / hundred)
        } else {
            Decimal::ZERO
        };
        let expected_pis = if scenario.has_pis_cofins_credit {
            round_amount(scenario.purchase_value * scenario.pis_rate / hundred)
        } else {
            Decimal::ZERO
        };
        let expected_cofins = if scenario.has_pis_cofins_credit {
            round_amount(scenario.purchase_value * scenario.cofins_rate / hundred)
        } else {
            Decimal::ZERO
        };

        prop_assert_eq!(result.icms_credit, expected_icms);
        prop_assert_eq!(result.pis_credit, expected_pis);
        prop_assert_eq!(result.cofins_credit, expected_cofins);
    }

    #[test]
    fn test_closed_gates_leave_purchase_value_untouched(scenario in scenario()) {
        let closed = TaxScenario {
            has_icms_credit: false,
            has_pis_cofins_credit: false,
            ..scenario
        };

        let result = compute_net_cost(&closed);

        prop_assert_eq!(result.total_credits, Decimal::ZERO);
        prop_assert_eq!(result.net_cost, round_amount(closed.purchase_value));
        prop_assert_eq!(result.net_cost, closed.purchase_value);
    }

    #[test]
    fn test_calculation_is_deterministic(scenario in scenario()) {
        prop_assert_eq!(compute_net_cost(&scenario), compute_net_cost(&scenario));
    }

    #[test]
    fn test_every_field_has_at_most_four_digits(scenario in scenario()) {
        let result = compute_net_cost(&scenario);

        for amount in [
            result.purchase_value,
            result.icms_credit,
            result.pis_credit,
            result.cofins_credit,
            result.total_credits,
            result.net_cost,
        ] {
            prop_assert!(amount.normalize().scale() <= 4, "{} has more than 4 digits", amount);
        }
    }

    #[test]
    fn test_zero_rate_with_open_gate_equals_closed_gate(value in purchase_value()) {
        let open = TaxScenario::new(value)
            .with_icms_credit(Decimal::ZERO)
            .with_pis_cofins_credit(Decimal::ZERO, Decimal::ZERO);

        prop_assert_eq!(compute_net_cost(&open), compute_net_cost(&TaxScenario::new(value)));
    }
}

#[test]
fn test_reference_purchase() {
    let scenario = TaxScenario::new(dec!(4.50))
        .with_icms_credit(dec!(19))
        .with_pis_cofins_credit(dec!(1.65), dec!(7.6));

    let result = compute_net_cost(&scenario);

    assert_eq!(result.icms_credit, dec!(0.855));
    assert_eq!(result.pis_credit, dec!(0.0743));
    assert_eq!(result.cofins_credit, dec!(0.342));
    assert_eq!(result.total_credits, dec!(1.2713));
    assert_eq!(result.net_cost, dec!(3.2287));
}

#[test]
fn test_no_credits_keeps_full_value() {
    let scenario = TaxScenario {
        purchase_value: dec!(100),
        icms_rate: dec!(19),
        pis_rate: dec!(1.65),
        cofins_rate: dec!(7.6),
        has_icms_credit: false,
        has_pis_cofins_credit: false,
    };

    let result = compute_net_cost(&scenario);

    assert_eq!(result.total_credits, Decimal::ZERO);
    assert_eq!(result.net_cost, dec!(100));
}

#[test]
fn test_independent_rounding_differs_from_single_rounding() {
    // Each credit is exactly x.xxxx5, so rounding each one moves the total
    let scenario = TaxScenario::new(dec!(0.05))
        .with_icms_credit(dec!(0.1))
        .with_pis_cofins_credit(dec!(0.1), dec!(0.1));

    let result = compute_net_cost(&scenario);

    assert_eq!(result.icms_credit, dec!(0.0001));
    assert_eq!(result.total_credits, dec!(0.0003));
    assert_ne!(
        result.total_credits,
        round_amount(dec!(0.00005) * Decimal::from(3))
    );
    assert_eq!(result.net_cost, dec!(0.0497));
}
