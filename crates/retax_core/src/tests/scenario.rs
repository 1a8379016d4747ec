//! Full-report evaluation tests and cross-engine laws

use crate::error::InputError;
use crate::model::PropertyType;
use crate::sale::{TaxRates, sale_tax};
use crate::scenario::{ScenarioInputs, evaluate};

#[test]
fn test_default_inputs_produce_a_full_report() {
    let inputs = ScenarioInputs::default();
    let report = evaluate(&inputs).unwrap();

    assert_eq!(report.schedule.len(), 10);
    assert_eq!(report.sale_by_holding_period.len(), 10);
    assert_eq!(report.cash_flow.len(), 10);
    assert_eq!(report.comparison.len(), 4);
    assert!(report.exchange.is_none());
}

#[test]
fn test_defaults_match_the_documented_values() {
    let inputs = ScenarioInputs::default();
    assert_eq!(inputs.total_property_value, 10_000_000.0);
    assert_eq!(inputs.land_value, 2_000_000.0);
    assert_eq!(inputs.depreciation_years, 27.5);
    assert_eq!(inputs.property_type, PropertyType::Multifamily);
    assert_eq!(inputs.bonus_percent, 0.40);
    assert_eq!(inputs.sale_price, 12_000_000.0);
    assert!(!inputs.simulate_exchange);
    assert_eq!(inputs.modeling_years, 10);
    assert_eq!(inputs.tax_bracket_percent, 37.0);
    assert_eq!(inputs.rental_income, 500_000.0);
    assert_eq!(inputs.operating_expenses, 150_000.0);
}

#[test]
fn test_sale_table_round_trips_schedule_cumulatives() {
    // Feeding the schedule's cumulative depreciation at year N back into the
    // sale engine must reproduce the table row for holding period N
    let inputs = ScenarioInputs::default();
    let report = evaluate(&inputs).unwrap();

    for (entry, row) in report.schedule.iter().zip(&report.sale_by_holding_period) {
        assert_eq!(row.holding_years, entry.year);
        assert_eq!(row.cumulative_depreciation, entry.cumulative);

        let recomputed = sale_tax(
            inputs.total_property_value,
            inputs.sale_price,
            entry.cumulative,
            TaxRates::default(),
        );
        assert_eq!(row.tax, recomputed);
    }
}

#[test]
fn test_exchange_outcome_uses_year_one_deduction() {
    let inputs = ScenarioInputs {
        simulate_exchange: true,
        reinvested_value: 12_000_000.0,
        ..ScenarioInputs::default()
    };
    let report = evaluate(&inputs).unwrap();

    let outcome = report.exchange.unwrap();
    let expected = sale_tax(
        inputs.total_property_value,
        inputs.sale_price,
        report.year_one.total,
        TaxRates::default(),
    )
    .total_tax;
    assert!((outcome.deferred_tax - expected).abs() < 0.01);
    assert_eq!(outcome.reinvested_value, 12_000_000.0);
}

#[test]
fn test_reinvested_value_never_changes_the_deferral() {
    let base = ScenarioInputs {
        simulate_exchange: true,
        reinvested_value: 1.0,
        ..ScenarioInputs::default()
    };
    let huge = ScenarioInputs {
        reinvested_value: 100_000_000.0,
        ..base
    };

    let a = evaluate(&base).unwrap().exchange.unwrap();
    let b = evaluate(&huge).unwrap().exchange.unwrap();
    assert_eq!(a.deferred_tax, b.deferred_tax);
}

#[test]
fn test_comparison_covers_all_types_at_their_default_bonus() {
    let report = evaluate(&ScenarioInputs::default()).unwrap();

    for (row, property_type) in report.comparison.iter().zip(PropertyType::ALL) {
        assert_eq!(row.property_type, property_type);
        assert_eq!(row.bonus_percent, property_type.default_bonus_percent());
        // Each row recomputes year one over the same 8M building value
        let building = 8_000_000.0;
        let bonus = building * row.bonus_percent;
        assert!((row.year_one.bonus - bonus).abs() < 0.01);
        assert!((row.year_one.normal - (building - bonus) / 27.5).abs() < 0.01);
    }
}

#[test]
fn test_invalid_land_value_withholds_the_whole_report() {
    let inputs = ScenarioInputs {
        land_value: 10_000_000.0,
        ..ScenarioInputs::default()
    };
    let err = evaluate(&inputs).unwrap_err();
    assert!(matches!(err, InputError::NonPositiveBuildingValue { .. }));
}

#[test]
fn test_zero_modeling_years_withholds_the_whole_report() {
    let inputs = ScenarioInputs {
        modeling_years: 0,
        ..ScenarioInputs::default()
    };
    assert_eq!(evaluate(&inputs).unwrap_err(), InputError::ZeroModelingYears);
}

#[test]
fn test_evaluation_is_deterministic() {
    let inputs = ScenarioInputs::default();
    assert_eq!(evaluate(&inputs).unwrap(), evaluate(&inputs).unwrap());
}
