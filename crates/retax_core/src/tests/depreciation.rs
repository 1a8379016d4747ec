//! Depreciation engine tests

use crate::depreciation::{depreciation_schedule, year_one_depreciation};
use crate::error::InputError;
use crate::model::{PropertyProfile, PropertyType};

fn profile(total: f64, land: f64, years: f64) -> PropertyProfile {
    PropertyProfile {
        total_value: total,
        land_value: land,
        depreciation_years: years,
        property_type: PropertyType::Multifamily,
    }
}

#[test]
fn test_year_one_worked_example() {
    // 10M property, 2M land, 27.5-year period, 40% bonus:
    // building 8M, bonus 3.2M, normal (8M - 3.2M) / 27.5 = 174,545.45
    let result = year_one_depreciation(&profile(10_000_000.0, 2_000_000.0, 27.5), 0.4).unwrap();
    assert!((result.bonus - 3_200_000.0).abs() < 0.01);
    assert!((result.normal - 174_545.45).abs() < 0.01);
    assert!((result.total - 3_374_545.45).abs() < 0.01);
}

#[test]
fn test_year_one_without_bonus() {
    let result = year_one_depreciation(&profile(10_000_000.0, 2_000_000.0, 27.5), 0.0).unwrap();
    assert_eq!(result.bonus, 0.0);
    assert!((result.normal - 8_000_000.0 / 27.5).abs() < 0.01);
}

#[test]
fn test_year_one_full_bonus_leaves_nothing_to_straight_line() {
    let result = year_one_depreciation(&profile(10_000_000.0, 2_000_000.0, 27.5), 1.0).unwrap();
    assert!((result.bonus - 8_000_000.0).abs() < 0.01);
    assert_eq!(result.normal, 0.0);
}

#[test]
fn test_schedule_matches_year_one() {
    // Consistency law: the schedule's first row must agree with the
    // standalone year-one computation
    let p = profile(10_000_000.0, 2_000_000.0, 27.5);
    let year_one = year_one_depreciation(&p, 0.4).unwrap();
    let schedule = depreciation_schedule(&p, 0.4, 10).unwrap();

    let first = &schedule[0];
    assert_eq!(first.year, 1);
    assert!((first.bonus - year_one.bonus).abs() < 1e-9);
    assert!((first.normal - year_one.normal).abs() < 1e-9);
    assert!((first.total - year_one.total).abs() < 1e-9);
}

#[test]
fn test_schedule_bonus_only_in_year_one() {
    let schedule = depreciation_schedule(&profile(5_000_000.0, 1_000_000.0, 10.0), 0.3, 5).unwrap();
    assert!(schedule[0].bonus > 0.0);
    for entry in &schedule[1..] {
        assert_eq!(entry.bonus, 0.0);
    }
}

#[test]
fn test_schedule_cumulative_is_non_decreasing() {
    let schedule =
        depreciation_schedule(&profile(10_000_000.0, 2_000_000.0, 27.5), 0.4, 40).unwrap();
    for pair in schedule.windows(2) {
        assert!(pair[1].cumulative >= pair[0].cumulative);
    }
}

#[test]
fn test_schedule_fully_depreciates_building_value() {
    // 5-year period modeled for 8 years: bonus + 5 full annual deductions
    // consume exactly the building value; the tail adds nothing
    let p = profile(5_000_000.0, 1_000_000.0, 5.0);
    let schedule = depreciation_schedule(&p, 0.25, 8).unwrap();
    assert_eq!(schedule.len(), 8);
    assert!((schedule.last().unwrap().cumulative - p.building_value()).abs() < 0.01);
}

#[test]
fn test_schedule_never_exceeds_building_value() {
    let p = profile(10_000_000.0, 2_000_000.0, 27.5);
    let schedule = depreciation_schedule(&p, 0.4, 40).unwrap();
    assert!(schedule.last().unwrap().cumulative <= p.building_value() + 0.01);
}

#[test]
fn test_fractional_period_boundary() {
    // 27.5-year period: year 27 still earns a full deduction, year 28 none
    let schedule =
        depreciation_schedule(&profile(10_000_000.0, 2_000_000.0, 27.5), 0.4, 30).unwrap();
    assert!(schedule[26].normal > 0.0);
    assert_eq!(schedule[27].normal, 0.0);
    assert_eq!(schedule[29].normal, 0.0);
}

#[test]
fn test_tail_years_present_with_zero_deductions() {
    let schedule = depreciation_schedule(&profile(5_000_000.0, 1_000_000.0, 3.0), 0.0, 6).unwrap();
    assert_eq!(schedule.len(), 6);
    let final_cumulative = schedule[2].cumulative;
    for entry in &schedule[3..] {
        assert_eq!(entry.total, 0.0);
        assert_eq!(entry.cumulative, final_cumulative);
    }
}

#[test]
fn test_land_exceeding_total_is_rejected() {
    let err = year_one_depreciation(&profile(2_000_000.0, 3_000_000.0, 27.5), 0.4).unwrap_err();
    assert!(matches!(err, InputError::NonPositiveBuildingValue { .. }));
}

#[test]
fn test_land_equal_to_total_is_rejected() {
    let err = year_one_depreciation(&profile(2_000_000.0, 2_000_000.0, 27.5), 0.4).unwrap_err();
    assert!(matches!(err, InputError::NonPositiveBuildingValue { .. }));
}

#[test]
fn test_non_positive_period_is_rejected() {
    let err = year_one_depreciation(&profile(10_000_000.0, 2_000_000.0, 0.0), 0.4).unwrap_err();
    assert!(matches!(err, InputError::NonPositiveDepreciationPeriod(_)));
}

#[test]
fn test_zero_modeling_years_is_rejected() {
    let err = depreciation_schedule(&profile(10_000_000.0, 2_000_000.0, 27.5), 0.4, 0).unwrap_err();
    assert_eq!(err, InputError::ZeroModelingYears);
}
