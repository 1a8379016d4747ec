//! Straight-line depreciation with an optional year-one bonus
//!
//! The bonus share of the building value is deducted immediately in year one;
//! the remaining basis is spread evenly over the recovery period. Mid-month
//! and half-year IRS conventions are intentionally not modeled: every year
//! whose index falls within the recovery period receives the full annual
//! amount, fractional periods included.

use crate::error::{InputError, Result};
use crate::model::{PropertyProfile, YearlyDepreciation};

/// Year-one deduction split
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct YearOneDepreciation {
    pub bonus: f64,
    pub normal: f64,
    pub total: f64,
}

/// Compute the year-one deduction for a property.
///
/// `bonus_percent` is the fraction of building value written off immediately;
/// the normal deduction is the first year of straight-lining the remainder.
pub fn year_one_depreciation(
    profile: &PropertyProfile,
    bonus_percent: f64,
) -> Result<YearOneDepreciation> {
    profile.validate()?;

    let building = profile.building_value();
    let bonus = building * bonus_percent;
    let normal = (building - bonus) / profile.depreciation_years;

    Ok(YearOneDepreciation {
        bonus,
        normal,
        total: bonus + normal,
    })
}

/// Compute the full deduction schedule over `years` modeled years.
///
/// The bonus lands in year one only. A year index within the recovery period
/// earns the full annual amount (year 27 of a 27.5-year period still gets a
/// complete deduction; year 28 gets none). Years past the recovery period
/// stay in the output with zero deductions so callers can line the schedule
/// up with other per-year tables, and `cumulative` runs across the whole
/// sequence in year order.
pub fn depreciation_schedule(
    profile: &PropertyProfile,
    bonus_percent: f64,
    years: u32,
) -> Result<Vec<YearlyDepreciation>> {
    profile.validate()?;
    if years == 0 {
        return Err(InputError::ZeroModelingYears);
    }

    let building = profile.building_value();
    let bonus = building * bonus_percent;
    let annual = (building - bonus) / profile.depreciation_years;

    let mut schedule = Vec::with_capacity(years as usize);
    let mut cumulative = 0.0;
    for year in 1..=years {
        let bonus_for_year = if year == 1 { bonus } else { 0.0 };
        let normal = if f64::from(year) <= profile.depreciation_years {
            annual
        } else {
            0.0
        };
        let total = bonus_for_year + normal;
        cumulative += total;
        schedule.push(YearlyDepreciation {
            year,
            bonus: bonus_for_year,
            normal,
            total,
            cumulative,
        });
    }

    Ok(schedule)
}
