//! After-tax operating cash-flow projection

use serde::{Deserialize, Serialize};

use crate::model::{OperatingCashFlowRecord, YearlyDepreciation};

/// Income-side assumptions, held constant across modeled years
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingAssumptions {
    pub rental_income: f64,
    pub operating_expenses: f64,
    /// Marginal bracket as a percentage (37.0 means 37%)
    pub tax_bracket_percent: f64,
}

/// Project annual and cumulative after-tax operating cash flow.
///
/// Output rows correspond 1:1 by year index with the input schedule.
/// Depreciation shields income dollar-for-dollar; a taxable loss owes no tax
/// but is not refunded or carried forward.
#[must_use]
pub fn operating_cash_flow(
    schedule: &[YearlyDepreciation],
    assumptions: &OperatingAssumptions,
) -> Vec<OperatingCashFlowRecord> {
    let noi = assumptions.rental_income - assumptions.operating_expenses;
    let rate = assumptions.tax_bracket_percent / 100.0;

    let mut records = Vec::with_capacity(schedule.len());
    let mut cumulative = 0.0;
    for entry in schedule {
        let taxable_income = noi - entry.total;
        let tax_liability = if taxable_income > 0.0 {
            taxable_income * rate
        } else {
            0.0
        };
        let operating_cash_flow = noi - tax_liability;
        cumulative += operating_cash_flow;
        records.push(OperatingCashFlowRecord {
            year: entry.year,
            noi,
            depreciation: entry.total,
            taxable_income,
            tax_liability,
            operating_cash_flow,
            cumulative_cash_flow: cumulative,
        });
    }

    records
}
