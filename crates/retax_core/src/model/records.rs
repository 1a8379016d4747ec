//! Per-year output records

use serde::{Deserialize, Serialize};

/// One modeled year of depreciation deductions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyDepreciation {
    /// 1-based year index
    pub year: u32,
    /// Bonus deduction; nonzero only in year 1
    pub bonus: f64,
    /// Straight-line deduction; zero past the recovery period
    pub normal: f64,
    pub total: f64,
    /// Running sum through this year
    pub cumulative: f64,
}

/// One modeled year of after-tax operating performance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingCashFlowRecord {
    /// 1-based year index, matching the depreciation schedule
    pub year: u32,
    /// Net operating income: rental income minus operating expenses
    pub noi: f64,
    /// Depreciation deduction taken this year
    pub depreciation: f64,
    /// NOI less depreciation; may be negative
    pub taxable_income: f64,
    /// Tax owed on positive taxable income; losses owe nothing
    pub tax_liability: f64,
    pub operating_cash_flow: f64,
    /// Running sum through this year
    pub cumulative_cash_flow: f64,
}
