//! Scenario evaluation: one immutable input set in, one full report out
//!
//! The presentation layer passes a [`ScenarioInputs`] by value into
//! [`evaluate`] on every interaction and renders the returned
//! [`ScenarioReport`] across its tabs. There is no hidden shared state and no
//! caching; a full recomputation costs O(modeled years).

use serde::{Deserialize, Serialize};

use crate::cash_flow::{OperatingAssumptions, operating_cash_flow};
use crate::depreciation::{YearOneDepreciation, depreciation_schedule, year_one_depreciation};
use crate::error::Result;
use crate::exchange::{ExchangeOutcome, simulate_exchange};
use crate::model::{OperatingCashFlowRecord, PropertyProfile, PropertyType, YearlyDepreciation};
use crate::sale::{SaleTaxResult, TaxRates, sale_tax};

/// First-year deduction target reported by the overview
pub const FIRST_YEAR_DEDUCTION_GOAL: f64 = 4_000_000.0;

/// Every adjustable input, passed by value into each evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub total_property_value: f64,
    pub land_value: f64,
    pub depreciation_years: f64,
    pub property_type: PropertyType,
    /// Bonus depreciation share in [0, 1]
    pub bonus_percent: f64,
    pub sale_price: f64,
    pub simulate_exchange: bool,
    /// Replacement property value; display-only (see [`ExchangeOutcome`])
    pub reinvested_value: f64,
    pub modeling_years: u32,
    pub tax_bracket_percent: f64,
    pub rental_income: f64,
    pub operating_expenses: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            total_property_value: 10_000_000.0,
            land_value: 2_000_000.0,
            depreciation_years: 27.5,
            property_type: PropertyType::Multifamily,
            bonus_percent: PropertyType::Multifamily.default_bonus_percent(),
            sale_price: 12_000_000.0,
            simulate_exchange: false,
            reinvested_value: 0.0,
            modeling_years: 10,
            tax_bracket_percent: 37.0,
            rental_income: 500_000.0,
            operating_expenses: 150_000.0,
        }
    }
}

impl ScenarioInputs {
    pub fn property_profile(&self) -> PropertyProfile {
        PropertyProfile {
            total_value: self.total_property_value,
            land_value: self.land_value,
            depreciation_years: self.depreciation_years,
            property_type: self.property_type,
        }
    }

    pub fn operating_assumptions(&self) -> OperatingAssumptions {
        OperatingAssumptions {
            rental_income: self.rental_income,
            operating_expenses: self.operating_expenses,
            tax_bracket_percent: self.tax_bracket_percent,
        }
    }
}

/// Sale outcome for one holding period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldingPeriodSale {
    pub holding_years: u32,
    /// Depreciation taken through this holding period
    pub cumulative_depreciation: f64,
    pub tax: SaleTaxResult,
}

/// Year-one depreciation for one property type at its default bonus share
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyTypeComparison {
    pub property_type: PropertyType,
    pub bonus_percent: f64,
    pub year_one: YearOneDepreciation,
}

/// Everything the presentation layer renders, recomputed as a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub year_one: YearOneDepreciation,
    pub schedule: Vec<YearlyDepreciation>,
    /// Sale taxation for every holding period in the modeling window
    pub sale_by_holding_period: Vec<HoldingPeriodSale>,
    /// Present only when the exchange toggle is on
    pub exchange: Option<ExchangeOutcome>,
    /// Year-one comparison across all property types at their default bonus
    pub comparison: Vec<PropertyTypeComparison>,
    pub cash_flow: Vec<OperatingCashFlowRecord>,
}

/// Evaluate a scenario in full.
///
/// All-or-nothing: any invalid input fails the whole report so the caller
/// never renders a partially updated result set. The sale table uses the
/// total property value as cost basis, and the exchange estimate is anchored
/// to the year-one deduction rather than the sale-year cumulative.
pub fn evaluate(inputs: &ScenarioInputs) -> Result<ScenarioReport> {
    let profile = inputs.property_profile();
    let rates = TaxRates::default();

    let year_one = year_one_depreciation(&profile, inputs.bonus_percent)?;
    let schedule = depreciation_schedule(&profile, inputs.bonus_percent, inputs.modeling_years)?;

    let cost_basis = inputs.total_property_value;
    let sale_by_holding_period = schedule
        .iter()
        .map(|entry| HoldingPeriodSale {
            holding_years: entry.year,
            cumulative_depreciation: entry.cumulative,
            tax: sale_tax(cost_basis, inputs.sale_price, entry.cumulative, rates),
        })
        .collect();

    let exchange = inputs.simulate_exchange.then(|| {
        simulate_exchange(
            inputs.sale_price,
            year_one.total,
            cost_basis,
            inputs.reinvested_value,
            rates,
        )
    });

    let comparison = PropertyType::ALL
        .iter()
        .map(|&property_type| {
            let bonus_percent = property_type.default_bonus_percent();
            year_one_depreciation(&profile, bonus_percent).map(|year_one| PropertyTypeComparison {
                property_type,
                bonus_percent,
                year_one,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cash_flow = operating_cash_flow(&schedule, &inputs.operating_assumptions());

    Ok(ScenarioReport {
        year_one,
        schedule,
        sale_by_holding_period,
        exchange,
        comparison,
        cash_flow,
    })
}
