//! Like-kind (1031) exchange deferral estimate

use serde::{Deserialize, Serialize};

use crate::sale::{TaxRates, sale_tax};

/// Deferral estimate for a like-kind exchange
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeOutcome {
    /// Replacement property value. Shown to the user for context only; the
    /// deferred amount is the tax a straight sale would owe and does not
    /// depend on what the proceeds are reinvested into.
    pub reinvested_value: f64,
    pub deferred_tax: f64,
}

/// Tax that a straight sale would owe, i.e. the amount an exchange defers.
#[must_use]
pub fn exchange_deferral(
    sale_price: f64,
    cumulative_depreciation: f64,
    cost_basis: f64,
    rates: TaxRates,
) -> f64 {
    sale_tax(cost_basis, sale_price, cumulative_depreciation, rates).total_tax
}

/// Estimate the outcome of exchanging into a replacement property instead of
/// selling outright. Both recapture and capital-gains taxes are deferred.
#[must_use]
pub fn simulate_exchange(
    sale_price: f64,
    cumulative_depreciation: f64,
    cost_basis: f64,
    reinvested_value: f64,
    rates: TaxRates,
) -> ExchangeOutcome {
    ExchangeOutcome {
        reinvested_value,
        deferred_tax: exchange_deferral(sale_price, cumulative_depreciation, cost_basis, rates),
    }
}
