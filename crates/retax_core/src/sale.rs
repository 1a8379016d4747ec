//! Tax due on a hypothetical sale at a given depreciation snapshot

use serde::{Deserialize, Serialize};

/// Rates applied to the two taxed components of a sale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxRates {
    /// Flat depreciation recapture rate
    pub recapture_rate: f64,
    /// Long-term capital gains rate on the gain beyond recaptured depreciation
    pub capital_gains_rate: f64,
}

impl Default for TaxRates {
    fn default() -> Self {
        Self {
            recapture_rate: 0.25,
            capital_gains_rate: 0.20,
        }
    }
}

/// Outcome of selling at a given cumulative-depreciation snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaleTaxResult {
    /// Cost basis less depreciation taken
    pub adjusted_basis: f64,
    /// Sale price less adjusted basis; negative on a loss sale
    pub total_gain: f64,
    pub recapture_tax: f64,
    pub capital_gains_tax: f64,
    pub total_tax: f64,
}

/// Compute the tax on a sale from its cost basis, price, and the cumulative
/// depreciation taken through the holding period.
///
/// Two deliberate simplifications versus actual tax law: recapture is charged
/// on the full depreciation taken even when the gain does not cover it, and a
/// loss sale owes zero capital-gains tax (no loss harvesting). Non-finite
/// inputs propagate into the result rather than erroring.
#[must_use]
pub fn sale_tax(
    cost_basis: f64,
    sale_price: f64,
    cumulative_depreciation: f64,
    rates: TaxRates,
) -> SaleTaxResult {
    let adjusted_basis = cost_basis - cumulative_depreciation;
    let total_gain = sale_price - adjusted_basis;

    let recapture_tax = cumulative_depreciation * rates.recapture_rate;
    let remaining_gain = total_gain - cumulative_depreciation;
    let capital_gains_tax = remaining_gain.max(0.0) * rates.capital_gains_rate;

    SaleTaxResult {
        adjusted_basis,
        total_gain,
        recapture_tax,
        capital_gains_tax,
        total_tax: recapture_tax + capital_gains_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_with_depreciation() {
        // Basis 10M, price 12M, 3M depreciated:
        // adjusted basis 7M, gain 5M
        // recapture: 3M * 25% = 750k
        // capital gains: (5M - 3M) * 20% = 400k
        let result = sale_tax(10_000_000.0, 12_000_000.0, 3_000_000.0, TaxRates::default());
        assert!((result.adjusted_basis - 7_000_000.0).abs() < 0.01);
        assert!((result.total_gain - 5_000_000.0).abs() < 0.01);
        assert!((result.recapture_tax - 750_000.0).abs() < 0.01);
        assert!((result.capital_gains_tax - 400_000.0).abs() < 0.01);
        assert!((result.total_tax - 1_150_000.0).abs() < 0.01);
    }

    #[test]
    fn test_sale_without_depreciation() {
        let result = sale_tax(10_000_000.0, 12_000_000.0, 0.0, TaxRates::default());
        assert_eq!(result.recapture_tax, 0.0);
        // Whole 2M gain is capital gains
        assert!((result.capital_gains_tax - 400_000.0).abs() < 0.01);
    }

    #[test]
    fn test_loss_sale_owes_no_capital_gains() {
        let result = sale_tax(10_000_000.0, 8_000_000.0, 0.0, TaxRates::default());
        assert!(result.total_gain < 0.0);
        assert_eq!(result.capital_gains_tax, 0.0);
        assert_eq!(result.total_tax, 0.0);
    }

    #[test]
    fn test_recapture_charged_even_on_loss() {
        // Recapture applies to the full 2M taken even though the sale barely
        // recovers the adjusted basis
        let result = sale_tax(10_000_000.0, 8_100_000.0, 2_000_000.0, TaxRates::default());
        assert!((result.recapture_tax - 500_000.0).abs() < 0.01);
        assert_eq!(result.capital_gains_tax, 0.0);
        assert!((result.total_tax - 500_000.0).abs() < 0.01);
    }

    #[test]
    fn test_custom_rates() {
        let rates = TaxRates {
            recapture_rate: 0.30,
            capital_gains_rate: 0.15,
        };
        let result = sale_tax(1_000_000.0, 2_000_000.0, 500_000.0, rates);
        assert!((result.recapture_tax - 150_000.0).abs() < 0.01);
        // gain 1.5M, remaining 1M at 15%
        assert!((result.capital_gains_tax - 150_000.0).abs() < 0.01);
    }
}
