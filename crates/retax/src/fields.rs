//! The global parameter list and its editing rules
//!
//! Each sidebar row is one [`InputField`]. Scalar fields open a text editor;
//! the property type cycles and the exchange flag toggles in place. Range
//! violations are rejected with a message, never clamped.

use retax_core::{PropertyType, ScenarioInputs};

use crate::util::format::format_currency_short;

/// One editable scenario input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    TotalPropertyValue,
    LandValue,
    DepreciationYears,
    PropertyType,
    BonusPercent,
    SalePrice,
    SimulateExchange,
    ReinvestedValue,
    ModelingYears,
    TaxBracketPercent,
    RentalIncome,
    OperatingExpenses,
}

impl InputField {
    pub const ALL: [InputField; 12] = [
        InputField::TotalPropertyValue,
        InputField::LandValue,
        InputField::DepreciationYears,
        InputField::PropertyType,
        InputField::BonusPercent,
        InputField::SalePrice,
        InputField::SimulateExchange,
        InputField::ReinvestedValue,
        InputField::ModelingYears,
        InputField::TaxBracketPercent,
        InputField::RentalIncome,
        InputField::OperatingExpenses,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InputField::TotalPropertyValue => "Total Property Value",
            InputField::LandValue => "Land Value",
            InputField::DepreciationYears => "Depreciation Period (yrs)",
            InputField::PropertyType => "Property Type",
            InputField::BonusPercent => "Bonus Depreciation",
            InputField::SalePrice => "Projected Sale Price",
            InputField::SimulateExchange => "Simulate 1031 Exchange",
            InputField::ReinvestedValue => "Reinvested Value",
            InputField::ModelingYears => "Modeling Period (yrs)",
            InputField::TaxBracketPercent => "Marginal Tax Bracket",
            InputField::RentalIncome => "Annual Rental Income",
            InputField::OperatingExpenses => "Annual Operating Expenses",
        }
    }

    /// Current value rendered for the sidebar
    pub fn display_value(&self, inputs: &ScenarioInputs) -> String {
        match self {
            InputField::TotalPropertyValue => format_currency_short(inputs.total_property_value),
            InputField::LandValue => format_currency_short(inputs.land_value),
            InputField::DepreciationYears => format!("{}", inputs.depreciation_years),
            InputField::PropertyType => inputs.property_type.name().to_string(),
            InputField::BonusPercent => format!("{:.0}%", inputs.bonus_percent * 100.0),
            InputField::SalePrice => format_currency_short(inputs.sale_price),
            InputField::SimulateExchange => {
                if inputs.simulate_exchange { "Yes" } else { "No" }.to_string()
            }
            InputField::ReinvestedValue => format_currency_short(inputs.reinvested_value),
            InputField::ModelingYears => inputs.modeling_years.to_string(),
            InputField::TaxBracketPercent => format!("{}%", inputs.tax_bracket_percent),
            InputField::RentalIncome => format_currency_short(inputs.rental_income),
            InputField::OperatingExpenses => format_currency_short(inputs.operating_expenses),
        }
    }

    /// Raw text shown in the edit modal
    pub fn edit_value(&self, inputs: &ScenarioInputs) -> String {
        match self {
            InputField::TotalPropertyValue => format!("{}", inputs.total_property_value),
            InputField::LandValue => format!("{}", inputs.land_value),
            InputField::DepreciationYears => format!("{}", inputs.depreciation_years),
            InputField::BonusPercent => format!("{}", inputs.bonus_percent),
            InputField::SalePrice => format!("{}", inputs.sale_price),
            InputField::ReinvestedValue => format!("{}", inputs.reinvested_value),
            InputField::ModelingYears => inputs.modeling_years.to_string(),
            InputField::TaxBracketPercent => format!("{}", inputs.tax_bracket_percent),
            InputField::RentalIncome => format!("{}", inputs.rental_income),
            InputField::OperatingExpenses => format!("{}", inputs.operating_expenses),
            InputField::PropertyType | InputField::SimulateExchange => String::new(),
        }
    }

    /// Whether the field toggles/cycles in place instead of opening an editor
    pub fn is_toggle(&self) -> bool {
        matches!(
            self,
            InputField::PropertyType | InputField::SimulateExchange
        )
    }

    /// Cycle or toggle a non-text field. Switching property type re-defaults
    /// the bonus share for the new type.
    pub fn toggle(&self, inputs: &mut ScenarioInputs) {
        match self {
            InputField::PropertyType => {
                inputs.property_type = next_property_type(inputs.property_type);
                inputs.bonus_percent = inputs.property_type.default_bonus_percent();
            }
            InputField::SimulateExchange => {
                inputs.simulate_exchange = !inputs.simulate_exchange;
                if inputs.simulate_exchange && inputs.reinvested_value == 0.0 {
                    inputs.reinvested_value = inputs.sale_price;
                }
            }
            _ => {}
        }
    }

    /// Parse `raw` and store it into `inputs`.
    pub fn apply(&self, inputs: &mut ScenarioInputs, raw: &str) -> Result<(), String> {
        match self {
            InputField::TotalPropertyValue => {
                let v = parse_amount(raw)?;
                if v <= 0.0 {
                    return Err("Total property value must be positive".to_string());
                }
                inputs.total_property_value = v;
            }
            InputField::LandValue => {
                let v = parse_amount(raw)?;
                if v < 0.0 {
                    return Err("Land value cannot be negative".to_string());
                }
                inputs.land_value = v;
            }
            InputField::DepreciationYears => {
                let v = parse_amount(raw)?;
                if v <= 0.0 {
                    return Err("Depreciation period must be positive".to_string());
                }
                inputs.depreciation_years = v;
            }
            InputField::BonusPercent => {
                let v = parse_amount(raw)?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(
                        "Bonus depreciation must be a decimal between 0 and 1".to_string()
                    );
                }
                inputs.bonus_percent = v;
            }
            InputField::SalePrice => {
                let v = parse_amount(raw)?;
                if v < 0.0 {
                    return Err("Sale price cannot be negative".to_string());
                }
                inputs.sale_price = v;
            }
            InputField::ReinvestedValue => {
                let v = parse_amount(raw)?;
                if v < 0.0 {
                    return Err("Reinvested value cannot be negative".to_string());
                }
                inputs.reinvested_value = v;
            }
            InputField::ModelingYears => {
                let v: u32 = raw
                    .trim()
                    .parse()
                    .map_err(|_| format!("'{raw}' is not a whole number of years"))?;
                if v == 0 {
                    return Err("Modeling period must cover at least one year".to_string());
                }
                inputs.modeling_years = v;
            }
            InputField::TaxBracketPercent => {
                let v = parse_amount(raw)?;
                if v < 0.0 {
                    return Err("Tax bracket cannot be negative".to_string());
                }
                inputs.tax_bracket_percent = v;
            }
            InputField::RentalIncome => {
                let v = parse_amount(raw)?;
                if v < 0.0 {
                    return Err("Rental income cannot be negative".to_string());
                }
                inputs.rental_income = v;
            }
            InputField::OperatingExpenses => {
                let v = parse_amount(raw)?;
                if v < 0.0 {
                    return Err("Operating expenses cannot be negative".to_string());
                }
                inputs.operating_expenses = v;
            }
            // Toggle fields never go through the text editor
            InputField::PropertyType | InputField::SimulateExchange => {}
        }
        Ok(())
    }
}

fn next_property_type(current: PropertyType) -> PropertyType {
    let idx = PropertyType::ALL
        .iter()
        .position(|t| *t == current)
        .unwrap_or(0);
    PropertyType::ALL[(idx + 1) % PropertyType::ALL.len()]
}

/// Parse a number, tolerating currency punctuation ("$1,250,000").
fn parse_amount(raw: &str) -> Result<f64, String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_' | ' '))
        .collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("'{raw}' is not a finite number"));
    }
    Ok(value)
}
