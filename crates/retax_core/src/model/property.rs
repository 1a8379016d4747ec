//! Property identity and per-type cost-segregation defaults

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// Commercial property categories with distinct depreciation assumptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Multifamily,
    Hotel,
    Retail,
    Office,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Multifamily,
        PropertyType::Hotel,
        PropertyType::Retail,
        PropertyType::Office,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PropertyType::Multifamily => "Multifamily",
            PropertyType::Hotel => "Hotel",
            PropertyType::Retail => "Retail",
            PropertyType::Office => "Office",
        }
    }

    /// Parse a display name. Unrecognized names (e.g. "Industrial") yield
    /// `None`; downstream lookups treat that as an empty result, not an error.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Default share of building value taken as bonus depreciation in year
    /// one. Heavier-FF&E property types front-load more.
    #[must_use]
    pub fn default_bonus_percent(&self) -> f64 {
        match self {
            PropertyType::Multifamily => 0.40,
            PropertyType::Hotel => 0.50,
            PropertyType::Retail => 0.35,
            PropertyType::Office => 0.30,
        }
    }
}

/// A property's value split and recovery period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyProfile {
    pub total_value: f64,
    pub land_value: f64,
    /// Recovery period in years; fractional periods (27.5) are allowed
    pub depreciation_years: f64,
    pub property_type: PropertyType,
}

impl PropertyProfile {
    /// Depreciable basis: land never depreciates
    #[must_use]
    pub fn building_value(&self) -> f64 {
        self.total_value - self.land_value
    }

    /// Check the invariants every depreciation computation relies on
    pub fn validate(&self) -> Result<()> {
        if self.building_value() <= 0.0 {
            return Err(InputError::NonPositiveBuildingValue {
                total_value: self.total_value,
                land_value: self.land_value,
            });
        }
        if self.depreciation_years <= 0.0 {
            return Err(InputError::NonPositiveDepreciationPeriod(
                self.depreciation_years,
            ));
        }
        Ok(())
    }
}
