//! Cost-segregation asset-class catalog
//!
//! Static reclassification assumptions per property type: how much of the
//! building value falls into each recovery class, with example assets. The
//! catalog is read-only after construction and safe to share across threads.

use crate::model::PropertyType;

/// Share of building value assigned to one recovery class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetClassEntry {
    pub label: &'static str,
    /// Fraction of building value in [0, 1]
    pub percent_of_building: f64,
    pub recovery_years: f64,
    /// Example assets in this class, for display
    pub examples: &'static str,
}

/// Immutable breakdown catalog, built once at startup
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    groups: Vec<(PropertyType, Vec<AssetClassEntry>)>,
}

impl AssetCatalog {
    /// Standard breakdown assumptions for the four supported property types.
    ///
    /// Panics at construction if any type's shares do not sum to 1.0 ± 0.01,
    /// so a bad table is caught at startup instead of inside a computation.
    #[must_use]
    pub fn standard() -> Self {
        let groups = vec![
            (
                PropertyType::Multifamily,
                vec![
                    AssetClassEntry {
                        label: "5-year Assets",
                        percent_of_building: 0.15,
                        recovery_years: 5.0,
                        examples: "Appliances, Carpets, Furniture",
                    },
                    AssetClassEntry {
                        label: "15-year Assets",
                        percent_of_building: 0.25,
                        recovery_years: 15.0,
                        examples: "Land Improvements, Parking Lots, Landscaping",
                    },
                    AssetClassEntry {
                        label: "27.5-year Assets",
                        percent_of_building: 0.60,
                        recovery_years: 27.5,
                        examples: "Structural Components, Roof, Walls, HVAC (structural)",
                    },
                ],
            ),
            (
                PropertyType::Hotel,
                vec![
                    AssetClassEntry {
                        label: "5-year Assets",
                        percent_of_building: 0.25,
                        recovery_years: 5.0,
                        examples: "Furniture, Fixtures, Equipment",
                    },
                    AssetClassEntry {
                        label: "15-year Assets",
                        percent_of_building: 0.25,
                        recovery_years: 15.0,
                        examples: "Renovations, Interior Improvements",
                    },
                    AssetClassEntry {
                        label: "39-year Assets",
                        percent_of_building: 0.50,
                        recovery_years: 39.0,
                        examples: "Building Shell, Structural Components",
                    },
                ],
            ),
            (
                PropertyType::Retail,
                vec![
                    AssetClassEntry {
                        label: "5-year Assets",
                        percent_of_building: 0.10,
                        recovery_years: 5.0,
                        examples: "Display Units, POS Equipment",
                    },
                    AssetClassEntry {
                        label: "15-year Assets",
                        percent_of_building: 0.25,
                        recovery_years: 15.0,
                        examples: "Store Fixtures, Signage, Interior Finishes",
                    },
                    AssetClassEntry {
                        label: "39-year Assets",
                        percent_of_building: 0.65,
                        recovery_years: 39.0,
                        examples: "Building Structure, Roof, Walls",
                    },
                ],
            ),
            (
                PropertyType::Office,
                vec![
                    AssetClassEntry {
                        label: "5-year Assets",
                        percent_of_building: 0.10,
                        recovery_years: 5.0,
                        examples: "Furniture, Computers, Office Equipment",
                    },
                    AssetClassEntry {
                        label: "15-year Assets",
                        percent_of_building: 0.20,
                        recovery_years: 15.0,
                        examples: "Partitioning, Specialized Lighting, Finishes",
                    },
                    AssetClassEntry {
                        label: "39-year Assets",
                        percent_of_building: 0.70,
                        recovery_years: 39.0,
                        examples: "Building Shell, Structural Elements",
                    },
                ],
            ),
        ];

        let catalog = Self { groups };
        catalog.assert_shares_sum();
        catalog
    }

    /// Every type's shares must account for the whole building value
    fn assert_shares_sum(&self) {
        for (property_type, entries) in &self.groups {
            let sum: f64 = entries.iter().map(|e| e.percent_of_building).sum();
            assert!(
                (sum - 1.0).abs() <= 0.01,
                "asset shares for {} sum to {sum}, expected 1.0",
                property_type.name()
            );
        }
    }

    /// Breakdown for a property type
    #[must_use]
    pub fn breakdown(&self, property_type: PropertyType) -> &[AssetClassEntry] {
        self.groups
            .iter()
            .find(|(t, _)| *t == property_type)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Breakdown looked up by display name. Unknown names degrade to an
    /// empty slice rather than an error.
    #[must_use]
    pub fn breakdown_by_name(&self, name: &str) -> &[AssetClassEntry] {
        match PropertyType::parse(name) {
            Some(property_type) => self.breakdown(property_type),
            None => &[],
        }
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
