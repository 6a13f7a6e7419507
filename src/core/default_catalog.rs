//! Prices and products used whenever the catalog has no entry for what a quote needs.
//!
//! Every hardcoded fallback of the pricing path lives here so that a quote can always be
//! produced from a sparse or empty catalog.

use crate::core::catalog::{Boiler, CatalogTier, SundryCategory};
use crate::core::catalog_matcher::QuoteTier;
use crate::core::units::Pence;
use crate::input::BoilerType;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefaultBoiler {
    pub make: &'static str,
    pub model: &'static str,
    pub catalog_tier: CatalogTier,
    pub warranty_years: u32,
    pub efficiency_rating: &'static str,
    pub flow_rate_lpm: Option<f64>,
    pub supply_price: Pence,
}

#[derive(Debug)]
pub struct DefaultCatalog {
    pub standard_labour: Pence,
    pub premium_labour: Pence,
    pub location_multiplier: f64,
    pub sundries: [(SundryCategory, Pence); 6],
    pub boilers: [(QuoteTier, BoilerType, DefaultBoiler); 9],
}

pub static DEFAULT_CATALOG: DefaultCatalog = DefaultCatalog {
    standard_labour: Pence::from_pounds(850),
    premium_labour: Pence::from_pounds(1_100),
    location_multiplier: 1.0,
    sundries: [
        (SundryCategory::MagneticFilter, Pence::from_pounds(150)),
        (SundryCategory::ChemicalFlush, Pence::from_pounds(120)),
        (SundryCategory::FlueKit, Pence::from_pounds(95)),
        (SundryCategory::Trvs, Pence::from_pounds(180)),
        (SundryCategory::SmartThermostat, Pence::from_pounds(220)),
        (SundryCategory::CondensatePump, Pence::from_pounds(250)),
    ],
    boilers: [
        (
            QuoteTier::Standard,
            BoilerType::Combi,
            DefaultBoiler {
                make: "Ideal",
                model: "Logic Max Combi2 C",
                catalog_tier: CatalogTier::Budget,
                warranty_years: 7,
                efficiency_rating: "A",
                flow_rate_lpm: Some(12.2),
                supply_price: Pence::from_pounds(950),
            },
        ),
        (
            QuoteTier::Premium,
            BoilerType::Combi,
            DefaultBoiler {
                make: "Vaillant",
                model: "ecoTEC plus",
                catalog_tier: CatalogTier::MidRange,
                warranty_years: 10,
                efficiency_rating: "A",
                flow_rate_lpm: Some(14.3),
                supply_price: Pence::from_pounds(1_250),
            },
        ),
        (
            QuoteTier::Luxury,
            BoilerType::Combi,
            DefaultBoiler {
                make: "Worcester Bosch",
                model: "Greenstar 8000 Life",
                catalog_tier: CatalogTier::Premium,
                warranty_years: 12,
                efficiency_rating: "A",
                flow_rate_lpm: Some(17.0),
                supply_price: Pence::from_pounds(1_650),
            },
        ),
        (
            QuoteTier::Standard,
            BoilerType::System,
            DefaultBoiler {
                make: "Ideal",
                model: "Logic Max System2 S",
                catalog_tier: CatalogTier::Budget,
                warranty_years: 7,
                efficiency_rating: "A",
                flow_rate_lpm: None,
                supply_price: Pence::from_pounds(900),
            },
        ),
        (
            QuoteTier::Premium,
            BoilerType::System,
            DefaultBoiler {
                make: "Vaillant",
                model: "ecoTEC plus system",
                catalog_tier: CatalogTier::MidRange,
                warranty_years: 10,
                efficiency_rating: "A",
                flow_rate_lpm: None,
                supply_price: Pence::from_pounds(1_200),
            },
        ),
        (
            QuoteTier::Luxury,
            BoilerType::System,
            DefaultBoiler {
                make: "Worcester Bosch",
                model: "Greenstar 8000 Life System",
                catalog_tier: CatalogTier::Premium,
                warranty_years: 12,
                efficiency_rating: "A",
                flow_rate_lpm: None,
                supply_price: Pence::from_pounds(1_550),
            },
        ),
        (
            QuoteTier::Standard,
            BoilerType::Regular,
            DefaultBoiler {
                make: "Ideal",
                model: "Logic Max Heat2 H",
                catalog_tier: CatalogTier::Budget,
                warranty_years: 7,
                efficiency_rating: "A",
                flow_rate_lpm: None,
                supply_price: Pence::from_pounds(850),
            },
        ),
        (
            QuoteTier::Premium,
            BoilerType::Regular,
            DefaultBoiler {
                make: "Vaillant",
                model: "ecoTEC plus regular",
                catalog_tier: CatalogTier::MidRange,
                warranty_years: 10,
                efficiency_rating: "A",
                flow_rate_lpm: None,
                supply_price: Pence::from_pounds(1_100),
            },
        ),
        (
            QuoteTier::Luxury,
            BoilerType::Regular,
            DefaultBoiler {
                make: "Worcester Bosch",
                model: "Greenstar 4000 Regular",
                catalog_tier: CatalogTier::Premium,
                warranty_years: 10,
                efficiency_rating: "A",
                flow_rate_lpm: None,
                supply_price: Pence::from_pounds(1_400),
            },
        ),
    ],
};

impl DefaultCatalog {
    pub fn sundry_price(&self, category: SundryCategory) -> Pence {
        self.sundries
            .iter()
            .find(|(default_category, _)| *default_category == category)
            .map_or(Pence::ZERO, |(_, price)| *price)
    }

    /// The fallback boiler for a quote tier, rated at the recommended size.
    pub fn boiler(&self, tier: QuoteTier, boiler_type: BoilerType, size_kw: u32) -> Boiler {
        let default = self
            .boilers
            .iter()
            .find(|(default_tier, default_type, _)| {
                *default_tier == tier && *default_type == boiler_type
            })
            .map(|(_, _, default)| default)
            .unwrap_or(&self.boilers[0].2);
        let size_kw = f64::from(size_kw);

        Boiler {
            make: default.make.to_string(),
            model: format!("{} {}", default.model, size_kw),
            boiler_type,
            tier: default.catalog_tier,
            dhw_kw: (boiler_type == BoilerType::Combi).then_some(size_kw),
            central_heating_kw: Some(size_kw),
            flow_rate_lpm: default.flow_rate_lpm,
            warranty_years: default.warranty_years,
            efficiency_rating: default.efficiency_rating.to_string(),
            supply_price: default.supply_price,
        }
    }
}
