use crate::core::catalog::{Sundry, SundryCategory};
use crate::core::catalog_matcher::{BoilerSelection, QuoteTier};
use crate::core::default_catalog::DEFAULT_CATALOG;
use crate::core::units::Pence;
use serde::Serialize;
use tracing::warn;

const BASIC_SUNDRIES: [SundryCategory; 4] = [
    SundryCategory::MagneticFilter,
    SundryCategory::ChemicalFlush,
    SundryCategory::FlueKit,
    SundryCategory::Trvs,
];

/// Installed price of a hot water cylinder, stepped by capacity. No cylinder costs nothing.
pub fn cylinder_price(capacity_l: u32) -> Pence {
    let pounds = match capacity_l {
        0 => 0,
        1..=150 => 1_100,
        151..=180 => 1_400,
        181..=210 => 1_700,
        211..=250 => 2_000,
        251..=300 => 2_300,
        _ => 2_700,
    };

    Pence::from_pounds(pounds)
}

/// Price of the first catalog sundry in a category, or the default for that category.
pub fn sundry_price(sundries: &[Sundry], category: SundryCategory) -> Pence {
    sundries
        .iter()
        .filter(|sundry| sundry.category == category)
        .find_map(Sundry::unit_price)
        .unwrap_or_else(|| {
            warn!(%category, "no priced sundry in catalog, using default");
            DEFAULT_CATALOG.sundry_price(category)
        })
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SundryBundles {
    pub basic: Pence,
    /// The basic bundle plus a smart thermostat.
    pub premium: Pence,
}

pub fn sundry_bundles(sundries: &[Sundry]) -> SundryBundles {
    let basic = BASIC_SUNDRIES
        .iter()
        .map(|category| sundry_price(sundries, *category))
        .sum();

    SundryBundles {
        basic,
        premium: basic + sundry_price(sundries, SundryCategory::SmartThermostat),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TierPrice {
    pub subtotal: Pence,
    pub vat: Pence,
    pub total: Pence,
}

impl TierPrice {
    pub fn from_subtotal(subtotal: Pence) -> Self {
        let vat = subtotal.vat();
        Self {
            subtotal,
            vat,
            total: subtotal + vat,
        }
    }
}

/// Labour rates for the job before and after scaling by complexity and location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LabourPrices {
    pub standard_base: Pence,
    pub premium_base: Pence,
    pub complexity_multiplier: f64,
    pub location_multiplier: f64,
    pub standard: Pence,
    pub premium: Pence,
}

impl LabourPrices {
    pub fn new(
        standard_base: Pence,
        premium_base: Pence,
        complexity_multiplier: f64,
        location_multiplier: f64,
    ) -> Self {
        let scale = complexity_multiplier * location_multiplier;
        Self {
            standard_base,
            premium_base,
            complexity_multiplier,
            location_multiplier,
            standard: standard_base.scaled(scale),
            premium: premium_base.scaled(scale),
        }
    }

    pub fn for_tier(&self, tier: QuoteTier) -> Pence {
        match tier {
            QuoteTier::Standard => self.standard,
            QuoteTier::Premium | QuoteTier::Luxury => self.premium,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub standard_boiler_price: Pence,
    pub premium_boiler_price: Pence,
    pub luxury_boiler_price: Pence,
    pub labour: LabourPrices,
    pub sundries: SundryBundles,
    pub cylinder_price: Pence,
    pub condensate_pump_price: Pence,
    pub standard: TierPrice,
    pub premium: TierPrice,
    pub luxury: TierPrice,
}

impl PriceBreakdown {
    pub fn for_tier(&self, tier: QuoteTier) -> &TierPrice {
        match tier {
            QuoteTier::Standard => &self.standard,
            QuoteTier::Premium => &self.premium,
            QuoteTier::Luxury => &self.luxury,
        }
    }
}

pub struct PriceInputs<'a> {
    pub boilers: &'a BoilerSelection,
    pub labour: LabourPrices,
    pub sundries: SundryBundles,
    pub cylinder_capacity_l: u32,
    /// Unit price of a condensate pump, present only when one has to be fitted.
    pub condensate_pump: Option<Pence>,
}

/// Combine component prices into the three packages, each carrying 20% VAT.
pub fn assemble_prices(inputs: PriceInputs) -> PriceBreakdown {
    let PriceInputs {
        boilers,
        labour,
        sundries,
        cylinder_capacity_l,
        condensate_pump,
    } = inputs;

    let cylinder_price = cylinder_price(cylinder_capacity_l);
    let condensate_pump_price = condensate_pump.unwrap_or(Pence::ZERO);
    let shared = cylinder_price + condensate_pump_price;
    let boiler_price = |tier| boilers.for_tier(tier).boiler.supply_price;

    let standard = boiler_price(QuoteTier::Standard) + labour.standard + sundries.basic + shared;
    let premium = boiler_price(QuoteTier::Premium) + labour.premium + sundries.basic + shared;
    let luxury = boiler_price(QuoteTier::Luxury) + labour.premium + sundries.premium + shared;

    PriceBreakdown {
        standard_boiler_price: boiler_price(QuoteTier::Standard),
        premium_boiler_price: boiler_price(QuoteTier::Premium),
        luxury_boiler_price: boiler_price(QuoteTier::Luxury),
        labour,
        sundries,
        cylinder_price,
        condensate_pump_price,
        standard: TierPrice::from_subtotal(standard),
        premium: TierPrice::from_subtotal(premium),
        luxury: TierPrice::from_subtotal(luxury),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog_matcher::select_boilers;
    use crate::input::BoilerType;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case(0, 0)]
    #[case(120, 110_000)]
    #[case(150, 110_000)]
    #[case(170, 140_000)]
    #[case(210, 170_000)]
    #[case(250, 200_000)]
    #[case(300, 230_000)]
    #[case(350, 270_000)]
    #[case(500, 270_000)]
    fn test_cylinder_price(#[case] capacity: u32, #[case] pence: u64) {
        assert_eq!(cylinder_price(capacity), Pence(pence));
    }

    #[test]
    fn test_sundry_bundles_use_catalog_then_defaults() {
        let sundries = vec![
            Sundry {
                name: "Fernox TF1".into(),
                category: SundryCategory::MagneticFilter,
                price: None,
                price_min: Some(Pence(10_000)),
                price_max: Some(Pence(16_000)),
            },
            Sundry {
                name: "Unpriced flush".into(),
                category: SundryCategory::ChemicalFlush,
                price: None,
                price_min: None,
                price_max: None,
            },
        ];
        assert_eq!(
            sundry_bundles(&sundries),
            SundryBundles {
                basic: Pence(10_000 + 12_000 + 9_500 + 18_000),
                premium: Pence(10_000 + 12_000 + 9_500 + 18_000 + 22_000),
            }
        );
    }

    #[test]
    fn test_condensate_pump_price_comes_from_catalog() {
        let sundries = vec![Sundry {
            name: "Grundfos Conlift1".into(),
            category: SundryCategory::CondensatePump,
            price: None,
            price_min: Some(Pence(21_000)),
            price_max: Some(Pence(27_500)),
        }];
        assert_eq!(
            sundry_price(&sundries, SundryCategory::CondensatePump),
            Pence(21_000)
        );
        assert_eq!(sundry_price(&[], SundryCategory::CondensatePump), Pence(25_000));
    }

    #[test]
    fn test_labour_scaled_by_complexity_and_location() {
        let labour = LabourPrices::new(Pence(85_000), Pence(110_000), 1.3, 1.15);
        assert_eq!(labour.standard, Pence(127_075));
        assert_eq!(labour.premium, Pence(164_450));
        assert_eq!(labour.for_tier(QuoteTier::Luxury), labour.premium);
    }

    #[rstest]
    #[case(Some(Pence(25_000)), 25_000)]
    #[case(None, 0)]
    fn test_assemble_prices(#[case] condensate_pump: Option<Pence>, #[case] pump: u64) {
        let boilers = select_boilers(&[], BoilerType::System, 28);
        let labour = LabourPrices::new(Pence(85_000), Pence(110_000), 1.2, 1.0);
        let sundries = sundry_bundles(&[]);
        let prices = assemble_prices(PriceInputs {
            boilers: &boilers,
            labour,
            sundries,
            cylinder_capacity_l: 210,
            condensate_pump,
        });

        assert_eq!(prices.condensate_pump_price, Pence(pump));
        assert_eq!(prices.cylinder_price, Pence(170_000));
        assert_eq!(
            prices.standard.subtotal,
            Pence(90_000 + 102_000 + 54_500 + 170_000 + pump)
        );
        assert_eq!(
            prices.premium.subtotal,
            Pence(120_000 + 132_000 + 54_500 + 170_000 + pump)
        );
        assert_eq!(
            prices.luxury.subtotal,
            Pence(155_000 + 132_000 + 76_500 + 170_000 + pump)
        );
        for tier in QuoteTier::iter() {
            let price = prices.for_tier(tier);
            assert_eq!(price.vat, price.subtotal.scaled(0.2));
            assert_eq!(price.total, price.subtotal + price.vat);
        }
    }
}
