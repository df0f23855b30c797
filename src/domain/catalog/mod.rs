//! Static reference tables the wizard draws its options from.
//!
//! # Tables
//!
//! - product types and lifecycle stages
//! - Ansoff matrix (market type → strategy)
//! - segmentation options
//! - Porter's five forces
//! - distribution channels keyed by (customization, concentration)
//!
//! All tables are compiled-in constant data. [`ReferenceTables::standard`]
//! hands out the single shared instance.

mod distribution;
mod forces;
mod market;
mod product;
mod segmentation;

pub use distribution::{ChannelInfo, ChannelKey, Customization, DistributionConfig, MarketConcentration};
pub use forces::{CompetitiveForce, ForceLevel};
pub use market::{AnsoffStrategy, MarketType, MarketTypeInfo, Novelty};
pub use product::{ProductStage, ProductType, ProductTypeInfo};
pub use segmentation::{Segmentation, SegmentationInfo};

/// Read-only view over the compiled-in catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTables {
    product_types: &'static [ProductTypeInfo],
    product_stages: &'static [ProductStage],
    market_types: &'static [MarketTypeInfo],
    segmentation: &'static [SegmentationInfo],
    channels: &'static [ChannelInfo],
}

static STANDARD_TABLES: ReferenceTables = ReferenceTables {
    product_types: &product::PRODUCT_TYPES,
    product_stages: &product::PRODUCT_STAGES,
    market_types: &market::MARKET_TYPES,
    segmentation: &segmentation::SEGMENTATION_OPTIONS,
    channels: &distribution::CHANNELS,
};

impl ReferenceTables {
    /// The tables shipped with the application.
    pub fn standard() -> &'static ReferenceTables {
        &STANDARD_TABLES
    }

    pub fn product_types(&self) -> &'static [ProductTypeInfo] {
        self.product_types
    }

    pub fn product_stages(&self) -> &'static [ProductStage] {
        self.product_stages
    }

    pub fn market_types(&self) -> &'static [MarketTypeInfo] {
        self.market_types
    }

    pub fn segmentation_options(&self) -> &'static [SegmentationInfo] {
        self.segmentation
    }

    pub fn channels(&self) -> &'static [ChannelInfo] {
        self.channels
    }

    pub fn product_type(&self, key: ProductType) -> Option<&'static ProductTypeInfo> {
        self.product_types.iter().find(|row| row.key == key)
    }

    pub fn market_type(&self, key: MarketType) -> Option<&'static MarketTypeInfo> {
        self.market_types.iter().find(|row| row.key == key)
    }

    /// Ansoff strategy for a market type.
    pub fn strategy(&self, key: MarketType) -> Option<AnsoffStrategy> {
        self.market_type(key).map(|row| row.strategy)
    }

    pub fn channel(&self, key: ChannelKey) -> Option<&'static ChannelInfo> {
        self.channels.iter().find(|row| row.key == key)
    }

    /// Channel for a distribution configuration; `None` until both answers are set.
    pub fn get_channel(&self, config: &DistributionConfig) -> Option<&'static ChannelInfo> {
        self.channel(config.key()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> &'static ReferenceTables {
        ReferenceTables::standard()
    }

    #[test]
    fn high_concentrated_resolves_to_direct_distribution() {
        let config = DistributionConfig::new(Customization::High, MarketConcentration::Concentrated);
        let channel = tables().get_channel(&config).unwrap();
        assert_eq!(channel.name, "Direct Distribution");
        assert_eq!(channel.model, "VMS (Vertical Marketing System)");
    }

    #[test]
    fn low_fragmented_resolves_to_third_party_distribution() {
        let config = DistributionConfig::new(Customization::Low, MarketConcentration::Fragmented);
        let channel = tables().get_channel(&config).unwrap();
        assert_eq!(channel.name, "Third-Party Intensive Distribution");
        assert_eq!(channel.examples.len(), 5);
    }

    #[test]
    fn mixed_combinations_resolve_to_hybrids() {
        let hf = DistributionConfig::new(Customization::High, MarketConcentration::Fragmented);
        let lc = DistributionConfig::new(Customization::Low, MarketConcentration::Concentrated);
        assert_eq!(tables().get_channel(&hf).unwrap().model, "Hybrid VMS");
        assert_eq!(tables().get_channel(&lc).unwrap().model, "Hybrid Traditional");
    }

    #[test]
    fn incomplete_config_has_no_channel() {
        let partial = DistributionConfig {
            customization: Some(Customization::Low),
            market_concentration: None,
        };
        assert!(tables().get_channel(&partial).is_none());
        assert!(tables().get_channel(&DistributionConfig::default()).is_none());
    }

    #[test]
    fn every_enum_value_has_a_catalog_row() {
        for pt in ProductType::all() {
            assert!(tables().product_type(*pt).is_some());
        }
        for seg in Segmentation::all() {
            assert!(tables().segmentation_options().iter().any(|row| row.key == *seg));
        }
        for mt in [
            MarketType::NewNew,
            MarketType::NewExisting,
            MarketType::ExistingNew,
            MarketType::ExistingExisting,
        ] {
            assert!(tables().strategy(mt).is_some());
        }
    }

    #[test]
    fn product_names_match_catalog() {
        assert_eq!(tables().product_type(ProductType::Fmcg).unwrap().name, "FMCG/Consumer Goods");
        assert_eq!(tables().product_type(ProductType::Service).unwrap().name, "Service");
    }
}
