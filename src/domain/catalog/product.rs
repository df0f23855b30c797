//! Product classification: product type and lifecycle stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four product categories a user can pick in the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Fmcg,
    Luxury,
    Electronics,
    Service,
}

impl ProductType {
    /// Returns all product types in catalog order.
    pub fn all() -> &'static [ProductType] {
        &[
            ProductType::Fmcg,
            ProductType::Luxury,
            ProductType::Electronics,
            ProductType::Service,
        ]
    }

    /// Returns the wire key.
    pub fn key(&self) -> &'static str {
        match self {
            ProductType::Fmcg => "fmcg",
            ProductType::Luxury => "luxury",
            ProductType::Electronics => "electronics",
            ProductType::Service => "service",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Catalog row describing a product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductTypeInfo {
    pub key: ProductType,
    pub name: &'static str,
    pub description: &'static str,
}

pub(crate) const PRODUCT_TYPES: [ProductTypeInfo; 4] = [
    ProductTypeInfo {
        key: ProductType::Fmcg,
        name: "FMCG/Consumer Goods",
        description: "Fast-moving consumer products",
    },
    ProductTypeInfo {
        key: ProductType::Luxury,
        name: "Luxury Products",
        description: "Premium, high-differentiation items",
    },
    ProductTypeInfo {
        key: ProductType::Electronics,
        name: "Electronics/Gadgets",
        description: "Technology products",
    },
    ProductTypeInfo {
        key: ProductType::Service,
        name: "Service",
        description: "Intangible offerings",
    },
];

/// Product lifecycle (PLC) stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductStage {
    Introduction,
    Growth,
    Maturity,
    Decline,
}

impl ProductStage {
    /// Returns the stages in lifecycle order.
    pub fn all() -> &'static [ProductStage] {
        &PRODUCT_STAGES
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductStage::Introduction => "Introduction",
            ProductStage::Growth => "Growth",
            ProductStage::Maturity => "Maturity",
            ProductStage::Decline => "Decline",
        }
    }
}

impl fmt::Display for ProductStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub(crate) const PRODUCT_STAGES: [ProductStage; 4] = [
    ProductStage::Introduction,
    ProductStage::Growth,
    ProductStage::Maturity,
    ProductStage::Decline,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_product_type_once() {
        for pt in ProductType::all() {
            assert_eq!(PRODUCT_TYPES.iter().filter(|row| row.key == *pt).count(), 1);
        }
    }

    #[test]
    fn product_type_uses_lowercase_keys_on_the_wire() {
        assert_eq!(serde_json::to_string(&ProductType::Fmcg).unwrap(), "\"fmcg\"");
        let pt: ProductType = serde_json::from_str("\"electronics\"").unwrap();
        assert_eq!(pt, ProductType::Electronics);
    }

    #[test]
    fn unknown_product_type_is_rejected() {
        assert!(serde_json::from_str::<ProductType>("\"toys\"").is_err());
    }

    #[test]
    fn stages_are_in_lifecycle_order() {
        assert_eq!(
            ProductStage::all(),
            &[
                ProductStage::Introduction,
                ProductStage::Growth,
                ProductStage::Maturity,
                ProductStage::Decline
            ]
        );
    }

    #[test]
    fn stage_serializes_as_capitalized_label() {
        assert_eq!(serde_json::to_string(&ProductStage::Growth).unwrap(), "\"Growth\"");
        assert_eq!(ProductStage::Decline.to_string(), "Decline");
    }
}
