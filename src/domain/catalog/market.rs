//! Ansoff matrix: market/product novelty mapped to a growth strategy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the market or the product is new or already served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Novelty {
    New,
    Existing,
}

/// A cell of the Ansoff matrix, named market-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarketType {
    #[serde(rename = "new-new")]
    NewNew,
    #[serde(rename = "new-existing")]
    NewExisting,
    #[serde(rename = "existing-new")]
    ExistingNew,
    #[serde(rename = "existing-existing")]
    ExistingExisting,
}

impl MarketType {
    /// Market axis of the cell.
    pub fn market(&self) -> Novelty {
        match self {
            MarketType::NewNew | MarketType::NewExisting => Novelty::New,
            MarketType::ExistingNew | MarketType::ExistingExisting => Novelty::Existing,
        }
    }

    /// Product axis of the cell.
    pub fn product(&self) -> Novelty {
        match self {
            MarketType::NewNew | MarketType::ExistingNew => Novelty::New,
            MarketType::NewExisting | MarketType::ExistingExisting => Novelty::Existing,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MarketType::NewNew => "new-new",
            MarketType::NewExisting => "new-existing",
            MarketType::ExistingNew => "existing-new",
            MarketType::ExistingExisting => "existing-existing",
        }
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Growth strategy recommended by the Ansoff matrix; serialized as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnsoffStrategy {
    Diversification,
    #[serde(rename = "Market Development")]
    MarketDevelopment,
    #[serde(rename = "Product Development")]
    ProductDevelopment,
    #[serde(rename = "Market Penetration")]
    MarketPenetration,
}

impl AnsoffStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            AnsoffStrategy::Diversification => "Diversification",
            AnsoffStrategy::MarketDevelopment => "Market Development",
            AnsoffStrategy::ProductDevelopment => "Product Development",
            AnsoffStrategy::MarketPenetration => "Market Penetration",
        }
    }
}

impl fmt::Display for AnsoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Catalog row for one Ansoff matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketTypeInfo {
    pub key: MarketType,
    pub name: &'static str,
    pub strategy: AnsoffStrategy,
}

pub(crate) const MARKET_TYPES: [MarketTypeInfo; 4] = [
    MarketTypeInfo {
        key: MarketType::NewNew,
        name: "New Market + New Product",
        strategy: AnsoffStrategy::Diversification,
    },
    MarketTypeInfo {
        key: MarketType::NewExisting,
        name: "New Market + Existing Product",
        strategy: AnsoffStrategy::MarketDevelopment,
    },
    MarketTypeInfo {
        key: MarketType::ExistingNew,
        name: "Existing Market + New Product",
        strategy: AnsoffStrategy::ProductDevelopment,
    },
    MarketTypeInfo {
        key: MarketType::ExistingExisting,
        name: "Existing Market + Existing Product",
        strategy: AnsoffStrategy::MarketPenetration,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_name_market_first() {
        assert_eq!(MarketType::NewExisting.market(), Novelty::New);
        assert_eq!(MarketType::NewExisting.product(), Novelty::Existing);
        assert_eq!(MarketType::ExistingNew.market(), Novelty::Existing);
        assert_eq!(MarketType::ExistingNew.product(), Novelty::New);
    }

    #[test]
    fn strategy_serializes_as_its_label() {
        for row in MARKET_TYPES {
            assert_eq!(
                serde_json::to_value(row.strategy).unwrap(),
                serde_json::Value::from(row.strategy.label())
            );
        }
        assert_eq!(
            serde_json::to_string(&AnsoffStrategy::MarketDevelopment).unwrap(),
            "\"Market Development\""
        );
    }

    #[test]
    fn market_type_uses_dashed_keys_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&MarketType::NewExisting).unwrap(),
            "\"new-existing\""
        );
        let mt: MarketType = serde_json::from_str("\"existing-existing\"").unwrap();
        assert_eq!(mt, MarketType::ExistingExisting);
    }

    #[test]
    fn matrix_assigns_expected_strategies() {
        let strategy = |key| MARKET_TYPES.iter().find(|row| row.key == key).unwrap().strategy;
        assert_eq!(strategy(MarketType::NewNew).label(), "Diversification");
        assert_eq!(strategy(MarketType::NewExisting).label(), "Market Development");
        assert_eq!(strategy(MarketType::ExistingNew).label(), "Product Development");
        assert_eq!(strategy(MarketType::ExistingExisting).label(), "Market Penetration");
    }
}
