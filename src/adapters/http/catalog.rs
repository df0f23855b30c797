//! Read-only catalog endpoint serving the reference tables.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::domain::catalog::{
    AnsoffStrategy, ChannelInfo, MarketType, MarketTypeInfo, Novelty, ProductStage,
    ProductTypeInfo, ReferenceTables, SegmentationInfo,
};

/// One Ansoff cell with both axes spelled out.
#[derive(Debug, Clone, Serialize)]
pub struct MarketTypeEntry {
    pub key: MarketType,
    pub name: &'static str,
    pub market: Novelty,
    pub product: Novelty,
    pub strategy: AnsoffStrategy,
}

impl From<&MarketTypeInfo> for MarketTypeEntry {
    fn from(info: &MarketTypeInfo) -> Self {
        Self {
            key: info.key,
            name: info.name,
            market: info.key.market(),
            product: info.key.product(),
            strategy: info.strategy,
        }
    }
}

/// One channel row together with its `customization-concentration` key.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelEntry {
    pub key: String,
    #[serde(flatten)]
    pub info: &'static ChannelInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub product_types: &'static [ProductTypeInfo],
    pub product_stages: &'static [ProductStage],
    pub market_types: Vec<MarketTypeEntry>,
    pub segmentation_options: &'static [SegmentationInfo],
    pub channels: Vec<ChannelEntry>,
}

impl From<&'static ReferenceTables> for CatalogResponse {
    fn from(tables: &'static ReferenceTables) -> Self {
        Self {
            product_types: tables.product_types(),
            product_stages: tables.product_stages(),
            market_types: tables.market_types().iter().map(MarketTypeEntry::from).collect(),
            segmentation_options: tables.segmentation_options(),
            channels: tables
                .channels()
                .iter()
                .map(|info| ChannelEntry {
                    key: info.key.to_string(),
                    info,
                })
                .collect(),
        }
    }
}

/// GET /api/catalog - All reference tables
pub async fn get_catalog(State(tables): State<&'static ReferenceTables>) -> Json<CatalogResponse> {
    Json(tables.into())
}

pub fn catalog_routes(tables: &'static ReferenceTables) -> Router {
    Router::new().route("/", get(get_catalog)).with_state(tables)
}
