//! The remote row source: the external collaborator that owns all
//! pre-computed match data. Everything downstream is read-only.

use anyhow::Result;
use async_trait::async_trait;

use crate::model::{BuyerKind, BuyersResponse, DetailRecord, Grade, SellersResponse};

pub mod http;

pub use http::HttpRowSource;

/// Which grade-count group a drill-down targets. The group decides the
/// shape of the detail records that come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchGroup {
    ClientSellers,
    MarketplaceListings,
}

impl MatchGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchGroup::ClientSellers => "sellers",
            MatchGroup::MarketplaceListings => "listings",
        }
    }
}

/// Row identity for a detail lookup. Buyer ids are only unique within a
/// kind, so the buyer variant carries both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    Seller { company_id: String },
    Buyer { kind: BuyerKind, buyer_id: i64 },
}

#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_sellers(&self) -> Result<SellersResponse>;

    async fn fetch_buyers(&self) -> Result<BuyersResponse>;

    async fn fetch_match_detail(
        &self,
        entity: &EntityRef,
        group: MatchGroup,
        grade: Grade,
    ) -> Result<Vec<DetailRecord>>;
}
