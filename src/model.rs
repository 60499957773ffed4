//! Wire and domain types for the match dashboard API.
//!
//! Rows are immutable snapshots fetched once per page visit. Nothing here
//! mutates; derived values (`total_a` and friends) are always recomputed
//! from the grade counts rather than cached on the row.

use serde::Deserialize;
use std::fmt;

/// Per-grade match counts for one grade-count group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MatchCounts {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl MatchCounts {
    pub fn total(&self) -> u32 {
        self.a + self.b + self.c
    }

    /// All three tiers at zero is the canonical "no matches" state.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Match-quality tier, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    A,
    B,
    C,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "a",
            Grade::B => "b",
            Grade::C => "c",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
        })
    }
}

/// Buyer category. Buyer ids are only unique within a kind, so row
/// identity for buyers is the (kind, id) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BuyerKind {
    #[serde(rename = "client")]
    Client,
    #[serde(rename = "pe_firm")]
    PeFirm,
}

impl BuyerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuyerKind::Client => "client",
            BuyerKind::PeFirm => "pe_firm",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "client" => Some(BuyerKind::Client),
            "pe_firm" => Some(BuyerKind::PeFirm),
            _ => None,
        }
    }
}

/// The two grade-count groups carried by a seller row.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SellerMatches {
    pub client: MatchCounts,
    pub pe: MatchCounts,
}

/// One seller as returned by the rows endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SellerRow {
    pub company_id: String,
    pub company_name: String,
    pub domain: Option<String>,
    /// RFC3339 creation timestamp, used for the recency sort.
    pub created_at: String,
    pub matches: SellerMatches,
    pub seller_card_url: String,
}

impl SellerRow {
    /// A-tier count summed across both groups. Derived, never stored.
    pub fn total_a(&self) -> u32 {
        self.matches.client.a + self.matches.pe.a
    }

    /// Sum of all six counts; zero means the row has no matches at all.
    pub fn match_total(&self) -> u32 {
        self.matches.client.total() + self.matches.pe.total()
    }
}

/// The two grade-count groups carried by a buyer row.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct BuyerMatches {
    pub sellers: MatchCounts,
    pub listings: MatchCounts,
}

/// One buyer as returned by the rows endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BuyerRow {
    pub buyer_id: i64,
    pub buyer_type: BuyerKind,
    pub buyer_name: String,
    pub matches: BuyerMatches,
}

impl BuyerRow {
    pub fn total_a(&self) -> u32 {
        self.matches.sellers.a + self.matches.listings.a
    }

    pub fn match_total(&self) -> u32 {
        self.matches.sellers.total() + self.matches.listings.total()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SellersResponse {
    pub sellers: Vec<SellerRow>,
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuyersResponse {
    pub buyers: Vec<BuyerRow>,
    pub total: u64,
}

/// A matched seller behind one grade-count cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SellerMatchDetail {
    pub company_id: String,
    pub company_name: String,
    pub grade: Grade,
    pub seller_card_url: String,
}

/// A matched marketplace listing behind one grade-count cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingMatchDetail {
    pub listing_id: String,
    pub listing_name: String,
    pub grade: Grade,
    pub asking_price: Option<f64>,
    pub location: Option<String>,
    pub listing_url: String,
}

/// Detail records come in two shapes depending on which group was
/// drilled into. The wire tags each item with its group name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "group")]
pub enum DetailRecord {
    #[serde(rename = "sellers")]
    Seller(SellerMatchDetail),
    #[serde(rename = "listings")]
    Listing(ListingMatchDetail),
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchDetailResponse {
    pub items: Vec<DetailRecord>,
}
