//! Headline roll-ups computed from the full, unfiltered row collection.
//!
//! The summary is deliberately independent of the active filter/sort so
//! the headline numbers stay a stable denominator while the table below
//! shows a filtered subset.

use crate::model::{BuyerKind, BuyerRow, SellerRow};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SellerSummary {
    pub total: usize,
    pub total_a: u64,
    pub total_b: u64,
    /// Rows where any of the six counts is positive.
    pub with_matches: usize,
}

pub fn summarize_sellers(rows: &[SellerRow]) -> SellerSummary {
    let mut s = SellerSummary {
        total: rows.len(),
        ..SellerSummary::default()
    };
    for row in rows {
        s.total_a += u64::from(row.matches.client.a) + u64::from(row.matches.pe.a);
        s.total_b += u64::from(row.matches.client.b) + u64::from(row.matches.pe.b);
        if row.match_total() > 0 {
            s.with_matches += 1;
        }
    }
    s
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuyerSummary {
    pub total: usize,
    pub client_count: usize,
    pub pe_count: usize,
    pub total_a: u64,
    pub total_b: u64,
}

pub fn summarize_buyers(rows: &[BuyerRow]) -> BuyerSummary {
    let mut s = BuyerSummary {
        total: rows.len(),
        ..BuyerSummary::default()
    };
    for row in rows {
        match row.buyer_type {
            BuyerKind::Client => s.client_count += 1,
            BuyerKind::PeFirm => s.pe_count += 1,
        }
        s.total_a += u64::from(row.matches.sellers.a) + u64::from(row.matches.listings.a);
        s.total_b += u64::from(row.matches.sellers.b) + u64::from(row.matches.listings.b);
    }
    s
}
