//! Table view-model: the one parametrized filter/sort capability behind
//! every dashboard page.
//!
//! `project` is a pure function of (rows, query, category filter, sort).
//! Filtering runs before sorting; sorting happens on a fresh copy so the
//! canonical collection keeps its source order for the unsorted fallback.

use crate::model::{BuyerKind, BuyerRow, SellerRow};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn flip(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

impl FromStr for SortDir {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDir::Asc),
            "desc" => Ok(SortDir::Desc),
            _ => Err(()),
        }
    }
}

/// Ordering domain for sort keys. Text keys compare case-insensitively;
/// callers lowercase at construction so comparison stays allocation-free.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Int(i64),
    Text(String),
}

impl SortValue {
    pub fn text(s: &str) -> Self {
        SortValue::Text(s.to_lowercase())
    }

    fn cmp_asc(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Int(a), SortValue::Int(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            // A single key always yields a single variant; mixed
            // comparison is unreachable but must not panic.
            _ => Ordering::Equal,
        }
    }
}

/// Buyer category filter. `All` is a no-op; seller rows always match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(BuyerKind),
}

impl CategoryFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(CategoryFilter::All);
        }
        BuyerKind::parse(s).map(CategoryFilter::Only)
    }
}

/// One page's row type: how it matches a text query, how it responds to
/// the category filter, and what each sort key orders by.
pub trait TableRow: Clone {
    type Key: Copy + PartialEq;

    /// Case-insensitive substring match; `q_lower` is already lowercased.
    fn matches_query(&self, q_lower: &str) -> bool;

    fn matches_filter(&self, filter: &CategoryFilter) -> bool {
        let _ = filter;
        true
    }

    fn sort_value(&self, key: Self::Key) -> SortValue;
}

/// Filter then sort, producing a new ordered view. `sort: None` is the
/// unknown-key fallback: the filtered rows keep their source order.
pub fn project<R: TableRow>(
    rows: &[R],
    query: &str,
    filter: &CategoryFilter,
    sort: Option<(R::Key, SortDir)>,
) -> Vec<R> {
    let q = query.trim().to_lowercase();
    let mut out: Vec<R> = rows
        .iter()
        .filter(|r| r.matches_filter(filter))
        .filter(|r| q.is_empty() || r.matches_query(&q))
        .cloned()
        .collect();

    if let Some((key, dir)) = sort {
        // sort_by is stable: ties keep filtered order.
        out.sort_by(|a, b| {
            let ord = a.sort_value(key).cmp_asc(&b.sort_value(key));
            match dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
    }
    out
}

/// Active (key, direction) pair with the header-click toggle contract:
/// re-selecting the active key flips direction, selecting a new key
/// adopts it and resets to descending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableState<K: Copy + PartialEq> {
    pub key: K,
    pub dir: SortDir,
}

impl<K: Copy + PartialEq> TableState<K> {
    pub fn new(key: K, dir: SortDir) -> Self {
        Self { key, dir }
    }

    pub fn toggle(&mut self, key: K) {
        if self.key == key {
            self.dir = self.dir.flip();
        } else {
            self.key = key;
            self.dir = SortDir::Desc;
        }
    }

    pub fn sort(&self) -> Option<(K, SortDir)> {
        Some((self.key, self.dir))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellerSortKey {
    CompanyName,
    CreatedAt,
    ClientA,
    ClientB,
    PeA,
    PeB,
    TotalA,
}

impl FromStr for SellerSortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company_name" => Ok(SellerSortKey::CompanyName),
            "created_at" => Ok(SellerSortKey::CreatedAt),
            "client_a" => Ok(SellerSortKey::ClientA),
            "client_b" => Ok(SellerSortKey::ClientB),
            "pe_a" => Ok(SellerSortKey::PeA),
            "pe_b" => Ok(SellerSortKey::PeB),
            "total_a" => Ok(SellerSortKey::TotalA),
            _ => Err(()),
        }
    }
}

/// Epoch millis for the recency sort; unparseable timestamps sort first.
fn created_at_millis(raw: &str) -> i64 {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

impl TableRow for SellerRow {
    type Key = SellerSortKey;

    fn matches_query(&self, q_lower: &str) -> bool {
        self.company_name.to_lowercase().contains(q_lower)
            || self
                .domain
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(q_lower))
    }

    fn sort_value(&self, key: SellerSortKey) -> SortValue {
        match key {
            SellerSortKey::CompanyName => SortValue::text(&self.company_name),
            SellerSortKey::CreatedAt => SortValue::Int(created_at_millis(&self.created_at)),
            SellerSortKey::ClientA => SortValue::Int(i64::from(self.matches.client.a)),
            SellerSortKey::ClientB => SortValue::Int(i64::from(self.matches.client.b)),
            SellerSortKey::PeA => SortValue::Int(i64::from(self.matches.pe.a)),
            SellerSortKey::PeB => SortValue::Int(i64::from(self.matches.pe.b)),
            SellerSortKey::TotalA => SortValue::Int(i64::from(self.total_a())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyerSortKey {
    BuyerName,
    BuyerType,
    SellersTotal,
    ListingsTotal,
    TotalA,
}

impl FromStr for BuyerSortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer_name" => Ok(BuyerSortKey::BuyerName),
            "buyer_type" => Ok(BuyerSortKey::BuyerType),
            "sellers_total" => Ok(BuyerSortKey::SellersTotal),
            "listings_total" => Ok(BuyerSortKey::ListingsTotal),
            "total_a" => Ok(BuyerSortKey::TotalA),
            _ => Err(()),
        }
    }
}

impl TableRow for BuyerRow {
    type Key = BuyerSortKey;

    fn matches_query(&self, q_lower: &str) -> bool {
        self.buyer_name.to_lowercase().contains(q_lower)
    }

    fn matches_filter(&self, filter: &CategoryFilter) -> bool {
        match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(kind) => self.buyer_type == *kind,
        }
    }

    fn sort_value(&self, key: BuyerSortKey) -> SortValue {
        match key {
            BuyerSortKey::BuyerName => SortValue::text(&self.buyer_name),
            BuyerSortKey::BuyerType => SortValue::text(self.buyer_type.as_str()),
            BuyerSortKey::SellersTotal => SortValue::Int(i64::from(self.matches.sellers.total())),
            BuyerSortKey::ListingsTotal => {
                SortValue::Int(i64::from(self.matches.listings.total()))
            }
            BuyerSortKey::TotalA => SortValue::Int(i64::from(self.total_a())),
        }
    }
}
