//! Wire-format decoding: both row envelopes and both detail-record
//! variants, from JSON captured against the match service.

use matchdash::format::price_label;
use matchdash::model::{
    BuyerKind, BuyersResponse, DetailRecord, Grade, MatchDetailResponse, SellersResponse,
};

const SELLERS_JSON: &str = r#"{
  "sellers": [
    {
      "company_id": "c-1001",
      "company_name": "Acme Industrial",
      "domain": "acme.example",
      "created_at": "2024-03-05T09:30:00Z",
      "matches": {
        "client": { "a": 2, "b": 1, "c": 0 },
        "pe": { "a": 0, "b": 0, "c": 0 }
      },
      "seller_card_url": "/cards/c-1001"
    },
    {
      "company_id": "c-1002",
      "company_name": "Zeta Logistics",
      "domain": null,
      "created_at": "2024-06-01T12:00:00Z",
      "matches": {
        "client": { "a": 0, "b": 0, "c": 0 },
        "pe": { "a": 1, "b": 0, "c": 0 }
      },
      "seller_card_url": "/cards/c-1002"
    }
  ],
  "total": 2
}"#;

const BUYERS_JSON: &str = r#"{
  "buyers": [
    {
      "buyer_id": 42,
      "buyer_type": "client",
      "buyer_name": "Blue Harbor Group",
      "matches": {
        "sellers": { "a": 3, "b": 0, "c": 1 },
        "listings": { "a": 0, "b": 2, "c": 0 }
      }
    },
    {
      "buyer_id": 42,
      "buyer_type": "pe_firm",
      "buyer_name": "Granite Peak Capital",
      "matches": {
        "sellers": { "a": 0, "b": 0, "c": 0 },
        "listings": { "a": 5, "b": 1, "c": 0 }
      }
    }
  ],
  "total": 2
}"#;

const DETAIL_JSON: &str = r#"{
  "items": [
    {
      "group": "sellers",
      "company_id": "c-1001",
      "company_name": "Acme Industrial",
      "grade": "a",
      "seller_card_url": "/cards/c-1001"
    },
    {
      "group": "listings",
      "listing_id": "l-77",
      "listing_name": "Regional HVAC Services",
      "grade": "b",
      "asking_price": 2450000.0,
      "location": "Austin, TX",
      "listing_url": "https://listings.example/l-77"
    },
    {
      "group": "listings",
      "listing_id": "l-78",
      "listing_name": "Niche SaaS Tooling",
      "grade": "c",
      "asking_price": null,
      "location": null,
      "listing_url": "https://listings.example/l-78"
    }
  ]
}"#;

// ---------------------------------------------------------------------------
// Sellers envelope
// ---------------------------------------------------------------------------
#[test]
fn sellers_envelope_decodes() {
    let resp: SellersResponse = serde_json::from_str(SELLERS_JSON).unwrap();
    assert_eq!(resp.total, 2);
    assert_eq!(resp.sellers.len(), 2);

    let acme = &resp.sellers[0];
    assert_eq!(acme.company_name, "Acme Industrial");
    assert_eq!(acme.domain.as_deref(), Some("acme.example"));
    assert_eq!(acme.matches.client.a, 2);
    assert_eq!(acme.total_a(), 2);

    let zeta = &resp.sellers[1];
    assert!(zeta.domain.is_none());
    assert!(zeta.matches.client.is_empty());
    assert_eq!(zeta.total_a(), 1);
}

// ---------------------------------------------------------------------------
// Buyers envelope, where identity is the (kind, id) pair
// ---------------------------------------------------------------------------
#[test]
fn buyers_envelope_decodes() {
    let resp: BuyersResponse = serde_json::from_str(BUYERS_JSON).unwrap();
    assert_eq!(resp.buyers.len(), 2);

    // Same numeric id, different kinds: two distinct rows.
    assert_eq!(resp.buyers[0].buyer_id, resp.buyers[1].buyer_id);
    assert_eq!(resp.buyers[0].buyer_type, BuyerKind::Client);
    assert_eq!(resp.buyers[1].buyer_type, BuyerKind::PeFirm);
    assert_eq!(resp.buyers[1].total_a(), 5);
}

// ---------------------------------------------------------------------------
// Detail records, a tagged union keyed by group
// ---------------------------------------------------------------------------
#[test]
fn detail_variants_decode() {
    let resp: MatchDetailResponse = serde_json::from_str(DETAIL_JSON).unwrap();
    assert_eq!(resp.items.len(), 3);

    match &resp.items[0] {
        DetailRecord::Seller(s) => {
            assert_eq!(s.grade, Grade::A);
            assert_eq!(s.seller_card_url, "/cards/c-1001");
        }
        other => panic!("expected seller variant, got {other:?}"),
    }

    match &resp.items[1] {
        DetailRecord::Listing(l) => {
            assert_eq!(l.grade, Grade::B);
            assert_eq!(l.location.as_deref(), Some("Austin, TX"));
            assert_eq!(price_label(l.asking_price), "$2.5M");
        }
        other => panic!("expected listing variant, got {other:?}"),
    }

    match &resp.items[2] {
        DetailRecord::Listing(l) => {
            assert!(l.asking_price.is_none());
            assert_eq!(price_label(l.asking_price), "N/A");
        }
        other => panic!("expected listing variant, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Rows with a kind outside the closed enumeration are rejected
// ---------------------------------------------------------------------------
#[test]
fn unknown_buyer_kind_rejected() {
    let bad = r#"{
      "buyers": [
        {
          "buyer_id": 1,
          "buyer_type": "sovereign_fund",
          "buyer_name": "X",
          "matches": {
            "sellers": { "a": 0, "b": 0, "c": 0 },
            "listings": { "a": 0, "b": 0, "c": 0 }
          }
        }
      ],
      "total": 1
    }"#;
    assert!(serde_json::from_str::<BuyersResponse>(bad).is_err());
}
