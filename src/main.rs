use anyhow::Result;

use matchdash::config::Config;
use matchdash::format::{count_cell, date_label, group_cell, price_label};
use matchdash::logging::{json_log, log, obj, v_num, v_str, Domain, Level};
use matchdash::lookup::{run_lookup, LookupSession, LookupState};
use matchdash::model::{BuyerRow, DetailRecord, Grade, SellerRow};
use matchdash::source::{EntityRef, HttpRowSource, MatchGroup, RowSource};
use matchdash::summary::{summarize_buyers, summarize_sellers};
use matchdash::table::{project, CategoryFilter, SortDir};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    json_log(
        "startup",
        obj(&[
            ("page", v_str(&cfg.page)),
            ("api_base", v_str(&cfg.api_base)),
        ]),
    );

    let source = HttpRowSource::new(&cfg)?;
    match cfg.page.as_str() {
        "buyers" => render_buyers(&cfg, &source).await,
        _ => render_sellers(&cfg, &source).await,
    }
}

fn sort_dir(cfg: &Config) -> SortDir {
    cfg.sort_dir.parse().unwrap_or(SortDir::Desc)
}

async fn render_sellers(cfg: &Config, source: &HttpRowSource) -> Result<()> {
    let rows: Vec<SellerRow> = match source.fetch_sellers().await {
        Ok(resp) => resp.sellers,
        Err(err) => {
            log(
                Level::Error,
                Domain::Fetch,
                "rows_fetch_failed",
                obj(&[("page", v_str("sellers")), ("error", v_str(&err.to_string()))]),
            );
            // Page-level error state: the message replaces the table.
            println!("Error: failed to fetch sellers: {err}");
            std::process::exit(1);
        }
    };

    let stats = summarize_sellers(&rows);
    log(
        Level::Info,
        Domain::Summary,
        "seller_summary",
        obj(&[
            ("sellers", v_num(stats.total as f64)),
            ("total_a", v_num(stats.total_a as f64)),
            ("total_b", v_num(stats.total_b as f64)),
            ("with_matches", v_num(stats.with_matches as f64)),
        ]),
    );
    println!(
        "{} sellers | {} A matches | {} B matches | {} with matches",
        stats.total, stats.total_a, stats.total_b, stats.with_matches
    );

    // Unknown sort key names fall back to source order.
    let sort = cfg.sort_key.parse().ok().map(|key| (key, sort_dir(cfg)));
    let view = project(&rows, &cfg.query, &CategoryFilter::All, sort);
    log(
        Level::Debug,
        Domain::Table,
        "projection",
        obj(&[
            ("page", v_str("sellers")),
            ("query", v_str(&cfg.query)),
            ("rows_in", v_num(rows.len() as f64)),
            ("rows_out", v_num(view.len() as f64)),
        ]),
    );

    if view.is_empty() {
        if cfg.query.is_empty() {
            println!("No sellers found");
        } else {
            println!("No sellers match your search");
        }
        return maybe_drill_down(source).await;
    }

    println!(
        "{:<28} {:<24} {:<12} {:>14} {:>14} {:>8}",
        "COMPANY", "DOMAIN", "DATE", "CLIENT", "PE", "TOTAL A"
    );
    for seller in &view {
        println!(
            "{:<28} {:<24} {:<12} {:>14} {:>14} {:>8}",
            seller.company_name,
            seller.domain.as_deref().unwrap_or("-"),
            date_label(&seller.created_at),
            group_cell(&seller.matches.client),
            group_cell(&seller.matches.pe),
            count_cell(seller.total_a()),
        );
    }

    maybe_drill_down(source).await
}

async fn render_buyers(cfg: &Config, source: &HttpRowSource) -> Result<()> {
    let rows: Vec<BuyerRow> = match source.fetch_buyers().await {
        Ok(resp) => resp.buyers,
        Err(err) => {
            log(
                Level::Error,
                Domain::Fetch,
                "rows_fetch_failed",
                obj(&[("page", v_str("buyers")), ("error", v_str(&err.to_string()))]),
            );
            println!("Error: failed to fetch buyers: {err}");
            std::process::exit(1);
        }
    };

    let stats = summarize_buyers(&rows);
    log(
        Level::Info,
        Domain::Summary,
        "buyer_summary",
        obj(&[
            ("buyers", v_num(stats.total as f64)),
            ("clients", v_num(stats.client_count as f64)),
            ("pe_firms", v_num(stats.pe_count as f64)),
            ("total_a", v_num(stats.total_a as f64)),
            ("total_b", v_num(stats.total_b as f64)),
        ]),
    );
    println!(
        "{} clients | {} PE firms | {} A matches | {} B matches",
        stats.client_count, stats.pe_count, stats.total_a, stats.total_b
    );

    let filter = CategoryFilter::parse(&cfg.type_filter).unwrap_or(CategoryFilter::All);
    let sort = cfg.sort_key.parse().ok().map(|key| (key, sort_dir(cfg)));
    let view = project(&rows, &cfg.query, &filter, sort);
    log(
        Level::Debug,
        Domain::Table,
        "projection",
        obj(&[
            ("page", v_str("buyers")),
            ("query", v_str(&cfg.query)),
            ("type_filter", v_str(&cfg.type_filter)),
            ("rows_in", v_num(rows.len() as f64)),
            ("rows_out", v_num(view.len() as f64)),
        ]),
    );

    if view.is_empty() {
        if cfg.query.is_empty() && filter == CategoryFilter::All {
            println!("No buyers found");
        } else {
            println!("No buyers match your filters");
        }
        return maybe_drill_down(source).await;
    }

    println!(
        "{:<28} {:<10} {:>16} {:>16} {:>8}",
        "BUYER", "TYPE", "SELLERS", "LISTINGS", "TOTAL A"
    );
    for buyer in &view {
        println!(
            "{:<28} {:<10} {:>16} {:>16} {:>8}",
            buyer.buyer_name,
            buyer.buyer_type.as_str(),
            group_cell(&buyer.matches.sellers),
            group_cell(&buyer.matches.listings),
            count_cell(buyer.total_a()),
        );
    }

    maybe_drill_down(source).await
}

/// Optional drill-down after the table: set DETAIL_ENTITY (a seller
/// company id, or "<kind>:<buyer_id>"), DETAIL_GROUP, and DETAIL_GRADE.
async fn maybe_drill_down(source: &dyn RowSource) -> Result<()> {
    let Some(entity) = detail_entity_from_env() else {
        return Ok(());
    };
    let group = match std::env::var("DETAIL_GROUP").as_deref() {
        Ok("listings") => MatchGroup::MarketplaceListings,
        _ => MatchGroup::ClientSellers,
    };
    let grade = match std::env::var("DETAIL_GRADE").as_deref() {
        Ok("b") => Grade::B,
        Ok("c") => Grade::C,
        _ => Grade::A,
    };

    let mut session = LookupSession::new();
    run_lookup(&mut session, source, &entity, group, grade).await;
    match session.state() {
        LookupState::Populated(items) => {
            println!("-- {} grade-{} matches --", items.len(), grade);
            for item in items {
                match item {
                    DetailRecord::Seller(s) => {
                        println!("{:<28} {:<6} {}", s.company_name, s.grade, s.seller_card_url);
                    }
                    DetailRecord::Listing(l) => {
                        println!(
                            "{:<28} {:<6} {:>8} {:<18} {}",
                            l.listing_name,
                            l.grade,
                            price_label(l.asking_price),
                            l.location.as_deref().unwrap_or("-"),
                            l.listing_url,
                        );
                    }
                }
            }
        }
        // Failed already logged inside the session; both render the same.
        _ => println!("No matches found"),
    }
    Ok(())
}

fn detail_entity_from_env() -> Option<EntityRef> {
    let raw = std::env::var("DETAIL_ENTITY").ok()?;
    if let Some((kind, id)) = raw.split_once(':') {
        let kind = matchdash::model::BuyerKind::parse(kind)?;
        let buyer_id = id.parse().ok()?;
        return Some(EntityRef::Buyer { kind, buyer_id });
    }
    Some(EntityRef::Seller { company_id: raw })
}
