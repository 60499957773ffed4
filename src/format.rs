//! Presentation helpers for table cells.
//!
//! A grade-count group with all tiers at zero renders the "-" sentinel,
//! never a zero badge; that distinction is part of the data contract, not
//! a styling choice.

use crate::model::MatchCounts;

/// Single count cell: "-" for zero, the number otherwise.
pub fn count_cell(n: u32) -> String {
    if n == 0 {
        "-".to_string()
    } else {
        n.to_string()
    }
}

/// Compact badge line for one grade-count group, skipping zero tiers.
pub fn group_cell(counts: &MatchCounts) -> String {
    if counts.is_empty() {
        return "-".to_string();
    }
    let mut parts = Vec::with_capacity(3);
    for (n, tier) in [(counts.a, "A"), (counts.b, "B"), (counts.c, "C")] {
        if n > 0 {
            parts.push(format!("{n}{tier}"));
        }
    }
    parts.join(" ")
}

/// Listing price label in three tiers: millions with one decimal, whole
/// thousands, then the raw value. Absent prices render "N/A".
pub fn price_label(price: Option<f64>) -> String {
    match price {
        None => "N/A".to_string(),
        Some(v) if v >= 1_000_000.0 => format!("${:.1}M", v / 1_000_000.0),
        Some(v) if v >= 1_000.0 => format!("${}K", (v / 1_000.0).round() as i64),
        Some(v) => format!("${}", v.round() as i64),
    }
}

/// RFC3339 timestamp to a date label, falling back to the raw string.
pub fn date_label(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_renders_sentinel() {
        assert_eq!(count_cell(0), "-");
        assert_eq!(count_cell(7), "7");
    }

    #[test]
    fn empty_group_renders_sentinel_not_zero_badges() {
        assert_eq!(group_cell(&MatchCounts { a: 0, b: 0, c: 0 }), "-");
        assert_eq!(group_cell(&MatchCounts { a: 2, b: 0, c: 1 }), "2A 1C");
        assert_eq!(group_cell(&MatchCounts { a: 1, b: 1, c: 1 }), "1A 1B 1C");
    }

    #[test]
    fn price_tiers() {
        assert_eq!(price_label(None), "N/A");
        assert_eq!(price_label(Some(2_450_000.0)), "$2.5M");
        assert_eq!(price_label(Some(1_000_000.0)), "$1.0M");
        assert_eq!(price_label(Some(45_000.0)), "$45K");
        assert_eq!(price_label(Some(999_499.0)), "$999K");
        assert_eq!(price_label(Some(750.0)), "$750");
    }

    #[test]
    fn date_label_falls_back_to_raw() {
        assert_eq!(date_label("2024-03-05T09:30:00Z"), "2024-03-05");
        assert_eq!(date_label("whenever"), "whenever");
    }
}
