//! Ranking and text output.

use crate::board::Square;

/// A square and its estimated rank.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RankEntry {
    pub square: Square,
    pub rank: f64,
}

/// Header printed above the ranking.
pub const HEADER: &str = "Square Rankings (most visited to least):";

/// Sort squares by descending rank. Equal ranks keep ascending square order.
pub fn rank_squares(ranks: &[f64]) -> Vec<RankEntry> {
    let mut entries: Vec<RankEntry> = ranks
        .iter()
        .enumerate()
        .map(|(square, &rank)| RankEntry { square, rank })
        .collect();

    // sort_by is stable, so ties stay in index order
    entries.sort_by(|a, b| b.rank.total_cmp(&a.rank));
    entries
}

/// Format one line of the listing. `position` is 0-based and printed 1-based.
pub fn format_entry(position: usize, entry: &RankEntry) -> String {
    format!(
        "{:2}: Square {:2} with PageRank {:.4}",
        position + 1,
        entry.square,
        entry.rank
    )
}

/// Render the full listing: header, then one line per square.
pub fn render(entries: &[RankEntry]) -> String {
    let mut out = format!("{HEADER}\n");
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format_entry(i, entry));
        out.push('\n');
    }
    out
}

/// Concatenate the leading `top` squares as two-digit numbers, e.g. `"101524"`.
pub fn modal_string(entries: &[RankEntry], top: usize) -> String {
    entries
        .iter()
        .take(top)
        .map(|e| format!("{:02}", e.square))
        .collect()
}
