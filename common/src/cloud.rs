//! Word-cloud weighting for the dictionary panels.
//!
//! Maps raw dictionary scores onto font sizes and stable colors so the two
//! clouds on the detail page render the same way on every visit.

use crate::types::SentimentDictionary;

/// Smallest rendered word, in pixels.
pub const MIN_WORD_SIZE: u32 = 12;
/// Largest rendered word, in pixels.
pub const MAX_WORD_SIZE: u32 = 50;

/// Colors assigned to cloud words, chosen per word by a stable hash.
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// A dictionary word prepared for the cloud view.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudWord {
    pub word: String,
    /// Raw backend score, shown in the tooltip.
    pub score: f64,
    /// Font size in pixels, mapped linearly from the dictionary's score range.
    pub size: u32,
    pub color: &'static str,
}

/// Weighs every dictionary word for display.
///
/// The lowest raw score maps to [`MIN_WORD_SIZE`], the highest to
/// [`MAX_WORD_SIZE`]; a dictionary whose scores are all equal renders at
/// the maximum. Words come back ordered by descending score, ties by word.
pub fn build_cloud(dict: &SentimentDictionary) -> Vec<CloudWord> {
    if dict.is_empty() {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for entry in dict.values() {
        min = min.min(entry.score);
        max = max.max(entry.score);
    }
    let span = max - min;

    let mut words: Vec<CloudWord> = dict
        .iter()
        .map(|(word, entry)| {
            let size = if span == 0.0 {
                MAX_WORD_SIZE
            } else {
                let range = (MAX_WORD_SIZE - MIN_WORD_SIZE) as f64;
                (MIN_WORD_SIZE as f64 + (entry.score - min) / span * range).round() as u32
            };
            CloudWord {
                word: word.clone(),
                score: entry.score,
                size,
                color: pick_color(word),
            }
        })
        .collect();

    words.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    words
}

/// Stable palette pick so a word keeps its color across renders.
fn pick_color(word: &str) -> &'static str {
    let hash = word
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_add(byte as usize));
    PALETTE[hash % PALETTE.len()]
}
