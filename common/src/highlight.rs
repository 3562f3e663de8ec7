//! Sentiment highlighting of document text.
//!
//! Splits each line of a press release into plain runs and dictionary hits
//! so the detail view can color scored words and attach their tooltips.
//! Matching is case-insensitive on whole tokens; classification against the
//! dictionaries is case-sensitive, so a case variant of a scored word is
//! found but rendered plain.

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::SentimentDictionary;

/// One run of a rendered line.
#[derive(Debug, Clone, PartialEq)]
pub enum HighlightSegment {
    /// Text outside every dictionary, emitted verbatim.
    Plain(String),
    /// A word from the positive dictionary with its score.
    Positive { word: String, score: f64 },
    /// A word from the negative dictionary with its score.
    Negative { word: String, score: f64 },
}

impl HighlightSegment {
    /// The text this segment contributes to the line.
    pub fn text(&self) -> &str {
        match self {
            HighlightSegment::Plain(text) => text,
            HighlightSegment::Positive { word, .. } => word,
            HighlightSegment::Negative { word, .. } => word,
        }
    }
}

/// Segments of one line, in text order. Always starts and ends with a
/// `Plain` segment, which is empty when the line starts or ends on a match.
pub type HighlightedLine = Vec<HighlightSegment>;

/// Splits `text` into lines and each line into highlight segments.
///
/// Concatenating the segment texts of a line reproduces that line exactly.
/// Empty input yields no lines; empty dictionaries yield one plain segment
/// per line. When a word appears in both dictionaries the positive entry
/// wins.
pub fn highlight_lines(
    text: &str,
    pos_dict: &SentimentDictionary,
    neg_dict: &SentimentDictionary,
) -> Result<Vec<HighlightedLine>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let words: Vec<&str> = pos_dict
        .keys()
        .chain(neg_dict.keys())
        .map(String::as_str)
        .filter(|word| !word.is_empty())
        .collect();

    if words.is_empty() {
        return Ok(text
            .split('\n')
            .map(|line| vec![HighlightSegment::Plain(line.to_string())])
            .collect());
    }

    let matcher = build_matcher(&words)?;
    Ok(text
        .split('\n')
        .map(|line| split_line(line, &matcher, pos_dict, neg_dict))
        .collect())
}

/// Builds the case-insensitive whole-token matcher over every dictionary
/// word. Words are escaped, so dictionary entries containing regex
/// metacharacters match literally.
fn build_matcher(words: &[&str]) -> Result<Regex> {
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b({alternation})\b")).map_err(|e| Error::Matcher(e.to_string()))
}

fn split_line(
    line: &str,
    matcher: &Regex,
    pos_dict: &SentimentDictionary,
    neg_dict: &SentimentDictionary,
) -> HighlightedLine {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for hit in matcher.find_iter(line) {
        segments.push(HighlightSegment::Plain(line[cursor..hit.start()].to_string()));
        segments.push(classify(hit.as_str(), pos_dict, neg_dict));
        cursor = hit.end();
    }
    segments.push(HighlightSegment::Plain(line[cursor..].to_string()));

    segments
}

/// Looks the matched token up exactly as it occurred in the text. The
/// positive dictionary is consulted first, so a word present in both is
/// rendered positive.
fn classify(
    word: &str,
    pos_dict: &SentimentDictionary,
    neg_dict: &SentimentDictionary,
) -> HighlightSegment {
    if let Some(entry) = pos_dict.get(word) {
        HighlightSegment::Positive {
            word: word.to_string(),
            score: entry.score,
        }
    } else if let Some(entry) = neg_dict.get(word) {
        HighlightSegment::Negative {
            word: word.to_string(),
            score: entry.score,
        }
    } else {
        HighlightSegment::Plain(word.to_string())
    }
}
