//! Wire types for the sentiment analysis backend.
//!
//! Everything the front-end exchanges with the REST API:
//! - Document: one analyzed press release
//! - DocumentList: the `{"data": [...]}` envelope of the read endpoints
//! - SubmitRequest: the body of `POST /submit`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Per-word metadata inside a sentiment dictionary.
///
/// Positive words carry scores above zero, negative words below zero. A
/// missing score deserializes to 0.0 and is still rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordScore {
    pub score: f64,
}

/// Word to score mapping as produced by the backend explainer.
///
/// Keys are case-sensitive; ordered so that downstream rendering is
/// deterministic for a given document.
pub type SentimentDictionary = BTreeMap<String, WordScore>;

/// One analyzed press release as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Backend record id, a hex string assigned on insert.
    #[serde(rename = "_id")]
    pub id: String,

    /// Submitted text, line breaks preserved.
    pub text: String,

    /// Overall label: "Negative", "Neutral" or "Positive".
    pub sent_lab: String,

    /// Submission timestamp, already formatted for display.
    pub submit_time: String,

    pub pos_dict: SentimentDictionary,
    pub neg_dict: SentimentDictionary,
}

/// Envelope returned by `GET /all` and `GET /?_id=`.
///
/// The single-document endpoint uses the same shape with exactly one
/// element in `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentList {
    pub data: Vec<Document>,
}

/// Body of `POST /submit`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitRequest {
    pub text: String,
}

/// Rejects blank submissions before any request is built.
///
/// Text that passes is returned untouched; surrounding whitespace is the
/// submitter's business, not ours.
pub fn validate_submission(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        Err(Error::EmptyText)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_default() {
        let document = Document::default();
        assert_eq!(document.id, "");
        assert_eq!(document.text, "");
        assert!(document.pos_dict.is_empty());
        assert!(document.neg_dict.is_empty());
    }

    #[test]
    fn test_document_deserialize() {
        let json = r#"{
            "_id": "65a1f0c2b7e4d90017c3a8f1",
            "text": "Good news, bad news",
            "sent_lab": "Positive",
            "submit_time": "Tue, 07 Jan 2025 12:00:00 GMT",
            "pos_dict": {"Good": {"score": 0.42}},
            "neg_dict": {"bad": {"score": -0.17}}
        }"#;

        let document: Document = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(document.id, "65a1f0c2b7e4d90017c3a8f1");
        assert_eq!(document.sent_lab, "Positive");
        assert_eq!(document.submit_time, "Tue, 07 Jan 2025 12:00:00 GMT");
        assert_eq!(document.pos_dict["Good"].score, 0.42);
        assert_eq!(document.neg_dict["bad"].score, -0.17);
    }

    #[test]
    fn test_document_deserialize_missing_fields() {
        // Partial records from the backend must still load.
        let json = r#"{"_id": "abc123", "text": "hello"}"#;

        let document: Document = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(document.id, "abc123");
        assert_eq!(document.text, "hello");
        assert_eq!(document.sent_lab, "");
        assert_eq!(document.submit_time, "");
        assert!(document.pos_dict.is_empty());
    }

    #[test]
    fn test_document_serialize_uses_backend_id_key() {
        let document = Document {
            id: "abc123".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&document).expect("serialize failed");
        assert!(json.contains("\"_id\":\"abc123\""));
        assert!(!json.contains("\"id\""));
    }

    // =============================================
    // WordScore tests
    // =============================================

    #[test]
    fn test_word_score_missing_defaults_to_zero() {
        let score: WordScore = serde_json::from_str("{}").expect("deserialize failed");
        assert_eq!(score.score, 0.0);
    }

    #[test]
    fn test_dictionary_keys_stay_case_sensitive() {
        let json = r#"{"Good": {"score": 1.0}, "good": {"score": 2.0}}"#;

        let dict: SentimentDictionary = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(dict.len(), 2);
        assert_eq!(dict["Good"].score, 1.0);
        assert_eq!(dict["good"].score, 2.0);
    }

    // =============================================
    // DocumentList tests
    // =============================================

    #[test]
    fn test_document_list_deserialize() {
        let json = r#"{"data": [{"_id": "a1"}, {"_id": "b2"}]}"#;

        let list: DocumentList = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[0].id, "a1");
        assert_eq!(list.data[1].id, "b2");
    }

    #[test]
    fn test_document_list_empty_envelope() {
        let list: DocumentList = serde_json::from_str(r#"{"data": []}"#).expect("deserialize failed");
        assert!(list.data.is_empty());
    }

    // =============================================
    // SubmitRequest tests
    // =============================================

    #[test]
    fn test_submit_request_serialize() {
        let request = SubmitRequest {
            text: "Quarterly results exceeded expectations.".to_string(),
        };

        let json = serde_json::to_string(&request).expect("serialize failed");
        assert_eq!(json, r#"{"text":"Quarterly results exceeded expectations."}"#);
    }

    // =============================================
    // validate_submission tests
    // =============================================

    #[test]
    fn test_validate_submission_passes_text_through() {
        let text = "  keep my spacing  ";
        assert_eq!(validate_submission(text).unwrap(), text);
    }

    #[test]
    fn test_validate_submission_rejects_empty() {
        assert!(matches!(validate_submission(""), Err(Error::EmptyText)));
    }

    #[test]
    fn test_validate_submission_rejects_whitespace_only() {
        assert!(matches!(validate_submission("  \n\t  "), Err(Error::EmptyText)));
    }
}
