//! Data Transfer Objects
//!
//! Request and response types exchanged with the journal backend.
//! Decoding into these types is the schema check: a body that does not
//! fit them is reported as [`BackendError::MalformedPayload`].

use chrono::{DateTime, NaiveDateTime};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use super::error::{BackendError, BackendResult};

// ============================================
// REQUEST DTOs
// ============================================

/// A journal entry as sent to the backend.
///
/// Built fresh for every submission from the trimmed input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub text: String,
}

impl JournalEntry {
    /// Build an entry from raw input, or `None` if nothing remains after trimming
    pub fn from_input(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            None
        } else {
            Some(Self {
                text: text.to_string(),
            })
        }
    }
}

// ============================================
// RESPONSE DTOs
// ============================================

/// Sentiment label and score computed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Label as returned, e.g. "POSITIVE"
    pub label: String,
    /// Model confidence
    pub score: f64,
    /// Whether the entry mixes conflicting feelings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixed: Option<bool>,
}

impl SentimentResult {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
            mixed: None,
        }
    }

    /// Score rendered with exactly two decimal places
    pub fn score_display(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// Stored journal record returned by `POST /journal/text` and `GET /memory/recent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub sentiment: SentimentResult,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub reflection: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl JournalRecord {
    /// Record carrying only a sentiment, as a minimal backend would return it
    pub fn from_sentiment(sentiment: SentimentResult) -> Self {
        Self {
            id: None,
            kind: None,
            content: None,
            sentiment,
            intent: None,
            reflection: None,
            timestamp: None,
        }
    }

    /// Parse the record timestamp.
    ///
    /// The backend writes naive UTC ISO-8601 (`2026-01-04T09:15:02.123456`);
    /// RFC 3339 with an offset is accepted too and converted to UTC.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.as_deref()?;
        raw.parse::<NaiveDateTime>().ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_utc())
        })
    }
}

/// One hit from `POST /memory/semantic-search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: Uuid,
    pub content: String,
    /// L2 distance, lower is closer
    pub score: f64,
    pub timestamp: String,
}

/// Weekly emotional profile from `GET /cognition/weekly`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeeklyProfile {
    Ready(WeeklySummary),
    Insufficient { status: String, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// e.g. "last_7_days"
    pub period: String,
    pub emotional_stability: EmotionalStability,
    pub dominant_intents: Vec<String>,
    pub entry_count: usize,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalStability {
    /// Share of POSITIVE entries
    pub positive: f64,
    /// Share of NEGATIVE entries
    pub negative: f64,
    pub volatility: Volatility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Volatility {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for Volatility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Volatility::Low => "low",
            Volatility::Moderate => "moderate",
            Volatility::High => "high",
        };
        f.write_str(s)
    }
}

/// Decode a response body, reporting any mismatch as a malformed payload
pub fn decode<T: DeserializeOwned>(body: &str) -> BackendResult<T> {
    serde_json::from_str(body).map_err(BackendError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_entry_from_input_trims() {
        let entry = JournalEntry::from_input("  I had a great day \n").unwrap();
        assert_eq!(entry.text, "I had a great day");
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"text":"I had a great day"}"#
        );
    }

    #[test]
    fn test_entry_from_blank_input() {
        assert!(JournalEntry::from_input("").is_none());
        assert!(JournalEntry::from_input(" \t\n ").is_none());
    }

    #[test]
    fn test_score_display_two_decimals() {
        assert_eq!(SentimentResult::new("positive", 0.8).score_display(), "0.80");
        assert_eq!(SentimentResult::new("positive", 0.93).score_display(), "0.93");
        assert_eq!(SentimentResult::new("negative", 1.0).score_display(), "1.00");
        assert_eq!(
            SentimentResult::new("POSITIVE", 0.9998656511306763).score_display(),
            "1.00"
        );
        // Rounds from the exact binary value, stored as 0.75500000000000000444...
        assert_eq!(SentimentResult::new("positive", 0.755).score_display(), "0.76");
    }

    #[test]
    fn test_decode_minimal_record() {
        let record: JournalRecord =
            decode(r#"{"sentiment":{"label":"positive","score":0.93}}"#).unwrap();
        assert_eq!(record.sentiment, SentimentResult::new("positive", 0.93));
        assert!(record.id.is_none());
        assert!(record.reflection.is_none());
    }

    #[test]
    fn test_decode_full_record() {
        let body = r#"{
            "id": "4b0c3f5e-8a4e-4d1b-9a57-0f6a8f1f2c11",
            "type": "text",
            "content": "Work was fine but I feel stressed",
            "sentiment": {"label": "NEGATIVE", "score": 0.97, "mixed": true},
            "intent": "venting",
            "reflection": "You seem to be holding conflicting feelings.",
            "timestamp": "2026-01-04T09:15:02.123456",
            "embedding": [0.1, 0.2]
        }"#;

        let record: JournalRecord = decode(body).unwrap();
        assert_eq!(record.kind.as_deref(), Some("text"));
        assert_eq!(record.sentiment.mixed, Some(true));
        assert_eq!(record.intent.as_deref(), Some("venting"));

        let at = record.recorded_at().unwrap();
        assert_eq!(at.year(), 2026);
        assert_eq!(at.hour(), 9);
    }

    #[test]
    fn test_decode_rejects_missing_sentiment() {
        let err = decode::<JournalRecord>(r#"{"id":null,"content":"hi"}"#).unwrap_err();
        match err {
            BackendError::MalformedPayload(msg) => assert!(msg.contains("sentiment")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_mistyped_score() {
        let err =
            decode::<JournalRecord>(r#"{"sentiment":{"label":"positive","score":"high"}}"#)
                .unwrap_err();
        assert!(matches!(err, BackendError::MalformedPayload(_)));

        let err = decode::<JournalRecord>(r#"{"sentiment":{"score":0.5}}"#).unwrap_err();
        assert!(matches!(err, BackendError::MalformedPayload(_)));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode::<JournalRecord>("<html>Internal Server Error</html>").unwrap_err();
        assert!(matches!(err, BackendError::MalformedPayload(_)));
    }

    #[test]
    fn test_recorded_at_accepts_second_precision_and_offsets() {
        let mut record = JournalRecord::from_sentiment(SentimentResult::new("POSITIVE", 0.5));

        record.timestamp = Some("2026-03-01T08:00:00".to_string());
        assert_eq!(record.recorded_at().unwrap().minute(), 0);

        record.timestamp = Some("2026-03-01T08:00:00+02:00".to_string());
        assert_eq!(record.recorded_at().unwrap().hour(), 6);

        record.timestamp = Some("yesterday".to_string());
        assert!(record.recorded_at().is_none());
    }

    #[test]
    fn test_weekly_profile_variants() {
        let insufficient: WeeklyProfile = decode(
            r#"{
                "status": "insufficient_data",
                "message": "Not enough entries to build a reliable profile."
            }"#,
        )
        .unwrap();
        match insufficient {
            WeeklyProfile::Insufficient { status, .. } => assert_eq!(status, "insufficient_data"),
            other => panic!("expected insufficient data, got {:?}", other),
        }

        let ready: WeeklyProfile = decode(
            r#"{
                "period": "last_7_days",
                "emotional_stability": {"positive": 0.6, "negative": 0.4, "volatility": "moderate"},
                "dominant_intents": ["venting", "reflection"],
                "entry_count": 8,
                "confidence": 0.82
            }"#,
        )
        .unwrap();
        match ready {
            WeeklyProfile::Ready(summary) => {
                assert_eq!(summary.emotional_stability.volatility, Volatility::Moderate);
                assert_eq!(summary.entry_count, 8);
                assert_eq!(summary.dominant_intents, vec!["venting", "reflection"]);
            }
            other => panic!("expected ready profile, got {other:?}"),
        }
    }
}
