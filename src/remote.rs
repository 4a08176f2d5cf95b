//! Client for the server-side report generator
//!
//! The service answers with a looser shape than [`Report`](crate::models::Report):
//! every field may be missing and scores are already on the 0-100 scale.
//! [`normalize_remote_report`] fills the gaps so the rest of the pipeline
//! never needs to know where the numbers came from.

use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::classifier::stats_from_scaled;
use crate::config::AppConfig;
use crate::models::lenient_timestamp;
use crate::models::KeywordEntry;
use crate::models::Message;
use crate::models::MessageTimelineEntry;
use crate::models::MoodLabel;
use crate::models::MoodTimeline;
use crate::models::ReportAnalysis;
use crate::models::ReportSource;
use crate::MoodLensError;
use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteEmotionScores {
    #[serde(default)]
    pub romance: Option<f64>,
    #[serde(default)]
    pub comfort: Option<f64>,
    #[serde(default)]
    pub conflict: Option<f64>,
}

/// Raw report body returned by the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteReport {
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dominant_mood: Option<String>,
    #[serde(default)]
    pub emotion_scores: Option<RemoteEmotionScores>,
    #[serde(default)]
    pub keywords: Option<Vec<KeywordEntry>>,
    #[serde(default)]
    pub mood_timeline: Option<MoodTimeline>,
    #[serde(default)]
    pub message_timeline: Option<Vec<MessageTimelineEntry>>,
    #[serde(default)]
    pub total_messages: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ReportRequest<'a> {
    messages: &'a [Message],
}

/// Convert a remote body into the local analysis shape.
///
/// Missing fields default to `now`, zero scores, empty lists and a neutral
/// timeline. Scores are clamped into 0-100 but kept unrounded. A recognised
/// `dominantMood` from the service is kept, anything else is reclassified
/// from the scores.
pub fn normalize_remote_report(raw: RemoteReport, now: DateTime<Utc>) -> ReportAnalysis {
    let scores = raw.emotion_scores.unwrap_or_default();
    let mut stats = stats_from_scaled(
        scores.romance.unwrap_or(0.0),
        scores.comfort.unwrap_or(0.0),
        scores.conflict.unwrap_or(0.0),
    );
    if let Some(mood) = raw.dominant_mood.as_deref().and_then(MoodLabel::parse) {
        stats.dominant_mood = mood;
    }

    ReportAnalysis {
        date: raw.date.unwrap_or(now),
        stats,
        keywords: raw.keywords.unwrap_or_default(),
        mood_timeline: raw.mood_timeline.unwrap_or_default(),
        message_timeline: raw.message_timeline.unwrap_or_default(),
        total_messages: raw.total_messages.unwrap_or(0),
        source: ReportSource::Remote,
    }
}

/// HTTP client for the report endpoint
#[derive(Debug, Clone)]
pub struct RemoteReportClient {
    client: Client,
    url: String,
    auth_token: Option<String>,
}

impl RemoteReportClient {
    pub fn new(url: impl Into<String>, timeout_secs: u64, auth_token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            auth_token,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.remote_report_url(),
            config.remote_timeout_secs(),
            config.remote.auth_token.clone(),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request a report for the full message list
    pub async fn fetch(&self, messages: &[Message]) -> Result<RemoteReport> {
        debug!("Requesting remote report: {} ({} messages)", self.url, messages.len());

        let mut request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&ReportRequest { messages });
        if let Some(token) = &self.auth_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MoodLensError::Remote(format!(
                "Report service error ({status}): {error_text}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| MoodLensError::Remote(format!("Failed to parse report: {e}")))
    }

    /// Fetch and normalize in one step
    pub async fn analyze(&self, messages: &[Message]) -> Result<ReportAnalysis> {
        let raw = self.fetch(messages).await?;
        Ok(normalize_remote_report(raw, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    fn parse(json: &str) -> RemoteReport {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_body_gets_defaults() {
        let analysis = normalize_remote_report(parse("{}"), now());

        assert_eq!(analysis.date, now());
        assert_eq!(analysis.stats.romance_score, 0.0);
        assert_eq!(analysis.stats.dominant_mood, MoodLabel::Neutral);
        assert!(analysis.keywords.is_empty());
        assert!(analysis.message_timeline.is_empty());
        assert_eq!(analysis.mood_timeline, MoodTimeline::default());
        assert_eq!(analysis.total_messages, 0);
        assert_eq!(analysis.source, ReportSource::Remote);
    }

    #[test]
    fn test_scores_survive_normalization() {
        for (r, c, x) in [(0.0, 0.0, 0.0), (100.0, 0.0, 0.0), (37.5, 12.0, 100.0)] {
            let raw = RemoteReport {
                emotion_scores: Some(RemoteEmotionScores {
                    romance: Some(r),
                    comfort: Some(c),
                    conflict: Some(x),
                }),
                ..Default::default()
            };
            let stats = normalize_remote_report(raw, now()).stats;
            assert_eq!(stats.romance_score, r);
            assert_eq!(stats.comfort_score, c);
            assert_eq!(stats.conflict_score, x);
        }
    }

    #[test]
    fn test_out_of_range_scores_clamp() {
        let raw = parse(r#"{"emotionScores": {"romance": 140, "comfort": -5}}"#);
        let stats = normalize_remote_report(raw, now()).stats;
        assert_eq!(stats.romance_score, 100.0);
        assert_eq!(stats.comfort_score, 0.0);
        assert_eq!(stats.conflict_score, 0.0);
    }

    #[test]
    fn test_dominant_mood_from_service_or_scores() {
        let raw = parse(r#"{"dominantMood": "comfort", "emotionScores": {"romance": 60}}"#);
        assert_eq!(normalize_remote_report(raw, now()).stats.dominant_mood, MoodLabel::Comfort);

        let raw = parse(r#"{"dominantMood": "joyful", "emotionScores": {"conflict": 45}}"#);
        assert_eq!(normalize_remote_report(raw, now()).stats.dominant_mood, MoodLabel::Conflict);
    }

    #[test]
    fn test_full_body() {
        let raw = parse(
            r#"{
                "date": "2024-06-09T08:30:00",
                "dominantMood": "romance",
                "emotionScores": {"romance": 55, "comfort": 10, "conflict": 0},
                "keywords": [{"word": "커피", "count": 3}],
                "moodTimeline": {"early": "neutral", "mid": "romance", "late": "romance"},
                "messageTimeline": [{"text": "좋아", "emotion": "romance", "intensity": 0.7,
                                     "isImportant": true, "importantNote": "로맨스 감정이 강하게 나타남"}],
                "totalMessages": 12
            }"#,
        );
        let analysis = normalize_remote_report(raw, now());

        assert_eq!(analysis.date, Utc.with_ymd_and_hms(2024, 6, 9, 8, 30, 0).unwrap());
        assert_eq!(analysis.keywords[0].word, "커피");
        assert_eq!(analysis.mood_timeline.mid, MoodLabel::Romance);
        assert!(analysis.message_timeline[0].is_important);
        assert_eq!(analysis.total_messages, 12);
    }

    #[test]
    fn test_client_from_config() {
        let mut config = AppConfig::default();
        config.remote.endpoint = "http://reports.local/".to_string();
        let client = RemoteReportClient::from_config(&config).unwrap();
        assert_eq!(client.url(), "http://reports.local/psychology/report");
    }
}
