//! Data models shared by the scoring, narrative and storage layers
//!
//! All types serialize with camelCase field names and lowercase enum values so
//! reports round-trip with the chat client that renders them.

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
    #[serde(other)]
    Other,
}

/// One chat message. Never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub sender: Sender,
    /// Non-string or missing text reads as empty
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Prefix marking an inner-monologue line rather than something said aloud
pub const MONOLOGUE_PREFIX: &str = "💭";

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            character_id: None,
            timestamp: None,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            character_id: None,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_character(mut self, character_id: impl Into<String>) -> Self {
        self.character_id = Some(character_id.into());
        self
    }

    /// User-authored and spoken aloud
    pub fn is_user_utterance(&self) -> bool {
        self.sender == Sender::User && !self.text.starts_with(MONOLOGUE_PREFIX)
    }
}

/// Messages that take part in scoring, in conversation order
pub fn user_messages(messages: &[Message]) -> Vec<&Message> {
    messages.iter().filter(|m| m.is_user_utterance()).collect()
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => text,
        _ => String::new(),
    })
}

pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(raw)) => crate::text::parse_timestamp(&raw),
        Some(serde_json::Value::Number(ms)) => ms
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    })
}

/// Optional profile of the person chatting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, alias = "name")]
    pub nickname: Option<String>,
}

/// Substantive mood of a message set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Romance,
    Comfort,
    Conflict,
    #[default]
    #[serde(other)]
    Neutral,
}

impl MoodLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Romance => "romance",
            Self::Comfort => "comfort",
            Self::Conflict => "conflict",
            Self::Neutral => "neutral",
        }
    }

    /// Display name used in report text
    pub fn korean(self) -> &'static str {
        match self {
            Self::Romance => "로맨스",
            Self::Comfort => "위로",
            Self::Conflict => "갈등",
            Self::Neutral => "중립",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "romance" => Some(Self::Romance),
            "comfort" => Some(Self::Comfort),
            "conflict" => Some(Self::Conflict),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-message scores, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub romance: f64,
    pub comfort: f64,
    pub conflict: f64,
}

impl EmotionScores {
    pub fn total(&self) -> f64 {
        self.romance + self.comfort + self.conflict
    }
}

/// Aggregate scores on a 0-100 scale plus the mood they classify to.
/// Local scores are whole numbers and serialize as JSON integers. The remote
/// service may send fractional scores (e.g. 33.3), so the fields stay `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    #[serde(serialize_with = "whole_score")]
    pub romance_score: f64,
    #[serde(serialize_with = "whole_score")]
    pub comfort_score: f64,
    #[serde(serialize_with = "whole_score")]
    pub conflict_score: f64,
    #[serde(default)]
    pub dominant_mood: MoodLabel,
}

fn whole_score<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract().abs() < f64::EPSILON {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub count: u32,
}

/// Moods of the early, middle and late thirds of a conversation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTimeline {
    #[serde(default)]
    pub early: MoodLabel,
    #[serde(default)]
    pub mid: MoodLabel,
    #[serde(default)]
    pub late: MoodLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTimelineEntry {
    pub text: String,
    pub emotion: MoodLabel,
    pub intensity: f64,
    pub is_important: bool,
    pub important_note: Option<String>,
}

/// One weekday point of the calendar timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPoint {
    pub day: String,
    pub value: u8,
    pub date: String,
}

/// Issue severity. Serialized as `high`/`medium`; older saved reports carry
/// the Korean display labels, which are still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    #[serde(alias = "높음")]
    High,
    #[serde(alias = "중간")]
    Medium,
}

impl IssueSeverity {
    pub fn korean(self) -> &'static str {
        match self {
            Self::High => "높음",
            Self::Medium => "중간",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsychologicalIssue {
    pub title: String,
    pub severity: IssueSeverity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReason {
    pub issue: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TherapeuticActivity {
    pub activity: String,
    pub description: String,
    pub why: String,
}

/// Suggested activity card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub activity: String,
    pub icon: String,
    pub description: String,
    pub why: String,
    pub practice_guide: String,
}

/// Drama OST recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BgmEntry {
    pub title: String,
    pub artist: String,
    pub drama: String,
    pub youtube_url: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// Pole label of a tendency gauge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugePole {
    pub icon: String,
    pub text: String,
}

/// One "mind condition" gauge, value and position both on 0-100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TendencyGauge {
    pub label: String,
    pub left: GaugePole,
    pub right: GaugePole,
    pub position: f64,
    pub value: f64,
}

/// Where the aggregate numbers came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    #[default]
    Local,
    Remote,
}

/// The psychological report for one conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub episode: u32,
    /// Only set when several reports share a calendar date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,
    pub date: DateTime<Utc>,
    pub stats: AggregateStats,
    pub dominant_emotion: MoodLabel,
    pub total_messages: usize,
    pub episode_summary: String,
    pub next_scene_suggestion: String,
    #[serde(default)]
    pub message_timeline: Vec<MessageTimelineEntry>,
    #[serde(default)]
    pub mood_timeline: MoodTimeline,
    #[serde(default)]
    pub keywords: Vec<KeywordEntry>,
    pub analysis: String,
    pub position: String,
    pub interpretation: String,
    #[serde(default)]
    pub psychological_issues: Vec<PsychologicalIssue>,
    #[serde(default)]
    pub issue_reasons: Vec<IssueReason>,
    #[serde(default)]
    pub therapeutic_activities: Vec<TherapeuticActivity>,
    pub suggestions: Vec<Suggestion>,
    pub bgm_recommendation: BgmEntry,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,
    /// Character the user talked with most; comments default to them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<String>,
    #[serde(default)]
    pub source: ReportSource,
}

impl Report {
    pub fn dominant_mood(&self) -> MoodLabel {
        self.stats.dominant_mood
    }

    /// Attach a rendered image reference
    pub fn attach_image(&mut self, url: impl Into<String>) {
        self.image_url = Some(url.into());
    }
}

/// Scored conversation before narrative selection. Local scoring and the
/// remote service both produce one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportAnalysis {
    pub date: DateTime<Utc>,
    pub stats: AggregateStats,
    pub keywords: Vec<KeywordEntry>,
    pub mood_timeline: MoodTimeline,
    pub message_timeline: Vec<MessageTimelineEntry>,
    pub total_messages: usize,
    pub source: ReportSource,
}
