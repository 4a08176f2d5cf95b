//! Character comments on a report's suggested activities and soundtrack
//!
//! Comments are memoized per `(character id, topic)`, where the topic is an
//! activity name or a `(title, artist)` song. The cache is an explicit value
//! owned by whoever renders the report, and callers invalidate entries when
//! the inputs behind a key change.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use tracing::warn;

use crate::config::AppConfig;
use crate::text::sanitize_character_text;
use crate::MoodLensError;
use crate::Result;

/// Nickname used when the profile has none
pub const DEFAULT_NICKNAME: &str = "사용자";

fn nickname_or_default(nickname: Option<&str>) -> &str {
    nickname.filter(|n| !n.trim().is_empty()).unwrap_or(DEFAULT_NICKNAME)
}

/// What a comment is about
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommentTopic {
    Activity(String),
    Bgm { title: String, artist: String },
}

impl fmt::Display for CommentTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Activity(name) => f.write_str(name),
            Self::Bgm { title, artist } => write!(f, "{artist} - {title}"),
        }
    }
}

/// Comment shown when no character comment can be produced
pub fn fallback_comment(topic: &CommentTopic, nickname: Option<&str>) -> String {
    let nickname = nickname_or_default(nickname);
    match topic {
        CommentTopic::Activity(_) => {
            format!("{nickname}, 이 활동을 실천해 보면 좋을 것 같아. 네 마음이 편안해지길 바라.")
        }
        CommentTopic::Bgm { .. } => format!("{nickname}님, 이 노래를 한번 들어보세요."),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRequest {
    pub character_id: String,
    pub topic: CommentTopic,
    pub user_nickname: String,
}

impl CommentRequest {
    pub fn activity(character_id: impl Into<String>, activity_name: impl Into<String>, nickname: Option<&str>) -> Self {
        Self {
            character_id: character_id.into(),
            topic: CommentTopic::Activity(activity_name.into()),
            user_nickname: nickname_or_default(nickname).to_string(),
        }
    }

    pub fn bgm(
        character_id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        nickname: Option<&str>,
    ) -> Self {
        Self {
            character_id: character_id.into(),
            topic: CommentTopic::Bgm {
                title: title.into(),
                artist: artist.into(),
            },
            user_nickname: nickname_or_default(nickname).to_string(),
        }
    }

    pub fn fallback(&self) -> String {
        fallback_comment(&self.topic, Some(&self.user_nickname))
    }

    fn key(&self) -> (String, CommentTopic) {
        (self.character_id.clone(), self.topic.clone())
    }

    /// Request body for the comment service
    fn body(&self) -> serde_json::Value {
        match &self.topic {
            CommentTopic::Activity(name) => json!({
                "character_id": self.character_id,
                "activity_name": name,
                "user_nickname": self.user_nickname,
            }),
            CommentTopic::Bgm { title, artist } => json!({
                "character_id": self.character_id,
                "bgm_title": title,
                "bgm_artist": artist,
                "user_nickname": self.user_nickname,
            }),
        }
    }
}

/// Anything that can produce a character comment
#[async_trait::async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch(&self, request: &CommentRequest) -> Result<String>;
}

/// Always answers with the fixed fallback text
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCommentSource;

#[async_trait::async_trait]
impl CommentSource for FallbackCommentSource {
    async fn fetch(&self, request: &CommentRequest) -> Result<String> {
        Ok(request.fallback())
    }
}

#[derive(Debug, Deserialize)]
struct CommentResponse {
    #[serde(default)]
    comment: Option<String>,
}

/// Activity and soundtrack comment endpoints of the report service
#[derive(Debug, Clone)]
pub struct RemoteCommentSource {
    client: Client,
    activity_url: String,
    bgm_url: String,
}

impl RemoteCommentSource {
    pub fn new(activity_url: impl Into<String>, bgm_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            activity_url: activity_url.into(),
            bgm_url: bgm_url.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.remote_activity_comment_url(),
            config.remote_bgm_comment_url(),
            config.remote_timeout_secs(),
        )
    }

    fn url_for(&self, topic: &CommentTopic) -> &str {
        match topic {
            CommentTopic::Activity(_) => &self.activity_url,
            CommentTopic::Bgm { .. } => &self.bgm_url,
        }
    }
}

#[async_trait::async_trait]
impl CommentSource for RemoteCommentSource {
    async fn fetch(&self, request: &CommentRequest) -> Result<String> {
        let response = self
            .client
            .post(self.url_for(&request.topic))
            .json(&request.body())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MoodLensError::Remote(format!(
                "Comment service error ({})",
                response.status()
            )));
        }

        let body: CommentResponse = response
            .json()
            .await
            .map_err(|e| MoodLensError::Remote(format!("Failed to parse comment: {e}")))?;

        let comment = body
            .comment
            .map(|c| sanitize_character_text(c.trim_matches(|ch| ch == '"' || ch == '\''), Some(&request.user_nickname)))
            .filter(|c| !c.is_empty());

        Ok(comment.unwrap_or_else(|| request.fallback()))
    }
}

/// Memoized comments keyed by `(character id, topic)`
#[derive(Debug, Clone, Default)]
pub struct CommentCache {
    entries: Arc<DashMap<(String, CommentTopic), String>>,
}

impl CommentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, character_id: &str, topic: &CommentTopic) -> Option<String> {
        self.entries
            .get(&(character_id.to_string(), topic.clone()))
            .map(|entry| entry.value().clone())
    }

    /// Cached comment, or a fresh one from `source`. A failed fetch caches
    /// the fallback so the same key is not retried until invalidated.
    pub async fn get_or_fetch(&self, source: &dyn CommentSource, request: &CommentRequest) -> String {
        if let Some(hit) = self.get(&request.character_id, &request.topic) {
            debug!("Comment cache hit: {}/{}", request.character_id, request.topic);
            return hit;
        }

        debug!("Comment cache miss: {}/{}", request.character_id, request.topic);
        let comment = match source.fetch(request).await {
            Ok(comment) => comment,
            Err(e) => {
                warn!("Comment on {} failed, using fallback: {}", request.topic, e);
                request.fallback()
            }
        };

        self.entries.insert(request.key(), comment.clone());
        comment
    }

    pub fn invalidate(&self, character_id: &str, topic: &CommentTopic) -> bool {
        self.entries
            .remove(&(character_id.to_string(), topic.clone()))
            .is_some()
    }

    /// Drop every comment for one character
    pub fn invalidate_entity(&self, character_id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(entity, _), _| entity != character_id);
        before - self.entries.len()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;

    /// Counts calls and answers with the topic
    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl CommentSource for CountingSource {
        async fn fetch(&self, request: &CommentRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("{} 좋아!", request.topic))
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl CommentSource for FailingSource {
        async fn fetch(&self, _request: &CommentRequest) -> Result<String> {
            Err(MoodLensError::Remote("unavailable".to_string()))
        }
    }

    fn song(title: &str, artist: &str) -> CommentTopic {
        CommentTopic::Bgm {
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }

    // ====== Fallback Tests ======

    #[test]
    fn test_activity_fallback_comment() {
        let activity = CommentTopic::Activity("산책하기".to_string());
        assert_eq!(
            fallback_comment(&activity, Some("민지")),
            "민지, 이 활동을 실천해 보면 좋을 것 같아. 네 마음이 편안해지길 바라."
        );
        assert!(fallback_comment(&activity, None).starts_with("사용자, "));
        assert!(fallback_comment(&activity, Some("  ")).starts_with("사용자, "));
    }

    #[test]
    fn test_bgm_fallback_comment() {
        let topic = song("그대라는 시", "태연");
        assert_eq!(fallback_comment(&topic, Some("민지")), "민지님, 이 노래를 한번 들어보세요.");
        assert_eq!(fallback_comment(&topic, None), "사용자님, 이 노래를 한번 들어보세요.");
    }

    #[test]
    fn test_request_bodies() {
        let activity = CommentRequest::activity("dain", "명상", Some("하늘"));
        assert_eq!(
            activity.body(),
            json!({"character_id": "dain", "activity_name": "명상", "user_nickname": "하늘"})
        );

        let bgm = CommentRequest::bgm("dain", "그대라는 시", "태연", None);
        assert_eq!(
            bgm.body(),
            json!({
                "character_id": "dain",
                "bgm_title": "그대라는 시",
                "bgm_artist": "태연",
                "user_nickname": "사용자"
            })
        );
    }

    #[test]
    fn test_remote_source_routes_by_topic() {
        let source = RemoteCommentSource::new("http://svc/chat/activity-comment", "http://svc/chat/bgm-comment", 1).unwrap();
        assert_eq!(
            source.url_for(&CommentTopic::Activity("명상".to_string())),
            "http://svc/chat/activity-comment"
        );
        assert_eq!(source.url_for(&song("a", "b")), "http://svc/chat/bgm-comment");
    }

    // ====== Activity Cache Tests ======

    #[tokio::test]
    async fn test_second_lookup_is_cached() {
        let cache = CommentCache::new();
        let source = CountingSource::default();
        let request = CommentRequest::activity("dain", "산책하기", Some("민지"));

        let first = cache.get_or_fetch(&source, &request).await;
        let second = cache.get_or_fetch(&source, &request).await;

        assert_eq!(first, "산책하기 좋아!");
        assert_eq!(first, second);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_caches_fallback() {
        let cache = CommentCache::new();
        let request = CommentRequest::activity("dain", "일기 쓰기", None);

        let comment = cache.get_or_fetch(&FailingSource, &request).await;
        assert_eq!(comment, request.fallback());
        assert_eq!(cache.get("dain", &request.topic), Some(comment));
    }

    #[tokio::test]
    async fn test_invalidation() {
        let cache = CommentCache::new();
        let source = CountingSource::default();
        for (character, activity) in [("dain", "산책하기"), ("dain", "일기 쓰기"), ("seoa", "산책하기")] {
            cache
                .get_or_fetch(&source, &CommentRequest::activity(character, activity, None))
                .await;
        }
        assert_eq!(cache.len(), 3);

        let walk = CommentTopic::Activity("산책하기".to_string());
        assert!(cache.invalidate("seoa", &walk));
        assert!(!cache.invalidate("seoa", &walk));
        assert_eq!(cache.invalidate_entity("dain"), 2);
        assert!(cache.is_empty());

        // Refetches after invalidation
        cache
            .get_or_fetch(&source, &CommentRequest::activity("dain", "산책하기", None))
            .await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 4);

        cache.clear();
        assert_eq!(cache.len(), 0);
    }

    #[tokio::test]
    async fn test_fallback_source() {
        let request = CommentRequest::activity("dain", "명상", Some("하늘"));
        let comment = FallbackCommentSource.fetch(&request).await.unwrap();
        assert!(comment.starts_with("하늘, "));
    }

    // ====== Soundtrack Cache Tests ======

    #[tokio::test]
    async fn test_bgm_comment_hit_and_miss() {
        let cache = CommentCache::new();
        let source = CountingSource::default();
        let request = CommentRequest::bgm("dain", "그대라는 시", "태연", Some("민지"));

        let first = cache.get_or_fetch(&source, &request).await;
        let second = cache.get_or_fetch(&source, &request).await;
        assert_eq!(first, "태연 - 그대라는 시 좋아!");
        assert_eq!(first, second);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        // Same title by another artist, or another character, is a new key
        cache
            .get_or_fetch(&source, &CommentRequest::bgm("dain", "그대라는 시", "다른 가수", None))
            .await;
        cache
            .get_or_fetch(&source, &CommentRequest::bgm("seoa", "그대라는 시", "태연", None))
            .await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        assert_eq!(cache.len(), 3);
    }

    #[tokio::test]
    async fn test_bgm_and_activity_keys_do_not_collide() {
        let cache = CommentCache::new();
        let source = CountingSource::default();

        cache
            .get_or_fetch(&source, &CommentRequest::activity("dain", "태연 - 그대라는 시", None))
            .await;
        cache
            .get_or_fetch(&source, &CommentRequest::bgm("dain", "그대라는 시", "태연", None))
            .await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_bgm_failure_caches_fallback() {
        let cache = CommentCache::new();
        let request = CommentRequest::bgm("dain", "그대라는 시", "태연", Some("민지"));

        let comment = cache.get_or_fetch(&FailingSource, &request).await;
        assert_eq!(comment, "민지님, 이 노래를 한번 들어보세요.");
        assert_eq!(cache.get("dain", &request.topic), Some(comment));
    }
}
