//! Report generation
//!
//! Scoring produces a [`ReportAnalysis`]; narrative selection turns it into a
//! [`Report`]. The remote service can stand in for local scoring, and any
//! remote failure falls back to the local engine with the same input.

use chrono::DateTime;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::classifier::aggregate;
use crate::classifier::score_all;
use crate::classifier::thirds_timeline;
use crate::classifier::timeline_entry;
use crate::comments::CommentCache;
use crate::comments::CommentRequest;
use crate::comments::fallback_comment;
use crate::comments::CommentSource;
use crate::comments::CommentTopic;
use crate::config::AppConfig;
use crate::keywords;
use crate::models::user_messages;
use crate::models::BgmEntry;
use crate::models::Message;
use crate::models::Report;
use crate::models::ReportAnalysis;
use crate::models::ReportSource;
use crate::models::Sender;
use crate::models::UserProfile;
use crate::narrative;
use crate::remote::RemoteReportClient;
use crate::Result;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// `report_{unix_ms}_{9 base36 chars}`
pub fn new_report_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect();
    format!("report_{}_{suffix}", now.timestamp_millis())
}

/// Score the user utterances of a conversation. `None` when there are none.
pub fn analyze_local(messages: &[Message], now: DateTime<Utc>) -> Option<ReportAnalysis> {
    let users = user_messages(messages);
    if users.is_empty() {
        return None;
    }

    let texts: Vec<&str> = users.iter().map(|m| m.text.as_str()).collect();
    let scores = score_all(texts.iter().copied());
    let message_timeline = texts
        .iter()
        .zip(&scores)
        .map(|(text, s)| timeline_entry(text, s))
        .collect();

    Some(ReportAnalysis {
        date: now,
        stats: aggregate(&scores),
        keywords: keywords::extract(messages),
        mood_timeline: thirds_timeline(&scores),
        message_timeline,
        total_messages: users.len(),
        source: ReportSource::Local,
    })
}

/// Attach narrative fields to an analysis
pub fn assemble<R: Rng + ?Sized>(
    analysis: ReportAnalysis,
    id: String,
    episode: u32,
    suggestion_band: f64,
    rng: &mut R,
) -> Report {
    let bundle = narrative::select(&analysis.stats, &analysis.keywords, suggestion_band, rng);

    Report {
        id,
        episode,
        episode_number: None,
        date: analysis.date,
        stats: analysis.stats,
        dominant_emotion: analysis.stats.dominant_mood,
        total_messages: analysis.total_messages,
        episode_summary: bundle.episode_summary,
        next_scene_suggestion: bundle.next_scene_suggestion,
        message_timeline: analysis.message_timeline,
        mood_timeline: analysis.mood_timeline,
        keywords: analysis.keywords,
        analysis: bundle.analysis,
        position: bundle.position,
        interpretation: bundle.interpretation,
        psychological_issues: bundle.psychological_issues,
        issue_reasons: bundle.issue_reasons,
        therapeutic_activities: bundle.therapeutic_activities,
        suggestions: bundle.suggestions,
        bgm_recommendation: bundle.bgm_recommendation,
        image_url: None,
        persona: Some(bundle.persona),
        character_id: None,
        source: analysis.source,
    }
}

/// Builds reports locally, or remotely with a local fallback
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    config: AppConfig,
    remote: Option<RemoteReportClient>,
}

impl ReportGenerator {
    /// Remote client is created only when `remote.enabled` is set
    pub fn new(config: AppConfig) -> Result<Self> {
        let remote = if config.remote_enabled() {
            Some(RemoteReportClient::from_config(&config)?)
        } else {
            None
        };
        Ok(Self { config, remote })
    }

    pub fn local(config: AppConfig) -> Self {
        Self { config, remote: None }
    }

    #[must_use]
    pub fn with_remote(mut self, client: RemoteReportClient) -> Self {
        self.remote = Some(client);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Local report dated `now`. `saved_count` is the number of reports
    /// already stored; the new one becomes episode `saved_count + 1`.
    pub fn generate_local_at<R: Rng + ?Sized>(
        &self,
        messages: &[Message],
        saved_count: usize,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Option<Report> {
        let analysis = analyze_local(messages, now)?;
        let id = new_report_id(now, rng);
        let mut report = assemble(
            analysis,
            id,
            episode_for(saved_count),
            self.config.report.local_suggestion_band,
            rng,
        );
        report.character_id = top_character(messages);
        log_report(&report);
        Some(report)
    }

    pub fn generate_local<R: Rng + ?Sized>(&self, messages: &[Message], saved_count: usize, rng: &mut R) -> Option<Report> {
        self.generate_local_at(messages, saved_count, Utc::now(), rng)
    }

    /// Report from a normalized remote analysis; id and episode are assigned
    /// here, the service does not provide them
    pub fn from_remote<R: Rng + ?Sized>(&self, analysis: ReportAnalysis, saved_count: usize, rng: &mut R) -> Report {
        let id = new_report_id(Utc::now(), rng);
        let report = assemble(
            analysis,
            id,
            episode_for(saved_count),
            self.config.report.remote_suggestion_band,
            rng,
        );
        log_report(&report);
        report
    }

    /// Generate a report, trying the remote service first when configured.
    /// `seed` makes narrative picks reproducible.
    pub async fn generate(&self, messages: &[Message], saved_count: usize, seed: Option<u64>) -> Option<Report> {
        if user_messages(messages).is_empty() {
            debug!("No user messages, skipping report");
            return None;
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        if let Some(client) = &self.remote {
            match client.analyze(messages).await {
                Ok(analysis) => {
                    let mut report = self.from_remote(analysis, saved_count, &mut rng);
                    report.character_id = top_character(messages);
                    return Some(report);
                }
                Err(e) => warn!("Remote report failed, falling back to local engine: {}", e),
            }
        }

        self.generate_local(messages, saved_count, &mut rng)
    }

    /// Keep the soundtrack of `session` on a regenerated report, using the
    /// configured new-session ratio. Returns whether a new session started.
    pub fn pin_bgm(&self, session: &mut ReportSession, report: &mut Report, message_count: usize) -> bool {
        let new_session = session.apply(report, message_count, self.config.report.new_session_ratio);
        if new_session {
            debug!("New conversation session at {} messages", message_count);
        }
        new_session
    }
}

fn episode_for(saved_count: usize) -> u32 {
    u32::try_from(saved_count).unwrap_or(u32::MAX - 1) + 1
}

fn log_report(report: &Report) {
    info!(
        "Generated {:?} report {} (episode {}, mood {}, {} messages)",
        report.source, report.id, report.episode, report.dominant_emotion, report.total_messages
    );
}

/// Keeps the soundtrack stable while a conversation is regenerated. A
/// conversation that shrinks below `new_session_ratio` of its previous
/// length starts a new session and gets a fresh pick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSession {
    last_message_count: usize,
    pinned_bgm: Option<BgmEntry>,
}

impl ReportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_new_session(&self, message_count: usize, new_session_ratio: f64) -> bool {
        (message_count as f64) < self.last_message_count as f64 * new_session_ratio
    }

    pub fn pinned_bgm(&self) -> Option<&BgmEntry> {
        self.pinned_bgm.as_ref()
    }

    /// Swap in the pinned soundtrack, or pin this report's. Returns whether
    /// the conversation counted as a new session.
    pub fn apply(&mut self, report: &mut Report, message_count: usize, new_session_ratio: f64) -> bool {
        let new_session = self.is_new_session(message_count, new_session_ratio);
        match &self.pinned_bgm {
            Some(bgm) if !new_session => report.bgm_recommendation = bgm.clone(),
            _ => self.pinned_bgm = Some(report.bgm_recommendation.clone()),
        }
        self.last_message_count = message_count;
        new_session
    }
}

/// Character the user talked with most, by non-user message count. Ties go
/// to the character seen first.
pub fn top_character(messages: &[Message]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for message in messages.iter().filter(|m| m.sender != Sender::User) {
        let Some(id) = message.character_id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };
        match counts.iter_mut().find(|(seen, _)| *seen == id) {
            Some((_, count)) => *count += 1,
            None => counts.push((id, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (id, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((id, count));
        }
    }
    best.map(|(id, _)| id.to_string())
}

/// Character comment for every suggested activity, memoized in `cache`
pub async fn activity_comments(
    report: &Report,
    character_id: &str,
    profile: Option<&UserProfile>,
    source: &dyn CommentSource,
    cache: &CommentCache,
) -> Vec<(String, String)> {
    let nickname = profile.and_then(|p| p.nickname.as_deref());
    let mut comments = Vec::with_capacity(report.suggestions.len());
    for suggestion in &report.suggestions {
        let request = CommentRequest::activity(character_id, suggestion.activity.as_str(), nickname);
        let comment = cache.get_or_fetch(source, &request).await;
        comments.push((suggestion.activity.clone(), comment));
    }
    comments
}

/// Character comment on the report's soundtrack, memoized in `cache`.
/// Without a character there is nobody to ask and the fallback is returned.
pub async fn bgm_comment(
    report: &Report,
    character_id: Option<&str>,
    profile: Option<&UserProfile>,
    source: &dyn CommentSource,
    cache: &CommentCache,
) -> String {
    let nickname = profile.and_then(|p| p.nickname.as_deref());
    let bgm = &report.bgm_recommendation;
    match character_id.filter(|id| !id.is_empty()) {
        Some(character_id) => {
            let request = CommentRequest::bgm(character_id, bgm.title.as_str(), bgm.artist.as_str(), nickname);
            cache.get_or_fetch(source, &request).await
        }
        None => fallback_comment(
            &CommentTopic::Bgm {
                title: bgm.title.clone(),
                artist: bgm.artist.clone(),
            },
            nickname,
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::comments::FallbackCommentSource;
    use crate::models::AggregateStats;
    use crate::models::MoodLabel;
    use crate::models::MoodTimeline;
    use crate::narrative::templates;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_report_id_format() {
        let id = new_report_id(now(), &mut StdRng::seed_from_u64(1));
        let rest = id.strip_prefix("report_1718020800000_").unwrap();
        assert_eq!(rest.len(), 9);
        assert!(rest.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_no_user_messages_means_no_report() {
        let generator = ReportGenerator::local(AppConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        assert!(generator.generate_local(&[], 0, &mut rng).is_none());
        let only_assistant = vec![Message::assistant("안녕"), Message::user("💭 속마음")];
        assert!(generator.generate_local(&only_assistant, 0, &mut rng).is_none());
    }

    #[test]
    fn test_analysis_counts_user_utterances() {
        let messages = vec![
            Message::user("오늘 너무 좋아 사랑해"),
            Message::assistant("나도!"),
            Message::user("💭 이건 속마음"),
            Message::user("커피 마시러 가자"),
        ];
        let analysis = analyze_local(&messages, now()).unwrap();
        assert_eq!(analysis.total_messages, 2);
        assert_eq!(analysis.message_timeline.len(), 2);
        assert_eq!(analysis.date, now());
        assert_eq!(analysis.source, ReportSource::Local);
    }

    #[test]
    fn test_episode_follows_saved_count() {
        let generator = ReportGenerator::local(AppConfig::default());
        let messages = vec![Message::user("힘들어...")];
        let report = generator
            .generate_local_at(&messages, 4, now(), &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(report.episode, 5);
        assert_eq!(report.episode_number, None);
        assert!(report.persona.is_some());
        assert_eq!(report.suggestions.len(), 3);
        assert_eq!(report.dominant_emotion, report.stats.dominant_mood);
    }

    #[tokio::test]
    async fn test_generate_without_remote_is_local() {
        let generator = ReportGenerator::new(AppConfig::default()).unwrap();
        assert!(!generator.has_remote());

        let report = generator
            .generate(&[Message::user("사랑해 너무 설레")], 0, Some(3))
            .await
            .unwrap();
        assert_eq!(report.source, ReportSource::Local);
        assert_eq!(report.dominant_emotion, MoodLabel::Romance);
    }

    #[test]
    fn test_session_pins_bgm() {
        let generator = ReportGenerator::local(AppConfig::default());
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = ReportSession::new();

        let messages: Vec<Message> = (0..10).map(|i| Message::user(format!("메시지 {i}"))).collect();
        let mut first = generator.generate_local(&messages, 0, &mut rng).unwrap();
        assert!(!generator.pin_bgm(&mut session, &mut first, 10));

        let mut second = generator.generate_local(&messages, 0, &mut rng).unwrap();
        second.bgm_recommendation.title = "다른 곡".to_string();
        assert!(!generator.pin_bgm(&mut session, &mut second, 12));
        assert_eq!(second.bgm_recommendation, first.bgm_recommendation);

        // 5 < 12 * 0.5: new session, the new pick is kept and pinned
        let mut third = generator.generate_local(&messages[..5], 0, &mut rng).unwrap();
        third.bgm_recommendation.title = "새 곡".to_string();
        assert!(generator.pin_bgm(&mut session, &mut third, 5));
        assert_eq!(third.bgm_recommendation.title, "새 곡");
        assert_eq!(session.pinned_bgm().unwrap().title, "새 곡");
    }

    #[test]
    fn test_session_ratio_comes_from_config() {
        let mut config = AppConfig::default();
        config.report.new_session_ratio = 0.9;
        let generator = ReportGenerator::local(config);
        let messages = vec![Message::user("오늘 산책했어")];
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = ReportSession::new();

        let mut first = generator.generate_local(&messages, 0, &mut rng).unwrap();
        generator.pin_bgm(&mut session, &mut first, 12);

        // 10 < 12 * 0.9 is a new session here, though not at the default 0.5
        let mut second = generator.generate_local(&messages, 0, &mut rng).unwrap();
        second.bgm_recommendation.title = "새 곡".to_string();
        assert!(generator.pin_bgm(&mut session, &mut second, 10));
        assert_eq!(second.bgm_recommendation.title, "새 곡");
        assert!(!ReportSession::default().is_new_session(10, 0.9));
    }

    #[test]
    fn test_suggestion_band_comes_from_config() {
        // 25 sits between the default local and remote bands
        let analysis = ReportAnalysis {
            date: now(),
            stats: AggregateStats {
                romance_score: 0.0,
                comfort_score: 25.0,
                conflict_score: 0.0,
                dominant_mood: MoodLabel::Neutral,
            },
            keywords: Vec::new(),
            mood_timeline: MoodTimeline::default(),
            message_timeline: Vec::new(),
            total_messages: 1,
            source: ReportSource::Remote,
        };
        let in_table = |report: &Report, table: &[narrative::SuggestionTemplate]| {
            table.iter().any(|t| t.activity == report.suggestions[1].activity)
        };

        let default = ReportGenerator::local(AppConfig::default());
        let report = default.from_remote(analysis.clone(), 0, &mut StdRng::seed_from_u64(1));
        assert!(in_table(&report, templates::TALK_DEFAULT));

        let mut config = AppConfig::default();
        config.report.remote_suggestion_band = 20.0;
        let lowered = ReportGenerator::local(config);
        let report = lowered.from_remote(analysis, 0, &mut StdRng::seed_from_u64(1));
        assert!(in_table(&report, templates::TALK_COMFORT));
    }

    #[test]
    fn test_top_character() {
        let messages = vec![
            Message::assistant("a").with_character("dain"),
            Message::assistant("b").with_character("seoa"),
            Message::assistant("c").with_character("seoa"),
            Message::user("d").with_character("dain"),
            Message::user("e").with_character("dain"),
        ];
        assert_eq!(top_character(&messages).as_deref(), Some("seoa"));
        assert_eq!(top_character(&[Message::user("x")]), None);
    }

    #[tokio::test]
    async fn test_activity_comments_use_cache() {
        let generator = ReportGenerator::local(AppConfig::default());
        let report = generator
            .generate_local(&[Message::user("짜증나 진짜")], 0, &mut StdRng::seed_from_u64(2))
            .unwrap();
        let cache = CommentCache::new();
        let profile = UserProfile {
            nickname: Some("민지".to_string()),
        };

        let comments = activity_comments(&report, "dain", Some(&profile), &FallbackCommentSource, &cache).await;
        assert_eq!(comments.len(), 3);
        assert!(comments.iter().all(|(_, c)| c.starts_with("민지, ")));
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_report_records_top_character() {
        let generator = ReportGenerator::local(AppConfig::default());
        let messages = vec![
            Message::user("안녕"),
            Message::assistant("반가워").with_character("seoa"),
            Message::user("오늘 힘들었어"),
            Message::assistant("무슨 일 있었어?").with_character("seoa"),
        ];
        let report = generator
            .generate_local(&messages, 0, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(report.character_id.as_deref(), Some("seoa"));

        let solo = generator
            .generate_local(&[Message::user("혼잣말")], 0, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(solo.character_id, None);
    }

    #[tokio::test]
    async fn test_bgm_comment_memoized_per_song() {
        let generator = ReportGenerator::local(AppConfig::default());
        let report = generator
            .generate_local(&[Message::user("요즘 너무 힘들어")], 0, &mut StdRng::seed_from_u64(2))
            .unwrap();
        let cache = CommentCache::new();
        let profile = UserProfile {
            nickname: Some("민지".to_string()),
        };

        let comment = bgm_comment(&report, Some("dain"), Some(&profile), &FallbackCommentSource, &cache).await;
        assert_eq!(comment, "민지님, 이 노래를 한번 들어보세요.");
        let topic = CommentTopic::Bgm {
            title: report.bgm_recommendation.title.clone(),
            artist: report.bgm_recommendation.artist.clone(),
        };
        assert_eq!(cache.get("dain", &topic), Some(comment));
    }

    #[tokio::test]
    async fn test_bgm_comment_without_character_skips_cache() {
        let generator = ReportGenerator::local(AppConfig::default());
        let report = generator
            .generate_local(&[Message::user("요즘 너무 힘들어")], 0, &mut StdRng::seed_from_u64(2))
            .unwrap();
        let cache = CommentCache::new();

        let comment = bgm_comment(&report, None, None, &FallbackCommentSource, &cache).await;
        assert_eq!(comment, "사용자님, 이 노래를 한번 들어보세요.");
        assert!(cache.is_empty());
    }
}
