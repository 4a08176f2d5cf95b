//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `moodlens` CLI

use chrono::Local;

use crate::models::DayPoint;
use crate::models::Report;
use crate::models::TendencyGauge;
use crate::text::format_relative_date;
use crate::visual::VisualIdentity;
use crate::AppConfig;

/// Safely truncate a string at character boundary (not byte boundary)
///
/// Returns the string with a "..." suffix if truncated, otherwise unchanged
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Print a list header
pub fn print_list_header(data_type: &str, limit: usize) {
    println!("📋 Listing {data_type} (limit: {limit})");
}

/// One line per report: date, episode, mood and visual tag
pub fn print_report_list(entries: &[(Report, VisualIdentity)]) {
    println!("Found {} reports:", entries.len());
    let now = Local::now();
    for (report, visual) in entries {
        let episode = report
            .episode_number
            .map_or_else(String::new, |n| format!(" #{n}"));
        println!(
            "  - {} | {}{} | {} | #{} | {}",
            report.id,
            format_relative_date(&report.date.to_rfc3339(), &now),
            episode,
            report.dominant_emotion.korean(),
            visual.tag_keyword,
            truncate_str(&report.episode_summary, 30)
        );
    }
}

pub fn print_report_summary(report: &Report, visual: &VisualIdentity, tendency: &[TendencyGauge]) {
    println!("📝 Report {} (episode {})", report.id, report.episode);
    if let Some(number) = report.episode_number {
        println!("  Same-day episode: {number}");
    }
    println!("  Date: {}", report.date.with_timezone(&Local).format("%Y-%m-%d %H:%M"));
    println!(
        "  Mood: {} (romance {:.0}, comfort {:.0}, conflict {:.0})",
        report.dominant_emotion.korean(),
        report.stats.romance_score,
        report.stats.comfort_score,
        report.stats.conflict_score
    );
    println!(
        "  Timeline: {} → {} → {}",
        report.mood_timeline.early.korean(),
        report.mood_timeline.mid.korean(),
        report.mood_timeline.late.korean()
    );
    println!();

    print_visual(visual);
    println!();

    if let Some(persona) = &report.persona {
        println!("🪞 {}", persona.title);
        println!("  {}", persona.summary);
        println!("  {}", persona.tags.join(" "));
        println!();
    }

    println!("💬 {}", report.analysis);
    println!("  {}", report.position);
    println!("  {}", report.interpretation);
    println!();

    if !report.keywords.is_empty() {
        let words: Vec<String> = report
            .keywords
            .iter()
            .map(|k| format!("{}({})", k.word, k.count))
            .collect();
        println!("🔑 Keywords: {}", words.join(", "));
        println!();
    }

    for issue in &report.psychological_issues {
        println!("⚠️  {} [{}] {}", issue.title, issue.severity.korean(), issue.description);
    }

    print_tendency(tendency);
    println!();

    println!("🌱 Suggestions:");
    for suggestion in &report.suggestions {
        println!("  {} {}: {}", suggestion.icon, suggestion.activity, suggestion.description);
    }
    println!();

    let bgm = &report.bgm_recommendation;
    println!("🎵 {} - {} ({})", bgm.title, bgm.artist, bgm.drama);
    println!("  {}", bgm.comment);
    println!("  {}", bgm.youtube_url);
}

pub fn print_visual(visual: &VisualIdentity) {
    println!("🎨 {} #{}", visual.emotion, visual.tag_keyword);
    println!("  {}", visual.gradient_css);
}

pub fn print_tendency(gauges: &[TendencyGauge]) {
    println!("🧭 Mind condition:");
    for gauge in gauges {
        println!(
            "  {} {:>3.0} | {} {} ◀ {:>3.0} ▶ {} {}",
            gauge.label, gauge.value, gauge.left.icon, gauge.left.text, gauge.position, gauge.right.text, gauge.right.icon
        );
    }
}

pub fn print_weekly(points: &[DayPoint]) {
    println!("📅 Weekly mood:");
    for point in points {
        let bar = "█".repeat(usize::from(point.value / 10));
        println!("  {} {} {:>3} {}", point.day, point.date, point.value, bar);
    }
}

pub fn print_comments(comments: &[(String, String)]) {
    for (activity, comment) in comments {
        println!("  💌 {activity}: {comment}");
    }
}

pub fn print_bgm_comment(comment: &str) {
    println!("  🎧 {comment}");
}

pub fn print_config(config: &AppConfig) {
    println!("📋 moodlens Configuration:");
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Directory: {}", config.logging.dir.display());
    println!();

    println!("🌐 Remote:");
    println!("  Enabled: {}", config.remote_enabled());
    println!("  Report URL: {}", config.remote_report_url());
    println!("  Activity comment URL: {}", config.remote_activity_comment_url());
    println!("  BGM comment URL: {}", config.remote_bgm_comment_url());
    println!("  Timeout: {}s", config.remote_timeout_secs());
    println!(
        "  Auth token: {}",
        if config.remote.auth_token.is_some() { "***set***" } else { "none" }
    );
    println!();

    println!("💾 Storage:");
    println!("  Reports: {}", config.reports_path().display());
    println!("  Sessions: {}", config.sessions_path().display());
    println!();

    println!("📝 Report:");
    println!("  Default nickname: {}", config.default_nickname());
    println!("  New session ratio: {}", config.report.new_session_ratio);
    println!("  Local suggestion band: {}", config.report.local_suggestion_band);
    println!("  Remote suggestion band: {}", config.report.remote_suggestion_band);
}

/// Print colored output functions
pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("❌ {msg}");
}
