//! CLI command handlers
//!
//! This module contains all the command handlers for the moodlens CLI

use std::path::Path;

use chrono::Datelike;
use chrono::Local;
use chrono::NaiveDate;
use chrono::Weekday;
use tracing::info;

use crate::cli::output::*;
use crate::comments::CommentCache;
use crate::comments::CommentSource;
use crate::comments::FallbackCommentSource;
use crate::comments::RemoteCommentSource;
use crate::models::Message;
use crate::models::Report;
use crate::models::MoodLabel;
use crate::models::UserProfile;
use crate::narrative::tendency;
use crate::pipeline::activity_comments;
use crate::pipeline::bgm_comment;
use crate::pipeline::ReportGenerator;
use crate::store;
use crate::store::JsonFileStore;
use crate::store::ReportStore;
use crate::store::SessionFile;
use crate::visual;
use crate::visual::DecorativeEmotion;
use crate::visual::StableId;
use crate::weekly::weekly_timeline;
use crate::AppConfig;
use crate::MoodLensError;
use crate::Result;

/// Read a JSON array of messages
pub fn load_messages(path: &Path) -> Result<Vec<Message>> {
    let content = std::fs::read_to_string(path)?;
    let messages: Vec<Message> = serde_json::from_str(&content)?;
    info!("Loaded {} messages from {}", messages.len(), path.display());
    Ok(messages)
}

fn parse_date(value: &str, name: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| MoodLensError::InvalidInput(format!("{name} must be YYYY-MM-DD: {e}")))
}

fn open_store(config: &AppConfig) -> JsonFileStore {
    JsonFileStore::new(config.reports_path())
}

/// Sessions are keyed by the messages file, so regenerating the same
/// conversation file keeps its soundtrack
fn conversation_key(messages_path: &Path) -> String {
    std::fs::canonicalize(messages_path)
        .unwrap_or_else(|_| messages_path.to_path_buf())
        .display()
        .to_string()
}

/// Generate a report with a pinned soundtrack, saving it when asked
pub async fn generate_report(
    config: &AppConfig,
    messages_path: &Path,
    save: bool,
    remote: bool,
    seed: Option<u64>,
) -> Result<Report> {
    let messages = load_messages(messages_path)?;
    let store = open_store(config);
    let saved = store::saved_count(&store)?;

    let mut config = config.clone();
    if remote {
        config.remote.enabled = true;
    }
    let generator = ReportGenerator::new(config)?;

    let Some(mut report) = generator.generate(&messages, saved, seed).await else {
        return Err(MoodLensError::EmptyConversation);
    };

    let sessions = SessionFile::new(generator.config().sessions_path());
    let key = conversation_key(messages_path);
    let mut session = sessions.load(&key)?;
    if generator.pin_bgm(&mut session, &mut report, messages.len()) {
        info!("New session for {}, soundtrack re-picked", key);
    }
    sessions.save(&key, &session)?;

    if save {
        let stored = store::save_report(&store, report)?;
        info!("Report saved to {}", store.path().display());
        Ok(stored)
    } else {
        Ok(report)
    }
}

/// Handle generate command
pub async fn handle_generate_command(
    config: &AppConfig,
    messages_path: &Path,
    save: bool,
    remote: bool,
    seed: Option<u64>,
) -> Result<()> {
    let report = generate_report(config, messages_path, save, remote, seed).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Handle list command
pub fn handle_list_command(config: &AppConfig, limit: usize) -> Result<()> {
    let mut reports = open_store(config).load_all()?;
    reports.sort_by(|a, b| b.date.cmp(&a.date));

    print_list_header("reports", limit);
    let entries: Vec<_> = reports
        .into_iter()
        .take(limit)
        .map(|report| {
            let identity = visual::for_report(&report);
            (report, identity)
        })
        .collect();
    print_report_list(&entries);
    Ok(())
}

/// Handle show command
pub async fn handle_show_command(
    config: &AppConfig,
    id: &str,
    json: bool,
    character: Option<String>,
    nickname: Option<String>,
) -> Result<()> {
    let report = store::find_report(&open_store(config), id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let identity = visual::for_report(&report);
    let gauges = tendency(&report.stats, &report.keywords);
    print_report_summary(&report, &identity, &gauges);

    let profile = UserProfile {
        nickname: nickname.or_else(|| Some(config.default_nickname().to_string())),
    };
    let character = character.or_else(|| report.character_id.clone());
    let remote_source;
    let source: &dyn CommentSource = if config.remote_enabled() {
        remote_source = RemoteCommentSource::from_config(config)?;
        &remote_source
    } else {
        &FallbackCommentSource
    };

    let cache = CommentCache::new();
    println!();
    if let Some(character) = character.as_deref() {
        let comments = activity_comments(&report, character, Some(&profile), source, &cache).await;
        print_comments(&comments);
    }
    let comment = bgm_comment(&report, character.as_deref(), Some(&profile), source, &cache).await;
    print_bgm_comment(&comment);
    Ok(())
}

/// Handle delete command
pub fn handle_delete_command(config: &AppConfig, id: &str) -> Result<()> {
    store::delete_report(&open_store(config), id)?;
    print_success(&format!("Deleted report {id}"));
    Ok(())
}

/// Handle visual command
pub fn handle_visual_command(stable_id: &str, emotion: DecorativeEmotion, mood: Option<MoodLabel>) -> Result<()> {
    if stable_id.trim().is_empty() {
        return Err(MoodLensError::InvalidInput("stable id must not be empty".to_string()));
    }
    let id = StableId::resolve(Some(stable_id), None, None);
    let identity = visual::visual_identity(&id, emotion, mood, &[]);
    print_visual(&identity);
    Ok(())
}

/// Handle weekly command
pub fn handle_weekly_command(messages_path: &Path, week_start: &str, today: Option<&str>) -> Result<()> {
    let week_start = parse_date(week_start, "week-start")?;
    if week_start.weekday() != Weekday::Mon {
        return Err(MoodLensError::InvalidInput(format!(
            "week-start must be a Monday, got {}",
            week_start.weekday()
        )));
    }
    let today = match today {
        Some(value) => parse_date(value, "today")?,
        None => Local::now().date_naive(),
    };

    let messages = load_messages(messages_path)?;
    print_weekly(&weekly_timeline(&messages, week_start, today));
    Ok(())
}

/// Handle config command
pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
