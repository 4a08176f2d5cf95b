//! Narrative and recommendation selection
//!
//! Every field is picked from mood-conditioned template banks. Picks within a
//! band are uniformly random and intentionally differ between calls; callers
//! that need reproducible output pass a seeded generator.

pub mod bgm;
pub mod persona;
pub mod templates;

use rand::Rng;
use serde::Serialize;

pub use persona::tendency;
pub use persona::DEFAULT_PERSONA;
pub use templates::SuggestionTemplate;

use crate::classifier::MOOD_THRESHOLD;
use crate::models::AggregateStats;
use crate::models::BgmEntry;
use crate::models::IssueReason;
use crate::models::KeywordEntry;
use crate::models::MoodLabel;
use crate::models::Persona;
use crate::models::PsychologicalIssue;
use crate::models::Suggestion;
use crate::models::TendencyGauge;
use crate::models::TherapeuticActivity;

/// All narrative fields chosen for one report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeBundle {
    pub episode_summary: String,
    pub next_scene_suggestion: String,
    pub analysis: String,
    pub position: String,
    pub interpretation: String,
    pub psychological_issues: Vec<PsychologicalIssue>,
    pub issue_reasons: Vec<IssueReason>,
    pub therapeutic_activities: Vec<TherapeuticActivity>,
    pub suggestions: Vec<Suggestion>,
    pub bgm_recommendation: BgmEntry,
    pub persona: Persona,
    pub tendency: Vec<TendencyGauge>,
}

/// Uniform pick from a non-empty static table
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, table: &'a [T]) -> &'a T {
    &table[rng.gen_range(0..table.len())]
}

/// Select every narrative field for the given stats
pub fn select<R: Rng + ?Sized>(
    stats: &AggregateStats,
    keywords: &[KeywordEntry],
    suggestion_band: f64,
    rng: &mut R,
) -> NarrativeBundle {
    let mood = stats.dominant_mood;
    let psychological_issues = templates::psychological_issues(stats.conflict_score, stats.comfort_score);
    let issue_reasons = issue_reasons(&psychological_issues);

    NarrativeBundle {
        episode_summary: templates::episode_summary(mood).to_string(),
        next_scene_suggestion: templates::next_scene_suggestion(mood).to_string(),
        analysis: templates::analysis(mood),
        position: templates::position(mood),
        interpretation: templates::interpretation(mood),
        psychological_issues,
        issue_reasons,
        therapeutic_activities: templates::therapeutic_activities(mood),
        suggestions: select_suggestions(stats, suggestion_band, rng),
        bgm_recommendation: select_bgm(stats, rng),
        persona: select_persona(stats, rng),
        tendency: tendency(stats, keywords),
    }
}

pub fn issue_reasons(issues: &[PsychologicalIssue]) -> Vec<IssueReason> {
    issues
        .iter()
        .map(|issue| IssueReason {
            issue: issue.title.clone(),
            reason: format!("이 문제는 {}", issue.description),
        })
        .collect()
}

/// Variant tables for the rest, talk and hobby slots
pub fn suggestion_tables(stats: &AggregateStats, band: f64) -> [&'static [SuggestionTemplate]; 3] {
    let mood = stats.dominant_mood;
    let romance = mood == MoodLabel::Romance || stats.romance_score > band;
    let comfort = mood == MoodLabel::Comfort || stats.comfort_score > band;
    let conflict = mood == MoodLabel::Conflict || stats.conflict_score > band;

    let rest = if conflict {
        templates::REST_CONFLICT
    } else if romance {
        templates::REST_ROMANCE
    } else {
        templates::REST_DEFAULT
    };

    let talk = if comfort {
        templates::TALK_COMFORT
    } else {
        templates::TALK_DEFAULT
    };

    let hobby = if romance {
        templates::HOBBY_ROMANCE
    } else if conflict {
        templates::HOBBY_CONFLICT
    } else {
        templates::HOBBY_DEFAULT
    };

    [rest, talk, hobby]
}

/// One suggestion per slot, always three
pub fn select_suggestions<R: Rng + ?Sized>(stats: &AggregateStats, band: f64, rng: &mut R) -> Vec<Suggestion> {
    suggestion_tables(stats, band)
        .iter()
        .map(|table| pick(rng, table).to_suggestion())
        .collect()
}

/// Catalogue the soundtrack is drawn from. Any score above the mood
/// threshold qualifies, checked romance first.
pub fn bgm_mood(stats: &AggregateStats) -> MoodLabel {
    let mood = stats.dominant_mood;
    if mood == MoodLabel::Romance || stats.romance_score > MOOD_THRESHOLD {
        MoodLabel::Romance
    } else if mood == MoodLabel::Comfort || stats.comfort_score > MOOD_THRESHOLD {
        MoodLabel::Comfort
    } else if mood == MoodLabel::Conflict || stats.conflict_score > MOOD_THRESHOLD {
        MoodLabel::Conflict
    } else {
        MoodLabel::Neutral
    }
}

pub fn select_bgm<R: Rng + ?Sized>(stats: &AggregateStats, rng: &mut R) -> BgmEntry {
    pick(rng, bgm::tracks_for(bgm_mood(stats))).to_entry()
}

pub fn select_persona<R: Rng + ?Sized>(stats: &AggregateStats, rng: &mut R) -> Persona {
    pick(rng, persona::persona_band(stats)).to_persona()
}

pub fn default_persona() -> Persona {
    DEFAULT_PERSONA.to_persona()
}
