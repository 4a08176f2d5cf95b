//! Calendar-day mood timeline for a week of conversation
//!
//! Each day is scored on a 0-100 scale where 50 is neutral. Days are bucketed
//! by the UTC date of the message timestamp.

use chrono::Duration;
use chrono::NaiveDate;
use tracing::debug;

use crate::lexicon::*;
use crate::models::DayPoint;
use crate::models::Message;

/// Score of a day without messages, and the starting point of every message
pub const NEUTRAL_DAY_SCORE: i32 = 50;

const DAY_NAMES: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

const STRONG_KEYWORD_POINTS: i32 = 12;
const KEYWORD_POINTS: i32 = 8;
const EMOJI_POINTS: i32 = 10;
const INTENSIFIER_POINTS: i32 = 8;
const PUNCTUATION_POINTS: i32 = 5;

fn keyword_points(text: &str, keywords: &[&str], points: i32) -> i32 {
    keywords.iter().filter(|k| text.contains(*k)).count() as i32 * points
}

/// Positivity of one message on 0-100
pub fn message_emotion_score(text: &str) -> u8 {
    if text.is_empty() {
        return NEUTRAL_DAY_SCORE as u8;
    }

    let mut score = NEUTRAL_DAY_SCORE;
    score += keyword_points(text, DAY_STRONG_POSITIVE, STRONG_KEYWORD_POINTS);
    score += keyword_points(text, DAY_POSITIVE, KEYWORD_POINTS);

    let strong_negative = keyword_points(text, DAY_STRONG_NEGATIVE, STRONG_KEYWORD_POINTS);
    score -= strong_negative;
    score -= keyword_points(text, DAY_NEGATIVE, KEYWORD_POINTS);

    // Excitement only counts when nothing strongly negative is said
    if EXCLAMATION_RUN.is_match(text) && strong_negative == 0 {
        score += PUNCTUATION_POINTS;
    }
    if DOUBT_RUN.is_match(text) {
        score -= PUNCTUATION_POINTS;
    }

    score += count_chars(text, DAY_POSITIVE_EMOJI) as i32 * EMOJI_POINTS;
    score -= count_chars(text, DAY_NEGATIVE_EMOJI) as i32 * EMOJI_POINTS;

    if DAY_POSITIVE_INTENSIFIER.is_match(text) {
        score += INTENSIFIER_POINTS;
    }
    if DAY_NEGATIVE_INTENSIFIER.is_match(text) {
        score -= INTENSIFIER_POINTS;
    }

    score.clamp(0, 100) as u8
}

/// Rounded mean day score, neutral when there is nothing to score
pub fn day_score<'a>(texts: impl IntoIterator<Item = &'a str>) -> u8 {
    let scores: Vec<u32> = texts
        .into_iter()
        .map(|text| u32::from(message_emotion_score(text)))
        .collect();
    if scores.is_empty() {
        return NEUTRAL_DAY_SCORE as u8;
    }
    let mean = scores.iter().sum::<u32>() as f64 / scores.len() as f64;
    mean.round() as u8
}

/// One point per weekday starting at the Monday `week_start`, stopping after
/// `today`. Only timestamped user utterances are scored.
pub fn weekly_timeline(messages: &[Message], week_start: NaiveDate, today: NaiveDate) -> Vec<DayPoint> {
    let mut timeline = Vec::with_capacity(DAY_NAMES.len());

    for (offset, day) in DAY_NAMES.iter().enumerate() {
        let date = week_start + Duration::days(offset as i64);
        if date > today {
            break;
        }

        let texts: Vec<&str> = messages
            .iter()
            .filter(|m| m.is_user_utterance())
            .filter(|m| m.timestamp.is_some_and(|ts| ts.date_naive() == date))
            .map(|m| m.text.as_str())
            .collect();

        debug!("Scoring {} ({}) from {} messages", day, date, texts.len());

        timeline.push(DayPoint {
            day: (*day).to_string(),
            value: day_score(texts),
            date: date.format("%Y-%m-%d").to_string(),
        });
    }

    timeline
}
