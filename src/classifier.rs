//! Aggregation and mood classification
//!
//! The dominant-mood rule is first-match-wins with strict comparisons and a
//! fixed threshold of 20 on the 0-100 scale; ties are never resolved by a
//! secondary key.

use crate::models::AggregateStats;
use crate::models::EmotionScores;
use crate::models::MessageTimelineEntry;
use crate::models::MoodLabel;
use crate::models::MoodTimeline;
use crate::scorer::score_message;

/// Minimum averaged score (0-100) for a mood to dominate
pub const MOOD_THRESHOLD: f64 = 20.0;

/// Per-message intensity above which a message is flagged as important
pub const IMPORTANT_INTENSITY: f64 = 0.6;

/// Characters of message text kept in the timeline preview
pub const PREVIEW_CHARS: usize = 30;

/// Classify averaged scores on the 0-100 scale
pub fn classify(romance: f64, comfort: f64, conflict: f64) -> MoodLabel {
    if romance > comfort && romance > conflict && romance > MOOD_THRESHOLD {
        MoodLabel::Romance
    } else if comfort > conflict && comfort > MOOD_THRESHOLD {
        MoodLabel::Comfort
    } else if conflict > MOOD_THRESHOLD {
        MoodLabel::Conflict
    } else {
        MoodLabel::Neutral
    }
}

/// Mean per-message scores scaled to 0-100; an empty set averages to zero
pub fn average(scores: &[EmotionScores]) -> EmotionScores {
    if scores.is_empty() {
        return EmotionScores::default();
    }
    let n = scores.len() as f64;
    let sum = scores.iter().fold(EmotionScores::default(), |acc, s| EmotionScores {
        romance: acc.romance + s.romance,
        comfort: acc.comfort + s.comfort,
        conflict: acc.conflict + s.conflict,
    });
    EmotionScores {
        romance: sum.romance / n * 100.0,
        comfort: sum.comfort / n * 100.0,
        conflict: sum.conflict / n * 100.0,
    }
}

/// Mood of a set of per-message scores
pub fn classify_scores(scores: &[EmotionScores]) -> MoodLabel {
    let avg = average(scores);
    classify(avg.romance, avg.comfort, avg.conflict)
}

/// Aggregate stats for display. The mood is classified on the unrounded
/// averages, the published scores are rounded to whole numbers.
pub fn aggregate(scores: &[EmotionScores]) -> AggregateStats {
    let avg = average(scores);
    AggregateStats {
        romance_score: avg.romance.round(),
        comfort_score: avg.comfort.round(),
        conflict_score: avg.conflict.round(),
        dominant_mood: classify(avg.romance, avg.comfort, avg.conflict),
    }
}

/// Rebuild stats from already scaled scores, clamping into 0-100
pub fn stats_from_scaled(romance: f64, comfort: f64, conflict: f64) -> AggregateStats {
    let clamp = |v: f64| if v.is_finite() { v.clamp(0.0, 100.0) } else { 0.0 };
    let (romance, comfort, conflict) = (clamp(romance), clamp(comfort), clamp(conflict));
    AggregateStats {
        romance_score: romance,
        comfort_score: comfort,
        conflict_score: conflict,
        dominant_mood: classify(romance, comfort, conflict),
    }
}

/// Moods of the first, middle and last thirds of the scored messages.
/// With fewer than three messages the leading buckets are empty and neutral.
pub fn thirds_timeline(scores: &[EmotionScores]) -> MoodTimeline {
    let third = scores.len() / 3;
    MoodTimeline {
        early: classify_scores(&scores[..third]),
        mid: classify_scores(&scores[third..third * 2]),
        late: classify_scores(&scores[third * 2..]),
    }
}

/// Winning category of a single message and its intensity
pub fn message_emotion(scores: &EmotionScores) -> (MoodLabel, f64) {
    let EmotionScores {
        romance,
        comfort,
        conflict,
    } = *scores;
    if romance > comfort && romance > conflict {
        (MoodLabel::Romance, romance)
    } else if comfort > conflict {
        (MoodLabel::Comfort, comfort)
    } else if conflict > 0.0 {
        (MoodLabel::Conflict, conflict)
    } else {
        (MoodLabel::Neutral, 0.0)
    }
}

/// Timeline entry for one message
pub fn timeline_entry(text: &str, scores: &EmotionScores) -> MessageTimelineEntry {
    let (emotion, intensity) = message_emotion(scores);
    let is_important = intensity > IMPORTANT_INTENSITY;
    MessageTimelineEntry {
        text: preview(text),
        emotion,
        intensity,
        is_important,
        important_note: is_important.then(|| format!("{} 감정이 강하게 나타남", emotion.korean())),
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Score every text once, in order
pub fn score_all<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<EmotionScores> {
    texts.into_iter().map(score_message).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(romance: f64, comfort: f64, conflict: f64) -> EmotionScores {
        EmotionScores {
            romance,
            comfort,
            conflict,
        }
    }

    // ====== Classification Tests ======

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify(25.0, 10.0, 5.0), MoodLabel::Romance);
        assert_eq!(classify(15.0, 15.0, 15.0), MoodLabel::Neutral);
        assert_eq!(classify(10.0, 10.0, 35.0), MoodLabel::Conflict);
    }

    #[test]
    fn test_classify_threshold_is_strict() {
        assert_eq!(classify(20.0, 0.0, 0.0), MoodLabel::Neutral);
        assert_eq!(classify(0.0, 20.0, 0.0), MoodLabel::Neutral);
        assert_eq!(classify(0.0, 0.0, 20.5), MoodLabel::Conflict);
    }

    #[test]
    fn test_classify_ties_fall_through() {
        // romance ties comfort, so comfort is tested next and wins over conflict
        assert_eq!(classify(40.0, 40.0, 10.0), MoodLabel::Comfort);
        // comfort ties conflict, conflict wins on its own threshold
        assert_eq!(classify(0.0, 30.0, 30.0), MoodLabel::Conflict);
    }

    // ====== Aggregation Tests ======

    #[test]
    fn test_average_scales_to_percent() {
        let avg = average(&[triple(1.0, 0.0, 0.5), triple(0.0, 0.0, 0.5)]);
        assert!((avg.romance - 50.0).abs() < 1e-9);
        assert!((avg.conflict - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_rounds_but_classifies_raw() {
        // 20.4 rounds to 20 yet still exceeds the threshold
        let scores = vec![triple(0.204, 0.0, 0.0)];
        let stats = aggregate(&scores);
        assert!((stats.romance_score - 20.0).abs() < 1e-9);
        assert_eq!(stats.dominant_mood, MoodLabel::Romance);
    }

    #[test]
    fn test_stats_from_scaled_clamps() {
        let stats = stats_from_scaled(150.0, -3.0, f64::NAN);
        assert!((stats.romance_score - 100.0).abs() < 1e-9);
        assert!(stats.comfort_score.abs() < 1e-9);
        assert!(stats.conflict_score.abs() < 1e-9);
        assert_eq!(stats.dominant_mood, MoodLabel::Romance);
    }

    // ====== Timeline Tests ======

    #[test]
    fn test_thirds_partition() {
        let scores = vec![
            triple(1.0, 0.0, 0.0),
            triple(1.0, 0.0, 0.0),
            triple(0.0, 1.0, 0.0),
            triple(0.0, 1.0, 0.0),
            triple(0.0, 0.0, 1.0),
            triple(0.0, 0.0, 1.0),
            triple(0.0, 0.0, 1.0),
        ];
        let timeline = thirds_timeline(&scores);
        assert_eq!(timeline.early, MoodLabel::Romance);
        assert_eq!(timeline.mid, MoodLabel::Comfort);
        assert_eq!(timeline.late, MoodLabel::Conflict);
    }

    #[test]
    fn test_thirds_with_two_messages() {
        let timeline = thirds_timeline(&[triple(1.0, 0.0, 0.0), triple(1.0, 0.0, 0.0)]);
        assert_eq!(timeline.early, MoodLabel::Neutral);
        assert_eq!(timeline.mid, MoodLabel::Neutral);
        assert_eq!(timeline.late, MoodLabel::Romance);
    }

    #[test]
    fn test_message_emotion_rules() {
        assert_eq!(message_emotion(&triple(0.0, 0.0, 0.0)), (MoodLabel::Neutral, 0.0));
        assert_eq!(message_emotion(&triple(0.0, 0.3, 0.0)).0, MoodLabel::Comfort);
        assert_eq!(message_emotion(&triple(0.5, 0.5, 0.2)).0, MoodLabel::Comfort);
        assert_eq!(message_emotion(&triple(0.5, 0.5, 0.5)).0, MoodLabel::Conflict);
    }

    #[test]
    fn test_timeline_entry_preview_and_note() {
        let text = "가".repeat(35);
        let entry = timeline_entry(&text, &triple(0.9, 0.0, 0.0));
        assert_eq!(entry.text.chars().count(), 33);
        assert!(entry.text.ends_with("..."));
        assert!(entry.is_important);
        assert_eq!(entry.important_note.as_deref(), Some("로맨스 감정이 강하게 나타남"));

        let calm = timeline_entry("안녕", &triple(0.0, 0.0, 0.0));
        assert_eq!(calm.text, "안녕");
        assert!(!calm.is_important);
        assert!(calm.important_note.is_none());
    }
}
