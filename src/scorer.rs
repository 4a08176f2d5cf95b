//! Per-message emotion scoring
//!
//! Each category is scored independently from weighted keyword presence,
//! emoji counts and intensifier patterns, then clamped to 1.0. Scoring is a
//! pure function of the text and safe to call from any thread.

use crate::lexicon::*;
use crate::models::EmotionScores;

/// Emotion category scored per message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Romance,
    Comfort,
    Conflict,
}

/// Score one category for a text, in [0, 1]
pub fn score(text: &str, category: Category) -> f64 {
    match category {
        Category::Romance => romance_level(text),
        Category::Comfort => comfort_level(text),
        Category::Conflict => conflict_level(text),
    }
}

/// All three category scores for a text
pub fn score_message(text: &str) -> EmotionScores {
    EmotionScores {
        romance: romance_level(text),
        comfort: comfort_level(text),
        conflict: conflict_level(text),
    }
}

/// True for "what kind of X do you like" questions about neutral topics
pub fn is_preference_question(text: &str) -> bool {
    PREFERENCE_QUESTIONS.iter().any(|re| re.is_match(text))
}

pub fn romance_level(text: &str) -> f64 {
    if text.is_empty() || is_preference_question(text) {
        return 0.0;
    }

    let mut level = presence_weight(text, ROMANCE_STRONG, STRONG_WEIGHT)
        + presence_weight(text, ROMANCE_NORMAL, NORMAL_WEIGHT);

    // Trailing ellipsis reads as lingering feeling
    if text.ends_with("...") || text.ends_with('…') {
        level += ELLIPSIS_WEIGHT;
    }

    level += count_chars(text, ROMANCE_EMOJI) as f64 * EMOJI_WEIGHT;

    if ROMANCE_INTENSIFIER.is_match(text) {
        level += INTENSIFIER_WEIGHT;
    }

    level.min(1.0)
}

pub fn comfort_level(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let mut level = presence_weight(text, COMFORT_STRONG, STRONG_WEIGHT)
        + presence_weight(text, COMFORT_GIVING, NORMAL_WEIGHT)
        + presence_weight(text, COMFORT_NEEDING, NORMAL_WEIGHT);

    level += count_chars(text, COMFORT_EMOJI) as f64 * EMOJI_WEIGHT;

    if COMFORT_INTENSIFIER.is_match(text) {
        level += INTENSIFIER_WEIGHT;
    }

    level.min(1.0)
}

pub fn conflict_level(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let mut level = presence_weight(text, CONFLICT_STRONG, STRONG_WEIGHT)
        + presence_weight(text, CONFLICT_NORMAL, NORMAL_WEIGHT);

    let tired = TIRED_MARKERS.iter().any(|k| text.contains(k));
    let annoyed = has_actual_annoyance(text);

    // A bare 짜증 noun is not counted; only inflected or directed forms are
    if annoyed {
        level += ANNOYANCE_WEIGHT;
    }

    // Fatigue escalates only alongside explicit anger or resentment
    if tired {
        if CONFLICT_WITH_TIRED.iter().any(|k| text.contains(k)) {
            level += TIRED_PAIR_WEIGHT;
        }
        if annoyed {
            level += TIRED_PAIR_WEIGHT;
        }
        if text.contains("답답") {
            level += TIRED_PAIR_WEIGHT;
        }
    }

    level += count_chars(text, CONFLICT_EMOJI) as f64 * EMOJI_WEIGHT;

    if annoyed && ANNOYANCE_INTENSIFIER.is_match(text) {
        level += INTENSIFIER_WEIGHT;
    }
    if CONFLICT_INTENSIFIER.is_match(text) {
        level += INTENSIFIER_WEIGHT;
    }

    level.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ====== Romance Tests ======

    #[test]
    fn test_empty_text_scores_zero() {
        let scores = score_message("");
        assert_eq!(scores, EmotionScores::default());
    }

    #[test]
    fn test_strong_romance_keyword() {
        // 설레 alone: strong 1.0
        assert!(approx(romance_level("오늘 좀 설레"), 1.0));
    }

    #[test]
    fn test_normal_romance_keyword_weight() {
        assert!(approx(romance_level("웃음이 나"), 0.7));
    }

    #[test]
    fn test_romance_ellipsis_bonus() {
        assert!(approx(romance_level("그냥 그래..."), 0.5));
        assert!(approx(romance_level("그냥 그래…"), 0.5));
    }

    #[test]
    fn test_romance_emoji_per_occurrence() {
        assert!(approx(romance_level("hi 😍"), 0.8));
        assert!(approx(romance_level("hi 😍😍"), 1.0));
    }

    #[test]
    fn test_preference_question_forces_zero() {
        assert!(approx(romance_level("어떤 커피 좋아해? 사랑해"), 0.0));
        assert!(approx(romance_level("음악 좋아해?"), 0.0));
        assert!(approx(romance_level("뭐 좋아해"), 0.0));
        assert!(approx(score("무엇을 좋아하세요", Category::Romance), 0.0));
    }

    #[test]
    fn test_confession_is_not_a_preference_question() {
        assert!(!is_preference_question("너를 정말 좋아해"));
        assert!(approx(romance_level("너를 정말 좋아해"), 1.0));
    }

    // ====== Comfort Tests ======

    #[test]
    fn test_comfort_giving_and_needing() {
        // 괜찮아 (0.7) + 걱정 (0.7) capped
        assert!(approx(comfort_level("걱정하지마 괜찮아"), 1.0));
        assert!(approx(comfort_level("힘내"), 0.7));
    }

    #[test]
    fn test_comfort_emoji() {
        assert!(approx(comfort_level("😢"), 0.8));
    }

    // ====== Conflict Tests ======

    #[test]
    fn test_bare_annoyance_noun_not_counted() {
        assert!(approx(conflict_level("짜증이라는 단어"), 0.0));
    }

    #[test]
    fn test_inflected_annoyance_counts() {
        assert!(approx(conflict_level("짜증났어"), 1.0));
    }

    #[test]
    fn test_tired_without_anger_does_not_escalate() {
        assert!(approx(conflict_level("오늘 피곤해"), 0.0));
    }

    #[test]
    fn test_tired_with_resentment_escalates() {
        // 서운 0.7 + tired pairing 0.6 -> capped
        assert!(approx(conflict_level("피곤한데 서운해"), 1.0));
        // 후회 alone is normal weight and not in the pairing list
        assert!(approx(conflict_level("피곤한데 후회돼"), 0.7));
    }

    #[test]
    fn test_scores_are_bounded() {
        let text = "너무 사랑해 설레 두근 😍😍😍 힘들어 외로워 😭 화나 짜증나 😡😡";
        let s = score_message(text);
        for value in [s.romance, s.comfort, s.conflict] {
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
