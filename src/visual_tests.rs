//! Unit tests for visual identity generation

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use crate::models::AggregateStats;
    use crate::models::KeywordEntry;
    use crate::models::MoodLabel;
    use crate::visual::*;

    fn keywords(words: &[&str]) -> Vec<KeywordEntry> {
        words
            .iter()
            .map(|w| KeywordEntry {
                word: w.to_string(),
                count: 1,
            })
            .collect()
    }

    fn conflict_stats(conflict: f64) -> AggregateStats {
        AggregateStats {
            conflict_score: conflict,
            dominant_mood: MoodLabel::Conflict,
            ..Default::default()
        }
    }

    // ====== Hash Tests ======

    #[test]
    fn test_hash_identifier_known_values() {
        assert_eq!(hash_identifier(""), 0);
        assert_eq!(hash_identifier("1"), 49);
        assert_eq!(hash_identifier("12"), 1569);
        assert_eq!(hash_identifier("ab"), 3105);
        assert_eq!(hash_identifier("가"), 44032);
    }

    #[test]
    fn test_hash_identifier_wraps() {
        // Long ids overflow 32 bits; the result stays within i32's magnitude
        let hash = hash_identifier("report_1718000000000_abcdefghi");
        assert!(hash <= 1u64 << 31);
    }

    #[test]
    fn test_stream_is_local_to_each_call() {
        let mut a = DeterministicStream::new(1569);
        let mut b = DeterministicStream::new(1569);
        assert_eq!(a.next_index(6), 2);
        assert_eq!(a.next_index(6), 4);
        assert_eq!(b.next_index(6), 2);
    }

    // ====== Stable Id Tests ======

    #[test]
    fn test_stable_id_precedence() {
        let date = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();

        assert_eq!(
            StableId::resolve(Some("report_1"), Some(3), Some(date)),
            StableId::Id("report_1".to_string())
        );
        assert_eq!(StableId::resolve(Some(""), Some(3), Some(date)), StableId::Episode(3));
        assert_eq!(
            StableId::resolve(None, Some(0), Some(date)),
            StableId::Timestamp(date.timestamp_millis())
        );
    }

    #[test]
    fn test_stable_id_display() {
        assert_eq!(StableId::Episode(12).to_string(), "12");
        assert_eq!(StableId::Id("abc".to_string()).to_string(), "abc");
        assert_eq!(StableId::Timestamp(1700).to_string(), "1700");
    }

    // ====== Gradient Tests ======

    #[test]
    fn test_gradient_linear_three_colors() {
        let css = gradient_css(hash_identifier("12"), DecorativeEmotion::Calm, Some(MoodLabel::Romance));
        assert_eq!(css, "linear-gradient(129deg, #F48FB1 0%, #FCE4EC 39%, #F8BBD0 100%)");
    }

    #[test]
    fn test_gradient_uses_emotion_palette_without_mood() {
        let css = gradient_css(hash_identifier("1"), DecorativeEmotion::Calm, None);
        assert_eq!(css, "linear-gradient(49deg, #66BB6A 0%, #81C784 39%, #C8E6C9 100%)");
    }

    #[test]
    fn test_gradient_radial_two_colors() {
        let css = gradient_css(hash_identifier("2"), DecorativeEmotion::Joy, Some(MoodLabel::Neutral));
        assert_eq!(css, "radial-gradient(circle at 40% 60%, #F1F8E9 0%, #C8E6C9 100%)");
    }

    #[test]
    fn test_visual_identity_is_repeatable() {
        let id = StableId::Id("report_1718000000000_k3j9x0a1b".to_string());
        let kw = keywords(&["행복", "설렘"]);
        let first = visual_identity(&id, DecorativeEmotion::Joy, Some(MoodLabel::Romance), &kw);
        for _ in 0..5 {
            assert_eq!(visual_identity(&id, DecorativeEmotion::Joy, Some(MoodLabel::Romance), &kw), first);
        }
    }

    // ====== Tag Tests ======

    #[test]
    fn test_tag_keyword_from_hash() {
        let identity = visual_identity(&StableId::Episode(1), DecorativeEmotion::Calm, None, &[]);
        assert_eq!(identity.tag_keyword, "안정");
        assert_eq!(identity.emotion, DecorativeEmotion::Calm);
    }

    #[test]
    fn test_annoyance_tag_only_with_real_annoyance() {
        assert!(tag_options(DecorativeEmotion::Anger, true).contains(&"짜증"));
        assert!(!tag_options(DecorativeEmotion::Anger, false).contains(&"짜증"));

        let annoyed = visual_identity(&StableId::Episode(2), DecorativeEmotion::Anger, None, &keywords(&["짜증나"]));
        assert_eq!(annoyed.tag_keyword, "화남");

        let calm = visual_identity(&StableId::Episode(2), DecorativeEmotion::Anger, None, &[]);
        assert_eq!(calm.tag_keyword, "답답함");
    }

    // ====== Decorative Classifier Tests ======

    #[test]
    fn test_decorative_defaults_to_calm() {
        let emotion = classify_decorative(MoodLabel::Neutral, &[], &AggregateStats::default());
        assert_eq!(emotion, DecorativeEmotion::Calm);
    }

    #[test]
    fn test_fatigue_overrides_mood() {
        let emotion = classify_decorative(MoodLabel::Romance, &keywords(&["피곤", "지쳐"]), &AggregateStats::default());
        assert_eq!(emotion, DecorativeEmotion::Tired);
    }

    #[test]
    fn test_decorative_joy_and_lonely() {
        let stats = AggregateStats::default();
        assert_eq!(
            classify_decorative(MoodLabel::Romance, &keywords(&["행복"]), &stats),
            DecorativeEmotion::Joy
        );
        assert_eq!(
            classify_decorative(MoodLabel::Comfort, &keywords(&["외로움"]), &stats),
            DecorativeEmotion::Lonely
        );
    }

    #[test]
    fn test_decorative_anger_needs_conflict_signals() {
        let emotion = classify_decorative(MoodLabel::Conflict, &keywords(&["짜증나"]), &conflict_stats(40.0));
        assert_eq!(emotion, DecorativeEmotion::Anger);
    }

    #[test]
    fn test_tired_wins_ties_with_anger() {
        let stats = AggregateStats::default();
        assert_eq!(
            classify_decorative(MoodLabel::Neutral, &keywords(&["피곤", "답답"]), &stats),
            DecorativeEmotion::Tired
        );
        assert_eq!(
            classify_decorative(MoodLabel::Neutral, &keywords(&["피곤", "화나"]), &stats),
            DecorativeEmotion::Tired
        );
    }

    #[test]
    fn test_decorative_parse() {
        assert_eq!(DecorativeEmotion::parse(" Lonely "), Some(DecorativeEmotion::Lonely));
        assert_eq!(DecorativeEmotion::parse("bored"), None);
    }
}
