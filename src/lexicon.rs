//! Static lexicon tables for emotion scoring
//!
//! Keyword lists are matched as plain substrings. Emoji sets are matched per
//! Unicode scalar value, so a variation selector after an emoji never counts
//! as a second match. Regex patterns are compiled once on first use.

use lazy_static::lazy_static;
use regex::Regex;

// ====== Romance ======

pub const ROMANCE_STRONG: &[&str] = &["사랑해", "사랑", "설레", "설렘", "두근", "너무좋아", "완전좋아"];

pub const ROMANCE_NORMAL: &[&str] = &[
    "좋아해", "좋아", "보고 싶", "보고싶", "너 생각", "그리워", "좋아한다", "마음", "심장", "떨려",
    "행복", "기쁨", "웃음", "미소",
];

pub const ROMANCE_EMOJI: &[char] = &['❤', '💕', '💖', '💗', '💘', '💝', '😍', '🥰', '😘'];

// ====== Comfort ======

pub const COMFORT_STRONG: &[&str] = &["힘들어", "외로워", "슬퍼", "아파", "우울", "지쳐", "괴로워", "고통"];

/// Words offering comfort to the partner
pub const COMFORT_GIVING: &[&str] = &["괜찮아", "힘내", "위로", "안아", "따뜻", "포근", "편안", "안심"];

/// Words signalling the speaker needs comfort
pub const COMFORT_NEEDING: &[&str] = &[
    "걱정", "아픔", "아프", "울어", "피곤", "힘들", "지침", "외로움", "슬픔", "불안",
];

pub const COMFORT_EMOJI: &[char] = &[
    '😢', '😭', '😔', '😞', '😟', '😕', '🙁', '☹', '😣', '😖', '😫', '😩', '💔',
];

// ====== Conflict ======

pub const CONFLICT_STRONG: &[&str] = &["화나", "분노", "미워", "화", "최악", "못참겠", "싫어"];

pub const CONFLICT_NORMAL: &[&str] = &[
    "이해 못해", "실망", "아쉬워", "서운", "섭섭", "억울", "원망", "답답", "불만", "후회",
];

/// Anger and resentment words that escalate when paired with fatigue
pub const CONFLICT_WITH_TIRED: &[&str] = &[
    "화나", "싫어", "미워", "화", "분노", "실망", "아쉬워", "서운", "섭섭", "억울", "원망", "답답",
];

pub const TIRED_MARKERS: &[&str] = &["지치", "피곤", "힘들"];

pub const CONFLICT_EMOJI: &[char] = &['😤', '😠', '😡', '💢'];

// ====== Weights ======

pub const STRONG_WEIGHT: f64 = 1.0;
pub const NORMAL_WEIGHT: f64 = 0.7;
pub const EMOJI_WEIGHT: f64 = 0.8;
pub const INTENSIFIER_WEIGHT: f64 = 0.8;
pub const ELLIPSIS_WEIGHT: f64 = 0.5;
pub const ANNOYANCE_WEIGHT: f64 = 1.0;
pub const TIRED_PAIR_WEIGHT: f64 = 0.6;

// ====== Weekly day score ======

pub const DAY_STRONG_POSITIVE: &[&str] = &[
    "사랑", "행복", "기쁨", "설레", "두근", "사랑해", "좋아해", "완전", "최고", "너무좋아", "진짜좋아",
    "대박", "신나", "즐거워",
];

pub const DAY_POSITIVE: &[&str] = &[
    "좋아", "웃음", "미소", "떨려", "고마워", "감사", "축하", "응원", "안심", "위로", "괜찮", "힘내",
    "잘될", "믿어", "기대", "소중", "특별", "의미", "보고싶", "그리워", "기쁨", "평화", "편안", "즐거",
    "재밌", "재미있", "멋져", "좋네", "좋구나", "좋다", "예쁘",
];

pub const DAY_STRONG_NEGATIVE: &[&str] = &[
    "힘들어", "너무힘들", "정말힘들", "죽겠", "못하겠", "우울", "슬퍼", "아파", "외로워", "괴로워",
    "고통", "불안", "두려워", "무서워", "최악", "싫어", "미워", "화나", "짜증",
];

pub const DAY_NEGATIVE: &[&str] = &[
    "힘들", "걱정", "답답", "서운", "실망", "후회", "아쉽", "미안", "그만", "안돼", "못해", "어려워",
    "피곤", "지쳐", "지친", "슬픔", "외로움", "불안함", "부담", "스트레스", "힘듦",
];

pub const DAY_POSITIVE_EMOJI: &[char] = &[
    '😊', '😄', '😁', '😃', '😀', '😆', '😍', '🥰', '😘', '💕', '💖', '❤', '💗', '🎉', '✨', '🌟',
    '😎', '🤗', '😌', '☺', '🙂',
];

pub const DAY_NEGATIVE_EMOJI: &[char] = &[
    '😢', '😭', '😔', '😞', '😟', '😕', '🙁', '☹', '😣', '😖', '😫', '😩', '😤', '😠', '😡', '💔',
];

lazy_static! {
    /// "What kind of X do you like" style questions about neutral topics.
    /// Word classes are ASCII only, matching how the patterns behave on the client.
    pub static ref PREFERENCE_QUESTIONS: Vec<Regex> = [
        r"어떤\s+[0-9A-Za-z_]+\s*(좋아|조아|선호|취향)",
        r"무엇(을|를)\s*(좋아|조아|선호)",
        r"뭐\s*(좋아|조아|선호)",
        r"[0-9A-Za-z_]+\s*(좋아|조아|선호|취향)\s*(해|해요|하세요|하나|하니|하냐)",
        r"[0-9A-Za-z_]+\s*(종류|맛|스타일|타입)\s*(좋아|조아|선호)",
        r"(커피|차|음식|음료|음악|영화|책|색깔|색|드라마|게임|스포츠|운동|취미|취향|선호)\s*(좋아|조아|선호)",
        r"(좋아|조아|선호)\s*(하는|하는)\s*(커피|차|음식|음료|음악|영화|책|색깔|색|드라마|게임|스포츠|운동|취미)",
        r"(어떤|무엇|뭐)\s*(커피|차|음식|음료|음악|영화|책|색깔|색|드라마|게임|스포츠|운동|취미)",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect();

    pub static ref ROMANCE_INTENSIFIER: Regex =
        compile(r"(너무|정말|진짜|완전|엄청).{0,3}(좋아|사랑|행복|설레)");

    pub static ref COMFORT_INTENSIFIER: Regex =
        compile(r"(너무|정말|진짜|완전|엄청).{0,3}(힘들|외로|슬퍼|아파|우울)");

    /// Annoyance in an inflected verb form
    pub static ref ANNOYANCE_VERB: Regex = compile(r"짜증(나|내|낸|나는|났|날)");

    /// Annoyance or blame directed at the second person
    pub static ref DIRECTED_BLAME: Regex =
        compile(r"(너|당신|네|니|그쪽).{0,5}(때문|탓|잘못|화나|짜증)");

    pub static ref ANNOYANCE_INTENSIFIER: Regex =
        compile(r"(너무|정말|진짜|완전|엄청).{0,3}(짜증)");

    pub static ref CONFLICT_INTENSIFIER: Regex =
        compile(r"(너무|정말|진짜|완전|엄청).{0,3}(화|싫|미워|답답)");

    pub static ref DAY_POSITIVE_INTENSIFIER: Regex =
        compile(r"(너무|정말|진짜|완전|엄청).{0,3}(좋아|행복|기쁨|설레|사랑)");

    pub static ref DAY_NEGATIVE_INTENSIFIER: Regex =
        compile(r"(너무|정말|진짜|완전|엄청).{0,3}(힘들|슬퍼|아파|외로|우울)");

    pub static ref EXCLAMATION_RUN: Regex = compile(r"!{2,}");

    pub static ref DOUBT_RUN: Regex = compile(r"\?{2,}|\.{3,}");

    /// Content runs of two or more Hangul syllables
    pub static ref HANGUL_WORD: Regex = compile(r"[가-힣]{2,}");
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid lexicon regex")
}

/// True when the text contains an inflected or second-person directed annoyance
pub fn has_actual_annoyance(text: &str) -> bool {
    ANNOYANCE_VERB.is_match(text) || DIRECTED_BLAME.is_match(text)
}

/// Sum of `weight` for every keyword present at least once
pub fn presence_weight(text: &str, keywords: &[&str], weight: f64) -> f64 {
    keywords.iter().filter(|k| text.contains(*k)).count() as f64 * weight
}

/// Number of characters in `text` that belong to `set`
pub fn count_chars(text: &str, set: &[char]) -> usize {
    text.chars().filter(|c| set.contains(c)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(PREFERENCE_QUESTIONS.len(), 8);
        assert!(ROMANCE_INTENSIFIER.is_match("너무 좋아"));
        assert!(COMFORT_INTENSIFIER.is_match("정말 힘들어"));
        assert!(CONFLICT_INTENSIFIER.is_match("진짜 싫어"));
        assert!(DAY_POSITIVE_INTENSIFIER.is_match("완전 행복"));
        assert!(DAY_NEGATIVE_INTENSIFIER.is_match("엄청 우울"));
        assert!(EXCLAMATION_RUN.is_match("와!!"));
        assert!(DOUBT_RUN.is_match("음..."));
        assert_eq!(HANGUL_WORD.find_iter("나 오늘 행복").count(), 2);
    }

    #[test]
    fn test_preference_word_class_is_ascii() {
        // Hangul before 좋아해 must not read as a "what do you like" question
        assert!(!PREFERENCE_QUESTIONS.iter().any(|re| re.is_match("너를 좋아해")));
        assert!(PREFERENCE_QUESTIONS.iter().any(|re| re.is_match("coffee 좋아해")));
        assert!(PREFERENCE_QUESTIONS.iter().any(|re| re.is_match("커피 좋아해?")));
    }

    #[test]
    fn test_presence_weight_counts_each_keyword_once() {
        let weight = presence_weight("좋아 좋아 좋아", &["좋아"], 0.7);
        assert!((weight - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_count_chars_ignores_variation_selector() {
        assert_eq!(count_chars("☹️☹️", COMFORT_EMOJI), 2);
        assert_eq!(count_chars("😍😍 hi", ROMANCE_EMOJI), 2);
    }

    #[test]
    fn test_annoyance_detection() {
        assert!(has_actual_annoyance("진짜 짜증나"));
        assert!(has_actual_annoyance("너 때문에 늦었잖아"));
        assert!(!has_actual_annoyance("짜증이라는 단어"));
    }
}
