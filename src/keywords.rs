//! Keyword extraction for the report word cloud

use std::collections::HashMap;
use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::lexicon::HANGUL_WORD;
use crate::models::user_messages;
use crate::models::KeywordEntry;
use crate::models::Message;

/// Maximum number of keywords kept on a report
pub const KEYWORD_LIMIT: usize = 10;

/// Single trailing particle characters removed before counting
const PARTICLE_SUFFIXES: &[char] = &[
    '이', '가', '을', '를', '은', '는', '와', '과', '도', '만', '까', '지', '부', '터', '에', '서', '게',
];

lazy_static! {
    static ref STOP_WORDS: HashSet<&'static str> = get_stop_words().into_iter().collect();
}

/// Ranked keywords over the user-authored messages, at most [`KEYWORD_LIMIT`]
pub fn extract(messages: &[Message]) -> Vec<KeywordEntry> {
    let texts: Vec<&str> = user_messages(messages)
        .into_iter()
        .map(|m| m.text.as_str())
        .collect();
    extract_from_texts(&texts)
}

/// Same as [`extract`] over raw texts
pub fn extract_from_texts(texts: &[&str]) -> Vec<KeywordEntry> {
    // First-seen order breaks count ties
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for text in texts {
        for token in HANGUL_WORD.find_iter(text) {
            if let Some(word) = content_word(token.as_str()) {
                let count = counts.entry(word.to_string()).or_insert_with(|| {
                    order.push(word.to_string());
                    0
                });
                *count += 1;
            }
        }
    }

    let mut ranked: Vec<(String, u32)> = order
        .into_iter()
        .map(|word| {
            let count = counts.get(&word).copied().unwrap_or(0);
            (word, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(KEYWORD_LIMIT)
        .map(|(word, count)| KeywordEntry { word, count })
        .collect()
}

/// Strip one trailing particle and reject stop words and short stems
pub fn content_word(token: &str) -> Option<&str> {
    if is_stop_word(token) {
        return None;
    }
    let cleaned = strip_particle(token);
    if cleaned.chars().count() < 2 || is_stop_word(cleaned) {
        return None;
    }
    Some(cleaned)
}

fn strip_particle(word: &str) -> &str {
    match word.chars().last() {
        Some(last) if PARTICLE_SUFFIXES.contains(&last) => &word[..word.len() - last.len_utf8()],
        _ => word,
    }
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Connectives, auxiliaries, pronouns, generic feeling words and particles
fn get_stop_words() -> Vec<&'static str> {
    vec![
        "그리고", "그런데", "그래서", "하지만", "그렇지만", "그런", "이런", "저런", "어떤", "어떻게",
        "어떠니", "그냥", "정말", "진짜", "너무", "많이", "조금", "좀", "잘", "더", "다시", "또", "그때",
        "지금", "오늘", "어제", "내일", "아주", "매우", "완전", "엄청", "정말로", "진짜로", "그래도",
        "그러나", "그런가", "이런가", "저런가", "있어", "없어", "보여", "보고", "보니", "보면", "보는",
        "보자", "보고서", "보니까", "보는데", "하는", "하는데", "하니까", "해서", "하고", "하면", "하자",
        "하니", "하네", "하나", "되는", "되는데", "되니까", "되어서", "되고", "되면", "되니", "되네",
        "생각", "생각이", "생각해", "생각하", "생각하는", "생각하면", "생각하니", "생각하는데",
        "말하는", "말하는데", "말하", "말해", "말하면", "말하니", "느껴", "느끼", "느끼는", "느끼는데",
        "느끼면", "느끼니", "알아", "알고", "알았", "알았어", "알았는데", "알았으니", "모르", "모르는",
        "모르는데", "모르겠", "모르겠어", "모르겠는데", "괜찮", "괜찮아", "괜찮은", "괜찮은데",
        "괜찮으니", "좋아", "좋은", "좋은데", "좋으니", "좋아서", "싫어", "싫은", "싫은데", "싫으니",
        "싫어서", "기분", "기분이", "기분은", "기분인데", "기분이야", "마음", "마음이", "마음은",
        "마음인데", "마음이야", "에서", "에게", "에게서", "으로", "로", "의", "을", "를", "이", "가",
        "은", "는", "와", "과", "도", "만", "까지", "부터", "같아", "같은", "같은데", "같으니", "같아서",
        "처럼", "만큼", "보다", "여기", "저기", "거기", "어디", "언제", "누구", "무엇", "뭐", "왜",
        "할일이", "많아서", "있는데", "없는데", "있으니", "없으니", "있어서", "없어서", "그래", "그래요",
        "그렇구나", "그렇군", "그렇네", "그렇다", "이야", "이야기", "이야기를", "이야기는", "이야기야",
        "화나", "화났", "화났어", "화났는데", "화났으니",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ====== Token Filtering Tests ======

    #[test]
    fn test_particle_is_stripped() {
        assert_eq!(content_word("커피를"), Some("커피"));
        assert_eq!(content_word("회사에서"), Some("회사에"));
    }

    #[test]
    fn test_stop_words_rejected_before_and_after_stripping() {
        assert_eq!(content_word("그리고"), None);
        // 마음을 -> 마음, a stop word
        assert_eq!(content_word("마음을"), None);
    }

    #[test]
    fn test_short_stem_rejected() {
        // 나는 -> 나
        assert_eq!(content_word("나는"), None);
    }

    // ====== Extraction Tests ======

    #[test]
    fn test_ranked_by_count_with_first_seen_tiebreak() {
        let messages = vec![
            Message::user("회사 일이 많아 야근"),
            Message::assistant("회사 회사 회사"),
            Message::user("야근 또 야근"),
        ];
        let keywords = extract(&messages);
        // 일이 strips to a single syllable and is dropped
        assert_eq!(keywords.len(), 3);
        assert_eq!(keywords[0], KeywordEntry { word: "야근".to_string(), count: 3 });
        assert_eq!(keywords[1].word, "회사");
        assert_eq!(keywords[1].count, 1);
        assert_eq!(keywords[2].word, "많아");
    }

    #[test]
    fn test_limit_and_invariants() {
        let text = "사과 배추 감자 고구마 당근 양파 마늘 오이 호박 가지볶음 토마토 상추 시금치 버섯";
        let keywords = extract_from_texts(&[text]);
        assert_eq!(keywords.len(), KEYWORD_LIMIT);
        for entry in &keywords {
            assert!(entry.word.chars().count() >= 2);
            assert!(!is_stop_word(&entry.word));
        }
    }

    #[test]
    fn test_no_tokens_gives_empty_list() {
        assert!(extract_from_texts(&["ok 👍 !!", ""]).is_empty());
    }
}
