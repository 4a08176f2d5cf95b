//! Deterministic visual identity for rendered reports
//!
//! A report's gradient and tag keyword are a pure function of its stable
//! identifier, its decorative emotion and its mood. Nothing here draws from
//! `rand`; the only entropy is the identifier hash, walked by a counter that
//! lives for a single generation call.

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::lexicon::has_actual_annoyance;
use crate::models::AggregateStats;
use crate::models::KeywordEntry;
use crate::models::MoodLabel;
use crate::models::Report;

/// Presentation-only emotion used for colors and the tag keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorativeEmotion {
    Joy,
    Sad,
    Calm,
    Anger,
    Tired,
    Lonely,
}

impl DecorativeEmotion {
    pub const ALL: [Self; 6] = [Self::Joy, Self::Sad, Self::Calm, Self::Anger, Self::Tired, Self::Lonely];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sad => "sad",
            Self::Calm => "calm",
            Self::Anger => "anger",
            Self::Tired => "tired",
            Self::Lonely => "lonely",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

impl fmt::Display for DecorativeEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ====== Decorative classifier ======

const TIRED_WORDS: &[&str] = &["힘들", "힘듦", "피곤", "지침", "지쳐", "피로", "지치"];
const STRONG_JOY_WORDS: &[&str] = &[
    "행복", "기쁨", "즐거움", "설렘", "두근", "사랑해", "좋아해", "웃음", "미소", "설레", "심쿵",
];
const JOY_WORDS: &[&str] = &["좋아", "기쁘", "즐거", "행복해", "좋아한다", "행복함"];
const STRONG_SAD_WORDS: &[&str] = &["우울", "슬픔", "울적", "우울함", "슬퍼", "절망", "비관"];
const LONELY_WORDS: &[&str] = &["외로움", "외로워", "그리움", "그리워", "허전", "공허"];
const PAIN_WORDS: &[&str] = &["아픔", "아파", "고통", "괴로워", "괴로움"];
const CALM_WORDS: &[&str] = &["평온", "안정", "차분", "평화", "위로", "안심", "편안", "여유", "평온함"];
const STRONG_ANGER_WORDS: &[&str] = &["화남", "분노", "화나", "미워", "싫어", "최악"];
const STRESS_WORDS: &[&str] = &["답답", "스트레스"];

/// Stat score above which a decorative bonus applies
const STAT_BONUS_THRESHOLD: f64 = 30.0;

#[derive(Debug, Default)]
struct EmotionTally {
    joy: u32,
    sad: u32,
    calm: u32,
    anger: u32,
    tired: u32,
    lonely: u32,
}

impl EmotionTally {
    fn max(&self) -> u32 {
        [self.joy, self.sad, self.calm, self.anger, self.tired, self.lonely]
            .into_iter()
            .max()
            .unwrap_or(0)
    }
}

/// Lowercased keyword words joined by single spaces
pub fn keyword_text(keywords: &[KeywordEntry]) -> String {
    keywords
        .iter()
        .map(|k| k.word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn hits(text: &str, words: &[&str]) -> u32 {
    words.iter().filter(|w| text.contains(*w)).count() as u32
}

/// Classify a report into a decorative emotion from its mood, keywords and
/// stats. Fatigue mentioned twice or more always reads as tired; otherwise
/// ties resolve joy, lonely, sad, tired, anger, calm in that order.
pub fn classify_decorative(mood: MoodLabel, keywords: &[KeywordEntry], stats: &AggregateStats) -> DecorativeEmotion {
    let text = keyword_text(keywords);
    let mut tally = EmotionTally::default();

    if has_actual_annoyance(&text) {
        tally.anger += 3;
    }

    let tired_count = hits(&text, TIRED_WORDS);
    tally.tired += tired_count * 3;
    tally.joy += hits(&text, STRONG_JOY_WORDS) * 3;
    tally.joy += hits(&text, JOY_WORDS);
    tally.sad += hits(&text, STRONG_SAD_WORDS) * 3;
    tally.lonely += hits(&text, LONELY_WORDS) * 2;
    tally.sad += hits(&text, PAIN_WORDS) * 2;
    tally.calm += hits(&text, CALM_WORDS) * 2;
    tally.anger += hits(&text, STRONG_ANGER_WORDS) * 3;
    tally.anger += hits(&text, STRESS_WORDS) * 2;

    let fatigued = tired_count >= 2;
    if fatigued {
        tally.tired += 5;
    }

    if stats.romance_score > STAT_BONUS_THRESHOLD {
        tally.joy += 2;
    }
    if stats.comfort_score > STAT_BONUS_THRESHOLD && tally.sad < 3 {
        tally.calm += 2;
    }
    if stats.conflict_score > STAT_BONUS_THRESHOLD && !fatigued {
        tally.anger += 2;
    }

    match mood {
        MoodLabel::Romance => tally.joy += 3,
        MoodLabel::Comfort if tally.lonely > 0 => tally.lonely += 2,
        MoodLabel::Comfort => tally.calm += 2,
        MoodLabel::Conflict if !fatigued => tally.anger += 3,
        _ => {}
    }

    let max = tally.max();
    if max == 0 {
        return DecorativeEmotion::Calm;
    }
    if fatigued && tally.tired > 0 {
        return DecorativeEmotion::Tired;
    }
    if tally.joy == max {
        DecorativeEmotion::Joy
    } else if tally.lonely == max {
        DecorativeEmotion::Lonely
    } else if tally.sad == max {
        DecorativeEmotion::Sad
    } else if tally.tired == max || (tally.tired > 0 && tally.tired >= tally.anger) {
        DecorativeEmotion::Tired
    } else if tally.anger == max {
        DecorativeEmotion::Anger
    } else {
        DecorativeEmotion::Calm
    }
}

// ====== Stable identifier ======

/// Identifier a report's visuals are keyed on, in preference order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StableId {
    Id(String),
    Episode(u32),
    /// Milliseconds since the Unix epoch
    Timestamp(i64),
}

impl StableId {
    /// First non-empty of id, non-zero episode, date; the current time only
    /// when none is available
    pub fn resolve(id: Option<&str>, episode: Option<u32>, date: Option<DateTime<Utc>>) -> Self {
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            return Self::Id(id.to_string());
        }
        if let Some(episode) = episode.filter(|e| *e != 0) {
            return Self::Episode(episode);
        }
        Self::Timestamp(date.unwrap_or_else(Utc::now).timestamp_millis())
    }

    pub fn for_report(report: &Report) -> Self {
        Self::resolve(Some(&report.id), Some(report.episode), Some(report.date))
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.write_str(id),
            Self::Episode(episode) => write!(f, "{episode}"),
            Self::Timestamp(ms) => write!(f, "{ms}"),
        }
    }
}

/// 31-multiplier string hash over UTF-16 code units with 32-bit wraparound,
/// returned as an absolute value
pub fn hash_identifier(value: &str) -> u64 {
    let hash = value.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    });
    i64::from(hash).unsigned_abs()
}

/// Linear sequence keyed by an identifier hash. Create one per generation.
#[derive(Debug)]
pub struct DeterministicStream {
    hash: u64,
    counter: u64,
}

impl DeterministicStream {
    pub fn new(hash: u64) -> Self {
        Self { hash, counter: 0 }
    }

    /// Next value in `0..max`
    pub fn next_index(&mut self, max: usize) -> usize {
        self.counter += 1;
        let value = self
            .hash
            .wrapping_mul(self.counter)
            .wrapping_mul(17)
            .wrapping_add(self.counter * 23);
        (value % max as u64) as usize
    }
}

// ====== Palettes ======

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub base: [&'static str; 6],
    pub accent: [&'static str; 6],
}

pub fn mood_palette(mood: MoodLabel) -> Palette {
    match mood {
        MoodLabel::Romance => Palette {
            base: ["#FCE4EC", "#F8BBD0", "#F48FB1", "#F5B0C7", "#F9C5D1", "#F3A5B5"],
            accent: ["#F8BBD0", "#F48FB1", "#F5B0C7", "#F9C5D1", "#FCE4EC", "#F3A5B5"],
        },
        MoodLabel::Comfort => Palette {
            base: ["#E1F5FE", "#B3E5FC", "#BBDEFB", "#C5E1F5", "#D1E7F0", "#B2DFDB"],
            accent: ["#B3E5FC", "#BBDEFB", "#C5E1F5", "#D1E7F0", "#B2DFDB", "#A7E8E0"],
        },
        MoodLabel::Conflict => Palette {
            base: ["#FFF3E0", "#FFE0B2", "#FFCC80", "#FFB74D", "#FFA726", "#FFAB91"],
            accent: ["#FFE0B2", "#FFCC80", "#FFB74D", "#FFA726", "#FFAB91", "#FF8A65"],
        },
        MoodLabel::Neutral => Palette {
            base: ["#E8F5E9", "#C8E6C9", "#DCEDC8", "#F1F8E9", "#FFF9C4", "#FFFDE7"],
            accent: ["#C8E6C9", "#DCEDC8", "#F1F8E9", "#FFF9C4", "#FFFDE7", "#FFF8E1"],
        },
    }
}

pub fn emotion_palette(emotion: DecorativeEmotion) -> Palette {
    match emotion {
        DecorativeEmotion::Joy => Palette {
            base: ["#FFFDE7", "#FFF9C4", "#FFF59D", "#FFF176", "#FFEB3B", "#FFE082"],
            accent: ["#FFF9C4", "#FFF59D", "#FFF176", "#FFEB3B", "#FFE082", "#FFD54F"],
        },
        DecorativeEmotion::Sad => Palette {
            base: ["#E1F5FE", "#B3E5FC", "#81D4FA", "#4FC3F7", "#81D4FA", "#90CAF9"],
            accent: ["#B3E5FC", "#81D4FA", "#4FC3F7", "#90CAF9", "#64B5F6", "#42A5F5"],
        },
        DecorativeEmotion::Calm => Palette {
            base: ["#E8F5E9", "#C8E6C9", "#A5D6A7", "#81C784", "#66BB6A", "#AED581"],
            accent: ["#C8E6C9", "#A5D6A7", "#81C784", "#66BB6A", "#AED581", "#9CCC65"],
        },
        DecorativeEmotion::Anger => Palette {
            base: ["#FFF3E0", "#FFE0B2", "#FFCCBC", "#FFAB91", "#FF8A65", "#FFB74D"],
            accent: ["#FFE0B2", "#FFCCBC", "#FFAB91", "#FF8A65", "#FFB74D", "#FFA726"],
        },
        DecorativeEmotion::Tired => Palette {
            base: ["#FFF8E1", "#FFECB3", "#FFE082", "#FFD54F", "#FFCA28", "#FFC107"],
            accent: ["#FFECB3", "#FFE082", "#FFD54F", "#FFCA28", "#FFC107", "#FFB300"],
        },
        DecorativeEmotion::Lonely => Palette {
            base: ["#F3E5F5", "#E1BEE7", "#CE93D8", "#BA68C8", "#AB47BC", "#CE93D8"],
            accent: ["#E1BEE7", "#CE93D8", "#BA68C8", "#AB47BC", "#CE93D8", "#BA68C8"],
        },
    }
}

/// Tag keyword candidates. 짜증 is only offered when the keywords show real
/// annoyance.
pub fn tag_options(emotion: DecorativeEmotion, annoyed: bool) -> &'static [&'static str] {
    match emotion {
        DecorativeEmotion::Joy => &["기쁨", "행복", "설렘", "두근거림", "사랑", "즐거움", "웃음"],
        DecorativeEmotion::Sad => &["우울", "슬픔", "울적함", "절망", "비관"],
        DecorativeEmotion::Calm => &["평온", "안정", "차분", "평화", "여유", "편안"],
        DecorativeEmotion::Anger if annoyed => &["화남", "분노", "짜증", "답답함", "스트레스"],
        DecorativeEmotion::Anger => &["화남", "분노", "답답함", "스트레스"],
        DecorativeEmotion::Tired => &["피로", "지침", "힘듦", "무기력", "권태"],
        DecorativeEmotion::Lonely => &["외로움", "그리움", "허전함", "공허"],
    }
}

// ====== Generator ======

/// Gradient and tag for one report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualIdentity {
    pub gradient_css: String,
    pub tag_keyword: String,
    pub emotion: DecorativeEmotion,
}

/// CSS gradient for an identifier hash. The mood palette wins over the
/// emotion palette when a mood is known.
pub fn gradient_css(hash: u64, emotion: DecorativeEmotion, mood: Option<MoodLabel>) -> String {
    let palette = mood.map_or_else(|| emotion_palette(emotion), mood_palette);
    let mut stream = DeterministicStream::new(hash);

    let color_count = 2 + (hash % 2) as usize;
    let mut colors = Vec::with_capacity(color_count);
    colors.push(palette.base[stream.next_index(palette.base.len())]);
    for _ in 1..color_count {
        colors.push(palette.accent[stream.next_index(palette.accent.len())]);
    }

    let angle = hash % 360;
    let stop = 30 + hash % 40;

    if hash % 2 == 0 {
        let x = 30 + hash % 40;
        let y = 30 + hash.wrapping_mul(7) % 40;
        match colors.as_slice() {
            [first, middle, last] => {
                format!("radial-gradient(circle at {x}% {y}%, {first} 0%, {middle} {stop}%, {last} 100%)")
            }
            _ => format!("radial-gradient(circle at {x}% {y}%, {} 0%, {} 100%)", colors[0], colors[1]),
        }
    } else {
        match colors.as_slice() {
            [first, middle, last] => {
                format!("linear-gradient({angle}deg, {first} 0%, {middle} {stop}%, {last} 100%)")
            }
            _ => format!("linear-gradient({angle}deg, {} 0%, {} 100%)", colors[0], colors[1]),
        }
    }
}

/// Visual identity for a stable identifier
pub fn visual_identity(
    stable_id: &StableId,
    emotion: DecorativeEmotion,
    mood: Option<MoodLabel>,
    keywords: &[KeywordEntry],
) -> VisualIdentity {
    let hash = hash_identifier(&stable_id.to_string());
    let options = tag_options(emotion, has_actual_annoyance(&keyword_text(keywords)));

    VisualIdentity {
        gradient_css: gradient_css(hash, emotion, mood),
        tag_keyword: options[(hash % options.len() as u64) as usize].to_string(),
        emotion,
    }
}

/// Visual identity of a saved or freshly generated report
pub fn for_report(report: &Report) -> VisualIdentity {
    let mood = report.dominant_emotion;
    let emotion = classify_decorative(mood, &report.keywords, &report.stats);
    visual_identity(&StableId::for_report(report), emotion, Some(mood), &report.keywords)
}
