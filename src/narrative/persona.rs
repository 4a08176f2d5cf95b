//! Emotional-state persona card and "mind condition" gauges

use crate::models::AggregateStats;
use crate::models::GaugePole;
use crate::models::KeywordEntry;
use crate::models::Persona;
use crate::models::TendencyGauge;

#[derive(Debug, Clone, Copy)]
pub struct PersonaTemplate {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

impl PersonaTemplate {
    pub fn to_persona(&self) -> Persona {
        Persona {
            title: self.title.to_string(),
            summary: self.summary.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

const fn persona(title: &'static str, summary: &'static str, tags: &'static [&'static str]) -> PersonaTemplate {
    PersonaTemplate { title, summary, tags }
}

/// Shown when no report is available
pub const DEFAULT_PERSONA: PersonaTemplate = persona(
    "지금은 마음의 짐을 잠시 내려놓을 때",
    "최근 대화에서 다양한 감정이 섞여 있었어요. 많이 힘드셨죠? 지금 이 순간, 당신의 마음을 알아주고 싶어요.",
    &["#휴식필요", "#마음_챙김", "#따뜻한_위로"],
);

/// Score above which a persona band is "strong"
pub const STRONG_BAND: f64 = 50.0;
/// Score above which a persona band is "moderate"
pub const MODERATE_BAND: f64 = 30.0;

pub const CONFLICT_STRONG_PERSONAS: &[PersonaTemplate] = &[
    persona("지금은 마음의 짐을 잠시 내려놓을 때", "최근 대화에서 갈등과 복잡한 감정이 많이 느껴졌어요. 많이 힘드셨죠? 지금은 무리하지 말고 잠시 쉬어도 괜찮아요. 당신의 마음을 알아주고 싶어요.", &["#휴식필요", "#스트레스_관리", "#마음_챙김"]),
    persona("마음이 복잡한 하루", "최근 대화를 보니 마음이 복잡하고 혼란스러운 감정이 느껴졌어요. 이런 감정도 당연한 거예요. 지금은 조금만 천천히, 자신을 다독여주세요.", &["#감정_정리", "#자기_이해", "#마음_챙김"]),
    persona("지친 마음에 위로를", "최근 대화에서 스트레스와 피로감이 많이 느껴졌어요. 당신은 충분히 노력하고 있어요. 지금은 잠시 멈춰서 자신을 돌봐도 괜찮아요.", &["#자기_돌봄", "#휴식필요", "#위로"]),
    persona("답답한 마음을 풀어내는 시간", "최근 대화를 보니 답답하고 억울한 감정이 많이 느껴졌어요. 이런 감정을 느끼는 것 자체가 당신이 살아있다는 증거예요. 지금은 조금만 쉬어도 괜찮아요.", &["#감정_인정", "#자기_이해", "#휴식필요"]),
    persona("혼란스러운 마음, 잠시 멈춤", "최근 대화에서 혼란과 갈등이 많이 느껴졌어요. 모든 것이 한 번에 해결되지 않아도 괜찮아요. 지금은 조금만 천천히, 자신에게 친절하게 대해주세요.", &["#자기_친절", "#마음_챙김", "#휴식필요"]),
    persona("무거운 마음을 내려놓는 순간", "최근 대화를 보니 마음이 무겁고 힘든 감정이 느껴졌어요. 당신은 혼자가 아니에요. 지금은 조금만 쉬어도 괜찮아요. 당신의 마음을 알아주고 싶어요.", &["#위로", "#자기_돌봄", "#마음_챙김"]),
];

pub const CONFLICT_MODERATE_PERSONAS: &[PersonaTemplate] = &[
    persona("조금은 복잡한 마음", "최근 대화에서 약간의 갈등과 복잡한 감정이 느껴졌어요. 하지만 괜찮아요. 이런 감정도 성장의 과정이에요. 자신을 너무 탓하지 마세요.", &["#성장", "#자기_이해", "#마음_챙김"]),
    persona("마음이 무거운 하루", "최근 대화를 보니 마음이 무겁고 답답한 감정이 느껴졌어요. 지금은 조금만 쉬어도 괜찮아요. 당신의 감정을 인정하고 받아들이는 것부터 시작해보세요.", &["#감정_인정", "#휴식필요", "#따뜻한_위로"]),
    persona("약간의 불안, 하지만 괜찮아요", "최근 대화에서 약간의 불안과 걱정이 느껴졌어요. 하지만 괜찮아요. 이런 감정을 느끼는 것도 당연한 거예요. 지금은 조금만 천천히, 자신을 돌봐주세요.", &["#자기_돌봄", "#마음_챙김", "#안정"]),
    persona("혼란스러운 감정, 잠시 멈춤", "최근 대화를 보니 약간의 혼란과 복잡한 감정이 느껴졌어요. 모든 것이 명확하지 않아도 괜찮아요. 지금은 조금만 쉬어도 괜찮아요.", &["#휴식필요", "#자기_이해", "#마음_챙김"]),
];

pub const COMFORT_STRONG_PERSONAS: &[PersonaTemplate] = &[
    persona("누군가의 온기가 그리운 날", "최근 대화에서 위로와 안정을 찾으려는 마음이 많이 느껴졌어요. 외로움이나 그리움이 느껴지는 하루였나요? 당신의 마음을 알아주고 싶어요.", &["#따뜻한_위로", "#공감_필요", "#마음_나누기"]),
    persona("따뜻한 포옹이 필요한 순간", "최근 대화를 보니 따뜻한 위로와 공감을 원하는 마음이 많이 느껴졌어요. 혼자 감당하기 어려운 마음이 있나요? 당신은 혼자가 아니에요.", &["#공감", "#위로", "#연결"]),
    persona("마음의 안식처를 찾는 하루", "최근 대화에서 평온과 안정을 찾으려는 마음이 많이 느껴졌어요. 지금 이 순간, 당신의 마음에 따뜻한 위로를 전하고 싶어요.", &["#안정", "#위로", "#마음_챙김"]),
    persona("외로움이 느껴지는 하루", "최근 대화를 보니 외로움과 그리움이 많이 느껴졌어요. 혼자라는 느낌이 드는 하루였나요? 당신은 혼자가 아니에요. 지금 이 순간, 당신의 마음을 알아주고 싶어요.", &["#외로움", "#위로", "#연결"]),
    persona("따뜻한 말 한마디가 그리운 날", "최근 대화에서 따뜻한 말과 공감을 원하는 마음이 많이 느껴졌어요. 지금은 조금만 쉬어도 괜찮아요. 당신의 마음에 따뜻함을 전하고 싶어요.", &["#따뜻함", "#공감", "#위로"]),
    persona("마음이 허전한 하루", "최근 대화를 보니 마음이 허전하고 공허한 감정이 느껴졌어요. 이런 감정도 당연한 거예요. 지금은 조금만 천천히, 자신을 돌봐주세요.", &["#자기_돌봄", "#위로", "#마음_챙김"]),
    persona("안아주고 싶은 마음", "최근 대화에서 따뜻한 포옹과 위로를 원하는 마음이 많이 느껴졌어요. 지금 이 순간, 당신의 마음을 감싸주고 싶어요.", &["#포옹", "#위로", "#따뜻함"]),
];

pub const COMFORT_MODERATE_PERSONAS: &[PersonaTemplate] = &[
    persona("조용한 위로가 필요한 하루", "최근 대화에서 약간의 외로움과 그리움이 느껴졌어요. 지금은 조용히 자신을 돌보고, 작은 위로를 찾아보세요. 당신의 마음을 알아주고 싶어요.", &["#자기_돌봄", "#위로", "#마음_챙김"]),
    persona("따뜻한 마음이 그리운 날", "최근 대화를 보니 따뜻한 교감과 공감을 원하는 마음이 느껴졌어요. 지금 이 순간, 당신의 마음에 따뜻함을 전하고 싶어요.", &["#따뜻함", "#공감", "#연결"]),
    persona("작은 위로가 필요한 순간", "최근 대화에서 약간의 외로움과 그리움이 느껴졌어요. 작은 위로라도 괜찮아요. 지금은 조금만 천천히, 자신을 돌봐주세요.", &["#위로", "#자기_돌봄", "#마음_챙김"]),
    persona("공감이 필요한 하루", "최근 대화를 보니 공감과 이해를 원하는 마음이 느껴졌어요. 당신의 마음을 알아주고 싶어요. 지금은 조금만 쉬어도 괜찮아요.", &["#공감", "#이해", "#마음_챙김"]),
];

pub const ROMANCE_STRONG_PERSONAS: &[PersonaTemplate] = &[
    persona("따뜻한 감정이 흐르는 순간", "최근 대화에서 따뜻한 감정과 교감을 나누려는 마음이 많이 느껴졌어요. 지금 이 순간의 감정을 소중히 여기고, 당신의 마음을 알아주고 싶어요.", &["#감정_인정", "#따뜻한_교감", "#마음_챙김"]),
    persona("사랑이 피어나는 하루", "최근 대화를 보니 따뜻하고 부드러운 감정이 많이 느껴졌어요. 이런 감정은 정말 소중한 거예요. 지금 이 순간을 충분히 즐기고 느껴보세요.", &["#사랑", "#감정_인정", "#소중함"]),
    persona("마음이 설레는 순간", "최근 대화에서 설렘과 기대감이 많이 느껴졌어요. 이런 감정은 삶을 더 풍요롭게 만들어요. 지금 이 순간의 감정을 소중히 여기세요.", &["#설렘", "#기대", "#감정_인정"]),
    persona("따뜻한 마음이 뛰는 하루", "최근 대화를 보니 따뜻하고 설레는 감정이 많이 느껴졌어요. 이런 감정은 정말 아름다운 거예요. 지금 이 순간을 충분히 즐기고 느껴보세요.", &["#설렘", "#감정_인정", "#아름다움"]),
    persona("사랑의 감정이 흐르는 순간", "최근 대화에서 사랑과 따뜻함이 많이 느껴졌어요. 이런 감정은 당신의 마음을 더 풍요롭게 만들어요. 지금 이 순간의 감정을 소중히 여기세요.", &["#사랑", "#따뜻함", "#감정_인정"]),
    persona("마음이 두근거리는 하루", "최근 대화를 보니 두근거림과 설렘이 많이 느껴졌어요. 이런 감정은 정말 소중한 거예요. 지금 이 순간을 충분히 즐겨보세요.", &["#설렘", "#두근거림", "#소중함"]),
    persona("따뜻한 교감이 흐르는 순간", "최근 대화에서 따뜻한 교감과 감정이 많이 느껴졌어요. 이런 감정은 삶을 더 아름답게 만들어요. 당신의 마음을 알아주고 싶어요.", &["#교감", "#따뜻함", "#아름다움"]),
];

pub const ROMANCE_MODERATE_PERSONAS: &[PersonaTemplate] = &[
    persona("따뜻한 감정의 하루", "최근 대화에서 따뜻하고 긍정적인 감정이 느껴졌어요. 이런 감정은 당신의 마음을 더 풍요롭게 만들어요. 지금 이 순간을 즐겨보세요.", &["#긍정", "#감정_인정", "#마음_챙김"]),
    persona("마음이 따뜻해지는 순간", "최근 대화를 보니 따뜻한 교감과 감정이 느껴졌어요. 이런 감정은 정말 소중한 거예요. 당신의 마음을 알아주고 싶어요.", &["#따뜻함", "#교감", "#소중함"]),
    persona("부드러운 감정이 흐르는 하루", "최근 대화에서 부드럽고 따뜻한 감정이 느껴졌어요. 이런 감정은 당신의 마음을 더 아름답게 만들어요. 지금 이 순간을 소중히 여기세요.", &["#따뜻함", "#감정_인정", "#아름다움"]),
    persona("긍정적인 감정이 느껴지는 순간", "최근 대화를 보니 긍정적이고 따뜻한 감정이 느껴졌어요. 이런 감정은 정말 소중한 거예요. 당신의 마음을 알아주고 싶어요.", &["#긍정", "#따뜻함", "#소중함"]),
];

pub const CALM_PERSONAS: &[PersonaTemplate] = &[
    persona("조용히 쉬어도 좋은 하루", "최근 대화에서 평온하지만 어딘가 지친 마음이 느껴졌어요. 지금은 조용히 쉬어도 괜찮아요. 당신의 마음을 알아주고 싶어요.", &["#휴식필요", "#마음_챙김", "#따뜻한_위로"]),
    persona("평온한 하루, 조용한 마음", "최근 대화를 보니 평온하지만 약간의 피로감이 느껴졌어요. 지금은 무리하지 말고 자신을 돌보는 시간을 가져보세요. 작은 휴식도 충분히 의미 있어요.", &["#자기_돌봄", "#휴식", "#마음_챙김"]),
    persona("여유롭게 쉬어가는 하루", "최근 대화에서 평온하고 안정적인 감정이 느껴졌어요. 지금은 조금만 천천히, 자신을 돌보는 시간을 가져보세요. 당신의 마음을 알아주고 싶어요.", &["#안정", "#자기_돌봄", "#마음_챙김"]),
    persona("조용한 하루, 작은 휴식", "최근 대화를 보니 평온하지만 약간의 지침이 느껴졌어요. 지금은 조금만 쉬어도 괜찮아요. 작은 휴식도 충분히 의미 있어요.", &["#휴식", "#마음_챙김", "#자기_돌봄"]),
    persona("평온한 마음, 작은 여유", "최근 대화에서 평온하고 안정적인 감정이 느껴졌어요. 지금은 조금만 천천히, 자신을 돌보는 시간을 가져보세요. 당신의 마음을 알아주고 싶어요.", &["#안정", "#여유", "#마음_챙김"]),
    persona("조용한 하루, 따뜻한 마음", "최근 대화를 보니 평온하고 따뜻한 감정이 느껴졌어요. 지금은 조금만 천천히, 자신을 돌보는 시간을 가져보세요. 작은 휴식도 충분히 의미 있어요.", &["#따뜻함", "#휴식", "#마음_챙김"]),
];

/// Persona band for the aggregate scores. Conflict outranks comfort, which
/// outranks romance; the strong band is checked before the moderate one.
pub fn persona_band(stats: &AggregateStats) -> &'static [PersonaTemplate] {
    let AggregateStats {
        romance_score,
        comfort_score,
        conflict_score,
        ..
    } = *stats;

    if conflict_score > STRONG_BAND {
        CONFLICT_STRONG_PERSONAS
    } else if conflict_score > MODERATE_BAND {
        CONFLICT_MODERATE_PERSONAS
    } else if comfort_score > STRONG_BAND {
        COMFORT_STRONG_PERSONAS
    } else if comfort_score > MODERATE_BAND {
        COMFORT_MODERATE_PERSONAS
    } else if romance_score > STRONG_BAND {
        ROMANCE_STRONG_PERSONAS
    } else if romance_score > MODERATE_BAND {
        ROMANCE_MODERATE_PERSONAS
    } else {
        CALM_PERSONAS
    }
}

// ====== Tendency gauges ======

/// Keyword fragments that signal fatigue, stress or being at a loss
pub const TIRED_STRESS_KEYWORDS: &[&str] = &[
    "힘들", "스트레스", "피곤", "지치", "지침", "힘듦", "피로", "지쳐", "답답", "스트레스받", "어떻게",
    "모르겠", "모르겠어", "모르겠는데", "모르겠다", "어떻게해야", "어떻게 해야", "어떻게할지",
    "어떻게 할지", "어떡하", "어떡해", "어떻게하", "어떻게 해",
];

const BASE_LEVEL: f64 = 85.0;
const MAX_STRESS_BOOST: f64 = 40.0;
const MAX_DRAIN: f64 = 70.0;

/// Share of keyword occurrences that carry a tired or stressed fragment
pub fn tired_stress_ratio(keywords: &[KeywordEntry]) -> f64 {
    let mut total = 0u32;
    let mut matched = 0u32;
    for entry in keywords {
        let word = entry.word.to_lowercase();
        total += entry.count;
        if TIRED_STRESS_KEYWORDS.iter().any(|k| word.contains(k)) {
            matched += entry.count;
        }
    }
    if total == 0 {
        0.0
    } else {
        f64::from(matched) / f64::from(total)
    }
}

fn pole(icon: &str, text: &str) -> GaugePole {
    GaugePole {
        icon: icon.to_string(),
        text: text.to_string(),
    }
}

fn gauge(label: &str, left: GaugePole, right: GaugePole, value: f64) -> TendencyGauge {
    TendencyGauge {
        label: label.to_string(),
        left,
        right,
        position: value,
        value,
    }
}

/// Stress, social battery and confidence gauges from conflict and keywords
pub fn tendency(stats: &AggregateStats, keywords: &[KeywordEntry]) -> Vec<TendencyGauge> {
    let ratio_points = tired_stress_ratio(keywords) * 100.0;

    let stress = (stats.conflict_score.clamp(0.0, 100.0) + ratio_points.min(MAX_STRESS_BOOST)).min(100.0);
    let battery = (BASE_LEVEL - ratio_points.min(MAX_DRAIN)).clamp(0.0, 100.0);
    let confidence = battery;

    vec![
        gauge("스트레스 지수", pole("😌", "편안함"), pole("🤯", "위험"), stress),
        gauge("사회적 배터리", pole("🪫", "방전"), pole("🔋", "완충"), battery),
        gauge("자존감/확신", pole("🍃", "흔들림"), pole("🌳", "단단함"), confidence),
    ]
}
