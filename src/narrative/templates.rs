//! Fixed report texts and suggestion variant tables

use crate::models::IssueSeverity;
use crate::models::MoodLabel;
use crate::models::PsychologicalIssue;
use crate::models::Suggestion;
use crate::models::TherapeuticActivity;

/// Borrowed form of [`Suggestion`] kept in static tables
#[derive(Debug, Clone, Copy)]
pub struct SuggestionTemplate {
    pub activity: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub why: &'static str,
    pub practice_guide: &'static str,
}

impl SuggestionTemplate {
    pub fn to_suggestion(&self) -> Suggestion {
        Suggestion {
            activity: self.activity.to_string(),
            icon: self.icon.to_string(),
            description: self.description.to_string(),
            why: self.why.to_string(),
            practice_guide: self.practice_guide.to_string(),
        }
    }
}

pub fn episode_summary(mood: MoodLabel) -> &'static str {
    match mood {
        MoodLabel::Romance => "로맨틱한 감정이 주를 이루는 대화였습니다.",
        MoodLabel::Comfort => "위로와 안정을 찾는 대화였습니다.",
        MoodLabel::Conflict => "갈등과 긴장감이 느껴지는 대화였습니다.",
        MoodLabel::Neutral => "평온하고 중립적인 대화였습니다.",
    }
}

pub fn next_scene_suggestion(mood: MoodLabel) -> &'static str {
    match mood {
        MoodLabel::Romance => "더 깊은 감정의 교류를 나누는 장면",
        MoodLabel::Comfort => "서로를 더 잘 이해하고 공감하는 장면",
        MoodLabel::Conflict => "갈등을 해소하고 화해하는 장면",
        MoodLabel::Neutral => "더 깊은 이야기를 나누는 장면",
    }
}

pub fn analysis(mood: MoodLabel) -> String {
    let felt = match mood {
        MoodLabel::Romance => "따뜻한 감정과 교감",
        MoodLabel::Comfort => "위로와 안정을 찾으려는 마음",
        MoodLabel::Conflict => "갈등과 복잡한 감정",
        MoodLabel::Neutral => "다양한 감정",
    };
    format!("최근 대화에서 {felt}이 많이 느껴졌어요. 많이 힘드셨죠?")
}

pub fn position(mood: MoodLabel) -> String {
    let moment = match mood {
        MoodLabel::Romance => "따뜻한 감정을 나누고 싶은 순간",
        MoodLabel::Comfort => "위로와 공감이 필요한 때",
        MoodLabel::Conflict => "마음의 짐을 내려놓아도 좋은 때",
        MoodLabel::Neutral => "조용히 쉬어도 좋은 하루",
    };
    format!("지금은 {moment}입니다.")
}

pub fn interpretation(mood: MoodLabel) -> String {
    let body = match mood {
        MoodLabel::Romance => {
            "따뜻한 감정을 나누려는 마음이 많이 느껴졌어요. 지금 이 순간의 감정을 소중히 여기시고, 당신의 마음을 알아주고 싶어요."
        }
        MoodLabel::Comfort => {
            "위로와 안정을 찾으려는 마음이 많이 느껴졌어요. 외로움이나 그리움이 느껴지는 하루였나요? 당신의 마음을 알아주고 싶어요."
        }
        MoodLabel::Conflict => {
            "갈등과 복잡한 감정이 많이 느껴졌어요. 많이 힘드셨죠? 지금은 무리하지 말고 잠시 쉬어도 괜찮아요. 당신의 마음을 알아주고 싶어요."
        }
        MoodLabel::Neutral => {
            "평온하지만 어딘가 지친 마음이 느껴졌어요. 지금은 조용히 쉬어도 괜찮아요. 당신의 마음을 알아주고 싶어요."
        }
    };
    format!("최근 대화를 보니 {body}")
}

/// Conflict average above which a conflict issue is raised
pub const CONFLICT_ISSUE_THRESHOLD: f64 = 30.0;
/// Conflict average above which the issue is severe
pub const CONFLICT_SEVERE_THRESHOLD: f64 = 50.0;
/// Comfort average above which a comfort issue is raised
pub const COMFORT_ISSUE_THRESHOLD: f64 = 40.0;

/// Issues raised from aggregate conflict and comfort averages, conflict first
pub fn psychological_issues(conflict: f64, comfort: f64) -> Vec<PsychologicalIssue> {
    let mut issues = Vec::new();
    if conflict > CONFLICT_ISSUE_THRESHOLD {
        issues.push(PsychologicalIssue {
            title: "갈등 관리 필요".to_string(),
            severity: if conflict > CONFLICT_SEVERE_THRESHOLD {
                IssueSeverity::High
            } else {
                IssueSeverity::Medium
            },
            description: "대화에서 갈등 감정이 자주 나타나고 있습니다.".to_string(),
        });
    }
    if comfort > COMFORT_ISSUE_THRESHOLD {
        issues.push(PsychologicalIssue {
            title: "위로 필요".to_string(),
            severity: IssueSeverity::Medium,
            description: "위로와 안정을 찾는 감정이 강하게 나타나고 있습니다.".to_string(),
        });
    }
    issues
}

pub fn therapeutic_activities(mood: MoodLabel) -> Vec<TherapeuticActivity> {
    match mood {
        MoodLabel::Conflict => vec![TherapeuticActivity {
            activity: "명상 및 호흡 운동".to_string(),
            description: "갈등 상황에서 마음을 진정시키는 활동".to_string(),
            why: "명상은 스트레스를 줄이고 감정을 조절하는 데 도움이 됩니다.".to_string(),
        }],
        MoodLabel::Comfort => vec![TherapeuticActivity {
            activity: "일기 쓰기".to_string(),
            description: "감정을 글로 표현하는 활동".to_string(),
            why: "일기 쓰기는 감정을 정리하고 자기 이해를 높이는 데 도움이 됩니다.".to_string(),
        }],
        _ => Vec::new(),
    }
}

const REST_WHY: &str = "충분한 휴식은 정신 건강의 기초입니다. 피로가 쌓이면 감정 조절 능력이 떨어지고, 스트레스에 더 취약해집니다.";
const TALK_WHY: &str = "감정을 언어로 표현하는 것만으로도 심리적 부담이 줄어듭니다. 타인의 관점을 듣는 것은 새로운 해결책을 찾는 데 도움이 됩니다.";
const HOBBY_WHY: &str = "취미 활동은 일상의 스트레스에서 벗어나 긍정적인 감정을 경험하게 해줍니다. 성취감과 만족감을 느끼는 것은 자존감 향상에 도움이 됩니다.";

// ====== Rest slot ======

pub const REST_CONFLICT: &[SuggestionTemplate] = &[
    SuggestionTemplate {
        activity: "충분한 휴식 취하기",
        icon: "😴",
        description: "따뜻한 차 한 잔과 함께 30분 동안 핸드폰을 멀리해 보세요. 깊게 숨을 들이쉬고 내쉬는 호흡 운동을 10회 반복하면 마음이 한결 편안해집니다.",
        why: REST_WHY,
        practice_guide: "오늘 밤 11시 전에 잠자리에 들고, 내일 아침 일어나서 창문을 열고 깊게 숨을 3번 들이쉬어 보세요.",
    },
    SuggestionTemplate {
        activity: "명상과 마음챙김",
        icon: "🧘",
        description: "조용한 공간에서 10분간 눈을 감고 깊게 호흡하세요. 생각이 떠오르면 그냥 지켜보고 흘려보내세요. 마음이 차분해질 거예요.",
        why: "명상은 스트레스를 줄이고 마음의 평온을 찾는 데 도움이 됩니다. 정기적으로 실천하면 감정 조절 능력이 향상됩니다.",
        practice_guide: "매일 아침 일어나서 5분씩 명상하는 습관을 만들어 보세요.",
    },
    SuggestionTemplate {
        activity: "자연 속에서 휴식",
        icon: "🌳",
        description: "공원이나 산책로를 천천히 걸으며 자연의 소리를 들어보세요. 나무를 보며 깊게 숨을 쉬면 마음이 한결 가벼워집니다.",
        why: "자연과의 접촉은 스트레스를 줄이고 심리적 안정감을 높여줍니다.",
        practice_guide: "이번 주말에 가까운 공원이나 숲길을 30분 이상 걸어보세요.",
    },
];

pub const REST_ROMANCE: &[SuggestionTemplate] = &[
    SuggestionTemplate {
        activity: "충분한 휴식 취하기",
        icon: "😴",
        description: "부드러운 음악을 들으며 따뜻한 물로 샤워하고, 좋아하는 향초를 켜고 편안한 자세로 20분간 눈을 감아 보세요.",
        why: REST_WHY,
        practice_guide: "오늘 밤 잠들기 전에 감사한 일 3가지를 떠올려 보세요.",
    },
    SuggestionTemplate {
        activity: "감정을 기록하는 시간",
        icon: "📝",
        description: "지금 느끼는 따뜻한 감정을 일기나 메모에 기록해보세요. 감정을 글로 표현하면 더 깊이 이해할 수 있어요.",
        why: "감정을 기록하는 것은 자기 이해를 높이고 감정을 정리하는 데 도움이 됩니다.",
        practice_guide: "매일 저녁 하루 동안 느꼈던 감정을 3줄로 기록해보세요.",
    },
];

pub const REST_DEFAULT: &[SuggestionTemplate] = &[
    SuggestionTemplate {
        activity: "충분한 휴식 취하기",
        icon: "😴",
        description: "하루 중 최소 7-8시간의 수면을 취하고, 스트레스를 줄이는 활동을 해보세요. 오후 3시에 15분간 눈을 감고 휴식을 취하는 것도 좋습니다.",
        why: REST_WHY,
        practice_guide: "내일 아침 일어나서 물 한 잔을 천천히 마시며 하루를 시작해 보세요.",
    },
    SuggestionTemplate {
        activity: "조용한 독서 시간",
        icon: "📖",
        description: "좋아하는 책을 펼쳐 조용히 읽어보세요. 책 속 이야기에 빠져들면 일상의 스트레스에서 잠시 벗어날 수 있어요.",
        why: "독서는 마음을 차분하게 하고 새로운 관점을 얻는 데 도움이 됩니다.",
        practice_guide: "이번 주에 하루 30분씩 책을 읽는 시간을 가져보세요.",
    },
];

// ====== Talk slot ======

pub const TALK_COMFORT: &[SuggestionTemplate] = &[
    SuggestionTemplate {
        activity: "신뢰하는 사람과 대화하기",
        icon: "💬",
        description: "가족이나 친한 친구에게 오늘 하루 있었던 일을 편하게 이야기해 보세요. \"오늘 이런 일이 있었어\"로 시작하면 됩니다.",
        why: TALK_WHY,
        practice_guide: "이번 주말에 좋아하는 사람과 카페에서 1시간 정도 대화를 나눠 보세요.",
    },
    SuggestionTemplate {
        activity: "감정을 나누는 시간",
        icon: "💭",
        description: "가까운 사람에게 지금 느끼는 감정을 솔직하게 이야기해보세요. \"지금 이런 기분이야\"라고 말하는 것만으로도 마음이 가벼워질 수 있어요.",
        why: "감정을 공유하면 외로움을 줄이고 공감을 받을 수 있습니다.",
        practice_guide: "오늘 저녁에 한 명에게라도 오늘 하루를 간단히 공유해보세요.",
    },
];

pub const TALK_DEFAULT: &[SuggestionTemplate] = &[
    SuggestionTemplate {
        activity: "신뢰하는 사람과 대화하기",
        icon: "💬",
        description: "가족, 친구, 또는 전문 상담사와 자신의 감정과 고민을 솔직하게 나눠보세요. 메시지로 먼저 연락을 취하는 것도 좋은 시작입니다.",
        why: TALK_WHY,
        practice_guide: "오늘 저녁에 한 명에게라도 오늘 하루를 간단히 공유해보세요.",
    },
    SuggestionTemplate {
        activity: "온라인 커뮤니티 참여",
        icon: "🌐",
        description: "관심 있는 주제의 온라인 커뮤니티에 참여하거나 비슷한 관심사를 가진 사람들과 대화를 나눠보세요.",
        why: "비슷한 경험을 가진 사람들과의 교류는 위로와 공감을 얻는 데 도움이 됩니다.",
        practice_guide: "이번 주에 새로운 커뮤니티에 가입해보거나 기존 커뮤니티에 글을 올려보세요.",
    },
];

// ====== Hobby slot ======

pub const HOBBY_ROMANCE: &[SuggestionTemplate] = &[
    SuggestionTemplate {
        activity: "취미 활동 즐기기",
        icon: "🎨",
        description: "좋아하는 음악을 들으며 그림을 그리거나, 감동적인 영화를 보며 감정을 느껴보세요. 예술 활동은 감정을 표현하는 좋은 방법입니다.",
        why: HOBBY_WHY,
        practice_guide: "이번 주말에 미술관이나 전시회를 방문해보세요.",
    },
    SuggestionTemplate {
        activity: "음악 감상과 감정 느끼기",
        icon: "🎵",
        description: "마음에 드는 음악을 들으며 감정을 충분히 느껴보세요. 가사를 따라 부르거나 몸을 흔들어보는 것도 좋아요.",
        why: "음악은 감정을 표현하고 정화하는 데 도움이 됩니다.",
        practice_guide: "오늘 저녁에 좋아하는 플레이리스트를 만들고 30분간 감상해보세요.",
    },
];

pub const HOBBY_CONFLICT: &[SuggestionTemplate] = &[
    SuggestionTemplate {
        activity: "취미 활동 즐기기",
        icon: "🏃",
        description: "가벼운 산책이나 요가, 스트레칭 같은 신체 활동을 해보세요. 몸을 움직이면 마음도 함께 가벼워집니다.",
        why: HOBBY_WHY,
        practice_guide: "내일 아침에 집 근처를 20분 정도 걸어보세요.",
    },
    SuggestionTemplate {
        activity: "운동으로 스트레스 해소",
        icon: "💪",
        description: "가벼운 운동이나 스트레칭을 통해 몸의 긴장을 풀어보세요. 땀을 흘리면 마음도 함께 가벼워집니다.",
        why: "운동은 스트레스 호르몬을 줄이고 엔돌핀을 분비시켜 기분을 좋게 만듭니다.",
        practice_guide: "이번 주에 주 3회, 30분씩 가벼운 운동을 해보세요.",
    },
];

pub const HOBBY_DEFAULT: &[SuggestionTemplate] = &[
    SuggestionTemplate {
        activity: "취미 활동 즐기기",
        icon: "📖",
        description: "자신이 즐기는 활동(독서, 운동, 음악 감상, 그림 그리기 등)에 시간을 투자해보세요. 하루 30분만이라도 자신만의 시간을 가져보세요.",
        why: HOBBY_WHY,
        practice_guide: "이번 주에 새로운 취미를 하나 시작해보세요.",
    },
    SuggestionTemplate {
        activity: "창작 활동하기",
        icon: "✍️",
        description: "일기, 시, 소설, 그림 등 자신만의 창작 활동을 해보세요. 표현하는 과정에서 마음이 정리될 거예요.",
        why: "창작 활동은 감정을 표현하고 정리하는 데 도움이 됩니다.",
        practice_guide: "이번 주에 작은 작품 하나를 완성해보세요.",
    },
];
