//! Drama OST catalogue used for the report soundtrack

use crate::models::BgmEntry;
use crate::models::MoodLabel;

const SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// One catalogue row; `query` is the `+`-joined YouTube search term
#[derive(Debug, Clone, Copy)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub drama: &'static str,
    pub query: &'static str,
    pub comment: &'static str,
}

impl Track {
    pub fn youtube_url(&self) -> String {
        format!("{SEARCH_URL}{}", self.query)
    }

    pub fn to_entry(&self) -> BgmEntry {
        BgmEntry {
            title: self.title.to_string(),
            artist: self.artist.to_string(),
            drama: self.drama.to_string(),
            youtube_url: self.youtube_url(),
            comment: self.comment.to_string(),
        }
    }
}

const fn track(
    title: &'static str,
    artist: &'static str,
    drama: &'static str,
    query: &'static str,
    comment: &'static str,
) -> Track {
    Track {
        title,
        artist,
        drama,
        query,
        comment,
    }
}

pub const ROMANCE_TRACKS: &[Track] = &[
    track("너의 모든 순간", "성시경", "별에서 온 그대", "성시경+너의+모든+순간+별에서+온+그대", "모든 시간이 멈춘 듯, 사랑에 빠진 설렘을 완벽하게 표현한 곡입니다."),
    track("Say Yes", "로꼬, 펀치", "달의 연인 - 보보경심 려", "로꼬+펀치+Say+Yes+달의+연인", "사랑스러운 랩과 보컬의 조화! 핑크빛 기류가 흐르는 달콤한 듀엣곡입니다."),
    track("Be With You", "악뮤", "달의 연인 - 보보경심 려", "악뮤+Be+With+You+달의+연인", "악뮤 특유의 순수하고 맑은 감성으로 풋풋한 사랑의 마음을 노래합니다."),
    track("알듯 말듯해", "서은광, 임현식, 육성재", "쌈, 마이웨이", "서은광+임현식+육성재+알듯+말듯해+쌈+마이웨이", "친구인 듯 연인인 듯, 썸 타는 남녀의 미묘하고 간질간질한 마음을 표현했습니다."),
    track("그대라는 시", "태연", "호텔 델루나", "태연+그대라는+시+호텔+델루나", "잔잔한 피아노와 섬세한 음색이 어우러져 아련하고 시적인 로맨스를 완성합니다."),
    track("사랑이 뭔데", "서현진, 유승우", "또 오해영", "서현진+유승우+사랑이+뭔데+또+오해영", "봄바람처럼 살랑이는 멜로디, 사랑에 빠져 어쩔 줄 모르는 귀여운 마음이 담겨있어요."),
    track("Beautiful", "Crush", "도깨비", "Crush+Beautiful+도깨비", "아름다운 피아노 선율과 함께 운명적인 사랑을 느껴보세요."),
    track("사랑인가 봐", "멜로망스", "사내맞선", "멜로망스+사랑인가봐+사내맞선", "달달하고 기분 좋은 로맨스의 시작, 설레는 마음을 숨기지 마세요."),
    track("흔들리는 꽃들 속에서 네 샴푸향이 느껴진거야", "장범준", "멜로가 체질", "장범준+흔들리는+꽃들+속에서+멜로가+체질", "봄바람처럼 살랑거리는 사랑의 감정을 가볍게 즐겨보세요."),
    track("All For You", "서인국, 정은지", "응답하라 1997", "서인국+정은지+All+For+You+응답하라+1997", "풋풋한 첫사랑과 친구에서 연인이 되는 설렘을 담은 달콤한 듀엣곡입니다."),
    track("My Destiny", "린", "별에서 온 그대", "린+My+Destiny+별에서+온+그대", "다시 올 수 없는 운명 같은 만남, 깊어가는 사랑의 감정을 노래합니다."),
    track("Stay With Me", "찬열, 펀치", "도깨비", "찬열+펀치+Stay+With+Me+도깨비", "몽환적인 도입부만 들어도 심장이 뛰는, 운명적인 로맨스의 대표곡입니다."),
    track("말해! 뭐해?", "케이윌", "태양의 후예", "케이윌+말해+뭐해+태양의+후예", "밀당은 그만! 휘파람 소리와 함께 경쾌하게 터지는 직진 로맨스입니다."),
    track("ALWAYS", "윤미래", "태양의 후예", "윤미래+ALWAYS+태양의+후예", "언제나 곁에 있겠다는 약속, 운명적인 사랑을 호소력 짙은 목소리로 담았습니다."),
    track("Everytime", "첸, 펀치", "태양의 후예", "첸+펀치+Everytime+태양의+후예", "들을 때마다 기분이 좋아지는, 상큼하고 달콤한 로맨스 OST입니다."),
];

pub const COMFORT_TRACKS: &[Track] = &[
    track("걱정말아요 그대", "이적", "응답하라 1988", "이적+걱정말아요+그대+응답하라+1988", "지나간 것은 지나간 대로. 지친 당신의 등을 토닥여주는 따뜻한 위로곡입니다."),
    track("어쩌면 나", "로이킴", "또 오해영", "로이킴+어쩌면+나+또+오해영", "사랑 때문에 복잡해진 마음을 부드러운 목소리로 차분하게 다독여주는 곡입니다."),
    track("그때 그 아인", "김필", "이태원 클라쓰", "김필+그때+그+아인+이태원+클라쓰", "거친 세상 속에서 고군분투하는 청춘에게 건네는 따뜻하고 묵직한 위로입니다."),
    track("소녀", "오혁", "응답하라 1988", "오혁+소녀+응답하라+1988", "담담한 목소리로 지나간 시절의 향수와 따뜻한 위로를 전해줍니다."),
    track("너에게", "성시경", "응답하라 1994", "성시경+너에게+응답하라+1994", "부드러운 목소리가 당신의 하루를 감싸 안아주는 평온한 힐링곡입니다."),
    track("수고했어, 오늘도", "옥상달빛", "술꾼도시여자들 (삽입곡)", "옥상달빛+수고했어+오늘도", "누구도 내 맘을 몰라주는 것 같은 날, 이 노래가 당신을 응원합니다."),
    track("어른", "Sondia", "나의 아저씨", "Sondia+어른+나의+아저씨", "삶의 무게를 버티는 모든 이들에게 바치는, 담담하지만 깊은 울림이 있는 노래입니다."),
    track("혼자라고 생각말기", "김보경", "학교 2013", "김보경+혼자라고+생각말기+학교+2013", "힘들 때 혼자라고 느껴진다면, 이 노래가 당신의 손을 잡아줄 거예요."),
    track("마음을 드려요", "아이유", "사랑의 불시착", "아이유+마음을+드려요+사랑의+불시착", "차분한 목소리로 전하는 진심 어린 마음이 힐링을 선사합니다."),
];

pub const CONFLICT_TRACKS: &[Track] = &[
    track("만약에", "태연", "쾌도 홍길동", "태연+만약에+쾌도+홍길동", "짝사랑의 아픔과 다가가지 못하는 안타까운 마음을 표현하기에 제격입니다."),
    track("너를 위해", "첸, 백현, 시우민", "달의 연인 - 보보경심 려", "첸+백현+시우민+너를+위해+달의+연인", "다른 공간, 다른 시간에 있어도 놓을 수 없는 슬픈 사랑의 맹세입니다."),
    track("꿈처럼", "벤", "또 오해영", "벤+꿈처럼+또+오해영", "깨고 나면 사라질까 두려운 행복, 눈물 섞인 목소리가 감정의 깊이를 더합니다."),
    track("Done For Me", "펀치", "호텔 델루나", "펀치+Done+For+Me+호텔+델루나", "쓸쓸한 피아노 선율 위로 흐르는 이별의 아픔과 지울 수 없는 기억을 노래합니다."),
    track("I Miss You", "소유", "도깨비", "소유+I+Miss+You+도깨비", "그리움에 사무치는 밤, 닿을 수 없는 인연을 향한 애절한 목소리가 가슴을 울립니다."),
    track("첫눈처럼 너에게 가겠다", "에일리", "도깨비", "에일리+첫눈처럼+너에게+가겠다+도깨비", "폭발적인 가창력으로 비극적인 사랑과 절절한 그리움을 토해내는 곡입니다."),
    track("환청", "장재인 (feat. 나쑈)", "킬미, 힐미", "장재인+환청+킬미힐미", "내면의 혼란과 자아의 분열, 얽히고설킨 심리적 갈등을 강렬하게 표현했습니다."),
    track("길", "김윤아", "시그널", "김윤아+길+시그널", "끝이 보이지 않는 미제 사건의 쓸쓸함과 차가운 현실 속의 고독을 담았습니다."),
    track("너였다면", "정승환", "또 오해영", "정승환+너였다면+또+오해영", "짝사랑의 답답함과 상대방을 향한 원망 섞인 슬픔을 토로하는 노래입니다."),
    track("낙인", "임재범", "추노", "임재범+낙인+추노", "가슴을 데인 듯한 고통과 쫓고 쫓기는 운명의 처절함이 느껴지는 곡입니다."),
    track("기도", "정일영", "가을동화", "정일영+기도+가을동화", "이뤄질 수 없는 운명 앞에서 신에게 호소하는 듯한 절규가 담긴 명곡입니다."),
];

pub const NEUTRAL_TRACKS: &[Track] = &[
    track("시작", "가호", "이태원 클라쓰", "가호+시작+이태원+클라쓰", "새로운 시작을 위한 에너지가 필요할 때, 힘차게 달려나가세요."),
    track("굿모닝", "케이시", "쌈, 마이웨이", "케이시+굿모닝+쌈+마이웨이", "상쾌한 아침 햇살 같은 노래! 기분 좋은 하루를 시작하고 싶을 때 들어보세요."),
    track("돌덩이", "하현우", "이태원 클라쓰", "하현우+돌덩이+이태원+클라쓰", "어떤 시련에도 굴하지 않는 단단한 다짐. 나를 뜨겁게 만드는 강렬한 록 사운드입니다."),
    track("직진", "더베인", "이태원 클라쓰", "더베인+직진+이태원+클라쓰", "뒤돌아보지 말고 앞만 보고 질주하라! 드라이브나 운동할 때 최고의 에너지를 줍니다."),
    track("Running", "가호", "스타트업", "가호+Running+스타트업", "답답한 마음을 뻥 뚫어주는 청량한 사운드! 드라이브할 때 추천합니다."),
    track("Dream High", "택연, 우영, 수지, 김수현, JOO", "드림하이", "드림하이+OST+Dream+High", "꿈을 향해 도전하는 열정! 무기력한 오후에 활력을 불어넣어 줍니다."),
    track("아로하", "조정석", "슬기로운 의사생활", "조정석+아로하+슬기로운+의사생활", "기분 좋은 평범한 일상, 소소한 행복을 느끼고 싶을 때 딱이에요."),
    track("로맨틱 선데이", "카더가든", "갯마을 차차차", "카더가든+로맨틱+선데이+갯마을+차차차", "나른하고 평화로운 주말 오후 같은 편안함을 즐겨보세요."),
];

pub fn tracks_for(mood: MoodLabel) -> &'static [Track] {
    match mood {
        MoodLabel::Romance => ROMANCE_TRACKS,
        MoodLabel::Comfort => COMFORT_TRACKS,
        MoodLabel::Conflict => CONFLICT_TRACKS,
        MoodLabel::Neutral => NEUTRAL_TRACKS,
    }
}
