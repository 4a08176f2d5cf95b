//! Korean text helpers: particle selection, character line cleanup and
//! relative timestamps for report history

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::TimeZone;
use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;

const HANGUL_FIRST: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;
const FINAL_CONSONANTS: u32 = 28;

/// True when the last character is a Hangul syllable with a final consonant
pub fn has_batchim(word: &str) -> bool {
    match word.chars().last().map(u32::from) {
        Some(code) if (HANGUL_FIRST..=HANGUL_LAST).contains(&code) => {
            (code - HANGUL_FIRST) % FINAL_CONSONANTS != 0
        }
        _ => false,
    }
}

pub fn josa_wa(word: &str) -> &'static str {
    if has_batchim(word) { "과" } else { "와" }
}

pub fn josa_i(word: &str) -> &'static str {
    if has_batchim(word) { "이" } else { "가" }
}

pub fn josa_eul(word: &str) -> &'static str {
    if has_batchim(word) { "을" } else { "를" }
}

pub fn josa_eun(word: &str) -> &'static str {
    if has_batchim(word) { "은" } else { "는" }
}

pub fn josa_ro(word: &str) -> &'static str {
    if has_batchim(word) { "으로" } else { "로" }
}

/// Suffix that takes the 와/과 particle on the last name
pub const CONVERSATION_SUFFIX: &str = "의 대화";

/// Join names with commas, attaching 와/과 to the last one when several are
/// given. The conversation suffix always takes the particle.
///
/// `["박동훈", "오상식"]` with `"의 대화"` gives `"박동훈, 오상식과의 대화"`.
pub fn join_names_with_josa<S: AsRef<str>>(names: &[S], suffix: &str) -> String {
    let Some((last, rest)) = names.split_last() else {
        return String::new();
    };
    let last = last.as_ref();

    if rest.is_empty() {
        return if suffix == CONVERSATION_SUFFIX {
            format!("{last}{}{suffix}", josa_wa(last))
        } else {
            format!("{last}{suffix}")
        };
    }

    let head: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();
    format!("{}, {last}{}{suffix}", head.join(", "), josa_wa(last))
}

lazy_static! {
    /// Scoring and compliance metadata a character model sometimes leaks
    static ref METADATA_LINES: Vec<Regex> = [
        r"(?im)Scoring result:.*$",
        r"(?im)Time context compliance rate:.*$",
        r"(?im)Score:.*$",
        r"(?im)Compliance rate:.*$",
        r"(?im)점수:.*$",
        r"(?im)준수율:.*$",
        r"(?im)\n\s*(Scoring|Time|Score|Compliance|점수|준수).*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid metadata regex"))
    .collect();
}

/// Strip markdown bold and leaked metadata from a character line, fill in the
/// user's nickname placeholders and trim
pub fn sanitize_character_text(text: &str, user_nickname: Option<&str>) -> String {
    let mut cleaned = text.replace("**", "");
    for pattern in METADATA_LINES.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    if let Some(nickname) = user_nickname.filter(|n| !n.is_empty()) {
        cleaned = cleaned
            .replace("{{USER}}", nickname)
            .replace("{{user_nickname}}", nickname);
    }
    cleaned.trim().to_string()
}

/// Parse an ISO-8601 timestamp. Strings without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Relative label for a history entry: 방금 전, n분 전, n시간 전, n일 전,
/// then MM/DD in `now`'s timezone. Unparseable input is returned unchanged.
pub fn format_relative_date<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(date) = parse_timestamp(input) else {
        return input.to_string();
    };

    let diff_sec = now.with_timezone(&Utc).signed_duration_since(date).num_seconds();
    let diff_min = diff_sec.div_euclid(60);
    let diff_hour = diff_min.div_euclid(60);
    let diff_day = diff_hour.div_euclid(24);

    if diff_sec < 60 {
        "방금 전".to_string()
    } else if diff_min < 60 {
        format!("{diff_min}분 전")
    } else if diff_hour < 24 {
        format!("{diff_hour}시간 전")
    } else if diff_day < 7 {
        format!("{diff_day}일 전")
    } else {
        date.with_timezone(&now.timezone()).format("%m/%d").to_string()
    }
}
