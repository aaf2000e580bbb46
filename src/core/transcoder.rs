//! 한글 -> 자판 키 시퀀스 변환기
//!
//! 문자열을 유니코드 스칼라 단위로 순회하며 완성형 음절을
//! 두벌식 키 시퀀스로 변환합니다. 서로게이트 쌍 분리는
//! `char` 순회 특성상 발생하지 않습니다.

use serde::{Deserialize, Serialize};

use crate::core::keymap::{Resolved, KEYMAP};
use crate::core::unicode::{decompose, is_syllable};

/// 텍스트 언어 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextClass {
    /// 한글 음절만 포함
    Korean,
    /// 출력 가능 ASCII만 포함
    English,
    /// 한글과 ASCII 모두 포함
    Mixed,
    /// 어느 쪽도 아님 (빈 입력, 제어 문자만 등)
    Unknown,
}

/// 문자별 통계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// 완성형 한글 음절 수
    pub korean_chars: usize,
    /// ASCII 영문자 수
    pub english_chars: usize,
    /// 기타 출력 가능 ASCII / 개행 / 탭 수
    pub special_chars: usize,
    /// 수신 장치가 표현할 수 없는 문자 수
    pub unsupported_chars: usize,
    /// 전체 스칼라 수
    pub total_chars: usize,
}

fn push_resolved(resolved: Resolved, out: &mut String) {
    match resolved {
        Resolved::Key(k) | Resolved::Passthrough(k) => out.push(k),
        Resolved::Dropped => {}
    }
}

/// 문자열 전체를 두벌식 키 시퀀스로 변환
///
/// 음절은 자모로 분해 후 키맵을 통과시키고, 그 외 스칼라는
/// 폴백 정책(낱자모 -> 키, 출력 가능 ASCII 통과, 나머지 무시)을
/// 그대로 적용합니다.
///
/// # Examples
/// ```
/// use hantype::core::transcoder::transcode;
/// assert_eq!(transcode("가"), "rk");
/// assert_eq!(transcode("안녕"), "dkssud");
/// assert_eq!(transcode("닭"), "ekfr"); // 복합 종성 = 키 4개
/// ```
pub fn transcode(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);

    for c in text.chars() {
        match decompose(c) {
            Some(jamos) => {
                for jamo in jamos {
                    push_resolved(KEYMAP.resolve(jamo), &mut result);
                }
            }
            // 분해되지 않는 스칼라도 같은 폴백 정책을 통과
            None => push_resolved(KEYMAP.resolve(c), &mut result),
        }
    }

    result
}

/// 텍스트 언어 분류
///
/// - korean: 한글 음절이 하나라도 있음
/// - english: 출력 가능 ASCII(0x20~0x7E)가 하나라도 있음
/// - mixed: 둘 다
/// - unknown: 둘 다 없음
pub fn classify(text: &str) -> TextClass {
    let mut has_korean = false;
    let mut has_english = false;

    for c in text.chars() {
        if is_syllable(c) {
            has_korean = true;
        } else if (0x20..=0x7E).contains(&(c as u32)) {
            has_english = true;
        }
        if has_korean && has_english {
            break;
        }
    }

    match (has_korean, has_english) {
        (true, true) => TextClass::Mixed,
        (true, false) => TextClass::Korean,
        (false, true) => TextClass::English,
        (false, false) => TextClass::Unknown,
    }
}

/// 문자별 통계 수집
pub fn text_stats(text: &str) -> TextStats {
    let mut stats = TextStats::default();

    for c in text.chars() {
        stats.total_chars += 1;
        let code = c as u32;
        if is_syllable(c) {
            stats.korean_chars += 1;
        } else if c.is_ascii_alphabetic() {
            stats.english_chars += 1;
        } else if (0x20..=0x7E).contains(&code) || matches!(c, '\n' | '\r' | '\t') {
            stats.special_chars += 1;
        } else {
            stats.unsupported_chars += 1;
        }
    }

    stats
}
