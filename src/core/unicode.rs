//! 유니코드 한글 조합/분해 유틸리티
//!
//! 완성형 음절(가-힣)을 초성/중성/종성 인덱스로 분해하고,
//! 복합 모음/복합 종성을 구성 자모로 전개합니다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;
/// 중성 x 종성 조합 수 (21 * 28)
const JUNGSEONG_JONGSEONG_COUNT: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성형 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / JUNGSEONG_JONGSEONG_COUNT;
    let jungseong = (offset % JUNGSEONG_JONGSEONG_COUNT) / JONGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 초성 인덱스 -> 호환용 자모
///
/// 초성 인덱스 순서 (19개):
/// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
/// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
pub fn choseong_jamo(cho: u32) -> Option<char> {
    #[rustfmt::skip]
    const CHOSEONG_JAMO: [char; 19] = [
        'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
        'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
    ];
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 자모
///
/// 중성 인덱스 순서 (21개):
/// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
/// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
pub fn jungseong_jamo(jung: u32) -> Option<char> {
    #[rustfmt::skip]
    const JUNGSEONG_JAMO: [char; 21] = [
        'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
        'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
    ];
    JUNGSEONG_JAMO.get(jung as usize).copied()
}

/// 종성 인덱스 -> 호환용 자모 (0 = 종성 없음 -> None)
///
/// 종성 인덱스 순서 (28개):
/// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
/// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
/// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
pub fn jongseong_jamo(jong: u32) -> Option<char> {
    if jong == 0 {
        return None;
    }
    #[rustfmt::skip]
    const JONGSEONG_JAMO: [char; 27] = [
        'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ',
        'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ',
        'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
    ];
    JONGSEONG_JAMO.get(jong as usize - 1).copied()
}

/// 중성을 자판 입력 순서의 자모로 전개 (복합 모음은 두 개)
///
/// 복합 모음은 직접 칠 수 있는 키가 없으므로 두 기본 모음의
/// 시각적 순서대로 전개됨 (ㅘ = ㅗ + ㅏ). 종성 유무와 무관.
fn push_jungseong_jamo(jung: u32, out: &mut Vec<char>) {
    match jung {
        9 => out.extend(['ㅗ', 'ㅏ']),  // ㅘ
        10 => out.extend(['ㅗ', 'ㅐ']), // ㅙ
        11 => out.extend(['ㅗ', 'ㅣ']), // ㅚ
        14 => out.extend(['ㅜ', 'ㅓ']), // ㅝ
        15 => out.extend(['ㅜ', 'ㅔ']), // ㅞ
        16 => out.extend(['ㅜ', 'ㅣ']), // ㅟ
        19 => out.extend(['ㅡ', 'ㅣ']), // ㅢ
        _ => {
            if let Some(j) = jungseong_jamo(jung) {
                out.push(j);
            }
        }
    }
}

/// 종성을 자판 입력 순서의 자모로 전개 (복합 종성은 두 개)
///
/// 복합 종성의 구성 순서는 고정 테이블 (ㄳ은 항상 ㄱ, ㅅ)
fn push_jongseong_jamo(jong: u32, out: &mut Vec<char>) {
    match jong {
        0 => {} // 종성 없음
        3 => out.extend(['ㄱ', 'ㅅ']),  // ㄳ
        5 => out.extend(['ㄴ', 'ㅈ']),  // ㄵ
        6 => out.extend(['ㄴ', 'ㅎ']),  // ㄶ
        9 => out.extend(['ㄹ', 'ㄱ']),  // ㄺ
        10 => out.extend(['ㄹ', 'ㅁ']), // ㄻ
        11 => out.extend(['ㄹ', 'ㅂ']), // ㄼ
        12 => out.extend(['ㄹ', 'ㅅ']), // ㄽ
        13 => out.extend(['ㄹ', 'ㅌ']), // ㄾ
        14 => out.extend(['ㄹ', 'ㅍ']), // ㄿ
        15 => out.extend(['ㄹ', 'ㅎ']), // ㅀ
        18 => out.extend(['ㅂ', 'ㅅ']), // ㅄ
        _ => {
            if let Some(j) = jongseong_jamo(jong) {
                out.push(j);
            }
        }
    }
}

/// 완성형 음절을 자판 입력 순서의 자모 리스트로 분해
///
/// 복합 모음/복합 종성을 전개하므로 결과는 자모 2~5개.
/// 음절 범위(가-힣) 밖의 문자는 None.
///
/// # Examples
/// ```
/// use hantype::core::unicode::decompose;
/// assert_eq!(decompose('가'), Some(vec!['ㄱ', 'ㅏ']));
/// assert_eq!(decompose('닭'), Some(vec!['ㄷ', 'ㅏ', 'ㄹ', 'ㄱ']));
/// assert_eq!(decompose('a'), None);
/// ```
pub fn decompose(c: char) -> Option<Vec<char>> {
    let (cho, jung, jong) = decompose_syllable(c)?;

    let mut jamos = Vec::with_capacity(5);
    if let Some(j) = choseong_jamo(cho) {
        jamos.push(j);
    }
    push_jungseong_jamo(jung, &mut jamos);
    push_jongseong_jamo(jong, &mut jamos);
    Some(jamos)
}
