//! 두벌식 자판 자모 <-> 영문 키 매핑 테이블
//!
//! 정방향(자모 -> 키) 테이블에서 역방향 맵을 유도하며,
//! 생성 시 양방향 단사성을 검증합니다. 검증 실패는 테이블 데이터
//! 오류이므로 런타임 에러가 아닌 생성 시점 실패로 처리합니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::unicode::is_syllable;

/// 자모 -> 키 고정 데이터 테이블 (두벌식)
///
/// 소문자 = 비시프트, 대문자 = 시프트 (쌍자음 / ㅒ, ㅖ).
/// 복합 모음과 복합 종성은 직접 키가 없으며 분해 단계에서
/// 기본 자모로 전개된 뒤 이 테이블을 통과합니다.
#[rustfmt::skip]
const JAMO_KEY_TABLE: &[(char, char)] = &[
    // 자음
    ('ㄱ', 'r'), ('ㄲ', 'R'), ('ㄴ', 's'), ('ㄷ', 'e'), ('ㄸ', 'E'),
    ('ㄹ', 'f'), ('ㅁ', 'a'), ('ㅂ', 'q'), ('ㅃ', 'Q'), ('ㅅ', 't'),
    ('ㅆ', 'T'), ('ㅇ', 'd'), ('ㅈ', 'w'), ('ㅉ', 'W'), ('ㅊ', 'c'),
    ('ㅋ', 'z'), ('ㅌ', 'x'), ('ㅍ', 'v'), ('ㅎ', 'g'),
    // 모음
    ('ㅏ', 'k'), ('ㅐ', 'o'), ('ㅑ', 'i'), ('ㅒ', 'O'), ('ㅓ', 'j'),
    ('ㅔ', 'p'), ('ㅕ', 'u'), ('ㅖ', 'P'), ('ㅗ', 'h'), ('ㅛ', 'y'),
    ('ㅜ', 'n'), ('ㅠ', 'b'), ('ㅡ', 'm'), ('ㅣ', 'l'),
];

/// 키맵 생성 에러 (데이터 테이블 충돌)
#[derive(Debug)]
pub enum KeyMapError {
    /// 같은 자모가 두 번 등장
    DuplicateJamo(char),
    /// 같은 키가 두 자모에 배정됨
    DuplicateKey(char),
}

impl std::fmt::Display for KeyMapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyMapError::DuplicateJamo(j) => {
                write!(f, "중복된 자모 매핑: '{}' (U+{:04X})", j, *j as u32)
            }
            KeyMapError::DuplicateKey(k) => {
                write!(f, "중복된 키 배정: '{}'", k)
            }
        }
    }
}

impl std::error::Error for KeyMapError {}

/// 문자 하나의 매핑 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// 매핑된 자판 키
    Key(char),
    /// 출력 가능 ASCII 또는 완성형 음절은 그대로 통과
    Passthrough(char),
    /// 매핑 불가 문자 무시 (명시적 손실 정책)
    Dropped,
}

/// 양방향 단사가 보장된 자모 <-> 키 매핑
///
/// 생성 후 불변이므로 잠금 없이 여러 스레드에서 공유 가능.
#[derive(Debug)]
pub struct KeyMapTable {
    forward: HashMap<char, char>,
    inverse: HashMap<char, char>,
}

impl KeyMapTable {
    /// 고정 데이터 테이블로 키맵 생성
    pub fn build() -> Result<Self, KeyMapError> {
        Self::from_entries(JAMO_KEY_TABLE)
    }

    /// 엔트리 목록에서 정방향 맵을 만들고 역방향 맵을 유도
    /// 어느 방향이든 충돌이 있으면 생성 실패
    fn from_entries(entries: &[(char, char)]) -> Result<Self, KeyMapError> {
        let mut forward = HashMap::with_capacity(entries.len());
        for &(jamo, key) in entries {
            if forward.insert(jamo, key).is_some() {
                return Err(KeyMapError::DuplicateJamo(jamo));
            }
        }

        let mut inverse = HashMap::with_capacity(forward.len());
        for (&jamo, &key) in &forward {
            if inverse.insert(key, jamo).is_some() {
                return Err(KeyMapError::DuplicateKey(key));
            }
        }

        Ok(Self { forward, inverse })
    }

    /// 자모 -> 키 조회
    pub fn lookup(&self, jamo: char) -> Option<char> {
        self.forward.get(&jamo).copied()
    }

    /// 키 -> 자모 역조회
    pub fn key_to_jamo(&self, key: char) -> Option<char> {
        self.inverse.get(&key).copied()
    }

    /// 매핑된 자모 개수
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// 문자 하나를 폴백 정책까지 포함해 해석
    ///
    /// 1. 매핑된 자모 -> 자판 키
    /// 2. 출력 가능 ASCII (0x20~0x7E) 또는 완성형 음절 -> 그대로 통과
    /// 3. 그 외 -> 무시 (수신 장치가 표현할 수 없는 문자)
    pub fn resolve(&self, c: char) -> Resolved {
        if let Some(key) = self.lookup(c) {
            return Resolved::Key(key);
        }
        let code = c as u32;
        if (0x20..=0x7E).contains(&code) || is_syllable(c) {
            return Resolved::Passthrough(c);
        }
        log::warn!("매핑되지 않는 문자 무시: '{}' (U+{:04X})", c, code);
        Resolved::Dropped
    }
}

/// 시프트 키인지 확인 (대문자 = 시프트)
pub fn is_shifted_key(key: char) -> bool {
    key.is_ascii_uppercase()
}

lazy_static! {
    /// 프로세스 전역 키맵 — 한 번 생성 후 읽기 전용으로 공유
    ///
    /// 고정 테이블 충돌은 프로그래밍 오류이므로 여기서 즉시 중단
    pub static ref KEYMAP: KeyMapTable =
        KeyMapTable::build().unwrap_or_else(|e| panic!("두벌식 키맵 생성 실패: {}", e));
}
