//! 레거시 단일 레코드 인코딩 (JSON)
//!
//! 구형 수신 펌웨어가 사용하는 `{text, speed_cps, type}` 레코드.
//! 단순(비혼합) 메시지용 대체 인코딩으로, 명령 프로토콜과 같은
//! 분석 결과에서 직렬화됩니다.

use serde::{Deserialize, Serialize};

use crate::core::transcoder::{classify, transcode, TextClass};
use crate::protocol::encoder::ProtocolAnalysis;

/// 레거시 레코드 직렬화/파싱 에러
#[derive(Debug)]
pub enum LegacyError {
    /// JSON 직렬화 실패
    SerializeError(String),
    /// JSON 파싱 실패
    ParseError(String),
}

impl std::fmt::Display for LegacyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegacyError::SerializeError(s) => write!(f, "JSON 직렬화 오류: {}", s),
            LegacyError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for LegacyError {}

/// 레거시 타이핑 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRecord {
    /// 이미 변환된 키 시퀀스 (한글 원문은 와이어를 건너지 않음)
    pub text: String,
    /// 타이핑 속도 (문자/초)
    pub speed_cps: u8,
    /// 원문 텍스트 분류
    #[serde(rename = "type")]
    pub kind: TextClass,
}

impl LegacyRecord {
    /// 분석 결과에서 레거시 레코드 생성
    pub fn from_analysis(analysis: &ProtocolAnalysis, speed_cps: u8) -> Self {
        Self {
            text: transcode(&analysis.original),
            speed_cps,
            kind: classify(&analysis.original),
        }
    }

    /// JSON 문자열로 직렬화
    pub fn to_json(&self) -> Result<String, LegacyError> {
        serde_json::to_string(self).map_err(|e| LegacyError::SerializeError(e.to_string()))
    }

    /// JSON 문자열에서 파싱
    pub fn from_json(json: &str) -> Result<Self, LegacyError> {
        serde_json::from_str(json).map_err(|e| LegacyError::ParseError(e.to_string()))
    }
}
