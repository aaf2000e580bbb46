//! 프로토콜 명령 생성 및 직렬화
//!
//! 언어 세그먼트를 `#CMD:` / `#TEXT:` 라인 프로토콜로 변환합니다.
//! 한글 세그먼트의 페이로드는 항상 변환된 키 시퀀스이며, 한글
//! 원문은 와이어를 건너지 않습니다.

use crate::core::transcoder::transcode;
use crate::protocol::legacy::LegacyRecord;
use crate::protocol::segmenter::{segment_by_language, Language, TextSegment};

/// 프로토콜 명령
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolCommand {
    /// 한글 입력 모드 전환
    Hangul,
    /// 영문 입력 모드 전환
    English,
    Tab,
    Enter,
    Shift,
    Ctrl,
    Alt,
    /// 텍스트 페이로드 (개행 미포함 — 개행은 Enter 명령으로 표현)
    Text(String),
}

impl ProtocolCommand {
    /// 와이어 라인으로 직렬화
    pub fn to_line(&self) -> String {
        match self {
            ProtocolCommand::Hangul => "#CMD:HANGUL".to_string(),
            ProtocolCommand::English => "#CMD:ENGLISH".to_string(),
            ProtocolCommand::Tab => "#CMD:TAB".to_string(),
            ProtocolCommand::Enter => "#CMD:ENTER".to_string(),
            ProtocolCommand::Shift => "#CMD:SHIFT".to_string(),
            ProtocolCommand::Ctrl => "#CMD:CTRL".to_string(),
            ProtocolCommand::Alt => "#CMD:ALT".to_string(),
            ProtocolCommand::Text(payload) => format!("#TEXT:{}", payload),
        }
    }
}

/// 세그먼트 목록을 명령 목록으로 변환
fn encode_segments(segments: &[TextSegment]) -> Vec<ProtocolCommand> {
    let mut commands = Vec::new();

    for segment in segments {
        match segment.language {
            Language::Control => match segment.text.as_str() {
                "\n" | "\r" => commands.push(ProtocolCommand::Enter),
                "\t" => commands.push(ProtocolCommand::Tab),
                // 그 외 제어 문자는 주변 언어 컨텍스트의 텍스트로
                // (전환 명령 없이 그대로)
                other => commands.push(ProtocolCommand::Text(other.to_string())),
            },
            Language::Korean => {
                commands.push(ProtocolCommand::Hangul);
                commands.push(ProtocolCommand::Text(transcode(&segment.text)));
            }
            Language::English => {
                commands.push(ProtocolCommand::English);
                commands.push(ProtocolCommand::Text(segment.text.clone()));
            }
        }
    }

    commands
}

/// 텍스트를 프로토콜 명령 목록으로 변환
///
/// 빈 입력은 빈 목록 (실시간 입력 중 빈 버퍼는 에러가 아님)
pub fn encode(text: &str) -> Vec<ProtocolCommand> {
    encode_segments(&segment_by_language(text))
}

/// 명령 목록을 개행 구분 와이어 문자열로 직렬화
pub fn serialize(commands: &[ProtocolCommand]) -> String {
    commands
        .iter()
        .map(ProtocolCommand::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 프로토콜 통계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProtocolStats {
    pub total_segments: usize,
    pub korean_segments: usize,
    pub english_segments: usize,
    pub control_segments: usize,
    /// 한글 <-> 영문 활성 컨텍스트 전환 횟수
    /// (제어 세그먼트는 세지 않고 컨텍스트도 바꾸지 않음)
    pub language_switches: usize,
    pub total_commands: usize,
}

/// 세그먼트/명령/통계를 묶은 분석 결과
///
/// 명령 프로토콜과 레거시 레코드 양쪽 인코딩이 이 값 하나에서
/// 직렬화됩니다.
#[derive(Debug, Clone)]
pub struct ProtocolAnalysis {
    pub original: String,
    pub segments: Vec<TextSegment>,
    pub commands: Vec<ProtocolCommand>,
    pub stats: ProtocolStats,
}

impl ProtocolAnalysis {
    /// 명령 프로토콜 와이어 문자열
    pub fn serialize(&self) -> String {
        serialize(&self.commands)
    }

    /// 레거시 단일 레코드 인코딩
    pub fn to_legacy(&self, speed_cps: u8) -> LegacyRecord {
        LegacyRecord::from_analysis(self, speed_cps)
    }
}

/// 텍스트 분석: 세그먼트, 명령, 통계를 한 번에 산출
pub fn analyze(text: &str) -> ProtocolAnalysis {
    let segments = segment_by_language(text);
    let commands = encode_segments(&segments);

    let mut stats = ProtocolStats {
        total_segments: segments.len(),
        total_commands: commands.len(),
        ..Default::default()
    };

    let mut active: Option<Language> = None;
    for segment in &segments {
        match segment.language {
            Language::Korean => stats.korean_segments += 1,
            Language::English => stats.english_segments += 1,
            Language::Control => stats.control_segments += 1,
        }
        // 첫 언어 세그먼트도 전환 1회로 센다
        // (수신 장치는 첫 런 전에도 모드를 맞춰야 함)
        if segment.language != Language::Control && active != Some(segment.language) {
            stats.language_switches += 1;
            active = Some(segment.language);
        }
    }

    ProtocolAnalysis {
        original: text.to_string(),
        segments,
        commands,
        stats,
    }
}
