//! 통합 테스트 - 변환 파이프라인 전체 (분해 -> 키맵 -> 분할 -> 프로토콜)

use hantype::core::unicode::{compose_syllable, decompose, decompose_syllable};
use hantype::protocol::{analyze, encode, segment_by_language, serialize, validate, Language, ProtocolCommand};
use hantype::{classify, transcode, TextClass};

#[test]
fn test_decompose_examples() {
    assert_eq!(decompose('가'), Some(vec!['ㄱ', 'ㅏ']));
    // 복합 종성은 4 타로 전개됨
    assert_eq!(decompose('닭'), Some(vec!['ㄷ', 'ㅏ', 'ㄹ', 'ㄱ']));
}

#[test]
fn test_transcode_examples() {
    assert_eq!(transcode("가"), "rk");
    assert_eq!(transcode("안녕"), "dkssud");
    assert_eq!(transcode("안녕하세요"), "dkssudgktpdy");
    assert_eq!(transcode("컴퓨터"), "zjavbxj");
    assert_eq!(transcode("프로그램"), "vmfhrmfoa");
}

#[test]
fn test_full_syllable_range_decomposes() {
    // 전체 음절 범위: 분해는 자모 2~5개, 재조합은 원본과 일치,
    // 변환 결과는 전부 ASCII (기본 자모는 모두 키가 있음)
    for code in 0xAC00u32..=0xD7A3 {
        let c = char::from_u32(code).unwrap();

        let (cho, jung, jong) = decompose_syllable(c).unwrap();
        assert_eq!(compose_syllable(cho, jung, jong), Some(c));

        let jamos = decompose(c).unwrap();
        assert!((2..=5).contains(&jamos.len()), "자모 수 이상: {:?}", c);

        let keys = transcode(&c.to_string());
        assert_eq!(keys.len(), jamos.len(), "키 수 불일치: {:?}", c);
        assert!(keys.is_ascii(), "ASCII 아닌 출력: {:?} -> {:?}", c, keys);
    }
}

#[test]
fn test_segmentation_coverage() {
    let inputs = [
        "안녕Hello",
        "안녕Hellow 난 jason이야!",
        "Test\nNewline\tTab",
        "123 안녕 456",
        "Mixed 텍스트 with symbols!@#",
        "",
    ];
    for input in inputs {
        let segments = segment_by_language(input);
        let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn test_segment_example() {
    let segments = segment_by_language("안녕Hello");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].language, Language::Korean);
    assert_eq!(segments[0].text, "안녕");
    assert_eq!(segments[1].language, Language::English);
    assert_eq!(segments[1].text, "Hello");
}

#[test]
fn test_text_command_always_preceded_by_language_command() {
    // 한글/영문 세그먼트의 TEXT는 항상 해당 언어 명령 바로 뒤
    let inputs = ["안녕Hellow 난 jason이야!", "a\tb\nc 한글", "한글English한글"];
    for input in inputs {
        let segments = segment_by_language(input);
        let commands = encode(input);

        let mut idx = 0;
        for segment in &segments {
            match segment.language {
                Language::Korean => {
                    assert_eq!(commands[idx], ProtocolCommand::Hangul);
                    assert!(matches!(commands[idx + 1], ProtocolCommand::Text(_)));
                    idx += 2;
                }
                Language::English => {
                    assert_eq!(commands[idx], ProtocolCommand::English);
                    assert!(matches!(commands[idx + 1], ProtocolCommand::Text(_)));
                    idx += 2;
                }
                Language::Control => {
                    idx += 1;
                }
            }
        }
        assert_eq!(idx, commands.len());
    }
}

#[test]
fn test_encode_newline_example() {
    assert_eq!(
        encode("Hi\n"),
        vec![
            ProtocolCommand::English,
            ProtocolCommand::Text("Hi".to_string()),
            ProtocolCommand::Enter,
        ]
    );
}

#[test]
fn test_korean_payload_is_transcoded() {
    // 한글 원문은 와이어에 실리지 않음
    let wire = serialize(&encode("안녕"));
    assert_eq!(wire, "#CMD:HANGUL\n#TEXT:dkssud");
    assert!(wire.is_ascii());
}

#[test]
fn test_encode_serialize_validate_roundtrip() {
    let inputs = [
        "안녕",
        "Hello",
        "안녕Hellow 난 jason이야!",
        "Test\nNewline\tTab",
        "한글English한글",
        "123 안녕 456",
        "Mixed 텍스트 with symbols!@#",
        "줄바꿈\r\n탭\t끝",
        "",
    ];
    for input in inputs {
        let wire = serialize(&encode(input));
        let report = validate(&wire);
        assert!(report.valid, "검증 실패 ({:?}): {:?}", input, report.errors);
    }
}

#[test]
fn test_validate_rejects_orphan_text() {
    let report = validate("#TEXT:abc");
    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec!["Line 1: TEXT command without preceding language command".to_string()]
    );
}

#[test]
fn test_transcode_idempotent_after_first_pass() {
    let inputs = ["안녕 Hello 123", "닭갈비!", "의자와 책상"];
    for input in inputs {
        let once = transcode(input);
        // 첫 변환 후 한글이 남지 않으므로 재변환해도 동일
        assert_eq!(transcode(&once), once);
    }
}

#[test]
fn test_classify_pipeline() {
    assert_eq!(classify("안녕"), TextClass::Korean);
    assert_eq!(classify("Hello"), TextClass::English);
    assert_eq!(classify("안녕Hello"), TextClass::Mixed);
    assert_eq!(classify(""), TextClass::Unknown);
}

#[test]
fn test_analysis_to_both_wire_encodings() {
    // 하나의 분석 결과에서 두 인코딩 모두 산출
    let analysis = analyze("안녕 Hello");

    let wire = analysis.serialize();
    assert!(validate(&wire).valid);

    let record = analysis.to_legacy(10);
    assert_eq!(record.text, "dkssud Hello");
    assert_eq!(record.kind, TextClass::Mixed);

    let json = record.to_json().unwrap();
    assert!(json.contains("\"type\":\"mixed\""));
}

#[test]
fn test_language_switch_count() {
    assert_eq!(analyze("안녕Hello").stats.language_switches, 2);
    // 제어 세그먼트는 컨텍스트를 바꾸지 않음
    assert_eq!(analyze("안녕\n하세요").stats.language_switches, 1);
    assert_eq!(analyze("\n\t").stats.language_switches, 0);
}
