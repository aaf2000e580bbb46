//! Hantype - 텍스트를 원격 타이핑 프로토콜로 변환하는 CLI

use std::io::Read;

use hantype::config::load_config;
use hantype::core::transcoder::text_stats;
use hantype::protocol::analyze;

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut legacy = false;
    let mut stats = false;
    let mut words: Vec<String> = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--legacy" | "-l" => legacy = true,
            "--stats" | "-s" => stats = true,
            _ => words.push(arg),
        }
    }

    // 인자가 없으면 표준 입력에서 읽음
    let text = if words.is_empty() {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            log::error!("표준 입력 읽기 실패: {}", e);
            std::process::exit(1);
        }
        buf
    } else {
        words.join(" ")
    };

    let analysis = analyze(&text);

    if stats {
        let s = &analysis.stats;
        eprintln!(
            "세그먼트 {}개 (한글 {}, 영문 {}, 제어 {}) / 명령 {}개 / 언어 전환 {}회",
            s.total_segments,
            s.korean_segments,
            s.english_segments,
            s.control_segments,
            s.total_commands,
            s.language_switches
        );
        let t = text_stats(&text);
        eprintln!(
            "문자 {}개 (한글 {}, 영문 {}, 기타 {}, 미지원 {})",
            t.total_chars,
            t.korean_chars,
            t.english_chars,
            t.special_chars,
            t.unsupported_chars
        );
    }

    if legacy {
        let config = load_config();
        match analysis.to_legacy(config.speed_cps).to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("레거시 레코드 직렬화 실패: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", analysis.serialize());
    }
}
