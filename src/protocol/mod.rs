//! 원격 타이핑 명령 프로토콜
//!
//! 텍스트를 언어별 세그먼트로 나누고 `#CMD:` / `#TEXT:` 라인
//! 프로토콜로 인코딩합니다. 수신 장치는 ASCII만 처리하므로 한글
//! 세그먼트는 두벌식 키 시퀀스로 변환되어 실립니다.
//!
//! # 사용 예시
//!
//! ```
//! use hantype::protocol::{analyze, validate};
//!
//! let analysis = analyze("안녕Hello");
//! let wire = analysis.serialize();
//! assert_eq!(wire, "#CMD:HANGUL\n#TEXT:dkssud\n#CMD:ENGLISH\n#TEXT:Hello");
//! assert!(validate(&wire).valid);
//! ```

pub mod encoder;
pub mod legacy;
pub mod segmenter;
pub mod validator;

// 공개 인터페이스
pub use encoder::{analyze, encode, serialize, ProtocolAnalysis, ProtocolCommand, ProtocolStats};
pub use legacy::{LegacyError, LegacyRecord};
pub use segmenter::{segment_by_language, Language, TextSegment};
pub use validator::{validate, ValidationReport};
