//! 한글 분해 및 자판 키 변환 핵심 모듈

pub mod keymap;
pub mod transcoder;
pub mod unicode;

pub use keymap::{KeyMapTable, KEYMAP};
pub use transcoder::{classify, transcode, TextClass};
