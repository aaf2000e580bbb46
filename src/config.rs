//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Hantype 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TypingConfig {
    /// 타이핑 속도 (문자/초)
    #[serde(default = "default_speed_cps")]
    pub speed_cps: u8,
    /// 문자 간 대기 시간 (ms)
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_speed_cps() -> u8 {
    10
}

fn default_interval_ms() -> u64 {
    100
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            speed_cps: default_speed_cps(),
            interval_ms: default_interval_ms(),
        }
    }
}

/// 설정 파일 경로: ~/.config/hantype/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hantype").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> TypingConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| TypingConfig::default()),
        Err(_) => TypingConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &TypingConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
