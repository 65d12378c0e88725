//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Baleum 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BaleumConfig {
    /// 음운 규칙집 파일 경로
    #[serde(default = "default_rulebook_path")]
    pub rulebook_path: String,
    /// 성능 평가용 테스트셋 파일 경로
    #[serde(default = "default_testset_path")]
    pub testset_path: String,
    /// 평가 통과 항목을 기록할 결과 파일 경로
    #[serde(default = "default_results_path")]
    pub results_path: String,
    /// 규칙 수렴 패스 상한
    #[serde(default = "default_max_passes")]
    pub max_passes: u32,
}

fn default_rulebook_path() -> String {
    "data/rulebook.txt".to_string()
}

fn default_testset_path() -> String {
    "data/testset.txt".to_string()
}

fn default_results_path() -> String {
    "results.txt".to_string()
}

fn default_max_passes() -> u32 {
    10
}

impl Default for BaleumConfig {
    fn default() -> Self {
        Self {
            rulebook_path: default_rulebook_path(),
            testset_path: default_testset_path(),
            results_path: default_results_path(),
            max_passes: default_max_passes(),
        }
    }
}

/// 설정 파일 경로: ~/.config/baleum/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("baleum").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> BaleumConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| BaleumConfig::default()),
        Err(_) => BaleumConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &BaleumConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
