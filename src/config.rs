//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::model::ModelConfig;

/// Mungeom 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MungeomConfig {
    /// 학습 코퍼스 최소 길이 (문자 수)
    /// 이보다 짧은 코퍼스는 통계적으로 무의미하므로 학습 전에 거부
    #[serde(default = "default_min_corpus_chars")]
    pub min_corpus_chars: usize,
    /// 가산 스무딩 상수
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    /// 임계값 마진 (코퍼스 자체 스코어에서 뺄 값)
    #[serde(default = "default_threshold_margin")]
    pub threshold_margin: f64,
}

fn default_min_corpus_chars() -> usize {
    100
}

fn default_smoothing() -> f64 {
    1e-6
}

fn default_threshold_margin() -> f64 {
    1.5
}

impl Default for MungeomConfig {
    fn default() -> Self {
        Self {
            min_corpus_chars: default_min_corpus_chars(),
            smoothing: default_smoothing(),
            threshold_margin: default_threshold_margin(),
        }
    }
}

impl MungeomConfig {
    /// 모델 설정으로 변환
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::new()
            .with_smoothing(self.smoothing)
            .with_threshold_margin(self.threshold_margin)
    }
}

/// 설정 파일 경로: ~/.config/mungeom/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("mungeom").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> MungeomConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| MungeomConfig::default()),
        Err(_) => MungeomConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &MungeomConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
