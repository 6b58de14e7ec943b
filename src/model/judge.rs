//! 적합성 판정
//!
//! 학습된 모델의 임계값으로 스코어를 최종 판정으로 변환합니다.

use super::config::ModelConfig;
use super::scorer::is_invalid_score;
use super::trainer::{train_with_config, TrainedModel};

/// 판정 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 자연어 산문에 부합
    Adequate,
    /// 학습 분포에서 벗어난 무작위 텍스트
    Random,
    /// 스코어 불가 입력 (정규화 후 심볼 2개 미만)
    Invalid,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Adequate => write!(f, "적합"),
            Verdict::Random => write!(f, "랜덤"),
            Verdict::Invalid => write!(f, "판정 불가"),
        }
    }
}

/// 쿼리 하나에 대한 판정 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdequacyResult {
    /// 적합성 스코어 (판정 불가 시 센티널 값)
    pub score: f64,
    /// 최종 판정
    pub verdict: Verdict,
}

/// 적합성 판정기
///
/// 학습된 모델을 소유하고 쿼리를 스코어링해 판정합니다.
/// 재학습하면 기존 모델이 통째로 교체됩니다 (제자리 수정 없음).
#[derive(Debug, Clone)]
pub struct AdequacyJudge {
    model: TrainedModel,
    config: ModelConfig,
}

impl AdequacyJudge {
    /// 기본 설정으로 코퍼스를 학습해 판정기 생성
    pub fn from_corpus(corpus: &str) -> Self {
        Self::from_corpus_with_config(corpus, ModelConfig::default())
    }

    /// 설정을 적용해 코퍼스를 학습한 판정기 생성
    pub fn from_corpus_with_config(corpus: &str, config: ModelConfig) -> Self {
        let model = train_with_config(corpus, &config);
        Self { model, config }
    }

    /// 이미 학습된 모델로 판정기 생성
    pub fn with_model(model: TrainedModel) -> Self {
        Self {
            model,
            config: ModelConfig::default(),
        }
    }

    /// 쿼리 스코어 계산
    pub fn score(&self, text: &str) -> f64 {
        self.model.score(text)
    }

    /// 쿼리 판정
    ///
    /// - 센티널 스코어 → `Invalid`
    /// - 임계값 초과 → `Adequate`
    /// - 그 외 → `Random`
    pub fn judge(&self, text: &str) -> AdequacyResult {
        let score = self.model.score(text);

        let verdict = if is_invalid_score(score) {
            Verdict::Invalid
        } else if score > self.model.threshold() {
            Verdict::Adequate
        } else {
            Verdict::Random
        };

        AdequacyResult { score, verdict }
    }

    /// 새 코퍼스로 재학습 (기존 모델 교체)
    pub fn retrain(&mut self, corpus: &str) {
        self.model = train_with_config(corpus, &self.config);
    }

    /// 현재 판정 임계값
    pub fn threshold(&self) -> f64 {
        self.model.threshold()
    }

    /// 학습된 모델 참조
    pub fn model(&self) -> &TrainedModel {
        &self.model
    }
}
