//! 코퍼스 학습
//!
//! 정규화된 코퍼스에서 바이그램 빈도를 집계해
//! 전이 확률 행렬과 판정 임계값을 가진 모델을 만듭니다.

use crate::core::alphabet::{SymbolIndexMap, SYMBOL_COUNT};
use crate::core::normalizer::normalize;

use super::config::ModelConfig;
use super::matrix::{BigramCounts, TransitionMatrix};
use super::scorer::score;

/// 학습된 적합성 모델
///
/// 전이 확률 행렬 + 심볼 인덱스 매핑 + 판정 임계값을 소유합니다.
/// 생성 이후 읽기 전용이며, 재학습 시 제자리 수정 대신 모델 전체를 교체합니다.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    matrix: TransitionMatrix,
    index_map: SymbolIndexMap,
    baseline_score: f64,
    threshold: f64,
}

impl TrainedModel {
    /// 전이 확률 행렬
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// 심볼 인덱스 매핑
    pub fn index_map(&self) -> &SymbolIndexMap {
        &self.index_map
    }

    /// 코퍼스 자체 스코어 (임계값 산출의 기준)
    pub fn baseline_score(&self) -> f64 {
        self.baseline_score
    }

    /// 판정 임계값
    /// 스코어가 이 값 이하면 학습 분포 기준 비정상 텍스트
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// 이 모델로 텍스트 스코어 계산
    pub fn score(&self, text: &str) -> f64 {
        score(text, &self.matrix, &self.index_map)
    }
}

/// 기본 설정으로 코퍼스 학습
pub fn train(corpus: &str) -> TrainedModel {
    train_with_config(corpus, &ModelConfig::default())
}

/// 설정을 적용한 코퍼스 학습
///
/// 1. 코퍼스 정규화
/// 2. 인접 심볼 쌍(바이그램) 빈도 집계
/// 3. 스무딩 + 행 정규화로 전이 확률 행렬 생성
/// 4. 코퍼스 자체 스코어에서 마진을 뺀 값을 임계값으로 설정
///
/// 항상 성공하며 입력이 같으면 결과도 완전히 동일합니다 (무작위성 없음).
/// 아주 짧은 코퍼스는 스무딩이 지배하는 균등에 가까운 행렬로 퇴화합니다.
pub fn train_with_config(corpus: &str, config: &ModelConfig) -> TrainedModel {
    let cleaned = normalize(corpus);
    let index_map = SymbolIndexMap::new();

    let mut counts: BigramCounts = [[0; SYMBOL_COUNT]; SYMBOL_COUNT];
    let chars: Vec<char> = cleaned.chars().collect();

    for window in chars.windows(2) {
        // 정규화 후에는 항상 매핑에 존재
        if let (Some(i), Some(j)) = (index_map.index_of(window[0]), index_map.index_of(window[1]))
        {
            counts[i][j] += 1;
        }
    }

    let matrix = TransitionMatrix::from_counts(&counts, config.smoothing);

    // 코퍼스를 방금 만든 행렬로 다시 스코어링 = 자기 일관성 기준선
    let baseline_score = score(&cleaned, &matrix, &index_map);
    let threshold = baseline_score - config.threshold_margin;

    TrainedModel {
        matrix,
        index_map,
        baseline_score,
        threshold,
    }
}
