//! 바이그램 적합성 모델
//!
//! 문자 바이그램 통계로 텍스트가 자연어 산문인지
//! 무작위 잡음인지 판별합니다.
//!
//! # 개요
//!
//! 3단계 파이프라인으로 동작합니다:
//!
//! 1. **정규화**: `core::normalizer`로 입력을 알파벳(소문자 + 공백)만 남김
//! 2. **학습**: 코퍼스의 바이그램 빈도 → 스무딩 + 행 정규화된 전이 확률 행렬,
//!    코퍼스 자체 스코어에서 임계값 유도
//! 3. **스코어링**: 쿼리의 바이그램별 평균 로그 확률을 임계값과 비교해 판정
//!
//! # 사용 예시
//!
//! ```
//! use mungeom::model::{AdequacyJudge, Verdict};
//!
//! let corpus = "the quick brown fox jumps over the lazy dog ".repeat(200);
//! let judge = AdequacyJudge::from_corpus(&corpus);
//!
//! let result = judge.judge("the quick brown fox jumps over the lazy dog");
//! assert_eq!(result.verdict, Verdict::Adequate);
//!
//! let result = judge.judge("");
//! assert_eq!(result.verdict, Verdict::Invalid);
//! ```
//!
//! 저수준 인터페이스도 그대로 공개되어 있습니다:
//!
//! ```
//! use mungeom::model::{score, train, INVALID_SCORE};
//!
//! let model = train(&"the quick brown fox jumps over the lazy dog ".repeat(200));
//! assert_eq!(score("a", model.matrix(), model.index_map()), INVALID_SCORE);
//! ```

mod config;
mod judge;
mod matrix;
mod scorer;
mod trainer;

// 공개 인터페이스
pub use config::ModelConfig;
pub use judge::{AdequacyJudge, AdequacyResult, Verdict};
pub use matrix::{BigramCounts, TransitionMatrix};
pub use scorer::{is_invalid_score, score, INVALID_SCORE};
pub use trainer::{train, train_with_config, TrainedModel};
