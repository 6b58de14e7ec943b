pub mod config;
pub mod core;
pub mod model;

pub use crate::core::normalizer::normalize;
pub use model::{
    score, train, train_with_config, AdequacyJudge, AdequacyResult, ModelConfig, TrainedModel,
    Verdict, INVALID_SCORE,
};
