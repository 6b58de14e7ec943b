//! 통합 테스트 - 적합성 판별 파이프라인

use mungeom::core::{is_alphabet_symbol, SYMBOL_COUNT};
use mungeom::{normalize, score, train, AdequacyJudge, Verdict, INVALID_SCORE};

fn fox_corpus() -> String {
    "the quick brown fox jumps over the lazy dog ".repeat(200)
}

#[test]
fn test_normalize_pipeline_input() {
    let raw = "The QUICK brown\nfox... jumps!  Over the lazy dog?";
    let cleaned = normalize(raw);

    assert_eq!(cleaned, "the quick brown fox jumps over the lazy dog");
    assert!(cleaned.chars().all(is_alphabet_symbol));
    assert_eq!(normalize(&cleaned), cleaned); // 멱등
}

#[test]
fn test_trained_matrix_invariants() {
    let model = train(&fox_corpus());

    for row in 0..SYMBOL_COUNT {
        assert!(
            (model.matrix().row_sum(row) - 1.0).abs() < 1e-9,
            "{}번 행의 합이 1이 아님",
            row
        );
        for col in 0..SYMBOL_COUNT {
            assert!(model.matrix().prob(row, col) > 0.0);
        }
    }
}

#[test]
fn test_training_deterministic() {
    let corpus = fox_corpus();
    let first = train(&corpus);
    let second = train(&corpus);

    assert_eq!(first.matrix(), second.matrix());
    assert_eq!(first.threshold(), second.threshold());
}

#[test]
fn test_fox_corpus_scenario() {
    let corpus = fox_corpus();
    let model = train(&corpus);

    // 임계값 = 기준선 - 1.5
    assert!((model.threshold() - (model.baseline_score() - 1.5)).abs() < 1e-12);

    // 코퍼스를 다시 스코어링하면 기준선 그대로
    assert_eq!(model.score(&corpus), model.baseline_score());
}

#[test]
fn test_empty_query_sentinel() {
    let model = train(&fox_corpus());

    assert_eq!(model.score(""), INVALID_SCORE);
    assert_eq!(score("", model.matrix(), model.index_map()), INVALID_SCORE);
}

#[test]
fn test_single_char_query_sentinel() {
    let model = train(&fox_corpus());

    assert_eq!(model.score("a"), INVALID_SCORE);
}

#[test]
fn test_junk_scores_below_fluent() {
    let model = train(&fox_corpus());

    let fluent = model.score("the quick brown fox");
    let junk = model.score("xjqzxjqzxjqz");

    assert!(fluent.is_finite());
    assert!(junk.is_finite());
    assert!(
        junk < fluent,
        "저확률 쌍({})이 자연스러운 문장({})보다 낮아야 함",
        junk,
        fluent
    );
}

#[test]
fn test_judge_end_to_end() {
    let judge = AdequacyJudge::from_corpus(&fox_corpus());

    assert_eq!(
        judge.judge("the quick brown fox jumps over the lazy dog").verdict,
        Verdict::Adequate
    );
    assert_eq!(judge.judge("xjqzxjqzxjqz").verdict, Verdict::Random);
    assert_eq!(judge.judge("").verdict, Verdict::Invalid);
    assert_eq!(judge.judge("a").verdict, Verdict::Invalid);
}
