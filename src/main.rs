//! Mungeom - 바이그램 기반 텍스트 적합성 판별기

use mungeom::config::load_config;
use mungeom::model::AdequacyJudge;
use std::io::{self, BufRead};
use std::process;

/// 코퍼스 로드 에러
#[derive(Debug)]
enum CorpusError {
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// 학습에 쓰기엔 너무 짧음
    TooShort { len: usize, min: usize },
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::Io(e) => write!(f, "파일 읽기 오류: {}", e),
            CorpusError::TooShort { len, min } => {
                write!(f, "코퍼스가 너무 짧습니다: {}자 (최소 {}자)", len, min)
            }
        }
    }
}

impl std::error::Error for CorpusError {}

impl From<std::io::Error> for CorpusError {
    fn from(e: std::io::Error) -> Self {
        CorpusError::Io(e)
    }
}

/// 코퍼스 파일 로드 및 최소 길이 검사
fn load_corpus(path: &str, min_chars: usize) -> Result<String, CorpusError> {
    let text = std::fs::read_to_string(path)?;
    let len = text.chars().count();
    if len < min_chars {
        return Err(CorpusError::TooShort {
            len,
            min: min_chars,
        });
    }
    Ok(text)
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();

    // 코퍼스 파일 경로 인자
    let corpus_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("사용법: mungeom <코퍼스 파일>");
            eprintln!();
            eprintln!("코퍼스 파일로 모델을 학습한 뒤, 표준 입력에서 한 줄씩 읽어");
            eprintln!("적합성 스코어와 판정을 출력합니다.");
            process::exit(1);
        }
    };

    // 코퍼스 로드 (너무 짧은 코퍼스는 학습 전에 거부)
    let corpus = match load_corpus(&corpus_path, config.min_corpus_chars) {
        Ok(text) => text,
        Err(e) => {
            log::error!("코퍼스 로드 실패: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // 학습
    let judge = AdequacyJudge::from_corpus_with_config(&corpus, config.model_config());

    println!("학습 완료: {}자", corpus.chars().count());
    println!("코퍼스 자체 스코어: {:.4}", judge.model().baseline_score());
    println!("판정 임계값: {:.4}", judge.threshold());
    println!();
    println!("판정할 텍스트를 한 줄씩 입력하세요 (Ctrl-D로 종료):");

    // 쿼리 루프
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };

        let result = judge.judge(&line);
        println!("스코어: {:.2} / 판정: {}", result.score, result.verdict);
    }
}
