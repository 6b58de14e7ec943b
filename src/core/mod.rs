//! 알파벳 정의 및 텍스트 정규화 모듈

pub mod alphabet;
pub mod normalizer;

pub use alphabet::{is_alphabet_symbol, SymbolIndexMap, ALPHABET, SYMBOL_COUNT};
pub use normalizer::normalize;
