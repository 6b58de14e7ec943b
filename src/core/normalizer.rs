//! 입력 텍스트 정규화
//!
//! 임의의 텍스트를 모델 알파벳(소문자 + 공백)만 남도록 canonicalize합니다.

use super::alphabet::is_alphabet_symbol;

/// 텍스트를 모델 알파벳으로 정규화
///
/// 1. 소문자로 변환
/// 2. 개행 문자는 공백으로 치환
/// 3. 알파벳 밖 문자는 제거
/// 4. 연속 공백은 하나로 축약, 앞뒤 공백 제거
///
/// 개행만 공백으로 취급되므로 `"a\nb"`는 `"a b"`, `"a\tb"`는 `"ab"`가 됩니다.
/// 빈 입력이나 알파벳 문자가 전혀 없는 입력은 빈 문자열이 됩니다.
pub fn normalize(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    // 선행 공백을 건너뛰기 위해 true로 시작
    let mut prev_space = true;

    for raw in text.chars() {
        let raw = if raw == '\n' { ' ' } else { raw };

        for c in raw.to_lowercase() {
            if !is_alphabet_symbol(c) {
                continue;
            }
            if c == ' ' {
                if !prev_space {
                    cleaned.push(' ');
                    prev_space = true;
                }
            } else {
                cleaned.push(c);
                prev_space = false;
            }
        }
    }

    // 후행 공백 제거
    if cleaned.ends_with(' ') {
        cleaned.pop();
    }

    cleaned
}
