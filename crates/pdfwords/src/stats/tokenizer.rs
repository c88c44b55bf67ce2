//! Normalization of raw extracted text into countable word tokens.

/// Lowercases `text`, splits it on whitespace and keeps only the tokens made
/// entirely of alphanumeric characters.
///
/// A token carrying any punctuation is dropped whole rather than stripped,
/// so `"hello,"`, `"foo-bar"` and `"don't"` never produce a word. The check
/// runs after lowercasing, so a letter whose lowercase form gains a combining
/// mark (`İ` becomes `i\u{307}`) rejects its token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::trim)
        .filter(|token| is_word(token))
        .map(str::to_string)
        .collect()
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Returns true when `word` has at least one cased character and every cased
/// character is lowercase. Digits and uncased scripts are ignored, so a
/// digits-only word is not lowercase.
pub fn is_lowercase_word(word: &str) -> bool {
    let mut has_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            has_cased = true;
        }
    }
    has_cased
}
