use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]+").expect("valid regex"));

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn normalize_text(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Split on sentence-ending punctuation followed by whitespace. Crude, but
/// good enough for email bodies.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut after_terminator = false;

    for ch in text.chars() {
        if ch.is_whitespace() && after_terminator {
            let s = current.trim();
            if !s.is_empty() {
                sentences.push(s.to_string());
            }
            current.clear();
            after_terminator = false;
            continue;
        }
        current.push(ch);
        after_terminator = matches!(ch, '.' | '!' | '?');
    }

    let s = current.trim();
    if !s.is_empty() {
        sentences.push(s.to_string());
    }
    sentences
}

/// Extract alphabetic words in lowercase.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  a\t b\n\nc  "), "a b c");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize_text("   \n\t "), "");
    }

    #[test]
    fn splits_on_terminators_followed_by_whitespace() {
        assert_eq!(
            split_sentences("Hi there! How are you? Fine."),
            vec!["Hi there!", "How are you?", "Fine."]
        );
    }

    #[test]
    fn keeps_trailing_sentence_without_terminator() {
        assert_eq!(
            split_sentences("First one. second without ending"),
            vec!["First one.", "second without ending"]
        );
    }

    #[test]
    fn empty_text_yields_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn tokenize_lowercases_and_drops_non_alpha() {
        assert_eq!(
            tokenize_words("Pay $100 NOW, don't wait!"),
            vec!["pay", "now", "don", "t", "wait"]
        );
    }
}
