use once_cell::sync::Lazy;
use std::collections::HashSet;

// Small built-in list; enough for frequency scoring without pulling in a
// wordlist dependency.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "if", "in", "on", "at", "to", "for", "from", "of",
        "is", "are", "was", "were", "be", "been", "am", "it", "that", "this", "with", "as", "by",
        "about", "into", "up", "out", "over", "after", "before", "between", "then", "than", "so",
        "very", "can", "will", "just", "do", "does", "did", "have", "has", "had", "you", "i",
        "we", "they", "he", "she", "them", "his", "her", "our", "your", "their",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_words_are_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("and"));
        assert!(is_stopword("their"));
    }

    #[test]
    fn content_words_are_not() {
        assert!(!is_stopword("invoice"));
        assert!(!is_stopword("meeting"));
    }
}
