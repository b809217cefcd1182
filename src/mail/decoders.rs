use once_cell::sync::Lazy;
use regex::Regex;

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\- ]").expect("valid regex"));

/// Maximum length of the subject fragment used in saved filenames.
const MAX_FRAGMENT_CHARS: usize = 50;

/// Turn a subject line into a filesystem-safe fragment: anything outside
/// word characters, hyphens and spaces becomes an underscore, capped at
/// 50 characters.
pub fn safe_filename(text: &str) -> String {
    let cleaned = UNSAFE_CHARS.replace_all(text, "_");
    cleaned.chars().take(MAX_FRAGMENT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_punctuation() {
        assert_eq!(
            safe_filename("Re: invoice #42 (July)"),
            "Re_ invoice _42 _July_"
        );
    }

    #[test]
    fn keeps_word_chars_hyphens_and_spaces() {
        assert_eq!(safe_filename("weekly-report 2024"), "weekly-report 2024");
    }

    #[test]
    fn truncates_to_fifty_chars() {
        let long = "a".repeat(80);
        assert_eq!(safe_filename(&long).chars().count(), 50);
    }

    #[test]
    fn empty_subject_stays_empty() {
        assert_eq!(safe_filename(""), "");
    }
}
