use std::cmp::Ordering;
use std::collections::HashMap;

use crate::nlp::stopwords::is_stopword;
use crate::nlp::text::{normalize_text, split_sentences, tokenize_words};

pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Frequency-based extractive summary: score each sentence by the summed
/// normalized frequency of its words, then keep the `max_sentences` best
/// ones in original document order.
pub fn summarize_text(text: &str, max_sentences: usize) -> String {
    let text = normalize_text(text);
    if text.is_empty() {
        return String::new();
    }

    let sentences = split_sentences(&text);
    if sentences.is_empty() {
        return String::new();
    }
    if sentences.len() <= max_sentences {
        return text;
    }

    // Word frequency over the whole document, stopwords excluded,
    // normalized by the most frequent word.
    let mut freq: HashMap<String, f64> = HashMap::new();
    for sent in &sentences {
        for word in tokenize_words(sent) {
            if !is_stopword(&word) {
                *freq.entry(word).or_insert(0.0) += 1.0;
            }
        }
    }

    if freq.is_empty() {
        // nothing scorable: fall back to the opening sentences
        return sentences[..max_sentences].join(" ");
    }

    let max_freq = freq.values().cloned().fold(0.0_f64, f64::max);
    for count in freq.values_mut() {
        *count /= max_freq;
    }

    let scores: Vec<f64> = sentences
        .iter()
        .map(|sent| {
            tokenize_words(sent)
                .iter()
                .map(|w| freq.get(w).copied().unwrap_or(0.0))
                .sum::<f64>()
        })
        .collect();

    // Rank high to low; the sort is stable, so ties keep document order.
    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    let mut chosen = ranked[..max_sentences].to_vec();
    chosen.sort_unstable();

    chosen
        .iter()
        .map(|&i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
