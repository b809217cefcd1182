use crate::domain::email::EmailSummary;
use crate::nlp::classifier::categorize_text;
use crate::nlp::summarizer::{DEFAULT_MAX_SENTENCES, summarize_text};
use crate::report::write_csv;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

fn is_txt(name: &str) -> bool {
    name.to_lowercase().ends_with(".txt")
}

/// Summarize and categorize every `.txt` file in `input`, writing one CSV
/// row per file to `output_csv`. Files are visited in name order so repeated
/// runs produce identical reports.
pub fn process_folder(input: &Path, output_csv: &Path) -> Result<Vec<EmailSummary>> {
    let entries = fs::read_dir(input)
        .with_context(|| format!("reading input folder {}", input.display()))?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_txt(&name) {
            names.push(name);
        }
    }
    names.sort();

    let mut results = Vec::with_capacity(names.len());
    for name in names {
        let path = input.join(&name);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) => {
                log::warn!("skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };
        // best-effort decoding; saved emails can carry odd charsets
        let text = String::from_utf8_lossy(&bytes);

        let summary = summarize_text(&text, DEFAULT_MAX_SENTENCES);
        let (priority, category) = categorize_text(&text);

        results.push(EmailSummary {
            filename: name,
            summary,
            priority,
            category,
        });
    }

    write_csv(output_csv, &results)
        .with_context(|| format!("writing report {}", output_csv.display()))?;
    Ok(results)
}
