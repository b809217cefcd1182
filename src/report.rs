use crate::domain::email::EmailSummary;
use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const CSV_HEADER: &str = "filename,summary,priority,category";

/// Quote a field only when it needs it; embedded quotes are doubled (RFC 4180).
fn csv_escape(value: &str) -> String {
    let needs_quotes = value.contains(',')
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');
    if !needs_quotes {
        return value.to_string();
    }
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Write the report: a header row, then one row per processed file.
/// Overwrites any existing file at `path`.
pub fn write_csv(path: &Path, rows: &[EmailSummary]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{}", CSV_HEADER)?;
    for row in rows {
        writeln!(
            out,
            "{},{},{},{}",
            csv_escape(&row.filename),
            csv_escape(&row.summary),
            row.priority,
            row.category
        )?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::email::{Category, Priority};

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(csv_escape("hello world"), "hello world");
    }

    #[test]
    fn commas_and_quotes_force_quoting() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = vec![EmailSummary {
            filename: "a.txt".to_string(),
            summary: "Meeting moved, see agenda.".to_string(),
            priority: Priority::High,
            category: Category::Business,
        }];

        write_csv(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("a.txt,\"Meeting moved, see agenda.\",HIGH,BUSINESS")
        );
        assert_eq!(lines.next(), None);
    }
}
