use crate::domain::email::FetchedEmail;
use crate::mail::decoders::safe_filename;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Write one fetched message to `dir` as `<sanitized_subject>_<id>.txt`,
/// with From/Subject header lines, a blank line, then the body.
pub fn save_email(dir: &Path, email: &FetchedEmail) -> Result<PathBuf> {
    let filename = format!("{}_{}.txt", safe_filename(&email.subject), email.id);
    let path = dir.join(filename);

    let contents = format!(
        "From: {}\nSubject: {}\n\n{}",
        email.sender, email.subject, email.body
    );
    fs::write(&path, contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_headers_blank_line_and_body() {
        let dir = tempfile::tempdir().unwrap();
        let email = FetchedEmail {
            id: 12,
            sender: "Alice <alice@example.com>".to_string(),
            subject: "Quarterly report".to_string(),
            body: "Numbers attached.\nThanks.".to_string(),
        };

        let path = save_email(dir.path(), &email).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Quarterly report_12.txt"
        );

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "From: Alice <alice@example.com>\nSubject: Quarterly report\n\nNumbers attached.\nThanks."
        );
    }

    #[test]
    fn sanitizes_subject_in_filename() {
        let dir = tempfile::tempdir().unwrap();
        let email = FetchedEmail {
            id: 3,
            sender: "x@example.com".to_string(),
            subject: "Re: offer!!!".to_string(),
            body: "hi".to_string(),
        };

        let path = save_email(dir.path(), &email).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Re_ offer____3.txt"
        );
    }
}
