//! Document loading and text normalization for job description input.
//!
//! The CLI accepts either literal JD text or a path to a `.txt`/`.pdf` file.
//! Anything that looks like a document path (by extension) is treated as one:
//! a missing or unreadable file is an error, never silently reinterpreted as
//! literal text. Scanned/image-only PDFs yield no text and are rejected.

use std::path::Path;

use crate::errors::AppError;

/// Resolves the CLI input to normalized plain text.
///
/// Fails with `UnreadableDocument` before any outbound service call is made,
/// so a bad path never costs an LLM request.
pub fn load_document(input: &str) -> Result<String, AppError> {
    let path = Path::new(input);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let text = match extension.as_deref() {
        Some("txt") => std::fs::read_to_string(path).map_err(|e| {
            AppError::UnreadableDocument(format!("{}: {e}", path.display()))
        })?,
        Some("pdf") => {
            if !path.exists() {
                return Err(AppError::UnreadableDocument(format!(
                    "{}: no such file",
                    path.display()
                )));
            }
            pdf_extract::extract_text(path).map_err(|e| {
                AppError::UnreadableDocument(format!("{}: {e}", path.display()))
            })?
        }
        _ => input.to_string(),
    };

    let normalized = normalize_text(&text);
    if normalized.is_empty() {
        return Err(AppError::UnreadableDocument(
            "document contains no extractable text".to_string(),
        ));
    }
    Ok(normalized)
}

/// Collapses runs of whitespace within lines and drops empty lines, keeping
/// one line per original non-empty line so section structure survives.
fn normalize_text(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_literal_text_is_normalized() {
        let input = "  Senior   Backend Developer \n\n\n  5+ years   Python  \n";
        let text = load_document(input).unwrap();
        assert_eq!(text, "Senior Backend Developer\n5+ years Python");
    }

    #[test]
    fn test_txt_file_is_read() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Data Scientist - Remote").unwrap();
        let text = load_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "Data Scientist - Remote");
    }

    #[test]
    fn test_missing_txt_file_is_unreadable() {
        let err = load_document("/nonexistent/job_description.txt").unwrap_err();
        assert!(matches!(err, AppError::UnreadableDocument(_)));
    }

    #[test]
    fn test_missing_pdf_file_is_unreadable() {
        let err = load_document("/nonexistent/job_description.pdf").unwrap_err();
        assert!(matches!(err, AppError::UnreadableDocument(_)));
    }

    #[test]
    fn test_whitespace_only_input_is_unreadable() {
        let err = load_document("   \n\t  ").unwrap_err();
        assert!(matches!(err, AppError::UnreadableDocument(_)));
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        let err = load_document("/nonexistent/job_description.PDF").unwrap_err();
        assert!(matches!(err, AppError::UnreadableDocument(_)));
    }
}
