// src/attachment.rs

use std::path::{Path, PathBuf};

pub const PDF_MIME: &str = "application/pdf";

/// An opaque reference to a user-selected PDF. Only the name is ever shown;
/// the file content is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub path: PathBuf,
}

impl Attachment {
    /// Accepts a path only if it presents as a PDF. Anything else yields
    /// `None` with no further feedback, matching the silent rejection of
    /// non-PDF selections in the file input.
    pub fn accept(path: impl AsRef<Path>) -> Option<Attachment> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        if !extension.eq_ignore_ascii_case("pdf") {
            return None;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();
        Some(Attachment {
            name,
            path: path.to_path_buf(),
        })
    }

    /// Everything that gets past `accept` is a PDF by construction.
    pub fn mime(&self) -> &'static str {
        PDF_MIME
    }
}

/// Parses the `/attach <path>` input command. Returns the path argument when
/// the input is an attach command, even if the argument is empty.
pub fn parse_attach_command(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed == "/attach" {
        return Some("");
    }
    trimmed.strip_prefix("/attach ").map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pdf_extension() {
        let attachment = Attachment::accept("putusan/putusan_123.pdf").unwrap();
        assert_eq!(attachment.name, "putusan_123.pdf");
        assert_eq!(attachment.mime(), PDF_MIME);
    }

    #[test]
    fn test_accepts_uppercase_extension() {
        assert!(Attachment::accept("PUTUSAN.PDF").is_some());
    }

    #[test]
    fn test_silently_rejects_non_pdf() {
        assert!(Attachment::accept("notes.txt").is_none());
        assert!(Attachment::accept("archive.tar.gz").is_none());
        assert!(Attachment::accept("no_extension").is_none());
    }

    #[test]
    fn test_parse_attach_command() {
        assert_eq!(parse_attach_command("/attach a.pdf"), Some("a.pdf"));
        assert_eq!(parse_attach_command("  /attach  a.pdf "), Some("a.pdf"));
        assert_eq!(parse_attach_command("/attach"), Some(""));
        assert_eq!(parse_attach_command("halo"), None);
    }
}
