// Text extraction from uploaded files
//
// Supported content types: application/pdf (via lopdf) and text/plain.
// Everything else contributes an empty string; unreadable files never fail
// the request on their own.

use lopdf::Document;
use tracing::{debug, warn};

use crate::models::FileUpload;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Concatenation of per-file extracted text blocks, each prefixed with a
/// header naming its source file. The header lines themselves do not count
/// toward the emptiness check, so a batch of unreadable files is still
/// rejected as empty.
pub struct CombinedText {
    pub text: String,
    has_content: bool,
}

impl CombinedText {
    pub fn is_empty(&self) -> bool {
        !self.has_content
    }
}

/// Extracts plain text from a single uploaded file. Returns an empty string
/// for unsupported content types and unreadable PDFs.
pub fn extract_file_text(file: &FileUpload) -> String {
    match file.content_type.as_str() {
        PDF_CONTENT_TYPE => extract_pdf_text(&file.data).unwrap_or_else(|e| {
            warn!(filename = %file.filename, "Error reading PDF: {}", e);
            String::new()
        }),
        TEXT_CONTENT_TYPE => String::from_utf8_lossy(&file.data).into_owned(),
        other => {
            debug!(filename = %file.filename, content_type = %other, "Skipping unsupported content type");
            String::new()
        }
    }
}

/// Page-by-page text extraction, pages in document order, joined with
/// newlines.
fn extract_pdf_text(data: &[u8]) -> lopdf::Result<String> {
    let doc = Document::load_mem(data)?;
    let mut text = String::new();
    // get_pages() is a BTreeMap keyed by page number, so iteration order is
    // document order
    for page_number in doc.get_pages().keys() {
        text.push_str(&doc.extract_text(&[*page_number])?);
        text.push('\n');
    }
    Ok(text)
}

/// Runs extraction over every uploaded file and concatenates the results
/// into one combined block.
pub fn combine_files(files: &[FileUpload]) -> CombinedText {
    let mut text = String::new();
    let mut has_content = false;
    for file in files {
        let content = extract_file_text(file);
        has_content |= !content.trim().is_empty();
        text.push_str(&format!("\n--- Document: {} ---\n{}", file.filename, content));
    }
    CombinedText { text, has_content }
}
