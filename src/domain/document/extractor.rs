use super::error::DocumentError;
use lopdf::{Document, Object, ObjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Decide how to read an upload from its declared MIME type, falling back
    /// to the file extension when the type is missing or generic.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Result<Self, DocumentError> {
        let mime = content_type
            .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_lowercase())
            .unwrap_or_default();

        if mime == "application/pdf" {
            return Ok(DocumentKind::Pdf);
        }
        if mime.starts_with("text/") {
            return Ok(DocumentKind::PlainText);
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("txt") => Ok(DocumentKind::PlainText),
            _ => Err(DocumentError::UnsupportedType(if mime.is_empty() {
                file_name.unwrap_or("unknown").to_string()
            } else {
                mime
            })),
        }
    }
}

/// Return the plain text of an uploaded document.
///
/// Any failure abandons the whole document; no partial text is returned.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, DocumentError> {
    let text = match kind {
        DocumentKind::PlainText => decode_utf8(bytes)?,
        DocumentKind::Pdf => extract_pdf_text(bytes)?,
    };

    if text.trim().is_empty() {
        return Err(DocumentError::Empty);
    }

    Ok(text)
}

fn decode_utf8(bytes: &[u8]) -> Result<String, DocumentError> {
    let text = std::str::from_utf8(bytes).map_err(|e| DocumentError::Decode(e.to_string()))?;
    // Editors on Windows prepend a BOM; it is not part of the text
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let document = Document::load_mem(bytes)
        .map_err(|e| DocumentError::Extraction(format!("could not parse document: {}", e)))?;

    let mut text = String::new();
    for (page_number, page_id) in document.get_pages() {
        // lopdf skips unreadable content silently, so check it first
        check_page_contents(&document, page_number, page_id)?;

        let page_text = document
            .extract_text(&[page_number])
            .map_err(|e| DocumentError::Extraction(format!("page {}: {}", page_number, e)))?;
        text.push_str(&page_text);
    }

    tracing::debug!(
        page_count = document.get_pages().len(),
        text_length = text.len(),
        "PDF text extracted"
    );

    Ok(text)
}

/// Every content stream a page references must exist
fn check_page_contents(
    document: &Document,
    page_number: u32,
    page_id: ObjectId,
) -> Result<(), DocumentError> {
    let page = document
        .get_dictionary(page_id)
        .map_err(|e| DocumentError::Extraction(format!("page {}: {}", page_number, e)))?;

    let references: Vec<ObjectId> = match page.get(b"Contents") {
        Ok(Object::Reference(id)) => vec![*id],
        Ok(Object::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_reference().ok())
            .collect(),
        _ => Vec::new(),
    };

    for id in references {
        document
            .get_object(id)
            .and_then(Object::as_stream)
            .map_err(|e| {
                DocumentError::Extraction(format!(
                    "page {}: content {} {} R: {}",
                    page_number, id.0, id.1, e
                ))
            })?;
    }

    Ok(())
}
