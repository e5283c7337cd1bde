//! Document-to-text adapter. Best effort: every failure yields an empty
//! string, which downstream matching treats as "no skills found".

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCategory {
    Pdf,
    Image,
    Plain,
}

impl ContentCategory {
    /// Classifies an upload by its declared MIME type.
    pub fn from_mime(content_type: Option<&str>) -> Self {
        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .unwrap_or_default();
        if mime == "application/pdf" {
            ContentCategory::Pdf
        } else if mime.starts_with("image/") {
            ContentCategory::Image
        } else {
            ContentCategory::Plain
        }
    }
}

pub fn extract_text(bytes: &[u8], category: ContentCategory) -> String {
    match category {
        ContentCategory::Pdf => match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to extract text from PDF ({} bytes): {e}", bytes.len());
                String::new()
            }
        },
        ContentCategory::Image => {
            // TODO: wire an OCR backend; no OCR engine is linked into this build.
            warn!("Image upload received ({} bytes) but OCR is unavailable", bytes.len());
            String::new()
        }
        ContentCategory::Plain => decode_ignoring_invalid(bytes),
    }
}

/// UTF-8 decode that drops invalid sequences instead of replacing them.
fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
