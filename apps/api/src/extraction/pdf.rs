use lopdf::Document;
use tracing::debug;

use super::ExtractionError;

/// Concatenates the text of every page in page order. A page with no extractable
/// text contributes an empty string rather than failing the document.
pub(super) fn extract(data: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(data).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => debug!("No extractable text on page {page_number}: {e}"),
        }
    }
    Ok(text)
}
