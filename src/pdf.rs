use tracing::warn;

/// Decode PDF bytes into text, all pages concatenated.
///
/// Decoding happens in memory; a broken or image-only PDF degrades to `None`
/// like every other per-document fault in the pipeline.
pub fn extract_text(bytes: &[u8]) -> Option<String> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("PDF text extraction failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_degrade_to_none() {
        assert!(extract_text(b"not a pdf at all").is_none());
    }
}
