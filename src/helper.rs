use base64::{engine::general_purpose::STANDARD, Engine as _};

/*---- Utilities ----*/

/// Converts bytes to a standard, padded base64 string.
///
/// # Example
///
/// ```
/// use qrembed::helper::bytes_to_base64_string;
///
/// assert_eq!(bytes_to_base64_string(b"qr"), "cXI=");
/// ```
pub fn bytes_to_base64_string(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Adds the MIME type and encoding in front of a base64 payload, giving a `data:` URI a
/// browser can use directly as an image source.
///
/// # Example
///
/// ```
/// use qrembed::helper::add_file_info;
///
/// assert_eq!(add_file_info("cXI=", "image/png"), "data:image/png;base64,cXI=");
/// ```
pub fn add_file_info(data: &str, mime_type: &str) -> String {
    format!("data:{};base64,{}", mime_type, data)
}

/// Wraps a data URI in an `<img>` tag with explicit `width`/`height` attributes.
///
/// `text` goes into the `alt` attribute as given; it is not escaped.
///
/// # Example
///
/// ```
/// use qrembed::helper::img_tag;
///
/// let tag = img_tag("data:image/png;base64,cXI=", "hello", 200, 100);
/// assert_eq!(
///     tag,
///     "<img src=\"data:image/png;base64,cXI=\" alt=\"QR Code for hello\" width=\"200\" height=\"100\">"
/// );
/// ```
pub fn img_tag(data_uri: &str, text: &str, width: u32, height: u32) -> String {
    format!(
        "<img src=\"{}\" alt=\"QR Code for {}\" width=\"{}\" height=\"{}\">",
        data_uri, text, width, height
    )
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_base64_string() {
        assert_eq!(bytes_to_base64_string(b""), "");
        assert_eq!(bytes_to_base64_string(b"<svg/>"), "PHN2Zy8+");
        assert_eq!(bytes_to_base64_string(&[0x89, b'P', b'N', b'G']), "iVBORw==");
    }

    #[test]
    fn test_add_file_info() {
        assert_eq!(
            add_file_info("PHN2Zy8+", "image/svg+xml"),
            "data:image/svg+xml;base64,PHN2Zy8+"
        );
    }

    #[test]
    fn test_img_tag_keeps_alt_text_literal() {
        let tag = img_tag("data:x", "a \"quoted\" <b>", 1, 2);
        assert!(tag.contains("alt=\"QR Code for a \"quoted\" <b>\""));
        assert!(tag.ends_with("width=\"1\" height=\"2\">"));
    }
}
