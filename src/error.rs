//! Error types for QR rendering.

use thiserror::Error;

/// Result type alias for rendering operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by [`render_qr_code`](crate::render_qr_code) and friends.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested output format is neither `svg` nor `png`.
    #[error("unsupported format '{0}', use 'svg' or 'png'")]
    UnsupportedFormat(String),

    /// The QR encoder or image encoder failed.
    #[error("QR code rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Failures surfaced by a [`QrEncoder`](crate::QrEncoder).
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("QR code generation failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let err = Error::UnsupportedFormat("gif".to_string());
        assert_eq!(err.to_string(), "unsupported format 'gif', use 'svg' or 'png'");
    }

    #[test]
    fn test_render_error_converts() {
        let err: Error = RenderError::InvalidColor("notacolor".to_string()).into();
        assert!(matches!(err, Error::Render(RenderError::InvalidColor(_))));
        assert_eq!(err.to_string(), "QR code rendering failed: invalid color 'notacolor'");
    }
}
