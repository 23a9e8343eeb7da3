//! The render pipeline: encode, base64, data URI, optional `<img>` tag.

use tracing::{debug, warn};

use crate::encoder::{Colors, ModuleEncoder, QrEncoder};
use crate::error::Result;
use crate::helper::{add_file_info, bytes_to_base64_string, img_tag};
use crate::options::{OutputFormat, RenderOptions};

/// Renders payloads with an injected [`QrEncoder`].
///
/// The renderer holds no state besides its encoder, so a single instance can be shared
/// across threads whenever the encoder can.
#[derive(Debug, Clone, Default)]
pub struct Renderer<E = ModuleEncoder> {
    encoder: E,
}

impl Renderer<ModuleEncoder> {
    pub fn new() -> Self {
        Self::with_encoder(ModuleEncoder)
    }
}

impl<E: QrEncoder> Renderer<E> {
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Renders `text` as a data URI, or as an `<img>` tag embedding it when
    /// `options.as_html` is set.
    ///
    /// Fails with [`Error::Render`](crate::Error::Render) when the encoder rejects the payload
    /// or a color. No partial output is produced.
    pub fn render(&self, text: &str, options: &RenderOptions) -> Result<String> {
        let colors = Colors::new(&options.dark, &options.light);
        let encoded = match options.format {
            OutputFormat::Svg => self.encoder.encode_svg(text, &colors),
            OutputFormat::Png => self.encoder.encode_png(text, &colors, options.scale),
        };
        let bytes = encoded.map_err(|e| {
            warn!(format = %options.format, error = %e, "QR encoding failed");
            e
        })?;

        let data_uri = add_file_info(&bytes_to_base64_string(&bytes), options.format.mime_type());
        debug!(
            format = %options.format,
            text_len = text.len(),
            bytes = bytes.len(),
            as_html = options.as_html,
            "rendered QR code"
        );

        if options.as_html {
            return Ok(img_tag(&data_uri, text, options.width, options.height));
        }
        Ok(data_uri)
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU32;
    use std::cell::Cell;

    use super::*;
    use crate::error::{Error, RenderError};

    /// Records which method was called and returns fixed bytes.
    #[derive(Default)]
    struct FakeEncoder {
        last_scale: Cell<Option<u32>>,
    }

    impl QrEncoder for FakeEncoder {
        fn encode_svg(&self, text: &str, colors: &Colors<'_>) -> Result<Vec<u8>, RenderError> {
            Ok(format!("<svg>{}|{}|{}</svg>", text, colors.dark, colors.light).into_bytes())
        }

        fn encode_png(
            &self,
            _text: &str,
            colors: &Colors<'_>,
            scale: NonZeroU32,
        ) -> Result<Vec<u8>, RenderError> {
            if colors.dark == "bad" {
                return Err(RenderError::InvalidColor(colors.dark.to_string()));
            }
            self.last_scale.set(Some(scale.get()));
            Ok(vec![1, 2, 3])
        }
    }

    #[test]
    fn test_svg_data_uri_through_fake_encoder() {
        let renderer = Renderer::with_encoder(FakeEncoder::default());
        let options = RenderOptions { as_html: false, ..Default::default() };
        let out = renderer.render("hi", &options).unwrap();
        // base64 of "<svg>hi|black|white</svg>"
        assert_eq!(out, "data:image/svg+xml;base64,PHN2Zz5oaXxibGFja3x3aGl0ZTwvc3ZnPg==");
        assert_eq!(renderer.encoder().last_scale.get(), None);
    }

    #[test]
    fn test_png_passes_scale_and_wraps_html() {
        let renderer = Renderer::with_encoder(FakeEncoder::default());
        let options = RenderOptions::builder()
            .format("png")
            .size(40, 30)
            .scale(NonZeroU32::new(7).unwrap())
            .build()
            .unwrap();
        let out = renderer.render("hi", &options).unwrap();
        assert_eq!(
            out,
            "<img src=\"data:image/png;base64,AQID\" alt=\"QR Code for hi\" width=\"40\" height=\"30\">"
        );
        assert_eq!(renderer.encoder().last_scale.get(), Some(7));
    }

    #[test]
    fn test_encoder_error_propagates() {
        let renderer = Renderer::with_encoder(FakeEncoder::default());
        let options = RenderOptions::builder().format("png").dark("bad").build().unwrap();
        let err = renderer.render("hi", &options).unwrap_err();
        assert!(matches!(err, Error::Render(RenderError::InvalidColor(ref c)) if c == "bad"));
    }
}
