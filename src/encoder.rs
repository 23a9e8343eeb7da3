//! QR symbol generation and image encoding.
//!
//! [`QrEncoder`] is the capability the [`Renderer`](crate::Renderer) depends on. The default
//! [`ModuleEncoder`] hands both symbol encoding and drawing to the `qrcode` crate: its SVG
//! renderer for `image/svg+xml`, its `image` renderer plus the PNG codec for `image/png`.

use core::num::NonZeroU32;
use std::io::Cursor;

use image::error::{LimitError, LimitErrorKind};
use image::{ColorType, ImageBuffer, ImageError, ImageFormat, Limits, Rgba};
use qrcode::render::svg;
use qrcode::QrCode;
use tracing::trace;

use crate::color::Color;
use crate::error::RenderError;

/// Quiet zone around a standard symbol, in modules, as drawn by the `qrcode` renderers.
pub const BORDER: u32 = 4;

/// Dark and light color strings handed to an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors<'a> {
    pub dark: &'a str,
    pub light: &'a str,
}

impl<'a> Colors<'a> {
    pub fn new(dark: &'a str, light: &'a str) -> Self {
        Self { dark, light }
    }

    fn parse(&self) -> Result<(Color, Color), RenderError> {
        Ok((self.dark.parse()?, self.light.parse()?))
    }
}

/// Turns a text payload into encoded image bytes.
///
/// Implementations must be deterministic and must not keep state between calls.
pub trait QrEncoder {
    /// Encodes `text` as an SVG document.
    fn encode_svg(&self, text: &str, colors: &Colors<'_>) -> Result<Vec<u8>, RenderError>;

    /// Encodes `text` as a PNG image with `scale` pixels per module.
    fn encode_png(
        &self,
        text: &str,
        colors: &Colors<'_>,
        scale: NonZeroU32,
    ) -> Result<Vec<u8>, RenderError>;
}

/// Default encoder backed by the `qrcode` crate.
///
/// Always produces a standard (non-micro) symbol at the crate's default error correction
/// level, with a quiet zone of [`BORDER`] modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleEncoder;

impl ModuleEncoder {
    pub fn new() -> Self {
        ModuleEncoder
    }
}

impl QrEncoder for ModuleEncoder {
    fn encode_svg(&self, text: &str, colors: &Colors<'_>) -> Result<Vec<u8>, RenderError> {
        let (dark, light) = colors.parse()?;
        let code = make_symbol(text)?;
        let svg = code
            .render::<svg::Color>()
            .quiet_zone(true)
            .dark_color(svg::Color(svg_fill(dark, colors.dark)))
            .light_color(svg::Color(svg_fill(light, colors.light)))
            .build();
        Ok(svg.into_bytes())
    }

    fn encode_png(
        &self,
        text: &str,
        colors: &Colors<'_>,
        scale: NonZeroU32,
    ) -> Result<Vec<u8>, RenderError> {
        let (dark, light) = colors.parse()?;
        let code = make_symbol(text)?;
        let img = to_image_buffer(&code, dark, light, scale)?;

        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }
}

fn make_symbol(text: &str) -> Result<QrCode, RenderError> {
    let code = QrCode::new(text.as_bytes())?;
    trace!(modules = code.width(), "built QR symbol");
    Ok(code)
}

/// Fill value for the SVG renderer: the caller's string as given, `none` when transparent.
fn svg_fill(color: Color, given: &str) -> &str {
    if color == Color::Transparent {
        "none"
    } else {
        given.trim()
    }
}

/// Draws `code` into an RGBA buffer, `scale` pixels per module, quiet zone included.
///
/// The buffer is checked against the default [`image::Limits`] allocation budget before it
/// is allocated; an oversized `scale` fails with [`RenderError::Image`].
pub fn to_image_buffer(
    code: &QrCode,
    dark: Color,
    light: Color,
    scale: NonZeroU32,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>, RenderError> {
    let scale = scale.get();
    let size = (code.width() as u32 + 2 * BORDER).checked_mul(scale).ok_or_else(|| {
        ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError))
    })?;
    Limits::default().reserve_buffer(size, size, ColorType::Rgba8)?;

    Ok(code
        .render::<Rgba<u8>>()
        .quiet_zone(true)
        .module_dimensions(scale, scale)
        .dark_color(Rgba(dark.to_rgba()))
        .light_color(Rgba(light.to_rgba()))
        .build())
}
