//! # qrembed
//!
//! Render text as a QR code that can be dropped straight into a web page.
//!
//! `qrembed` encodes a payload into a QR symbol, draws it as an SVG document or a PNG
//! image, base64-encodes the result into a `data:` URI and, optionally, wraps that URI in
//! an HTML `<img>` tag. Symbol encoding (versions, error correction, masking) and drawing
//! are done by the [`qrcode`](https://docs.rs/qrcode) crate and its renderers.
//!
//! ## Features
//!
//! - SVG (`image/svg+xml`) or PNG (`image/png`) output, embedded as a base64 data URI.
//! - Dark and light module colors given as SVG/CSS color names, hex strings or `transparent`.
//! - PNG density control through a pixels-per-module `scale`.
//! - Deterministic output: the same input always yields the same string.
//! - Pluggable encoder through the [`QrEncoder`] trait.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrembed = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Get an `<img>` tag with the default options (black on white SVG, 200x200):
//!
//! ```rust
//! use qrembed::{render_qr_code, RenderOptions};
//!
//! let html = render_qr_code("https://example.com", &RenderOptions::default()).unwrap();
//! assert!(html.starts_with("<img src=\"data:image/svg+xml;base64,"));
//! assert!(html.ends_with("alt=\"QR Code for https://example.com\" width=\"200\" height=\"200\">"));
//! ```
//!
//! Get a bare PNG data URI with custom colors:
//!
//! ```rust
//! use qrembed::{render_qr_code, RenderOptions};
//!
//! let options = RenderOptions::builder()
//!     .format("png")
//!     .dark("#0f172a")
//!     .light("ivory")
//!     .as_html(false)
//!     .build()?;
//! let uri = render_qr_code("Hello, World!", &options)?;
//! assert!(uri.starts_with("data:image/png;base64,"));
//! # Ok::<(), qrembed::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`options`]: Render options, their defaults and the output format.
//! - [`encoder`]: The encoder trait and the default SVG/PNG encoder.
//! - [`color`]: Color string parsing.
//! - [`helper`]: Base64, data URI and HTML formatting utilities.
//! - [`render`]: The render pipeline tying it all together.

pub mod color;
pub mod encoder;
pub mod error;
pub mod helper;
pub mod options;
pub mod render;

pub use color::Color;
pub use encoder::{Colors, ModuleEncoder, QrEncoder};
pub use error::{Error, RenderError, Result};
pub use options::{OutputFormat, RenderOptions, RenderOptionsBuilder};
pub use render::Renderer;

/// Renders `text` with the default [`ModuleEncoder`].
///
/// Returns `data:<mime>;base64,<payload>` when `options.as_html` is false, otherwise
/// `<img src="{data uri}" alt="QR Code for {text}" width="{width}" height="{height}">`.
pub fn render_qr_code(text: &str, options: &RenderOptions) -> Result<String> {
    Renderer::new().render(text, options)
}
