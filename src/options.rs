//! Presentation options for a single render call.

use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Image kind embedded in the data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    /// MIME type used in the `data:` URI prefix.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Svg => "image/svg+xml",
            OutputFormat::Png => "image/png",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Accepts exactly `"svg"` or `"png"`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        })
    }
}

pub const DEFAULT_DARK: &str = "black";
pub const DEFAULT_LIGHT: &str = "white";
pub const DEFAULT_SIZE: u32 = 200;
pub const DEFAULT_SCALE: u32 = 10;

fn default_scale() -> NonZeroU32 {
    NonZeroU32::new(DEFAULT_SCALE).unwrap_or(NonZeroU32::MIN)
}

/// Options controlling how a payload is rendered.
///
/// `width` and `height` only size the HTML `<img>` tag; they never change the symbol
/// resolution. `scale` is the number of pixels per module and only applies to PNG.
///
/// Any field missing from a deserialized config takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Color of the dark modules
    pub dark: String,
    /// Color of the light modules and the quiet zone
    pub light: String,
    pub format: OutputFormat,
    /// Wrap the data URI in an `<img>` tag
    pub as_html: bool,
    pub width: u32,
    pub height: u32,
    pub scale: NonZeroU32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dark: DEFAULT_DARK.to_string(),
            light: DEFAULT_LIGHT.to_string(),
            format: OutputFormat::default(),
            as_html: true,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            scale: default_scale(),
        }
    }
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }
}

/// Builder for [`RenderOptions`] that takes the format as a string and validates it in
/// [`build`](RenderOptionsBuilder::build).
///
/// ```rust
/// use qrembed::{Error, OutputFormat, RenderOptions};
///
/// let options = RenderOptions::builder().format("png").size(120, 80).build().unwrap();
/// assert_eq!(options.format, OutputFormat::Png);
/// assert_eq!((options.width, options.height), (120, 80));
///
/// let err = RenderOptions::builder().format("gif").build().unwrap_err();
/// assert!(matches!(err, Error::UnsupportedFormat(_)));
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
    format: Option<String>,
}

impl Default for RenderOptionsBuilder {
    fn default() -> Self {
        Self { options: RenderOptions::default(), format: None }
    }
}

impl RenderOptionsBuilder {
    pub fn dark(mut self, color: impl Into<String>) -> Self {
        self.options.dark = color.into();
        self
    }

    pub fn light(mut self, color: impl Into<String>) -> Self {
        self.options.light = color.into();
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn as_html(mut self, as_html: bool) -> Self {
        self.options.as_html = as_html;
        self
    }

    /// Sets both the `<img>` width and height.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.options.width = width;
        self.options.height = height;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.options.width = width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.options.height = height;
        self
    }

    pub fn scale(mut self, scale: NonZeroU32) -> Self {
        self.options.scale = scale;
        self
    }

    /// Validates the format and returns the finished options.
    pub fn build(self) -> Result<RenderOptions> {
        let mut options = self.options;
        if let Some(format) = self.format {
            options.format = format.parse()?;
        }
        Ok(options)
    }
}
