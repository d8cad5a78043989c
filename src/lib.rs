pub mod ellipsize;
pub mod fetch;
pub mod fit;
pub mod preview;
#[cfg(feature = "svg")]
pub mod svg;

use image::RgbImage;
use serde::Deserialize;

pub use ellipsize::ellipsize;
pub use fetch::{FetchError, ImageFetcher, SvgSupport};
pub use fit::fit_cover;
pub use preview::{Picture, PreviewMode, RenderedPane, render_pane};

/// A decoded 3-channel raster image.
///
/// Alpha is dropped at decode time, so every `Bitmap` is opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap(RgbImage);

impl Bitmap {
    pub fn new(image: RgbImage) -> Self {
        Self(image)
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Raw RGB bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        self.0.as_raw()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.0
    }
}

impl From<RgbImage> for Bitmap {
    fn from(image: RgbImage) -> Self {
        Self(image)
    }
}

/// Destination render area for a fitted image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetBox {
    pub width: u32,
    pub height: u32,
}

impl TargetBox {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether both sides are non-zero.
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// What the preview panes currently display.
///
/// Rebuilt from scratch on every generate action.
#[derive(Debug, Clone, Default)]
pub struct PreviewContent {
    pub title: String,
    pub body: String,
    pub image: Option<Bitmap>,
}

/// Raw user input for a notification preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationInput {
    /// Notification title
    #[serde(default)]
    pub title: String,
    /// Notification body text, may span multiple lines
    #[serde(default)]
    pub body: String,
    /// Optional URL of the big picture (PNG, JPEG, WebP or SVG)
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NotificationInput {
    /// The image URL with surrounding whitespace removed, or `None` if blank.
    pub fn trimmed_url(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
