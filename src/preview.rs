//! Builds what each notification pane shows from a [`PreviewContent`].

use crate::ellipsize::ellipsize;
use crate::fit::fit_cover;
use crate::{Bitmap, PreviewContent, TargetBox};

/// Shown when the title is left empty.
pub const DEFAULT_TITLE: &str = "Title";
/// Shown when the body is left empty.
pub const DEFAULT_BODY: &str = "Body";

/// Default big-picture area of the expanded pane.
pub const EXPANDED_PICTURE: TargetBox = TargetBox::new(360, 180);
/// Large-icon thumbnail of the collapsed pane.
pub const COLLAPSED_THUMBNAIL: TargetBox = TargetBox::new(40, 40);

/// The two notification densities being approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewMode {
    /// Single-line summary with a small thumbnail.
    Collapsed,
    /// Longer text plus a big picture.
    Expanded,
}

impl PreviewMode {
    pub const ALL: [PreviewMode; 2] = [PreviewMode::Collapsed, PreviewMode::Expanded];

    /// Character budget for the title. Roughly one visual line.
    pub fn title_budget(self) -> usize {
        match self {
            Self::Collapsed => 38,
            Self::Expanded => 52,
        }
    }

    /// Character budget for the body: about two lines collapsed, four expanded.
    pub fn body_budget(self) -> usize {
        match self {
            Self::Collapsed => 92,
            Self::Expanded => 220,
        }
    }

    /// Picture area used when the caller has no better measurement.
    pub fn default_picture_box(self) -> TargetBox {
        match self {
            Self::Collapsed => COLLAPSED_THUMBNAIL,
            Self::Expanded => EXPANDED_PICTURE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Collapsed => "Minimized (Collapsed)",
            Self::Expanded => "Maximized (Expanded / Big picture)",
        }
    }

    /// Short name used for file names and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanded => "expanded",
        }
    }
}

/// Picture region of a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picture {
    /// No image was available.
    Placeholder,
    /// The image, cover-fitted to the pane's picture box.
    Image(Bitmap),
}

impl Picture {
    pub fn image(&self) -> Option<&Bitmap> {
        match self {
            Self::Image(bitmap) => Some(bitmap),
            Self::Placeholder => None,
        }
    }
}

/// Fully resolved content for one pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPane {
    pub mode: PreviewMode,
    pub title: String,
    pub body: String,
    pub picture: Picture,
}

/// Title as the given pane displays it.
pub fn display_title(title: &str, mode: PreviewMode) -> String {
    ellipsize(or_default(title, DEFAULT_TITLE), mode.title_budget())
}

/// Body as the given pane displays it.
pub fn display_body(body: &str, mode: PreviewMode) -> String {
    ellipsize(or_default(body, DEFAULT_BODY), mode.body_budget())
}

fn or_default<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = text.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

/// Resolves `content` for one pane, fitting the image into `picture_box`.
pub fn render_pane(
    content: &PreviewContent,
    mode: PreviewMode,
    picture_box: TargetBox,
) -> RenderedPane {
    let picture = content
        .image
        .as_ref()
        .and_then(|image| fit_cover(image, picture_box))
        .map_or(Picture::Placeholder, Picture::Image);

    RenderedPane {
        mode,
        title: display_title(&content.title, mode),
        body: display_body(&content.body, mode),
        picture,
    }
}
