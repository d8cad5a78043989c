//! Embedded assets and app icon loading.

use crate::constants::WINDOW_ICON;
#[cfg(feature = "svg")]
use crate::constants::WINDOW_ICON_SIZE;
use eframe::egui;
use image::imageops::FilterType;
use rust_embed::RustEmbed;
use std::path::Path;
use thiserror::Error;

/// Embeds all assets from the assets/ directory into the binary.
/// In debug mode, assets are loaded from the filesystem for faster iteration.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Errors that can occur when loading an icon.
#[derive(Error, Debug)]
pub enum IconError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to decode '{path}': {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },
    #[cfg(feature = "svg")]
    #[error(transparent)]
    Rasterize(#[from] notification_preview::svg::SvgError),
    #[cfg(not(feature = "svg"))]
    #[error("built without SVG support")]
    SvgUnavailable,
}

/// RGBA pixels ready for texture creation.
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Reads an image file and scales it to a `size`×`size` square.
pub fn load_logo(path: &Path, size: u32) -> Result<DecodedImage, IconError> {
    let bytes = std::fs::read(path).map_err(|source| IconError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let img = image::load_from_memory(&bytes).map_err(|source| IconError::Decode {
        path: path.display().to_string(),
        source,
    })?;

    let rgba = img.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

/// Rasterizes the embedded SVG icon for the window.
#[cfg(feature = "svg")]
pub fn load_window_icon() -> Result<egui::IconData, IconError> {
    let file =
        Assets::get(WINDOW_ICON).ok_or_else(|| IconError::AssetNotFound(WINDOW_ICON.to_string()))?;
    let rgba = notification_preview::svg::rasterize(&file.data, WINDOW_ICON_SIZE)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(egui::IconData {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(not(feature = "svg"))]
pub fn load_window_icon() -> Result<egui::IconData, IconError> {
    if Assets::get(WINDOW_ICON).is_none() {
        return Err(IconError::AssetNotFound(WINDOW_ICON.to_string()));
    }
    Err(IconError::SvgUnavailable)
}
