//! SVG rasterization through resvg.

use image::{DynamicImage, Limits, RgbaImage};
use resvg::{tiny_skia, usvg};
use thiserror::Error;

/// Errors that can occur while turning SVG markup into a raster image.
#[derive(Error, Debug)]
pub enum SvgError {
    #[error("failed to parse SVG: {0}")]
    Parse(#[from] usvg::Error),
    #[error("SVG has an empty size")]
    EmptySize,
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
}

/// Renders `data` at `width` pixels wide, keeping the document's aspect ratio.
///
/// Transparent areas stay transparent; flattening is up to the caller.
pub fn rasterize(data: &[u8], width: u32) -> Result<DynamicImage, SvgError> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 || width == 0 {
        return Err(SvgError::EmptySize);
    }

    let scale = width as f32 / size.width();
    let height = (f64::from(size.height()) * f64::from(scale)).round().max(1.0);
    // `as` saturates, and anything past u32::MAX is rejected below anyway
    let height = height.min(f64::from(u32::MAX)) as u32;

    if canvas_bytes(width, height) > max_canvas_bytes() {
        return Err(SvgError::Canvas { width, height });
    }

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(SvgError::Canvas { width, height })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied RGBA
    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();
    let image =
        RgbaImage::from_raw(width, height, rgba).ok_or(SvgError::Canvas { width, height })?;

    Ok(DynamicImage::ImageRgba8(image))
}

/// RGBA bytes needed for a `width` x `height` canvas.
fn canvas_bytes(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height) * 4
}

/// The allocation cap the raster decoder uses, applied to SVG canvases too.
fn max_canvas_bytes() -> u64 {
    Limits::default().max_alloc.unwrap_or(u64::MAX)
}
