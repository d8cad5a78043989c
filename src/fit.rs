//! Cover-fit: pick the centered source region with the box's aspect, then scale it to the box.

use crate::{Bitmap, TargetBox};
use image::imageops::{self, FilterType};

/// Size of `source` after scaling it just enough to cover `target`.
///
/// One axis always matches the target exactly and the other one is at least
/// as large; the overflow axis is truncated. Returns `None` if either size has
/// a zero side.
pub fn cover_size(source: (u32, u32), target: TargetBox) -> Option<(u32, u32)> {
    let (src_w, src_h) = (u64::from(source.0), u64::from(source.1));
    let (dst_w, dst_h) = (u64::from(target.width), u64::from(target.height));
    if src_w == 0 || src_h == 0 || !target.is_drawable() {
        return None;
    }

    // scale = max(dst_w / src_w, dst_h / src_h), compared without floats
    let (width, height) = if fits_width(src_w, src_h, dst_w, dst_h) {
        (dst_w, (src_h * dst_w / src_w).max(dst_h))
    } else {
        ((src_w * dst_h / src_h).max(dst_w), dst_h)
    };

    Some((u32::try_from(width).ok()?, u32::try_from(height).ok()?))
}

/// Whether the cover scale is set by the width (`dst_w / src_w >= dst_h / src_h`).
fn fits_width(src_w: u64, src_h: u64, dst_w: u64, dst_h: u64) -> bool {
    dst_w * src_h >= dst_h * src_w
}

/// The centered region of `source` that ends up visible after cover-fitting.
///
/// Returned as `(left, top, width, height)` in source pixels.
pub fn cover_crop(source: (u32, u32), target: TargetBox) -> Option<(u32, u32, u32, u32)> {
    let (src_w, src_h) = (u64::from(source.0), u64::from(source.1));
    let (dst_w, dst_h) = (u64::from(target.width), u64::from(target.height));
    if src_w == 0 || src_h == 0 || !target.is_drawable() {
        return None;
    }

    let (crop_w, crop_h) = if fits_width(src_w, src_h, dst_w, dst_h) {
        (src_w, (dst_h * src_w / dst_w).clamp(1, src_h))
    } else {
        ((dst_w * src_h / dst_h).clamp(1, src_w), src_h)
    };

    // crop sizes never exceed the source, so they fit in u32
    let (crop_w, crop_h) = (crop_w as u32, crop_h as u32);
    let left = (source.0 - crop_w) / 2;
    let top = (source.1 - crop_h) / 2;
    Some((left, top, crop_w, crop_h))
}

/// Crops and resizes `bitmap` so it covers `target` exactly, without distortion.
///
/// The visible region is cut from the source first, so no buffer larger than
/// the source or the target is ever allocated. Degenerate sizes produce
/// `None`, the same outcome as a failed fetch.
pub fn fit_cover(bitmap: &Bitmap, target: TargetBox) -> Option<Bitmap> {
    let (left, top, crop_w, crop_h) = cover_crop((bitmap.width(), bitmap.height()), target)?;
    let region = imageops::crop_imm(bitmap.as_image(), left, top, crop_w, crop_h);

    let fitted = if (crop_w, crop_h) == (target.width, target.height) {
        region.to_image()
    } else {
        imageops::resize(&*region, target.width, target.height, FilterType::Lanczos3)
    };

    Some(Bitmap::new(fitted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid(width: u32, height: u32, color: [u8; 3]) -> Bitmap {
        Bitmap::new(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn cover_size_matches_one_axis_and_overflows_the_other() {
        let cases = [
            ((4000, 2000), TargetBox::new(360, 180)),
            ((1000, 1000), TargetBox::new(360, 180)),
            ((100, 400), TargetBox::new(360, 180)),
            ((4000, 3000), TargetBox::new(40, 40)),
            ((7, 3), TargetBox::new(359, 181)),
            ((1, 1), TargetBox::new(1, 1)),
        ];

        for (source, target) in cases {
            let (w, h) = cover_size(source, target).unwrap();
            assert!(w >= target.width && h >= target.height, "{source:?} -> {w}x{h}");
            assert!(
                w == target.width || h == target.height,
                "{source:?} -> {w}x{h} matches neither axis of {target:?}"
            );
        }
    }

    #[test]
    fn cover_size_preserves_aspect() {
        assert_eq!(cover_size((4000, 2000), TargetBox::new(360, 180)), Some((360, 180)));
        assert_eq!(cover_size((1000, 1000), TargetBox::new(360, 180)), Some((360, 360)));
        assert_eq!(cover_size((100, 400), TargetBox::new(360, 180)), Some((360, 1440)));
        assert_eq!(cover_size((3000, 1000), TargetBox::new(360, 180)), Some((540, 180)));
        // overflow axis truncates: 7 * 181 / 3 = 422.33
        assert_eq!(cover_size((7, 3), TargetBox::new(359, 181)), Some((422, 181)));
    }

    #[test]
    fn crop_region_is_centered_in_source_space() {
        assert_eq!(cover_crop((300, 100), TargetBox::new(100, 100)), Some((100, 0, 100, 100)));
        assert_eq!(cover_crop((200, 600), TargetBox::new(100, 50)), Some((0, 250, 200, 100)));
        assert_eq!(cover_crop((4000, 2000), TargetBox::new(360, 180)), Some((0, 0, 4000, 2000)));
        assert_eq!(cover_crop((0, 10), TargetBox::new(10, 10)), None);
    }

    #[test]
    fn extreme_aspect_sources_fit_without_huge_buffers() {
        let target = TargetBox::new(360, 180);

        let tall = solid(1, 60_000, [200, 10, 10]);
        assert_eq!(cover_crop((1, 60_000), target), Some((0, 29_999, 1, 1)));
        let fitted = fit_cover(&tall, target).unwrap();
        assert_eq!((fitted.width(), fitted.height()), (360, 180));
        let pixel = fitted.as_image().get_pixel(180, 90);
        assert!(pixel.0[0] > 190 && pixel.0[2] < 20, "center is {pixel:?}");

        let wide = solid(60_000, 1, [10, 10, 200]);
        let fitted = fit_cover(&wide, target).unwrap();
        assert_eq!((fitted.width(), fitted.height()), (360, 180));
    }

    #[test]
    fn degenerate_sizes_have_no_cover() {
        assert_eq!(cover_size((0, 10), TargetBox::new(10, 10)), None);
        assert_eq!(cover_size((10, 0), TargetBox::new(10, 10)), None);
        assert_eq!(cover_size((10, 10), TargetBox::new(0, 10)), None);
        assert_eq!(cover_size((10, 10), TargetBox::new(10, 0)), None);
    }

    #[test]
    fn fitted_bitmap_has_exact_target_size() {
        let sources = [(4000, 2000), (640, 480), (17, 91), (1, 1), (360, 180)];
        let targets = [TargetBox::new(360, 180), TargetBox::new(40, 40), TargetBox::new(3, 250)];

        for (w, h) in sources {
            let bitmap = solid(w, h, [10, 20, 30]);
            for target in targets {
                let fitted = fit_cover(&bitmap, target).unwrap();
                assert_eq!((fitted.width(), fitted.height()), (target.width, target.height));
            }
        }
    }

    #[test]
    fn empty_bitmap_fits_to_nothing() {
        let empty = Bitmap::new(RgbImage::new(0, 0));
        assert!(fit_cover(&empty, TargetBox::new(360, 180)).is_none());
        assert!(fit_cover(&solid(10, 10, [0, 0, 0]), TargetBox::new(0, 0)).is_none());
    }

    #[test]
    fn wide_source_is_cropped_to_its_center() {
        // 3:1 source into a square keeps only the middle third.
        let source = RgbImage::from_fn(300, 100, |x, _| match x {
            0..100 => Rgb([255, 0, 0]),
            100..200 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        });
        let fitted = fit_cover(&Bitmap::new(source), TargetBox::new(100, 100)).unwrap();

        assert_eq!((fitted.width(), fitted.height()), (100, 100));
        let image = fitted.as_image();
        assert_eq!(image.get_pixel(50, 50), &Rgb([0, 255, 0]));
        assert_eq!(image.get_pixel(5, 5), &Rgb([0, 255, 0]));
        assert_eq!(image.get_pixel(95, 95), &Rgb([0, 255, 0]));
    }

    #[test]
    fn tall_source_is_cropped_to_its_center() {
        // Top and bottom bands must be cropped away.
        let source = RgbImage::from_fn(200, 600, |_, y| match y {
            0..200 => Rgb([255, 255, 255]),
            200..400 => Rgb([0, 0, 0]),
            _ => Rgb([255, 255, 255]),
        });
        let fitted = fit_cover(&Bitmap::new(source), TargetBox::new(100, 50)).unwrap();

        assert_eq!((fitted.width(), fitted.height()), (100, 50));
        // Source rows 250..350 are kept, all inside the black band.
        for y in [0, 25, 49] {
            let pixel = fitted.as_image().get_pixel(50, y);
            assert!(pixel.0.iter().all(|&c| c < 16), "row {y} is {pixel:?}");
        }
    }

    #[test]
    fn matching_size_is_an_identity() {
        let bitmap = solid(360, 180, [1, 2, 3]);
        assert_eq!(fit_cover(&bitmap, TargetBox::new(360, 180)), Some(bitmap));
    }
}
