use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ColorType, ImageBuffer, ImageEncoder, Rgba, Rgba32FImage, RgbaImage};

use crate::error::IconError;

/// Downsample the master to `size`×`size`.
///
/// Lanczos3 runs on premultiplied alpha so the transparent surround does not
/// bleed dark fringes into the rounded edge.
pub fn resize_master(master: &RgbaImage, size: u32) -> RgbaImage {
    if master.dimensions() == (size, size) {
        return master.clone();
    }

    let premultiplied: Rgba32FImage = ImageBuffer::from_fn(master.width(), master.height(), |x, y| {
        let Rgba([r, g, b, a]) = *master.get_pixel(x, y);
        let a = a as f32 / 255.0;
        Rgba([
            r as f32 / 255.0 * a,
            g as f32 / 255.0 * a,
            b as f32 / 255.0 * a,
            a,
        ])
    });
    let resized = imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);

    RgbaImage::from_fn(size, size, |x, y| {
        let Rgba([r, g, b, a]) = *resized.get_pixel(x, y);
        let a = a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        let unmul = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([unmul(r), unmul(g), unmul(b), (a * 255.0).round() as u8])
    })
}

/// Write `img` as an RGBA PNG with the strongest lossless compression.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let file = File::create(path).map_err(|source| IconError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilter::Adaptive)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .map_err(|source| IconError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(|source| IconError::CreateFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_size_is_copied() {
        let img = RgbaImage::from_fn(8, 8, |x, y| Rgba([x as u8 * 30, y as u8 * 30, 7, 200]));
        assert_eq!(resize_master(&img, 8), img);
    }

    #[test]
    fn test_transparent_stays_transparent() {
        let img = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 0]));
        let small = resize_master(&img, 16);
        assert_eq!(small.dimensions(), (16, 16));
        assert!(small.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_premultiplied_edge_keeps_color() {
        // opaque red right half next to a transparent black left half
        let img = RgbaImage::from_fn(64, 64, |x, _| {
            if x >= 32 { Rgba([255, 0, 0, 255]) } else { Rgba([0, 0, 0, 0]) }
        });
        let small = resize_master(&img, 8);
        let edge = small.get_pixel(4, 4);
        assert!(edge[3] > 0 && edge[3] < 255, "{edge:?}");
        assert!(edge[0] >= 250, "edge darkened: {edge:?}");
    }

    #[test]
    fn test_save_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.png");
        let img = RgbaImage::from_fn(4, 4, |x, y| Rgba([x as u8, y as u8, 9, 128]));
        save_png(&img, &path).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgba8);
        assert_eq!(decoded.to_rgba8(), img);
    }

    #[test]
    fn test_save_png_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("probe.png");
        let img = RgbaImage::new(2, 2);
        assert!(matches!(save_png(&img, &path), Err(IconError::CreateFile { .. })));
    }
}
