use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

static DEFAULT_OUTPUT_DIR: Lazy<PathBuf> = Lazy::new(|| {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("quicker")
        .join("Assets.xcassets")
        .join("AppIcon.appiconset")
});

/// Where `mkiconset` writes the icon set: the app's asset catalog inside the repo.
pub fn default_output_dir() -> &'static Path {
    DEFAULT_OUTPUT_DIR.as_path()
}

/// Drawing constants for the icon.
///
/// Ratios are fractions of the canvas resolution (or of the ring's outer
/// radius for the tail offset) and are truncated to whole pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub gradient_start: [u8; 3],
    pub gradient_end: [u8; 3],
    pub padding_ratio: f32,
    pub corner_radius_ratio: f32,
    pub outline: [u8; 4],
    pub ring_outer_ratio: f32,
    pub ring_inner_ratio: f32,
    pub tail_length_ratio: f32,
    pub tail_thickness_ratio: f32,
    /// Clockwise, in degrees, with y pointing down.
    pub tail_angle_deg: f32,
    pub tail_offset: (f32, f32),
    pub shadow_rgb: [u8; 3],
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            gradient_start: [20, 109, 255],
            gradient_end: [0, 229, 168],
            padding_ratio: 0.07,
            corner_radius_ratio: 0.23,
            outline: [255, 255, 255, 48],
            ring_outer_ratio: 0.31,
            ring_inner_ratio: 0.19,
            tail_length_ratio: 0.30,
            tail_thickness_ratio: 0.10,
            tail_angle_deg: 35.0,
            tail_offset: (0.55, 0.60),
            shadow_rgb: [0, 0, 0],
        }
    }
}

impl IconStyle {
    pub fn outline_width(size: u32) -> u32 {
        (size / 256).max(2)
    }

    pub fn shadow_sigma(size: u32) -> f32 {
        (size / 48).max(2) as f32
    }

    pub fn shadow_offset(size: u32) -> u32 {
        (size / 40).max(2)
    }
}

/// `ratio` of `size`, truncated to whole pixels.
pub(crate) fn frac(size: u32, ratio: f32) -> u32 {
    (size as f32 * ratio) as u32
}
