/// One raster of the app icon set: a point size at a given backing scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size_pt: u32,
    pub scale: u32,
    pub filename: &'static str,
}

impl IconSpec {
    pub const fn new(size_pt: u32, scale: u32, filename: &'static str) -> Self {
        Self { size_pt, scale, filename }
    }

    pub const fn pixel_size(&self) -> u32 {
        self.size_pt * self.scale
    }
}

/// Rasters required by an Xcode `AppIcon.appiconset`, in catalog order.
pub static SPECS: &[IconSpec] = &[
    IconSpec::new(16, 1, "icon_16x16.png"),
    IconSpec::new(16, 2, "icon_16x16@2x.png"),
    IconSpec::new(32, 1, "icon_32x32.png"),
    IconSpec::new(32, 2, "icon_32x32@2x.png"),
    IconSpec::new(128, 1, "icon_128x128.png"),
    IconSpec::new(128, 2, "icon_128x128@2x.png"),
    IconSpec::new(256, 1, "icon_256x256.png"),
    IconSpec::new(256, 2, "icon_256x256@2x.png"),
    IconSpec::new(512, 1, "icon_512x512.png"),
    IconSpec::new(512, 2, "icon_512x512@2x.png"),
];

/// Largest pixel size in `specs`; the master is rendered at this resolution.
pub fn master_pixel_size(specs: &[IconSpec]) -> u32 {
    specs.iter().map(IconSpec::pixel_size).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pixel_size_is_points_times_scale() {
        for spec in SPECS {
            assert_eq!(spec.pixel_size(), spec.size_pt * spec.scale);
            assert!(spec.pixel_size() > 0);
            assert!(spec.scale == 1 || spec.scale == 2);
        }
    }

    #[test]
    fn test_filenames_unique() {
        let names: HashSet<_> = SPECS.iter().map(|s| s.filename).collect();
        assert_eq!(names.len(), SPECS.len());
        assert_eq!(SPECS.len(), 10);
    }

    #[test]
    fn test_master_size() {
        assert_eq!(master_pixel_size(SPECS), 1024);
        assert_eq!(master_pixel_size(&[]), 0);
        assert_eq!(master_pixel_size(&SPECS[..3]), 32);
    }

    #[test]
    fn test_retina_filenames() {
        for spec in SPECS {
            assert_eq!(spec.filename.contains("@2x"), spec.scale == 2);
            let stem = format!("icon_{0}x{0}", spec.size_pt);
            assert!(spec.filename.starts_with(&stem), "{} vs {}", spec.filename, stem);
        }
    }
}
