//! Procedural app icon for Quicker: a gradient rounded square with a
//! question-mark glyph, rendered once and downsampled into every size an
//! Xcode `AppIcon.appiconset` needs.

use std::fs;
use std::path::Path;

use image::RgbaImage;

pub mod config;
pub mod error;
pub mod icon;
pub mod iconset;
pub mod logger;
pub mod specs;

pub use config::IconStyle;
pub use error::IconError;
pub use specs::{IconSpec, SPECS};

/// Renders the icon and writes one PNG per [`IconSpec`].
#[derive(Debug, Clone)]
pub struct IconGenerator {
    style: IconStyle,
    specs: &'static [IconSpec],
}

impl Default for IconGenerator {
    fn default() -> Self {
        Self::new(IconStyle::default(), SPECS)
    }
}

impl IconGenerator {
    pub fn new(style: IconStyle, specs: &'static [IconSpec]) -> Self {
        Self { style, specs }
    }

    pub fn specs(&self) -> &'static [IconSpec] {
        self.specs
    }

    /// The full icon at a single resolution.
    pub fn composite(&self, size: u32) -> RgbaImage {
        icon::composite_icon(size, &self.style)
    }

    /// Create `out_dir` (with parents) and write every spec into it.
    ///
    /// All sizes come from one master at the largest pixel size. Returns the
    /// number of files written.
    pub fn write_icons(&self, out_dir: impl AsRef<Path>) -> Result<usize, IconError> {
        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir).map_err(|source| IconError::CreateDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let master_size = specs::master_pixel_size(self.specs);
        log::info!("Rendering {master_size}x{master_size} master icon");
        let master = self.composite(master_size);

        for spec in self.specs {
            let size = spec.pixel_size();
            let img = iconset::resize_master(&master, size);
            let path = out_dir.join(spec.filename);
            iconset::save_png(&img, &path)?;
            log::debug!("Wrote {} ({size}x{size})", path.display());
        }

        log::info!("Icon set complete: {} files", self.specs.len());
        Ok(self.specs.len())
    }
}

/// [`IconGenerator::write_icons`] with the shipped style and size table.
pub fn write_icons(out_dir: impl AsRef<Path>) -> Result<usize, IconError> {
    IconGenerator::default().write_icons(out_dir)
}
