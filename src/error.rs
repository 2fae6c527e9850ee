use std::io;
use std::path::PathBuf;

/// Failure to put the icon set on disk. Rendering itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    CreateFile { path: PathBuf, source: io::Error },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode { path: PathBuf, source: image::ImageError },
}
