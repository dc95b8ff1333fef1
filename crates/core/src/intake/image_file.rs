use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

use crate::shared::constants::IMAGE_EXTENSIONS;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("unsupported file type '{extension}' — only PNG and JPEG are accepted")]
    UnsupportedType { extension: String },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a PNG or JPEG image")]
    NotAnImage { path: PathBuf },
    #[error("{path} is empty")]
    Empty { path: PathBuf },
}

/// A single accepted image, held in memory until replaced.
///
/// Acceptance requires both an allowed extension and matching content:
/// the first bytes must sniff as PNG or JPEG regardless of what the
/// filename claims.
#[derive(Debug, Clone)]
pub struct ImageFile {
    path: PathBuf,
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl ImageFile {
    /// Read and validate an image from disk. The rejection reason is carried
    /// in the error so callers can show it to the user.
    pub fn open(path: &Path) -> Result<Self, IntakeError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(IntakeError::UnsupportedType { extension });
        }

        let bytes = fs::read(path).map_err(|source| IntakeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(IntakeError::Empty {
                path: path.to_path_buf(),
            });
        }

        let format = image::guess_format(&bytes).map_err(|_| IntakeError::NotAnImage {
            path: path.to_path_buf(),
        })?;
        if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
            return Err(IntakeError::NotAnImage {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            format,
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Quick extension-only check for a file that is being dragged but has not
/// been dropped yet, so it cannot be read from disk. The full content sniff
/// in [`ImageFile::open`] still runs on drop.
pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    // Smallest valid headers are enough for format sniffing.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];
    const JPEG_MAGIC: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0, 0, 0, 0];

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_open_accepts_png() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "face.png", PNG_MAGIC);
        let file = ImageFile::open(&path).unwrap();
        assert_eq!(file.format(), ImageFormat::Png);
        assert_eq!(file.file_name(), "face.png");
        assert!(!file.bytes().is_empty());
    }

    #[test]
    fn test_open_accepts_jpeg_with_jpg_extension() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "face.jpg", JPEG_MAGIC);
        let file = ImageFile::open(&path).unwrap();
        assert_eq!(file.format(), ImageFormat::Jpeg);
    }

    #[rstest]
    #[case("notes.txt")]
    #[case("clip.mp4")]
    #[case("face.webp")]
    #[case("noextension")]
    fn test_open_rejects_disallowed_extension(#[case] name: &str) {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, name, PNG_MAGIC);
        let err = ImageFile::open(&path).unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedType { .. }));
    }

    #[test]
    fn test_open_rejects_mislabeled_content() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "fake.png", b"this is not an image at all");
        let err = ImageFile::open(&path).unwrap_err();
        assert!(matches!(err, IntakeError::NotAnImage { .. }));
    }

    #[test]
    fn test_open_rejects_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "empty.png", b"");
        let err = ImageFile::open(&path).unwrap_err();
        assert!(matches!(err, IntakeError::Empty { .. }));
    }

    #[test]
    fn test_open_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.png");
        let err = ImageFile::open(&path).unwrap_err();
        assert!(matches!(err, IntakeError::Read { .. }));
    }

    #[rstest]
    #[case("a.png", true)]
    #[case("a.JPG", true)]
    #[case("a.jpeg", true)]
    #[case("a.gif", false)]
    #[case("a", false)]
    fn test_has_allowed_extension(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(has_allowed_extension(Path::new(name)), expected);
    }
}
