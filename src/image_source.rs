// image_source.rs
// Opaque image handles. Bytes are sniffed for a PNG/JPEG signature and then
// carried untouched; nothing here decodes pixels.
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use image::ImageFormat;
use crate::error::ImageError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageOrigin { File(PathBuf), Dropped(String), Camera }

impl std::fmt::Display for ImageOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p)    => write!(f, "{}", p.display()),
            Self::Dropped(n) => f.write_str(n),
            Self::Camera     => f.write_str("camera capture"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ImageHandle {
    pub id: u64,
    pub origin: ImageOrigin,
    pub format: ImageFormat,
    pub bytes: Arc<[u8]>,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl ImageHandle {
    pub fn from_bytes(origin: ImageOrigin, bytes: impl Into<Arc<[u8]>>) -> Result<Self, ImageError> {
        let bytes = bytes.into();
        if bytes.is_empty() { return Err(ImageError::Empty); }
        let format = match image::guess_format(&bytes) {
            Ok(f @ (ImageFormat::Png | ImageFormat::Jpeg)) => f,
            _ => return Err(ImageError::Unsupported),
        };
        Ok(Self { id: NEXT_ID.fetch_add(1, Ordering::Relaxed), origin, format, bytes })
    }

    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let bytes = std::fs::read(path).map_err(|source| ImageError::Read { path: path.to_path_buf(), source })?;
        Self::from_bytes(ImageOrigin::File(path.to_path_buf()), bytes)
    }

    /// Builds a handle from a file dropped on the window. Web builds deliver
    /// bytes, native builds deliver a path.
    pub fn from_dropped(file: &egui::DroppedFile) -> Result<Self, ImageError> {
        match (&file.bytes, &file.path) {
            (Some(bytes), _) => Self::from_bytes(ImageOrigin::Dropped(file.name.clone()), bytes.clone()),
            (None, Some(path)) => Self::from_path(path),
            (None, None) => Err(ImageError::Empty),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::{JPEG, PNG};

    #[test]
    fn accepts_png_and_jpeg() {
        let png = ImageHandle::from_bytes(ImageOrigin::Camera, PNG).unwrap();
        assert_eq!(png.format, ImageFormat::Png);
        let jpg = ImageHandle::from_bytes(ImageOrigin::Camera, JPEG).unwrap();
        assert_eq!(jpg.format, ImageFormat::Jpeg);
        assert_ne!(png.id, jpg.id);
    }

    #[test]
    fn rejects_other_payloads() {
        assert!(matches!(ImageHandle::from_bytes(ImageOrigin::Camera, &b""[..]), Err(ImageError::Empty)));
        assert!(matches!(ImageHandle::from_bytes(ImageOrigin::Camera, &b"GIF89a...."[..]), Err(ImageError::Unsupported)));
        assert!(matches!(ImageHandle::from_bytes(ImageOrigin::Camera, &b"hello world"[..]), Err(ImageError::Unsupported)));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.png");
        std::fs::write(&path, PNG).unwrap();
        let h = ImageHandle::from_path(&path).unwrap();
        assert_eq!(h.origin, ImageOrigin::File(path));
        assert!(matches!(ImageHandle::from_path(&dir.path().join("missing.png")), Err(ImageError::Read { .. })));
    }

    #[test]
    fn dropped_file_prefers_bytes() {
        let file = egui::DroppedFile { name: "selfie.jpg".into(), bytes: Some(JPEG.into()), ..Default::default() };
        let h = ImageHandle::from_dropped(&file).unwrap();
        assert_eq!(h.origin, ImageOrigin::Dropped("selfie.jpg".into()));
        assert!(matches!(ImageHandle::from_dropped(&egui::DroppedFile::default()), Err(ImageError::Empty)));
    }
}
