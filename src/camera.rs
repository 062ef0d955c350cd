// camera.rs — single-frame capture, built only with `--features camera`.
use opencv::{
    core::Vector,
    imgcodecs,
    prelude::*,
    videoio::{self, VideoCapture},
};
use crate::error::ImageError;
use crate::image_source::{ImageHandle, ImageOrigin};

fn cam_err(e: opencv::Error) -> ImageError { ImageError::Camera(e.to_string()) }

pub struct Camera {
    capture: VideoCapture,
}

impl Camera {
    pub fn new(device_id: i32) -> Result<Self, ImageError> {
        let capture = VideoCapture::new(device_id, videoio::CAP_ANY).map_err(cam_err)?;
        if !capture.is_opened().map_err(cam_err)? {
            return Err(ImageError::Camera(format!("failed to open camera {device_id}")));
        }
        Ok(Self { capture })
    }

    /// Grabs one frame and re-encodes it as PNG so it travels like an upload.
    pub fn snapshot(&mut self) -> Result<ImageHandle, ImageError> {
        let mut frame = Mat::default();
        self.capture.read(&mut frame).map_err(cam_err)?;
        if frame.empty() {
            return Err(ImageError::Camera("empty frame".into()));
        }
        let mut buf = Vector::<u8>::new();
        imgcodecs::imencode(".png", &frame, &mut buf, &Vector::new()).map_err(cam_err)?;
        ImageHandle::from_bytes(ImageOrigin::Camera, buf.to_vec())
    }
}

/// Opens the device, takes a single frame and releases it again.
pub fn capture_once(device_id: i32) -> Result<ImageHandle, ImageError> {
    let handle = Camera::new(device_id)?.snapshot()?;
    tracing::info!(device_id, bytes = handle.bytes.len(), "captured camera frame");
    Ok(handle)
}
