use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Lifecycle state of a camera device stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Permission granted, no frame has arrived yet.
    WarmingUp,
    /// Device stream attached; single-shot captures are allowed and do not
    /// change this state.
    Live,
    /// Permission was denied. Terminal for this source instance.
    Denied,
}

/// A single still frame frozen from the camera stream, JPEG-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    jpeg: Vec<u8>,
}

impl CapturedImage {
    pub fn new(jpeg: Vec<u8>) -> Self {
        Self { jpeg }
    }

    pub fn jpeg_bytes(&self) -> &[u8] {
        &self.jpeg
    }

    /// Base64 payload sent to the inference service as inline data.
    pub fn as_base64(&self) -> String {
        BASE64.encode(&self.jpeg)
    }

    /// Data URL suitable as a `PlantProfile::image_url` value.
    pub fn data_url(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.as_base64())
    }
}
