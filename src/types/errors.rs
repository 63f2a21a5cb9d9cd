use std::fmt;

// === CaptureError ===

/// Errors raised by the camera capture source.
#[derive(Debug)]
pub enum CaptureError {
    /// Camera permission was denied. Terminal for the current source instance.
    PermissionDenied(String),
    /// The stream has not attached yet; no frame is available to freeze.
    NotLive,
    /// The source was already released; its tracks are stopped.
    Released,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PermissionDenied(msg) => {
                write!(f, "Camera permission denied: {}", msg)
            }
            CaptureError::NotLive => write!(f, "Camera stream is not live yet"),
            CaptureError::Released => write!(f, "Camera source already released"),
        }
    }
}

impl std::error::Error for CaptureError {}

// === RecognitionError ===

/// Errors raised by a plant recognition attempt.
///
/// Camera-side failures surface here as `PermissionDenied` so the capture
/// screen has a single failure channel to render.
#[derive(Debug)]
pub enum RecognitionError {
    /// The service returned no text to parse.
    EmptyResponse,
    /// The returned text was not valid JSON.
    MalformedJson(String),
    /// The returned JSON was missing a required field or had a wrong type.
    SchemaViolation(String),
    /// Transport failure or non-success status from the service.
    NetworkError(String),
    /// Camera-side failure raised by the capture source.
    PermissionDenied(String),
}

impl fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognitionError::EmptyResponse => write!(f, "Recognition returned an empty response"),
            RecognitionError::MalformedJson(msg) => {
                write!(f, "Recognition returned malformed JSON: {}", msg)
            }
            RecognitionError::SchemaViolation(msg) => {
                write!(f, "Recognition response violated the schema: {}", msg)
            }
            RecognitionError::NetworkError(msg) => {
                write!(f, "Recognition network error: {}", msg)
            }
            RecognitionError::PermissionDenied(msg) => {
                write!(f, "Camera permission denied: {}", msg)
            }
        }
    }
}

impl std::error::Error for RecognitionError {}

// === HistoryError ===

/// Errors from loading or persisting the plant history file.
///
/// These are recovered locally: a load failure yields an empty history and a
/// persist failure is logged and dropped. They never reach the user.
#[derive(Debug)]
pub enum HistoryError {
    /// An I/O error occurred while reading or writing the history file.
    IoError(String),
    /// Failed to serialize or deserialize the history sequence.
    SerializationError(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::IoError(msg) => write!(f, "History I/O error: {}", msg),
            HistoryError::SerializationError(msg) => {
                write!(f, "History serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

// === NavError ===

/// Errors related to screen navigation.
#[derive(Debug)]
pub enum NavError {
    /// The requested transition is not part of the screen graph.
    InvalidTransition { from: String, to: String },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::InvalidTransition { from, to } => {
                write!(f, "Invalid transition: {} -> {}", from, to)
            }
        }
    }
}

impl std::error::Error for NavError {}
