use plantlens::types::errors::*;

// === CaptureError Tests ===

#[test]
fn capture_error_display_variants() {
    assert_eq!(
        CaptureError::PermissionDenied("user declined".to_string()).to_string(),
        "Camera permission denied: user declined"
    );
    assert_eq!(
        CaptureError::NotLive.to_string(),
        "Camera stream is not live yet"
    );
    assert_eq!(
        CaptureError::Released.to_string(),
        "Camera source already released"
    );
}

#[test]
fn capture_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(CaptureError::NotLive);
    assert!(err.source().is_none());
}

// === RecognitionError Tests ===

#[test]
fn recognition_error_display_variants() {
    assert_eq!(
        RecognitionError::EmptyResponse.to_string(),
        "Recognition returned an empty response"
    );
    assert_eq!(
        RecognitionError::MalformedJson("expected value".to_string()).to_string(),
        "Recognition returned malformed JSON: expected value"
    );
    assert_eq!(
        RecognitionError::SchemaViolation("missing field `water`".to_string()).to_string(),
        "Recognition response violated the schema: missing field `water`"
    );
    assert_eq!(
        RecognitionError::NetworkError("timeout".to_string()).to_string(),
        "Recognition network error: timeout"
    );
    assert_eq!(
        RecognitionError::PermissionDenied("no camera".to_string()).to_string(),
        "Camera permission denied: no camera"
    );
}

// === HistoryError Tests ===

#[test]
fn history_error_display_variants() {
    assert_eq!(
        HistoryError::IoError("disk full".to_string()).to_string(),
        "History I/O error: disk full"
    );
    assert_eq!(
        HistoryError::SerializationError("bad token".to_string()).to_string(),
        "History serialization error: bad token"
    );
}

// === NavError Tests ===

#[test]
fn nav_error_invalid_transition_display() {
    let err = NavError::InvalidTransition {
        from: "detail".to_string(),
        to: "capture".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid transition: detail -> capture");
}
