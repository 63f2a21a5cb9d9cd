//! Capture Source for PlantLens.
//!
//! Abstraction over an environment-facing camera device: request permission,
//! warm up until the stream attaches, freeze single still frames while live,
//! and release all underlying tracks on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::types::capture::{CaptureState, CapturedImage};
use crate::types::errors::CaptureError;

/// Trait defining capture source operations.
///
/// Implementations must keep the stream live across repeated captures and
/// must stop all tracks on `release`, including when dropped.
pub trait CaptureSourceTrait {
    fn state(&self) -> CaptureState;
    fn capture_still(&mut self) -> Result<CapturedImage, CaptureError>;
    fn release(&mut self);
}

/// Deterministic camera stand-in serving fixed JPEG frames.
///
/// Models the device lifecycle: permission check at open, a warming-up
/// window until the first frame arrives, then a live stream that single-shot
/// captures do not disturb.
pub struct StaticCamera {
    state: CaptureState,
    frames: Vec<Vec<u8>>,
    cursor: usize,
    released: bool,
    /// Shared flag flipped on release so callers can observe track teardown
    /// after the camera itself is gone.
    released_flag: Option<Arc<AtomicBool>>,
}

impl StaticCamera {
    /// Opens the camera. A denied permission is terminal: the source reports
    /// `Denied` and every capture fails until the user re-enters the screen
    /// with permission granted out-of-band.
    pub fn open(permission_granted: bool, frames: Vec<Vec<u8>>) -> Self {
        let state = if permission_granted {
            CaptureState::WarmingUp
        } else {
            CaptureState::Denied
        };
        Self {
            state,
            frames,
            cursor: 0,
            released: false,
            released_flag: None,
        }
    }

    /// Attaches an external flag that is set when the source releases its tracks.
    pub fn with_release_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.released_flag = Some(flag);
        self
    }

    /// Advances the simulated device stream: the first tick after a
    /// permitted open attaches the stream and the source goes live.
    pub fn tick(&mut self) {
        if self.released {
            return;
        }
        if self.state == CaptureState::WarmingUp && !self.frames.is_empty() {
            self.state = CaptureState::Live;
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl CaptureSourceTrait for StaticCamera {
    fn state(&self) -> CaptureState {
        self.state
    }

    /// Freezes the current frame into an encoded still image. Only valid
    /// while live; the stream stays live afterwards so captures can repeat.
    fn capture_still(&mut self) -> Result<CapturedImage, CaptureError> {
        if self.released {
            return Err(CaptureError::Released);
        }
        match self.state {
            CaptureState::Denied => Err(CaptureError::PermissionDenied(
                "camera access was not granted".to_string(),
            )),
            CaptureState::WarmingUp => Err(CaptureError::NotLive),
            CaptureState::Live => {
                let frame = self.frames[self.cursor % self.frames.len()].clone();
                self.cursor += 1;
                Ok(CapturedImage::new(frame))
            }
        }
    }

    /// Stops all underlying tracks. Idempotent; also runs on drop.
    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.frames.clear();
        if let Some(flag) = &self.released_flag {
            flag.store(true, Ordering::SeqCst);
        }
    }
}

impl Drop for StaticCamera {
    fn drop(&mut self) {
        self.release();
    }
}
