//! App Core for PlantLens.
//!
//! Central struct owning the history store, the router, and the recognition
//! client. State is passed through this single owning context; nothing is
//! reached through ambient globals.

use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::managers::router::{Router, RouterTrait};
use crate::services::capture::CaptureSourceTrait;
use crate::services::recognition::Recognizer;
use crate::types::capture::CaptureState;
use crate::types::errors::{NavError, RecognitionError};
use crate::types::route::Route;
use crate::ui::screens::Screen;

/// Central application struct.
///
/// Generic over the recognizer so tests can substitute a fake for the
/// network-backed client.
pub struct App<R: Recognizer> {
    history: HistoryStore,
    router: Router,
    recognizer: R,
    /// Capacity-1 admission gate: while a recognition request is in flight
    /// the capture trigger reports disabled. Once issued, a request runs to
    /// completion; navigating away does not abort it.
    scanning: bool,
    /// Last-known camera lifecycle state, reported by the capture screen.
    camera_state: CaptureState,
}

impl<R: Recognizer> App<R> {
    /// Creates the app, loading persisted history from `history_path` (or
    /// the platform data directory when `None`).
    pub fn new(recognizer: R, history_path: Option<String>) -> Self {
        Self {
            history: HistoryStore::new(history_path),
            router: Router::new(),
            recognizer,
            scanning: false,
            camera_state: CaptureState::WarmingUp,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    /// Whether the capture trigger is enabled: on the capture screen with no
    /// request outstanding.
    pub fn can_capture(&self) -> bool {
        !self.scanning && self.router.route() == Route::Capture
    }

    /// Called by the capture screen when the device stream changes state.
    pub fn set_camera_state(&mut self, state: CaptureState) {
        self.camera_state = state;
    }

    /// Freezes a frame, sends it for recognition, appends the result to the
    /// history, and transitions capture -> detail. Returns the new record id.
    ///
    /// On any failure the history is unchanged and the router stays on the
    /// capture screen so the user can re-attempt. Camera-side failures
    /// surface as the permission-denied reason.
    pub async fn identify(
        &mut self,
        camera: &mut impl CaptureSourceTrait,
    ) -> Result<String, RecognitionError> {
        self.scanning = true;
        let result = self.identify_inner(camera).await;
        self.scanning = false;
        result
    }

    async fn identify_inner(
        &mut self,
        camera: &mut impl CaptureSourceTrait,
    ) -> Result<String, RecognitionError> {
        let image = camera
            .capture_still()
            .map_err(|e| RecognitionError::PermissionDenied(e.to_string()))?;

        let mut profile = self.recognizer.recognize(&image).await?;
        profile.image_url = Some(image.data_url());

        let id = self.history.append(profile).id.clone();
        if let Err(e) = self.router.open_detail(&id) {
            tracing::warn!("detail transition failed after recognition: {}", e);
        }
        Ok(id)
    }

    /// User selected a history entry on the browse screen.
    pub fn select_plant(&mut self, record_id: &str) -> Result<(), NavError> {
        self.router.open_detail(record_id)
    }

    /// Resolves the current route and store contents into the visible screen.
    ///
    /// A detail route whose carried id no longer resolves (stale reference,
    /// eviction) yields the recoverable fallback view.
    pub fn screen(&self) -> Screen<'_> {
        match self.router.route() {
            Route::Browse => Screen::Browse(self.history.records()),
            Route::Capture => Screen::Capture(self.camera_state),
            Route::Detail => match self.router.selected_id().and_then(|id| self.history.get(id)) {
                Some(record) => Screen::Detail(record),
                None => Screen::DetailMissing,
            },
            route @ (Route::Encyclopedia | Route::Profile) => Screen::UnderConstruction(route),
        }
    }
}
