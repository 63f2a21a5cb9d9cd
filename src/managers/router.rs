//! Screen Router for PlantLens.
//!
//! A finite state machine over the five named screens. The router holds only
//! the current route and a transient reference (record id) to the plant in
//! focus; the history store remains the single source of truth for record data.

use crate::types::errors::NavError;
use crate::types::route::Route;

/// Trait defining the navigation interface.
pub trait RouterTrait {
    fn route(&self) -> Route;
    fn selected_id(&self) -> Option<&str>;
    fn navigate(&mut self, target: Route) -> Result<(), NavError>;
    fn open_detail(&mut self, record_id: &str) -> Result<(), NavError>;
    fn back(&mut self);
}

/// In-memory navigation controller.
pub struct Router {
    route: Route,
    selected_id: Option<String>,
}

impl Router {
    /// Creates a router on the initial Browse screen with nothing in focus.
    pub fn new() -> Self {
        Self {
            route: Route::Browse,
            selected_id: None,
        }
    }

    fn invalid(from: Route, to: Route) -> NavError {
        NavError::InvalidTransition {
            from: from.label().to_string(),
            to: to.label().to_string(),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterTrait for Router {
    fn route(&self) -> Route {
        self.route
    }

    /// Id of the record currently in focus on the detail screen, if any.
    fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Moves to `target` if the transition is part of the screen graph:
    /// browse <-> capture, browse <-> encyclopedia/profile, and back to
    /// browse from any screen. Detail is entered via `open_detail`.
    fn navigate(&mut self, target: Route) -> Result<(), NavError> {
        match (self.route, target) {
            (Route::Browse, Route::Capture)
            | (Route::Browse, Route::Encyclopedia)
            | (Route::Browse, Route::Profile) => {
                self.route = target;
                Ok(())
            }
            (Route::Capture, Route::Browse)
            | (Route::Detail, Route::Browse)
            | (Route::Encyclopedia, Route::Browse)
            | (Route::Profile, Route::Browse) => {
                self.route = Route::Browse;
                self.selected_id = None;
                Ok(())
            }
            (from, to) => Err(Self::invalid(from, to)),
        }
    }

    /// Enters the detail screen carrying a record id, either from Browse
    /// (user selected a history entry) or from Capture (recognition succeeded).
    fn open_detail(&mut self, record_id: &str) -> Result<(), NavError> {
        match self.route {
            Route::Browse | Route::Capture => {
                self.selected_id = Some(record_id.to_string());
                self.route = Route::Detail;
                Ok(())
            }
            from => Err(Self::invalid(from, Route::Detail)),
        }
    }

    /// Returns to Browse from any screen and drops the selection.
    fn back(&mut self) {
        self.route = Route::Browse;
        self.selected_id = None;
    }
}
