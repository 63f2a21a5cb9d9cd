use serde::{Deserialize, Serialize};

/// Navigable destinations in the app shell.
///
/// `Encyclopedia` and `Profile` are reachable placeholders: they render an
/// under-construction screen and only support the round trip back to Browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Browse,
    Capture,
    Detail,
    Encyclopedia,
    Profile,
}

impl Route {
    /// Human-readable label used by the console shell.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Browse => "browse",
            Route::Capture => "capture",
            Route::Detail => "detail",
            Route::Encyclopedia => "encyclopedia",
            Route::Profile => "profile",
        }
    }
}
