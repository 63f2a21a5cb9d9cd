//! Unit tests for the screen Router state machine.
//!
//! The transition table mirrors the app's screen graph: browse <-> capture,
//! capture/browse -> detail, detail -> browse, and round trips to the two
//! placeholder destinations.

use plantlens::managers::router::{Router, RouterTrait};
use plantlens::types::route::Route;
use rstest::rstest;

#[test]
fn test_initial_state_is_browse_with_no_selection() {
    let router = Router::new();
    assert_eq!(router.route(), Route::Browse);
    assert!(router.selected_id().is_none());
}

#[rstest]
#[case(Route::Capture)]
#[case(Route::Encyclopedia)]
#[case(Route::Profile)]
fn test_browse_reaches_each_destination_and_returns(#[case] target: Route) {
    let mut router = Router::new();

    router.navigate(target).unwrap();
    assert_eq!(router.route(), target);

    router.navigate(Route::Browse).unwrap();
    assert_eq!(router.route(), Route::Browse);
}

#[rstest]
#[case(Route::Encyclopedia, Route::Profile)]
#[case(Route::Capture, Route::Encyclopedia)]
#[case(Route::Profile, Route::Capture)]
#[case(Route::Browse, Route::Detail)]
fn test_cross_screen_transitions_are_rejected(#[case] first: Route, #[case] second: Route) {
    let mut router = Router::new();
    if first != Route::Browse {
        router.navigate(first).unwrap();
    }

    let err = router.navigate(second).unwrap_err();
    assert!(err.to_string().starts_with("Invalid transition:"));
    assert_eq!(router.route(), first);
}

#[test]
fn test_capture_to_detail_carries_record_id() {
    let mut router = Router::new();
    router.navigate(Route::Capture).unwrap();

    router.open_detail("rec-42").unwrap();
    assert_eq!(router.route(), Route::Detail);
    assert_eq!(router.selected_id(), Some("rec-42"));
}

#[test]
fn test_browse_to_detail_via_selection() {
    let mut router = Router::new();
    router.open_detail("rec-7").unwrap();
    assert_eq!(router.route(), Route::Detail);
    assert_eq!(router.selected_id(), Some("rec-7"));
}

#[test]
fn test_detail_cannot_be_entered_from_stubs() {
    let mut router = Router::new();
    router.navigate(Route::Encyclopedia).unwrap();

    assert!(router.open_detail("rec-1").is_err());
    assert_eq!(router.route(), Route::Encyclopedia);
    assert!(router.selected_id().is_none());
}

#[test]
fn test_back_returns_to_browse_and_clears_selection() {
    let mut router = Router::new();
    router.open_detail("rec-9").unwrap();

    router.back();
    assert_eq!(router.route(), Route::Browse);
    assert!(router.selected_id().is_none());
}

#[test]
fn test_leaving_detail_by_navigate_clears_selection() {
    let mut router = Router::new();
    router.open_detail("rec-3").unwrap();

    router.navigate(Route::Browse).unwrap();
    assert!(router.selected_id().is_none());
}

#[test]
fn test_capture_cancel_returns_to_browse() {
    let mut router = Router::new();
    router.navigate(Route::Capture).unwrap();
    router.navigate(Route::Browse).unwrap();
    assert_eq!(router.route(), Route::Browse);
}
