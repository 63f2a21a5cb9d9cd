//! PlantLens — a mobile-styled plant identification app core.
//!
//! Entry point: runs an interactive console demo of every component. The
//! network-backed Gemini client is exercised only when `GEMINI_API_KEY` is
//! set; otherwise a canned recognizer stands in.

use plantlens::app::App;
use plantlens::managers::history_store::{HistoryStore, HistoryStoreTrait, HISTORY_CAPACITY};
use plantlens::managers::router::{Router, RouterTrait};
use plantlens::services::capture::{CaptureSourceTrait, StaticCamera};
use plantlens::services::recognition::{parse_profile, GeminiClient, Recognizer};
use plantlens::types::capture::{CaptureState, CapturedImage};
use plantlens::types::errors::RecognitionError;
use plantlens::types::plant::PlantProfile;
use plantlens::types::route::Route;
use plantlens::ui::screens;

const SAMPLE_RESPONSE: &str = r#"{
  "name": "龜背芋",
  "scientificName": "Monstera deliciosa",
  "description": "葉片有天然裂孔的大型觀葉植物，好養又有型。",
  "trivia": "它的裂孔是為了讓陽光穿透到下層葉片，堪稱植物界的天窗設計師！",
  "difficulty": 1,
  "tags": ["觀葉", "室內", "耐陰"],
  "careGuide": {
    "light": "明亮散射光，避免直射",
    "water": "土壤表面乾燥後澆透",
    "temperature": "18-27°C"
  }
}"#;

// Minimal JPEG header bytes; content is never validated locally.
fn sample_frame() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0xFF, 0xD9]
}

/// Canned recognizer used when no API key is configured.
struct CannedRecognizer;

impl Recognizer for CannedRecognizer {
    async fn recognize(&self, _image: &CapturedImage) -> Result<PlantProfile, RecognitionError> {
        parse_profile(SAMPLE_RESPONSE)
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║            PlantLens v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║   Point, shoot, and meet the plant in front of you       ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    demo_history_store();
    demo_router();
    demo_capture();
    demo_recognition_parsing();
    demo_screens();
    demo_app_core().await;

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    if std::env::var("GEMINI_API_KEY").is_ok() {
        println!("  GEMINI_API_KEY detected — GeminiClient is ready for live calls.");
        let client = GeminiClient::new(std::env::var("GEMINI_API_KEY").unwrap());
        println!("  Model: {}", client.model());
    } else {
        println!("  Set GEMINI_API_KEY to identify real plants with Gemini.");
    }
    println!("═══════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────");
    println!("  🌿 {}", name);
    println!("───────────────────────────────────────────────────────────");
}

fn demo_history_store() {
    section("History Store");

    let dir = std::env::temp_dir().join("plantlens-demo");
    let path = dir.join("history.json").to_string_lossy().to_string();
    let _ = std::fs::remove_file(&path);

    let mut store = HistoryStore::new(Some(path.clone()));
    println!("  Capacity: {} records, newest first", store.capacity());

    for i in 1..=(HISTORY_CAPACITY + 1) {
        let mut profile = parse_profile(SAMPLE_RESPONSE).unwrap();
        profile.name = format!("植物 #{}", i);
        store.append(profile);
    }
    println!(
        "  Appended {} records -> store holds {} (oldest evicted)",
        HISTORY_CAPACITY + 1,
        store.len()
    );
    println!("  Newest: {}", store.records()[0].profile.name);

    let mut reloaded = HistoryStore::new(Some(path.clone()));
    let _ = reloaded.load();
    println!("  Reloaded from disk: {} records", reloaded.len());
    let _ = std::fs::remove_file(&path);
    println!("  ✓ HistoryStore OK");
    println!();
}

fn demo_router() {
    section("Screen Router");

    let mut router = Router::new();
    println!("  Initial route: {}", router.route().label());

    router.navigate(Route::Capture).unwrap();
    println!("  -> {}", router.route().label());
    router.open_detail("demo-id").unwrap();
    println!("  -> {} (carrying demo-id)", router.route().label());
    router.back();
    println!("  -> {} (selection cleared)", router.route().label());

    let err = router.navigate(Route::Detail).unwrap_err();
    println!("  Rejected: {}", err);
    println!("  ✓ Router OK");
    println!();
}

fn demo_capture() {
    section("Capture Source");

    let mut camera = StaticCamera::open(true, vec![sample_frame()]);
    println!("  Opened: {:?}", camera.state());
    camera.tick();
    println!("  Stream attached: {:?}", camera.state());

    let image = camera.capture_still().unwrap();
    println!(
        "  Froze a {}-byte JPEG frame; stream still {:?}",
        image.jpeg_bytes().len(),
        camera.state()
    );
    println!("  Data URL prefix: {}...", &image.data_url()[..30]);

    camera.release();
    println!("  Released: tracks stopped = {}", camera.is_released());

    let mut denied = StaticCamera::open(false, vec![sample_frame()]);
    let err = denied.capture_still().unwrap_err();
    println!("  Denied camera: {}", err);
    println!("  ✓ CaptureSource OK");
    println!();
}

fn demo_recognition_parsing() {
    section("Recognition Parsing");

    let profile = parse_profile(SAMPLE_RESPONSE).unwrap();
    println!("  Parsed: {} ({})", profile.name, profile.scientific_name);
    println!("  Tags: {}", profile.tags.join(", "));

    let err = parse_profile("").unwrap_err();
    println!("  Empty text: {}", err);
    let err = parse_profile("not json at all").unwrap_err();
    println!("  Bad text: {}", err);
    let err = parse_profile(r#"{"name": "x"}"#).unwrap_err();
    println!("  Missing fields: {}", err);
    println!("  ✓ Recognition parsing OK");
    println!();
}

fn demo_screens() {
    section("Presentation Screens");

    println!("{}", indent(&screens::render_capture(CaptureState::Live)));
    println!("  (after a failed attempt) {}", screens::RETRY_MESSAGE);
    println!("{}", indent(&screens::render_detail_missing()));
    println!("{}", indent(&screens::render_under_construction(Route::Encyclopedia)));
    println!("  ✓ Screens OK");
    println!();
}

async fn demo_app_core() {
    section("App Core (end-to-end)");

    let dir = std::env::temp_dir().join("plantlens-demo");
    let path = dir.join("app-history.json").to_string_lossy().to_string();
    let _ = std::fs::remove_file(&path);

    let mut app = App::new(CannedRecognizer, Some(path.clone()));
    app.router_mut().navigate(Route::Capture).unwrap();
    app.set_camera_state(CaptureState::Live);
    println!("  On capture screen, trigger enabled: {}", app.can_capture());

    let mut camera = StaticCamera::open(true, vec![sample_frame()]);
    camera.tick();

    let id = app.identify(&mut camera).await.unwrap();
    println!("  Identified! New record id: {}", id);
    println!("  Route: {}", app.router().route().label());
    println!("{}", indent(&app.screen().render()));

    let _ = std::fs::remove_file(&path);
    println!("  ✓ App core OK");
    println!();
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|l| format!("  {}", l))
        .collect::<Vec<_>>()
        .join("\n")
}
