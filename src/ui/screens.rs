//! Presentation Screens for PlantLens.
//!
//! Each screen renders from data handed to it and produces the text shown by
//! the console shell. User-facing copy matches the shipped app (Traditional
//! Chinese).

use crate::types::capture::CaptureState;
use crate::types::plant::PlantRecord;
use crate::types::route::Route;

/// Message shown on the capture screen after a failed recognition attempt,
/// prompting the user to re-attempt.
pub const RETRY_MESSAGE: &str = "AI 無法識別此植物，請嘗試更換角度或保持光線充足。";

/// Message shown when camera permission was denied.
pub const PERMISSION_MESSAGE: &str = "無法取得相機權限。請在系統設定中允許網頁存取相機。";

/// The screen currently visible, resolved from router and store state.
#[derive(Debug)]
pub enum Screen<'a> {
    Browse(&'a [PlantRecord]),
    Capture(CaptureState),
    Detail(&'a PlantRecord),
    /// Detail was entered but the carried reference no longer resolves
    /// (stale id, eviction). Recoverable, offers exactly one action.
    DetailMissing,
    UnderConstruction(Route),
}

impl<'a> Screen<'a> {
    /// Actions available on this screen, as labels the shell can offer.
    pub fn actions(&self) -> Vec<&'static str> {
        match self {
            Screen::Browse(_) => vec!["identify", "select", "encyclopedia", "profile"],
            Screen::Capture(_) => vec!["capture", "cancel"],
            Screen::Detail(_) => vec!["back"],
            Screen::DetailMissing => vec!["back"],
            Screen::UnderConstruction(_) => vec!["back"],
        }
    }

    pub fn render(&self) -> String {
        match self {
            Screen::Browse(records) => render_browse(records),
            Screen::Capture(state) => render_capture(*state),
            Screen::Detail(record) => render_detail(record),
            Screen::DetailMissing => render_detail_missing(),
            Screen::UnderConstruction(route) => render_under_construction(*route),
        }
    }
}

/// Browse screen: the identification history, newest first.
pub fn render_browse(records: &[PlantRecord]) -> String {
    if records.is_empty() {
        return "探索森林\n  還沒有紀錄，拍下你的第一株植物吧！".to_string();
    }
    let mut out = String::from("探索森林\n");
    for record in records {
        out.push_str(&format!(
            "  {} ({}) {}\n",
            record.profile.name,
            record.profile.scientific_name,
            stars(record.profile.difficulty)
        ));
    }
    out
}

/// Capture screen, varying with the camera lifecycle.
pub fn render_capture(state: CaptureState) -> String {
    match state {
        CaptureState::WarmingUp => "啟動相機中...".to_string(),
        CaptureState::Live => "將植物置於框內\n請確保光線充足，並盡量對準葉片或花朵".to_string(),
        CaptureState::Denied => PERMISSION_MESSAGE.to_string(),
    }
}

/// Detail screen: every field sourced from the carried record.
pub fn render_detail(record: &PlantRecord) -> String {
    let profile = &record.profile;
    let mut out = format!(
        "{}\n{}\n難易度 {}\n",
        profile.name,
        profile.scientific_name,
        stars(profile.difficulty)
    );
    if !profile.tags.is_empty() {
        out.push_str(&format!("#{}\n", profile.tags.join(" #")));
    }
    out.push_str(&format!("{}\n", profile.description));
    out.push_str(&format!(
        "光照：{}\n澆水：{}\n溫度：{}\n",
        profile.care_guide.light, profile.care_guide.water, profile.care_guide.temperature
    ));
    out.push_str(&format!("小知識：{}\n", profile.trivia));
    out
}

/// Fallback view for a detail screen with no resolvable record.
pub fn render_detail_missing() -> String {
    "哎呀！找不到植物資訊。\n[返回探索]".to_string()
}

/// Placeholder destinations still under construction.
pub fn render_under_construction(route: Route) -> String {
    format!(
        "{}\n正在秘密培育中...\n這項功能就像是剛播下的種子，我們正在細心澆水，敬請期待它的綻放！\n[回到探索森林]",
        route.label()
    )
}

fn stars(difficulty: u8) -> String {
    "★".repeat(difficulty as usize)
}
