use serde::{Deserialize, Serialize};

/// Care instructions for an identified plant. All three fields are required
/// by the recognition response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareGuide {
    pub light: String,
    pub water: String,
    pub temperature: String,
}

/// A recognition result as returned by the inference service, before the
/// history store assigns its bookkeeping fields.
///
/// Field names serialize camelCase to match the JSON shape the service is
/// asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantProfile {
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub trivia: String,
    /// Star rating 1-3. The external contract is trusted; no range check here.
    pub difficulty: u8,
    /// Display order is significant; duplicates are kept as-is.
    pub tags: Vec<String>,
    pub care_guide: CareGuide,
    /// Reference to the captured frame, attached by the caller
    /// (a `data:image/jpeg;base64,...` URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A stored recognition result plus its store-assigned id and capture timestamp.
///
/// Only the history store creates these; a `PlantRecord` is never mutated
/// after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub id: String,
    /// Capture instant in milliseconds since the UNIX epoch. Non-decreasing
    /// across appends within one store lifetime.
    pub timestamp: i64,
    #[serde(flatten)]
    pub profile: PlantProfile,
}
