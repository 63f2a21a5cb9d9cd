//! Property-based tests for History Store operations.
//!
//! For any sequence of appended profiles, the store never exceeds its
//! capacity, retains exactly the most recent records newest-first, and
//! assigns unique ids with non-decreasing timestamps.

use plantlens::managers::history_store::{HistoryStore, HistoryStoreTrait, HISTORY_CAPACITY};
use plantlens::types::plant::{CareGuide, PlantProfile};
use proptest::prelude::*;

/// Strategy for generating recognition-result profiles with printable names
/// and a small tag set.
fn arb_profile() -> impl Strategy<Value = PlantProfile> {
    (
        "[A-Za-z][A-Za-z ]{0,20}",
        1u8..=3,
        proptest::collection::vec("[a-z]{1,8}", 0..4),
    )
        .prop_map(|(name, difficulty, tags)| PlantProfile {
            scientific_name: format!("{} spp.", name.trim()),
            description: "generated".to_string(),
            trivia: "generated".to_string(),
            name,
            difficulty,
            tags,
            care_guide: CareGuide {
                light: "bright".to_string(),
                water: "weekly".to_string(),
                temperature: "mild".to_string(),
            },
            image_url: None,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // For all sequences of appends, length never exceeds capacity and the
    // retained records are the most recent ones in newest-first order.
    #[test]
    fn append_sequences_respect_capacity_and_order(
        profiles in proptest::collection::vec(arb_profile(), 1..45),
    ) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("history.json").to_string_lossy().to_string();
        let mut store = HistoryStore::new(Some(path));

        for profile in &profiles {
            store.append(profile.clone());
            prop_assert!(store.len() <= HISTORY_CAPACITY);
        }

        // The survivors are the last min(n, capacity) appends, reversed.
        let expected: Vec<&PlantProfile> = profiles
            .iter()
            .rev()
            .take(HISTORY_CAPACITY)
            .collect();
        prop_assert_eq!(store.len(), expected.len());
        for (record, profile) in store.records().iter().zip(expected) {
            prop_assert_eq!(&record.profile.name, &profile.name);
            prop_assert_eq!(&record.profile.tags, &profile.tags);
        }

        // Unique ids across the retained sequence.
        let mut ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), store.len());

        // Newest-first implies non-increasing timestamps front to back.
        for pair in store.records().windows(2) {
            prop_assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }
}
