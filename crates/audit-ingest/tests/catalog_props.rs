//! Property tests for critical-feature extraction.

use std::collections::BTreeSet;

use audit_ingest::{CatalogRow, extract_critical_features};
use proptest::prelude::*;

fn catalog_row() -> impl Strategy<Value = CatalogRow> {
    (
        proptest::option::of("[A-E ]{0,2}"),
        prop_oneof![
            Just("Critical".to_string()),
            Just("critical".to_string()),
            Just("Optional".to_string()),
            Just(String::new()),
        ],
    )
        .prop_map(|(name, classification)| CatalogRow {
            line: 0,
            name: name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            classification: Some(classification),
            property: None,
        })
}

proptest! {
    #[test]
    fn extracted_names_are_unique_and_critical(rows in proptest::collection::vec(catalog_row(), 0..40)) {
        let features = extract_critical_features(&rows);
        let names = features.names();

        let unique: BTreeSet<&str> = names.iter().copied().collect();
        prop_assert_eq!(unique.len(), names.len());

        for name in &names {
            let found = rows.iter().any(|row| {
                row.name.as_deref() == Some(*name)
                    && row.classification.as_deref() == Some("Critical")
            });
            prop_assert!(found);
        }

        let expected: BTreeSet<&str> = rows
            .iter()
            .filter(|row| row.is_critical())
            .filter_map(|row| row.name.as_deref())
            .collect();
        prop_assert_eq!(unique, expected);
    }
}
