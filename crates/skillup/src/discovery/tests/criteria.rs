use crate::discovery::{CompensationRange, FilterCriteria, InvalidCompensationRange, SortKey};

#[test]
fn sort_key_labels_fail_closed() {
    assert_eq!(SortKey::from_label("match"), SortKey::Match);
    assert_eq!(SortKey::from_label("salary"), SortKey::Compensation);
    assert_eq!(SortKey::from_label("Recent"), SortKey::Recency);
    assert_eq!(SortKey::from_label("duration"), SortKey::Duration);
    assert_eq!(SortKey::from_label("popularity"), SortKey::Unordered);
}

#[test]
fn sort_key_deserializes_unknown_labels_as_unordered() {
    let key: SortKey = serde_json::from_str("\"trending\"").expect("label parses");

    assert_eq!(key, SortKey::Unordered);
}

#[test]
fn compensation_range_rejects_inverted_bounds() {
    assert_eq!(
        CompensationRange::new(10, 5),
        Err(InvalidCompensationRange { min: 10, max: 5 })
    );
    assert!(serde_json::from_str::<CompensationRange>(r#"{"min": 9, "max": 1}"#).is_err());
}

#[test]
fn toggles_add_and_remove_facet_values() {
    let mut criteria = FilterCriteria::new();

    criteria.toggle_location("Remoto");
    criteria.toggle_skill("SQL");
    assert!(criteria.locations.contains("Remoto"));
    assert!(criteria.skills.contains("SQL"));

    criteria.toggle_location("Remoto");
    criteria.toggle_skill("SQL");
    assert!(criteria.locations.is_empty());
    assert!(criteria.skills.is_empty());
}

#[test]
fn reset_restores_defaults() {
    let mut criteria = FilterCriteria::new()
        .with_search("dados")
        .with_location("Remoto")
        .with_minimum_match(80)
        .sorted_by(SortKey::Compensation);
    assert!(criteria.has_active_filters());

    criteria.reset();

    assert_eq!(criteria, FilterCriteria::default());
    assert_eq!(criteria.sort_key, SortKey::Match);
    assert!(!criteria.has_active_filters());
}

#[test]
fn criteria_deserialize_with_defaults() {
    let criteria: FilterCriteria =
        serde_json::from_str(r#"{"skills": ["Python"], "sort_key": "salary"}"#)
            .expect("criteria parse");

    assert!(criteria.search_text.is_empty());
    assert!(criteria.skills.contains("Python"));
    assert_eq!(criteria.minimum_match, 0);
    assert_eq!(criteria.sort_key, SortKey::Compensation);
}
