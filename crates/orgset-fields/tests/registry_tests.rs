use orgset_fields::{
    extract_multiline_fields, format_resolve_age, join_multiline_fields, nearest_allowed_value,
    FieldContext, FieldRegistry, Organization, Team, RESOLVE_AGE_ALLOWED_VALUES,
};
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn allowed_values_sequence_shape() {
    let values = &*RESOLVE_AGE_ALLOWED_VALUES;

    assert_eq!(values[0], 0);
    assert!(*values.last().unwrap() <= 720);

    // Strictly increasing, and the step widens monotonically.
    let mut last_step = 0;
    for pair in values.windows(2) {
        let step = pair[1] - pair[0];
        assert!(step > 0, "sequence must be strictly increasing");
        assert!(step >= last_step, "step must not shrink: {pair:?}");
        last_step = step;
    }

    // Documented breakpoints.
    for expected in [10, 11, 12, 15, 18, 21, 24, 30, 36, 48, 72, 720] {
        assert!(values.contains(&expected), "missing {expected}");
    }
}

#[test]
fn label_law_over_the_full_sequence() {
    for &v in RESOLVE_AGE_ALLOWED_VALUES.iter() {
        let label = format_resolve_age(i64::from(v));
        if v == 0 {
            assert_eq!(label, "Disabled");
        } else if v > 23 && v % 24 == 0 {
            assert!(
                label.starts_with(&(v / 24).to_string()) && label.contains("day"),
                "{v} -> {label}"
            );
        } else {
            assert!(
                label.starts_with(&v.to_string()) && label.contains("hour"),
                "{v} -> {label}"
            );
        }
    }
}

fn org_with_override(value: Value) -> Organization {
    Organization::new("1", "acme", "Acme").with_setting("dataScrubber", value)
}

proptest! {
    #[test]
    fn multiline_round_trip_is_idempotent(lines in prop::collection::vec("[a-z][a-z0-9-]{0,12}", 0..8)) {
        let joined = join_multiline_fields(&lines);
        let parsed = extract_multiline_fields(&joined);
        prop_assert_eq!(&parsed, &lines);
        prop_assert_eq!(join_multiline_fields(&parsed), joined);
    }

    #[test]
    fn snapped_values_are_members_of_the_table(hours in -100i64..2000) {
        let snapped = nearest_allowed_value(hours);
        prop_assert!(RESOLVE_AGE_ALLOWED_VALUES.contains(&snapped));

        // No other member is strictly closer.
        for &v in RESOLVE_AGE_ALLOWED_VALUES.iter() {
            let snapped_distance = (i64::from(snapped) - hours).abs();
            prop_assert!((i64::from(v) - hours).abs() >= snapped_distance);
        }
    }

    #[test]
    fn truthy_override_always_wins(org_value in prop_oneof![Just(json!(true)), Just(json!(1)), Just(json!("on"))],
                                   edited in prop_oneof![Just(json!(true)), Just(json!(false)), Just(Value::Null)]) {
        let org = org_with_override(org_value.clone());
        let ctx = FieldContext::new(&org, "dataScrubber");
        let registry = FieldRegistry::project_general();
        let field = registry.get("dataScrubber").unwrap();

        prop_assert_eq!(field.apply_set_value(edited, &ctx), org_value);
    }

    #[test]
    fn team_visibility_law(has_new_teams in any::<bool>(), team_count in 0usize..4) {
        let teams = (0..team_count)
            .map(|i| Team::new(format!("team-{i}"), format!("Team {i}")).member())
            .collect();
        let features: &[&str] = if has_new_teams { &["new-teams"] } else { &[] };
        let org = Organization::new("1", "acme", "Acme")
            .with_features(features.iter().copied())
            .with_teams(teams);

        let ctx = FieldContext::new(&org, "team");
        let registry = FieldRegistry::project_general();
        let resolved = registry.resolve(&ctx, &Value::Null).unwrap();

        let expected = !has_new_teams && team_count > 1;
        prop_assert_eq!(resolved.visible, expected);
    }
}
