use crate::{NewSprint, Sprint, SprintPatch};

use chrono::{Duration, Utc};

fn new_sprint_input() -> NewSprint {
    NewSprint {
        name: "Sprint 1".to_string(),
        start_date: Utc::now(),
        end_date: Utc::now() + Duration::days(14),
        is_active: false,
    }
}

#[test]
fn test_sprint_new() {
    let sprint = Sprint::new(new_sprint_input());

    assert_eq!(sprint.name, "Sprint 1");
    assert!(!sprint.is_active);
}

#[test]
fn test_sprint_new_respects_given_activation() {
    let sprint = Sprint::new(NewSprint {
        is_active: true,
        ..new_sprint_input()
    });

    assert!(sprint.is_active);
}

#[test]
fn test_sprint_apply_merges_fields() {
    let mut sprint = Sprint::new(new_sprint_input());
    let end_date = sprint.end_date;

    sprint.apply(SprintPatch {
        name: Some("Sprint 1 (extended)".to_string()),
        ..SprintPatch::default()
    });

    assert_eq!(sprint.name, "Sprint 1 (extended)");
    assert_eq!(sprint.end_date, end_date);
}

#[test]
fn test_sprint_apply_cannot_touch_activation() {
    let mut sprint = Sprint::new(NewSprint {
        is_active: true,
        ..new_sprint_input()
    });

    sprint.apply(SprintPatch {
        name: Some("Renamed".to_string()),
        start_date: Some(Utc::now()),
        end_date: Some(Utc::now()),
    });

    assert!(sprint.is_active);
}
