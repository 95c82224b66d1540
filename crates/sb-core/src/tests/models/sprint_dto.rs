use crate::{CoreError, NewSprint, Sprint, SprintDto};

use chrono::{Duration, Utc};

fn sample_sprint() -> Sprint {
    Sprint::new(NewSprint {
        name: "Sprint 4".to_string(),
        start_date: Utc::now(),
        end_date: Utc::now() + Duration::days(14),
        is_active: true,
    })
}

#[test]
fn test_sprint_dto_round_trip() {
    let sprint = sample_sprint();

    let dto = SprintDto::from(&sprint);
    let decoded = Sprint::try_from(dto).unwrap();

    assert_eq!(decoded.id, sprint.id);
    assert_eq!(decoded.name, sprint.name);
    assert_eq!(decoded.start_date, sprint.start_date);
    assert_eq!(decoded.end_date, sprint.end_date);
    assert_eq!(decoded.is_active, sprint.is_active);
}

#[test]
fn test_sprint_dto_serializes_camel_case_keys() {
    let json = serde_json::to_value(SprintDto::from(&sample_sprint())).unwrap();
    let object = json.as_object().unwrap();

    assert!(object.contains_key("startDate"));
    assert!(object.contains_key("endDate"));
    assert!(object.contains_key("isActive"));
}

#[test]
fn test_sprint_dto_rejects_invalid_timestamp() {
    let mut dto = SprintDto::from(&sample_sprint());
    dto.end_date = "14 days from now".to_string();

    let result = Sprint::try_from(dto);

    assert!(matches!(
        result,
        Err(CoreError::Timestamp { field: "sprint.endDate", .. })
    ));
}
