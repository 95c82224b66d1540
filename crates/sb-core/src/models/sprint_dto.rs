use crate::{CoreError, CoreResult, Sprint, parse_timestamp, parse_uuid};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintDto {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

impl From<&Sprint> for SprintDto {
    fn from(sprint: &Sprint) -> Self {
        Self {
            id: sprint.id.to_string(),
            name: sprint.name.clone(),
            start_date: sprint.start_date.to_rfc3339(),
            end_date: sprint.end_date.to_rfc3339(),
            is_active: sprint.is_active,
        }
    }
}

impl TryFrom<SprintDto> for Sprint {
    type Error = CoreError;

    fn try_from(dto: SprintDto) -> CoreResult<Self> {
        Ok(Sprint {
            id: parse_uuid(&dto.id, "sprint.id")?,
            name: dto.name,
            start_date: parse_timestamp(&dto.start_date, "sprint.startDate")?,
            end_date: parse_timestamp(&dto.end_date, "sprint.endDate")?,
            is_active: dto.is_active,
        })
    }
}
