use serde::Serialize;
use utoipa::ToSchema;

use entity::prelude::EventEntity;
use entity::time;

#[derive(Serialize, ToSchema)]
pub struct EventResp {
    pub id: i32,
    pub description: String,
    pub time: String,
}

impl EventResp {
    pub fn render(event: &EventEntity, pattern: Option<&str>) -> Self {
        Self {
            id: event.id,
            description: event.description.clone(),
            time: time::format_timestamp(event.time, pattern),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct DeleteEventResp {
    pub message: String,
}
