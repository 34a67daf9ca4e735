use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
pub struct CreateEventReq {
    pub description: String,
    /// ISO-8601 timestamp; a value without an offset is taken as UTC.
    pub time: String,
}

#[derive(Deserialize, IntoParams)]
pub struct GetEventsParam {
    /// Inclusive lower bound on event time.
    pub from_time: Option<String>,
    /// Inclusive upper bound on event time.
    pub to_time: Option<String>,
    /// strftime pattern applied to rendered times.
    pub datetime_format: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct GetEventParam {
    /// strftime pattern applied to the rendered time.
    pub datetime_format: Option<String>,
}
