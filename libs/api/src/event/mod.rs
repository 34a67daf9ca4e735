use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};

use entity::time;
use repository::Repository;

pub mod request;
pub mod response;

use crate::response::{ApiError, ApiResponse};

use self::{
    request::{CreateEventReq, GetEventParam, GetEventsParam},
    response::{DeleteEventResp, EventResp},
};

fn parse_field(
    field: &str,
    value: &str,
) -> Result<DateTime<Utc>, ApiError> {
    time::parse_timestamp(value).map_err(|e| {
        ApiError::ClientError(format!("invalid value for field `{field}`: {e}"))
    })
}

#[utoipa::path(
    post,
    path = "/events/",
    request_body = CreateEventReq,
    responses(
        (status = 200, description = "Event created", body = EventResp),
        (status = 400, description = "Unparseable time or duplicate event"),
    ),
    tag = "events"
)]
pub async fn create_event(
    State(repo): State<Repository>,
    Json(body): Json<CreateEventReq>,
) -> ApiResponse<Json<EventResp>> {
    // Normalize to UTC before anything touches the store.
    let utc_time = parse_field("time", &body.time)?;

    let event = repo.event.create(body.description, utc_time).await?;

    Ok(Json(EventResp::render(&event, None)))
}

#[utoipa::path(
    get,
    path = "/events",
    params(GetEventsParam),
    responses(
        (status = 200, description = "Events in range, creation order", body = [EventResp]),
        (status = 400, description = "Unparseable range bound"),
    ),
    tag = "events"
)]
pub async fn get_events(
    State(repo): State<Repository>,
    Query(params): Query<GetEventsParam>,
) -> ApiResponse<Json<Vec<EventResp>>> {
    let from_time = params
        .from_time
        .as_deref()
        .map(|v| parse_field("from_time", v))
        .transpose()?;
    let to_time = params
        .to_time
        .as_deref()
        .map(|v| parse_field("to_time", v))
        .transpose()?;

    let events = repo.event.find_in_range(from_time, to_time).await?;

    let response = events
        .iter()
        .map(|e| EventResp::render(e, params.datetime_format.as_deref()))
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ("id" = i32, Path, description = "Event id"),
        GetEventParam,
    ),
    responses(
        (status = 200, description = "Matching event", body = EventResp),
        (status = 404, description = "No such event"),
    ),
    tag = "events"
)]
pub async fn get_event(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
    Query(params): Query<GetEventParam>,
) -> ApiResponse<Json<EventResp>> {
    let event = repo.event.find_by_id(id).await?;

    let Some(event) = event else {
        return Err(ApiError::NotFound(format!(
            "Event with ID {id} not found"
        )));
    };

    Ok(Json(EventResp::render(
        &event,
        params.datetime_format.as_deref(),
    )))
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = DeleteEventResp),
        (status = 404, description = "No such event"),
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<DeleteEventResp>> {
    let deleted = repo.event.delete_by_id(id).await?;

    if !deleted {
        return Err(ApiError::NotFound(format!(
            "Event with ID {id} not found"
        )));
    }

    Ok(Json(DeleteEventResp {
        message: format!("Event with ID {id} has been deleted successfully"),
    }))
}
