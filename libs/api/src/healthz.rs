use axum::Json;
use serde_json::{json, Value};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn get_health() -> Json<Value> {
    Json(json!({ "message": "Welcome To Calendar Service" }))
}
