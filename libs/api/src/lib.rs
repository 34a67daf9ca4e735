use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};

use repository::Repository;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod event;
pub mod healthz;
pub mod not_found;
mod response;

pub use response::{ApiError, ApiResponse};

/// Builds the service router. Handlers receive the repository through
/// router state; nothing else is shared across requests.
pub fn serve(
    repository: Repository,
    allow_origins: &[String],
) -> anyhow::Result<Router> {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            event::create_event,
            event::get_events,
            event::get_event,
            event::delete_event,
            healthz::get_health,
        ),
        components(schemas(
            event::request::CreateEventReq,
            event::response::EventResp,
            event::response::DeleteEventResp,
        )),
        tags(
            (name = "events", description = "Calendar event management API")
        )
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let origins = allow_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                anyhow::anyhow!("invalid allowed origin `{origin}`: {e}")
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    // axum does not redirect on a trailing slash, so the collection
    // routes are registered under both forms.
    let event_collection = get(event::get_events).post(event::create_event);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/", get(healthz::get_health))
        .route("/events", event_collection.clone())
        .route("/events/", event_collection)
        .route(
            "/events/:id",
            get(event::get_event).delete(event::delete_event),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .fallback(not_found::get_404)
        .with_state(repository);

    Ok(router)
}
