//! OpenAPI description of the HTTP surface.
//!
//! `ApiDoc::openapi()` builds the document from the handler annotations and
//! the `ToSchema` types. It is served at `/openapi.json` and rendered at
//! `/docs`.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers::activity;
use crate::routes::health;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Oasis API",
        description = "Catalogue of short mood-boosting activities"
    ),
    paths(
        // health
        health::health_check,
        health::root,
        // activities
        activity::list_activities,
        activity::create_activity,
    ),
    components(schemas(ErrorResponse)),
    tags(
        (name = "health", description = "Liveness and service metadata"),
        (name = "activities", description = "Activity catalogue"),
    )
)]
pub struct ApiDoc;
