//! API documentation routes.

use axum::response::Html;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Path of the interactive documentation page, advertised by `GET /`.
pub const DOCS_PATH: &str = "/docs";

/// Path of the machine-readable OpenAPI document.
pub const OPENAPI_PATH: &str = "/openapi.json";

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Oasis API - Swagger UI</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// Mount the OpenAPI document and the Swagger UI page.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_json))
        .route(DOCS_PATH, get(docs_page))
}
