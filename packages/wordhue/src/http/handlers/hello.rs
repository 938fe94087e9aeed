use axum::{extract::Path, response::IntoResponse, Json};
use wordhue_types::HelloResponse;

#[utoipa::path(
    get,
    path = "/hello/{slug}",
    params(
        ("slug" = String, Path, description = "Anything, echoed back")
    ),
    responses(
        (status = 200, description = "Greeting", body = HelloResponse),
    ),
    description = "Echoes the path segment back"
)]
#[axum::debug_handler]
pub async fn handle_hello(Path(slug): Path<String>) -> impl IntoResponse {
    Json(HelloResponse {
        message: format!("Hello {slug}!"),
    })
}
