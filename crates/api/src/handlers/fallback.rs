use crate::dto::MessageResponse;
use axum::{http::StatusCode, Json};

pub async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: "Not Found",
        }),
    )
}
