use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct User {
    id: i64,
    name: String,
}

/// Canned directory listing. The server ships a single sample user; there is
/// no store behind this.
#[tracing::instrument]
pub async fn handler() -> Json<Vec<User>> {
    Json(vec![User {
        id: 1,
        name: "Alice".to_string(),
    }])
}
