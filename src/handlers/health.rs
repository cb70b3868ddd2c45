use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Resp {
    status: &'static str,
}

#[tracing::instrument]
pub async fn handler() -> Json<Resp> {
    Json(Resp { status: "ok" })
}
