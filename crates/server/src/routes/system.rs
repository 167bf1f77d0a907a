use actix_web::{get, HttpResponse};

/// Liveness probe
#[get("/health")]
pub async fn health() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
    })))
}
