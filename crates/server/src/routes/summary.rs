use actix_web::{post, web, HttpResponse};
use aisummary_llm::SummaryRequest;

use crate::state::AppState;
use crate::types::{ErrorResponse, GenerateSummaryRequest, SummaryResponse};

#[post("/summary")]
pub async fn generate_summary(
    req: web::Json<GenerateSummaryRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    if req.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("No text provided")));
    }

    if req.min_length == 0 || req.min_length > req.max_length {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "min_length must be positive and not exceed max_length",
        )));
    }

    let settings = state.settings.read().await.get();
    let request = SummaryRequest::new(req.text.clone(), req.max_length, req.min_length);

    let result = state.generator.generate(&request, &settings).await;

    if result.success {
        Ok(HttpResponse::Ok().json(SummaryResponse {
            summary: result.text,
            success: true,
        }))
    } else {
        let message = result
            .error
            .unwrap_or_else(|| "Failed to generate summary".to_string());
        Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(message)))
    }
}
