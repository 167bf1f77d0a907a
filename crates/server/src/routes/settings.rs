use actix_web::{get, put, web, HttpResponse};
use aisummary_common::SummaryConfig;

use crate::state::AppState;
use crate::types::ErrorResponse;

#[get("/settings")]
pub async fn get_settings(
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let store = state.settings.read().await;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "settings": store.get(),
        "updated_at": store.updated_at(),
    })))
}

#[put("/settings")]
pub async fn update_settings(
    req: web::Json<SummaryConfig>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let settings = req.into_inner();

    match state.settings.write().await.replace(settings.clone()) {
        Ok(()) => Ok(HttpResponse::Ok().json(settings)),
        Err(e) if e.status_code() == 400 => {
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use actix_web::{test, App};
    use aisummary_common::AppConfig;
    use aisummary_llm::{ProviderRegistry, SummaryGenerator};
    use std::sync::Arc;

    fn test_state(name: &str) -> Arc<AppState> {
        let mut config = AppConfig::default();
        config.settings_path = std::env::temp_dir().join(format!(
            "aisummary-settings-test-{}-{}.json",
            name,
            std::process::id()
        ));

        let registry = Arc::new(ProviderRegistry::new("", ""));
        let generator = Arc::new(SummaryGenerator::new(registry));
        Arc::new(AppState::new(config, generator).unwrap())
    }

    #[actix_web::test]
    async fn test_get_settings_defaults() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state("get")))
                .service(get_settings),
        )
        .await;

        let req = test::TestRequest::get().uri("/settings").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["settings"]["max_length"], 150);
        assert_eq!(body["settings"]["min_length"], 50);
        assert_eq!(body["settings"]["view_mode"], "ai_summary_source");
    }

    #[actix_web::test]
    async fn test_update_settings_roundtrip() {
        let state = test_state("update");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(get_settings)
                .service(update_settings),
        )
        .await;

        let mut settings = aisummary_common::SummaryConfig::default();
        settings.max_length = 400;
        settings.enabled_types.insert("article".to_string());

        let req = test::TestRequest::put()
            .uri("/settings")
            .set_json(&settings)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get().uri("/settings").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["settings"]["max_length"], 400);

        let _ = std::fs::remove_file(&state.config.settings_path);
    }

    #[actix_web::test]
    async fn test_update_settings_rejects_out_of_range() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state("reject")))
                .service(update_settings),
        )
        .await;

        let mut settings = aisummary_common::SummaryConfig::default();
        settings.min_length = 5;

        let req = test::TestRequest::put()
            .uri("/settings")
            .set_json(&settings)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }
}
