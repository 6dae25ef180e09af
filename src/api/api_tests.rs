#[cfg(test)]
mod vitals_handler_tests {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};
    use crate::knowledge::KnowledgeStore;
    use crate::llm::{GenerationError, MockTextGenerator};
    use crate::observability::AppMetrics;
    use crate::services::analysis::{FALLBACK_ANALYSIS, create_analysis_service};

    fn app_with(generator: MockTextGenerator) -> (Router, Arc<AppMetrics>) {
        let knowledge = Arc::new(KnowledgeStore::from_corpus("Base de teste", 1000, 0));
        let metrics = Arc::new(AppMetrics::default());
        let service = create_analysis_service(knowledge, Arc::new(generator), metrics.clone());
        (create_router(AppState::new(service, metrics.clone())), metrics)
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze_vitals")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_vitals_returns_200_with_alert() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Ok("ALERTA SOS NECESSÁRIO: contate o cuidador.".into()));
        let (app, _) = app_with(generator);

        let response = app
            .oneshot(post_json(
                json!({
                    "heart_rate": 130,
                    "sleep_duration_hours": 6,
                    "steps_count": 3000,
                    "user_id": "u1"
                })
                .to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["sos_alert"], true);
        assert_eq!(body["analysis"], "ALERTA SOS NECESSÁRIO: contate o cuidador.");
    }

    #[tokio::test]
    async fn test_analyze_vitals_returns_400_for_zero_steps() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().times(0);
        let (app, metrics) = app_with(generator);

        let response = app
            .oneshot(post_json(
                json!({
                    "heart_rate": 80,
                    "sleep_duration_hours": 7.5,
                    "steps_count": 0,
                    "user_id": "u1"
                })
                .to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["detail"], "Dados vitais incompletos.");
        assert_eq!(metrics.validation_rejections(), 1);
    }

    #[tokio::test]
    async fn test_analyze_vitals_returns_400_for_missing_field() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().times(0);
        let (app, _) = app_with(generator);

        let response = app
            .oneshot(post_json(
                json!({"heart_rate": 80, "sleep_duration_hours": 7.5, "steps_count": 10})
                    .to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_vitals_returns_400_for_malformed_json() {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().times(0);
        let (app, _) = app_with(generator);

        let response = app
            .oneshot(post_json(r#"{"heart_rate": "alto"}"#.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_analyze_vitals_degrades_on_generation_error() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(GenerationError::Status {
                status: 503,
                body: "overloaded".into(),
            }));
        let (app, _) = app_with(generator);

        let response = app
            .oneshot(post_json(
                json!({
                    "heart_rate": 105,
                    "sleep_duration_hours": 5.5,
                    "steps_count": 800,
                    "user_id": "idoso_001"
                })
                .to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["analysis"], FALLBACK_ANALYSIS);
        assert_eq!(body["sos_alert"], false);
    }
}
