pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/match/batch", post(handlers::handle_batch_match))
        .route("/api/v1/profile/score", post(handlers::handle_profile_score))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{Config, MatcherConfig};

    fn test_state(max_batch_jobs: usize) -> AppState {
        AppState::new(Config {
            port: 0,
            rust_log: "debug".to_string(),
            max_batch_jobs,
            matcher: MatcherConfig::default(),
        })
        .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let response = build_router(test_state(10))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_match_endpoint_returns_breakdown_and_tier() {
        let (status, body) = post_json(
            build_router(test_state(10)),
            "/api/v1/match",
            json!({
                "skills": [{"name": "Java"}, {"name": "Spring Boot"}],
                "experiences": [],
                "job": {
                    "required_skills": ["java", "spring", "docker"],
                    "description": "Backend role using Java and Spring",
                    "title": ""
                }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 72);
        assert_eq!(body["matched_skills"], json!(["java", "spring"]));
        assert_eq!(body["missing_skills"], json!(["docker"]));
        assert_eq!(body["total_required"], 3);
        assert_eq!(body["label"], "Very good");
    }

    #[tokio::test]
    async fn test_match_endpoint_with_no_candidate_data_scores_zero() {
        let (status, body) = post_json(
            build_router(test_state(10)),
            "/api/v1/match",
            json!({"job": {"required_skills": ["rust"], "description": "Rust", "title": "Dev"}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["total_required"], 0);
    }

    #[tokio::test]
    async fn test_batch_endpoint_ranks_jobs() {
        let (status, body) = post_json(
            build_router(test_state(10)),
            "/api/v1/match/batch",
            json!({
                "skills": [{"name": "Rust"}],
                "jobs": [
                    {"required_skills": ["cobol"], "title": "Mainframe"},
                    {"required_skills": ["rust"], "title": "Systems"}
                ]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["corpus_size"], 1);
        assert_eq!(body["results"][0]["title"], "Systems");
        assert_eq!(body["results"][1]["title"], "Mainframe");
    }

    #[tokio::test]
    async fn test_batch_endpoint_rejects_oversized_batch() {
        let (status, body) = post_json(
            build_router(test_state(1)),
            "/api/v1/match/batch",
            json!({
                "skills": [{"name": "Rust"}],
                "jobs": [{"title": "A"}, {"title": "B"}]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_profile_score_endpoint() {
        let (status, body) = post_json(
            build_router(test_state(10)),
            "/api/v1/profile/score",
            json!({
                "profile": {
                    "first_name": "Amina",
                    "last_name": "Ben Salah",
                    "phone": "+216 20 000 000",
                    "location": "Sfax",
                    "birth_date": "1995-03-14",
                    "cv_url": "cv/amina.pdf"
                },
                "skill_count": 10,
                "experience_count": 3
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 100);
        assert_eq!(body["signals"]["has_cv"], true);
    }

    #[tokio::test]
    async fn test_null_jobs_is_invalid_argument() {
        let (status, body) = post_json(
            build_router(test_state(10)),
            "/api/v1/match/batch",
            json!({"skills": [{"name": "Rust"}], "jobs": null}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
        assert!(body["error"]["message"].as_str().unwrap().contains("jobs"));
    }

    #[tokio::test]
    async fn test_null_job_is_invalid_argument() {
        let (status, body) = post_json(
            build_router(test_state(10)),
            "/api/v1/match",
            json!({"skills": [{"name": "Rust"}], "job": null}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_null_profile_is_invalid_argument() {
        let (status, body) = post_json(
            build_router(test_state(10)),
            "/api/v1/profile/score",
            json!({"profile": null, "skill_count": 3}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = post_json(build_router(test_state(10)), "/api/v1/nope", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
