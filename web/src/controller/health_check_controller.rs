use axum::http::StatusCode;
use axum::response::IntoResponse;

pub(crate) const LIVENESS_MESSAGE: &str = "YouTube Transcript API is running!";

/// GET liveness confirmation
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API router is up and responding to requests", body = String),
    )
)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, LIVENESS_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::tests::{read_body, test_app};
    use axum::body::Body;
    use axum::http::Request;
    use domain::MockProvider;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check_returns_liveness_message() {
        let app = test_app(MockProvider::new());

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, LIVENESS_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_health_check_ignores_query_and_body() {
        let app = test_app(MockProvider::new());

        let request = Request::builder()
            .uri("/?url=https://youtu.be/dQw4w9WgXcQ&verbose=1")
            .body(Body::from(r#"{"url": "ignored"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, LIVENESS_MESSAGE.as_bytes());
    }
}
