//! `/api/words/{id}/dictionary/{source}` — cached lookup payloads.
//!
//! GET returns the raw cached payload (204 when absent); POST caches the
//! raw request body for the pair, replacing any previous payload.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

pub async fn get(
    State(state): State<AppState>,
    Path((word_id, source)): Path<(i64, String)>,
) -> Result<Response, StatusCode> {
    let info = state
        .db
        .get_dictionary(word_id, &source)
        .await
        .map_err(|e| {
            tracing::error!("dictionary lookup failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(match info {
        Some(info) => ([(CONTENT_TYPE, "application/json")], info).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

pub async fn save(
    State(state): State<AppState>,
    Path((word_id, source)): Path<(i64, String)>,
    info: String,
) -> Result<Json<serde_json::Value>, StatusCode> {
    state
        .db
        .save_dictionary(word_id, &source, &info)
        .await
        .map_err(|e| {
            tracing::error!("dictionary save failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(serde_json::json!({"success": true})))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use crate::routes::test_app::app;

    async fn body_string(resp: axum::response::Response) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn seeded_word_id(app: &Router) -> i64 {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/words")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"[{"word": "unit"}]"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let stats: serde_json::Value =
            serde_json::from_str(&body_string(resp).await).unwrap();
        stats["created"]["words"][0]["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn post_then_get_roundtrip() {
        let app = app().await;
        let id = seeded_word_id(&app).await;

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/words/{id}/dictionary/dictionaryapi"))
                    .body(Body::from(r#"[{"word":"unit"}]"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, r#"{"success":true}"#);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/words/{id}/dictionary/dictionaryapi"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, r#"[{"word":"unit"}]"#);
    }

    #[tokio::test]
    async fn absent_payload_is_no_content() {
        let app = app().await;
        let id = seeded_word_id(&app).await;

        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/words/{id}/dictionary/unknown-source"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn save_for_missing_word_succeeds_but_stores_nothing() {
        let app = app().await;

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/words/9999/dictionary/dictionaryapi")
                    .body(Body::from("orphan"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/words/9999/dictionary/dictionaryapi")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
