// src/handlers/comments.rs
// DOCUMENTATION: HTTP handlers for comment operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ApiError;
use crate::handlers::params::Params;
use crate::models::NewComment;
use crate::services::CommentService;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

/// POST /api/v1/comments
/// Create a comment; validation failures are answered with 200 and
/// `{"errors": [...]}`, a missing `comment` key with 400
pub async fn create_comment(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    let comment = comment_params(body.into_inner())?;

    let response = match CommentService::create(state.comments.as_ref(), comment).await? {
        Ok(comment) => HttpResponse::Ok().json(comment),
        Err(errors) => HttpResponse::Ok().json(errors),
    };
    Ok(response)
}

fn comment_params(body: Value) -> Result<NewComment, ApiError> {
    let params = Params::from_body(body)?
        .require("comment")?
        .permit(&["content", "owner", "photo_id"]);

    Ok(NewComment {
        content: params.text("content").flatten(),
        owner: params.text("owner").flatten(),
        photo_id: params.integer("photo_id").flatten(),
    })
}

/// Configuration for comment routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/comments", web::post().to(create_comment));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::handlers::test_state;
    use actix_web::{http::StatusCode, test as actix_test, App};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_comment_params_whitelist() {
        let comment = comment_params(json!({
            "comment": {
                "content": "hi",
                "owner": "alice",
                "photo_id": "1",
                "id": 500,
                "created_at": "1999-01-01T00:00:00Z"
            },
            "photo": { "title": "ignored" }
        }))
        .unwrap();

        assert_eq!(
            comment,
            NewComment {
                content: Some("hi".to_string()),
                owner: Some("alice".to_string()),
                photo_id: Some(1),
            }
        );
    }

    #[actix_web::test]
    async fn test_create_comment() {
        let store = Arc::new(MemoryStore::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(test_state(&store))
                .configure(crate::handlers::api_config),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/v1/comments")
            .set_json(json!({ "comment": { "content": "hi", "owner": "alice", "photo_id": 1 } }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["content"], "hi");
        assert_eq!(body["owner"], "alice");
        assert_eq!(body["photo_id"], 1);
        assert!(body["id"].is_i64());
        assert!(body["created_at"].is_string());
        assert!(body["updated_at"].is_string());
        assert_eq!(store.comments().await.len(), 1);
    }

    #[actix_web::test]
    async fn test_create_without_comment_key_is_bad_request() {
        let store = Arc::new(MemoryStore::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(test_state(&store))
                .configure(crate::handlers::api_config),
        )
        .await;

        // Bare fields are not wrapped for comments
        let req = actix_test::TestRequest::post()
            .uri("/api/v1/comments")
            .set_json(json!({ "content": "hi", "owner": "alice", "photo_id": 1 }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PARAMETER_MISSING");
        assert!(body.get("errors").is_none());
        assert!(body.get("content").is_none());
        assert!(store.comments().await.is_empty());
    }

    #[actix_web::test]
    async fn test_create_invalid_comment_returns_errors() {
        let store = Arc::new(MemoryStore::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(test_state(&store))
                .configure(crate::handlers::api_config),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/v1/comments")
            .set_json(json!({ "comment": { "content": "", "photo_id": "abc" } }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "errors": [
                    "Content can't be blank",
                    "Owner can't be blank",
                    "Photo can't be blank"
                ]
            })
        );
        assert!(store.comments().await.is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let store = Arc::new(MemoryStore::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(test_state(&store))
                .configure(crate::handlers::api_config),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/v1/comments")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"comment\": ")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }
}
