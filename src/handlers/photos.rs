// src/handlers/photos.rs
// DOCUMENTATION: HTTP handlers for photo operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ApiError;
use crate::handlers::params::Params;
use crate::models::PhotoChanges;
use crate::services::PhotoService;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

/// GET /api/v1/photos
pub async fn list_photos(state: web::Data<AppState>) -> Result<impl Responder, ApiError> {
    let photos = PhotoService::list(state.photos.as_ref()).await?;
    Ok(HttpResponse::Ok().json(photos))
}

/// GET /api/v1/photos/{id}
pub async fn get_photo(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<impl Responder, ApiError> {
    let photo = PhotoService::find(state.photos.as_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(photo))
}

/// PATCH|PUT /api/v1/photos/{id}
/// Validation failures are answered with 200 and `{"errors": [...]}`
pub async fn update_photo(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<Value>,
) -> Result<impl Responder, ApiError> {
    // Existence is checked before parameters are filtered
    let photo = PhotoService::find(state.photos.as_ref(), path.into_inner()).await?;

    let changes = photo_params(body.into_inner())?;
    let response = match PhotoService::update(state.photos.as_ref(), photo, changes).await? {
        Ok(photo) => HttpResponse::Ok().json(photo),
        Err(errors) => HttpResponse::Ok().json(errors),
    };
    Ok(response)
}

const PHOTO_ATTRIBUTES: &[&str] = &["title", "photo_url_string"];

fn photo_params(body: Value) -> Result<PhotoChanges, ApiError> {
    let params = Params::from_body(body)?
        .wrap("photo", PHOTO_ATTRIBUTES)
        .require("photo")?
        .permit(PHOTO_ATTRIBUTES);

    Ok(PhotoChanges {
        title: params.text("title"),
        photo_url_string: params.text("photo_url_string"),
    })
}

/// Configuration for photo routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/photos")
            .route("", web::get().to(list_photos))
            .route("/{id}", web::get().to(get_photo))
            .route("/{id}", web::patch().to(update_photo))
            .route("/{id}", web::put().to(update_photo)),
    );
}
