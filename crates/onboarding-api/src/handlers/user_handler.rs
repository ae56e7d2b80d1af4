//! Handlers for the `/api/users` endpoints.

use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse, Responder};
use log::error;
use onboarding_core::UserStore;

use crate::models::{CreateUserRequest, ErrorResponse, UserResponse};

/// POST /api/users - Create one applicant record
///
/// The request may include the plaintext password; the response never does.
#[post("/users")]
pub async fn create_user(
    request: web::Json<CreateUserRequest>,
    store: web::Data<Arc<UserStore>>,
) -> impl Responder {
    match store.create(request.into_inner().into_record()).await {
        Ok(record) => HttpResponse::Ok().json(UserResponse::from(record)),
        Err(e) => {
            error!("Failed to create user: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("STORE_ERROR", &e.to_string()))
        }
    }
}

/// GET /api/users - List all applicants in insertion order
#[get("/users")]
pub async fn list_users(store: web::Data<Arc<UserStore>>) -> impl Responder {
    list(&store).await
}

/// GET /api/user/all - Legacy alias of GET /api/users
#[get("/user/all")]
pub async fn list_users_legacy(store: web::Data<Arc<UserStore>>) -> impl Responder {
    list(&store).await
}

async fn list(store: &UserStore) -> HttpResponse {
    match store.list_all().await {
        Ok(records) => {
            let users: Vec<UserResponse> = records.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            error!("Failed to list users: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("STORE_ERROR", &e.to_string()))
        }
    }
}
