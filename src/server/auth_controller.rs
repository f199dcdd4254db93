use std::sync::Arc;

use actix_web::{delete, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::error::PlannerError;
use crate::store::AuthService;

use super::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(signup).service(login).service(logout);
}

fn auth_service(state: &AppState) -> Result<Arc<dyn AuthService>, PlannerError> {
    state
        .auth
        .clone()
        .ok_or_else(|| PlannerError::Store("auth service is not configured".to_string()))
}

#[derive(Debug, Deserialize)]
struct SignupRequest {
    email: String,
    password: String,
    #[serde(default)]
    name: Option<String>,
}

#[post("/auth/signup")]
async fn signup(
    request: web::Json<SignupRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PlannerError> {
    let auth = auth_service(&state)?;
    let account = auth
        .signup(&request.email, &request.password, request.name.as_deref())
        .await?;
    Ok(HttpResponse::Created().json(json!({ "account": account })))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[post("/auth/login")]
async fn login(
    request: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PlannerError> {
    let auth = auth_service(&state)?;
    let session = auth.login(&request.email, &request.password).await?;
    Ok(HttpResponse::Ok().json(json!({ "session": session })))
}

#[delete("/auth/sessions/{id}")]
async fn logout(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PlannerError> {
    let auth = auth_service(&state)?;
    auth.logout(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
