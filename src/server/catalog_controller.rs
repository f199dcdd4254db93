use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::types::{District, ProductCategory, StayType};

use super::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_products)
        .service(get_product)
        .service(list_stays)
        .service(get_stay)
        .service(list_destinations)
        .service(list_experiences)
        .service(list_artisans);
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": format!("{what} not found") }))
}

#[derive(Debug, Deserialize)]
struct ProductQuery {
    category: Option<ProductCategory>,
    district: Option<District>,
}

#[get("/products")]
async fn list_products(
    query: web::Query<ProductQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let products = state
        .catalog
        .list_products(query.category, query.district)
        .await;
    HttpResponse::Ok().json(json!({ "total": products.len(), "products": products }))
}

#[get("/products/{id}")]
async fn get_product(path: web::Path<String>, state: web::Data<AppState>) -> HttpResponse {
    match state.catalog.get_product(&path.into_inner()).await {
        Some(product) => HttpResponse::Ok().json(json!({ "product": product })),
        None => not_found("product"),
    }
}

#[derive(Debug, Deserialize)]
struct StayQuery {
    district: Option<District>,
    #[serde(rename = "type")]
    stay_type: Option<StayType>,
}

#[get("/stays")]
async fn list_stays(query: web::Query<StayQuery>, state: web::Data<AppState>) -> HttpResponse {
    let stays = state
        .catalog
        .list_stays(query.district, query.stay_type)
        .await;
    HttpResponse::Ok().json(json!({ "total": stays.len(), "stays": stays }))
}

#[get("/stays/{id}")]
async fn get_stay(path: web::Path<String>, state: web::Data<AppState>) -> HttpResponse {
    match state.catalog.get_stay(&path.into_inner()).await {
        Some(stay) => HttpResponse::Ok().json(json!({ "stay": stay })),
        None => not_found("stay"),
    }
}

#[derive(Debug, Deserialize)]
struct DistrictQuery {
    district: Option<District>,
}

#[get("/destinations")]
async fn list_destinations(
    query: web::Query<DistrictQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let destinations = state.catalog.list_destinations(query.district).await;
    HttpResponse::Ok().json(json!({ "total": destinations.len(), "destinations": destinations }))
}

#[get("/experiences")]
async fn list_experiences(
    query: web::Query<DistrictQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let experiences = state.catalog.list_experiences(query.district).await;
    HttpResponse::Ok().json(json!({ "total": experiences.len(), "experiences": experiences }))
}

#[get("/artisans")]
async fn list_artisans(
    query: web::Query<DistrictQuery>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let artisans = state.catalog.list_artisans(query.district).await;
    HttpResponse::Ok().json(json!({ "total": artisans.len(), "artisans": artisans }))
}
