use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockroom_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/available", get(list_available_products))
        .route("/search", get(search_products))
        .route("/:id", get(get_product).put(update_product))
        .route("/:id/stock/add", post(add_stock))
        .route("/:id/stock/remove", post(remove_stock))
        .route("/:id/discontinue", post(discontinue_product))
        .route("/:id/activate", post(activate_product))
}

fn parse_id(id: &str) -> Result<ProductId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::validation_error(vec![errors::FieldError::new("id", "invalid product id")])
    })
}

fn bad_request(message: String) -> axum::response::Response {
    errors::json_error(StatusCode::BAD_REQUEST, errors::INVALID_INPUT, message)
}

fn ok_product(
    result: stockroom_products::AppResult<stockroom_products::ProductView>,
) -> axum::response::Response {
    match result {
        Ok(view) => (StatusCode::OK, Json(dto::product_to_json(view))).into_response(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return bad_request(e.body_text()),
    };
    let input = match body.validate() {
        Ok(input) => input,
        Err(field_errors) => return errors::validation_error(field_errors),
    };

    match services.products.create_product(input) {
        Ok(view) => (StatusCode::CREATED, Json(dto::product_to_json(view))).into_response(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    ok_product(services.products.get_product(id))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products.get_all_products() {
        Ok(views) => (StatusCode::OK, Json(dto::products_to_json(views))).into_response(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn list_available_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products.get_available_products() {
        Ok(views) => (StatusCode::OK, Json(dto::products_to_json(views))).into_response(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::SearchQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return bad_request(e.body_text()),
    };
    match services.products.search_products(&query.name) {
        Ok(views) => (StatusCode::OK, Json(dto::products_to_json(views))).into_response(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return bad_request(e.body_text()),
    };
    let input = match body.validate() {
        Ok(input) => input,
        Err(field_errors) => return errors::validation_error(field_errors),
    };
    ok_product(services.products.update_product(id, input))
}

pub async fn add_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    query: Result<Query<dto::QuantityQuery>, QueryRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return bad_request(e.body_text()),
    };
    ok_product(services.products.add_stock(id, query.quantity))
}

pub async fn remove_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    query: Result<Query<dto::QuantityQuery>, QueryRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return bad_request(e.body_text()),
    };
    ok_product(services.products.remove_stock(id, query.quantity))
}

pub async fn discontinue_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    ok_product(services.products.discontinue_product(id))
}

pub async fn activate_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    ok_product(services.products.activate_product(id))
}
