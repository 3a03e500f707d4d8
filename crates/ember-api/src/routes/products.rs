//! Product catalog endpoints.
//!
//! Listing is public; writes require an admin bearer token.

use crate::auth::require_admin;
use crate::error::ApiError;
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use ember_commerce::catalog::Product;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Products returned per listing page.
const PAGE_SIZE: usize = 10;

/// Create routes for product operations.
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    /// Case-insensitive substring match on the product name.
    pub keyword: Option<String>,
    /// 1-based page number, defaults to 1.
    #[serde(rename = "pageNumber")]
    pub page_number: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ProductPage {
    products: Vec<Product>,
    page: usize,
    pages: usize,
}

/// GET /api/products?keyword=&pageNumber=
async fn list_products(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Json<ProductPage> {
    let keyword = query.keyword.unwrap_or_default().to_lowercase();
    let page = query.page_number.unwrap_or(1).max(1);

    let mut matching: Vec<Product> = state
        .products
        .iter()
        .filter(|entry| keyword.is_empty() || entry.name.to_lowercase().contains(&keyword))
        .map(|entry| entry.clone())
        .collect();
    // DashMap iteration order is arbitrary; present the catalog in id order
    matching.sort_by_key(|p| p.id);

    let pages = matching.len().div_ceil(PAGE_SIZE);
    let products = matching
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    Json(ProductPage {
        products,
        page,
        pages,
    })
}

/// GET /api/products/:id
async fn get_product(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, ApiError> {
    state
        .products
        .get(&id)
        .map(|p| Json(p.clone()))
        .ok_or_else(product_not_found)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: ember_commerce::money::Money,
    #[serde(default)]
    pub discount_percentage: Option<u8>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub is_new: bool,
}

/// POST /api/products (admin)
async fn create_product(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let admin = require_admin(&state, &headers)?;

    if body.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Product name is required".to_string()));
    }

    let id = state.next_product_id();
    let mut product = Product::new(id, body.name, body.price)
        .with_description(body.description)
        .with_image(body.image)
        .with_category(body.category)
        .with_tags(body.tags)
        .with_rating(body.rating)
        .with_stock(body.stock);
    if let Some(percentage) = body.discount_percentage {
        product = product.with_discount(percentage);
    }
    product.is_featured = body.is_featured;
    product.is_best_seller = body.is_best_seller;
    product.is_new = body.is_new;

    tracing::info!(%id, admin = %admin.user_id, "product created");
    state.products.insert(id.value(), product.clone());
    Ok((StatusCode::CREATED, Json(product)))
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<ember_commerce::money::Money>,
    pub discount_percentage: Option<u8>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub stock: Option<i64>,
    pub is_featured: Option<bool>,
    pub is_best_seller: Option<bool>,
    pub is_new: Option<bool>,
}

/// PUT /api/products/:id (admin)
///
/// Partial update: absent fields keep their existing values.
async fn update_product(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    require_admin(&state, &headers)?;

    let mut entry = state.products.get_mut(&id).ok_or_else(product_not_found)?;
    let product = entry.value_mut();

    if let Some(name) = body.name {
        product.name = name;
    }
    if let Some(description) = body.description {
        product.description = description;
    }
    if let Some(price) = body.price {
        product.price = price;
    }
    if let Some(percentage) = body.discount_percentage {
        product.discount_percentage = Some(percentage.min(100));
    }
    if let Some(image) = body.image {
        product.image = image;
    }
    if let Some(category) = body.category {
        product.category = category;
    }
    if let Some(tags) = body.tags {
        product.tags = tags;
    }
    if let Some(rating) = body.rating {
        product.rating = rating;
    }
    if let Some(stock) = body.stock {
        product.stock = stock;
    }
    if let Some(is_featured) = body.is_featured {
        product.is_featured = is_featured;
    }
    if let Some(is_best_seller) = body.is_best_seller {
        product.is_best_seller = is_best_seller;
    }
    if let Some(is_new) = body.is_new {
        product.is_new = is_new;
    }

    Ok(Json(product.clone()))
}

/// DELETE /api/products/:id (admin)
async fn delete_product(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_admin(&state, &headers)?;

    state.products.remove(&id).ok_or_else(product_not_found)?;
    tracing::info!(id, "product removed");
    Ok(Json(json!({ "message": "Product removed" })))
}

fn product_not_found() -> ApiError {
    ApiError::NotFound("Product not found".to_string())
}
