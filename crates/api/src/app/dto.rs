use rust_decimal::Decimal;
use serde::Deserialize;

use stockroom_products::{NewProduct, ProductUpdate, ProductView};

use crate::app::errors::FieldError;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i64>,
}

impl CreateProductRequest {
    /// Field-level validation; all violations are reported together.
    pub fn validate(self) -> Result<NewProduct, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = required_name(self.name, &mut errors);
        let price = non_negative_price(self.price, &mut errors);

        let stock_quantity = match self.stock_quantity {
            None => {
                errors.push(FieldError::new("stockQuantity", "stock quantity is required"));
                None
            }
            Some(q) => match u32::try_from(q) {
                Ok(q) => Some(q),
                Err(_) => {
                    errors.push(FieldError::new(
                        "stockQuantity",
                        "stock quantity must be zero or greater",
                    ));
                    None
                }
            },
        };

        match (name, price, stock_quantity) {
            (Some(name), Some(price), Some(stock_quantity)) => Ok(NewProduct {
                name,
                description: self.description,
                price,
                stock_quantity,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

impl UpdateProductRequest {
    pub fn validate(self) -> Result<ProductUpdate, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = required_name(self.name, &mut errors);
        let price = non_negative_price(self.price, &mut errors);

        match (name, price) {
            (Some(name), Some(price)) => Ok(ProductUpdate {
                name,
                description: self.description,
                price,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuantityQuery {
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

fn required_name(name: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match name {
        Some(n) if !n.trim().is_empty() => Some(n),
        _ => {
            errors.push(FieldError::new("name", "name is required"));
            None
        }
    }
}

fn non_negative_price(price: Option<Decimal>, errors: &mut Vec<FieldError>) -> Option<Decimal> {
    match price {
        None => {
            errors.push(FieldError::new("price", "price is required"));
            None
        }
        Some(p) if p < Decimal::ZERO => {
            errors.push(FieldError::new("price", "price must be zero or greater"));
            None
        }
        Some(p) => Some(p),
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn product_to_json(view: ProductView) -> serde_json::Value {
    serde_json::json!({
        "id": view.id.map(|id| id.to_string()),
        "name": view.name,
        "description": view.description,
        "price": view.price.normalize().to_string(),
        "stockQuantity": view.stock_quantity,
        "status": view.status,
        "available": view.available,
        "createdAt": view.created_at.to_rfc3339(),
        "updatedAt": view.updated_at.map(|t| t.to_rfc3339()),
    })
}

pub fn products_to_json(views: Vec<ProductView>) -> serde_json::Value {
    let items = views.into_iter().map(product_to_json).collect::<Vec<_>>();
    serde_json::json!({ "items": items })
}
