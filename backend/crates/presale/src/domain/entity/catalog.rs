//! Example schemas kept alongside the presale records
//!
//! `User` and `Product` are not bound to any route. They share the schema
//! readers with the live records.

use kernel::validation::ValidationError;
use serde_json::Value;

use crate::domain::schema::{NumberRule, Payload};

const MAX_AGE: u64 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    /// Plain string, no format check
    pub email: String,
    pub address: String,
    pub age: Option<u64>,
    pub is_active: bool,
}

impl User {
    pub fn from_payload(body: &Value) -> Result<Self, ValidationError> {
        let mut p = Payload::new(body)?;
        let user = Self {
            name: p.required_str("name"),
            email: p.required_str("email"),
            address: p.required_str("address"),
            age: p.optional_u64_between("age", 0, MAX_AGE),
            is_active: p.bool_or("is_active", true),
        };
        p.finish()?;
        Ok(user)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    pub fn from_payload(body: &Value) -> Result<Self, ValidationError> {
        let mut p = Payload::new(body)?;
        let product = Self {
            title: p.required_str("title"),
            description: p.optional_str("description"),
            price: p.required_f64("price", NumberRule::NonNegative),
            category: p.required_str("category"),
            in_stock: p.bool_or("in_stock", true),
        };
        p.finish()?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_defaults() {
        let user = User::from_payload(&json!({
            "name": "Ada",
            "email": "not validated",
            "address": "1 Main St"
        }))
        .unwrap();
        assert!(user.is_active);
        assert!(user.age.is_none());
    }

    #[test]
    fn test_user_age_bounds() {
        let body = |age: i64| json!({ "name": "A", "email": "e", "address": "x", "age": age });
        assert!(User::from_payload(&body(0)).is_ok());
        assert!(User::from_payload(&body(120)).is_ok());
        assert!(User::from_payload(&body(121)).unwrap_err().has_field("age"));
        assert!(User::from_payload(&body(-1)).unwrap_err().has_field("age"));
    }

    #[test]
    fn test_product_price_non_negative() {
        let free = json!({ "title": "Sticker", "price": 0, "category": "merch" });
        let product = Product::from_payload(&free).unwrap();
        assert!(product.in_stock);
        assert!(product.description.is_none());

        let negative = json!({ "title": "Sticker", "price": -1, "category": "merch" });
        assert!(Product::from_payload(&negative).unwrap_err().has_field("price"));
    }

    #[test]
    fn test_product_in_stock_spellings() {
        let body = |in_stock: Value| {
            json!({ "title": "T", "price": "1.50", "category": "c", "in_stock": in_stock })
        };
        let product = Product::from_payload(&body(json!("no"))).unwrap();
        assert!(!product.in_stock);
        assert_eq!(product.price, 1.5);
        assert!(Product::from_payload(&body(json!("yes"))).unwrap().in_stock);
        assert!(
            Product::from_payload(&body(json!("maybe")))
                .unwrap_err()
                .has_field("in_stock")
        );
    }
}
