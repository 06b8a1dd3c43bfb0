use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Every fruit is created with this status; no transition is defined.
pub const DEFAULT_STATUS: &str = "comestible";

/// A fruit inventory record. `id` is assigned once at creation and is the
/// sole storage key; both timestamps are set at construction and never
/// touched again (there is no update path).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub date_created: DateTime<Utc>,
    pub date_last_updated: DateTime<Utc>,
    pub owner: String,
    pub status: String,
}

impl Fruit {
    pub fn new(id: Uuid, name: String, quantity: i32, price: f64, owner: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            quantity,
            price,
            date_created: now,
            date_last_updated: now,
            owner,
            status: DEFAULT_STATUS.to_string(),
        }
    }

    /// Field-level business rules, checked in a fixed order; the first
    /// violation decides the returned message.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::Validation("name cannot be empty".to_string()));
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        {
            return Err(AppError::Validation(
                "name must contain only letters and spaces".to_string(),
            ));
        }
        if self.quantity <= 0 {
            return Err(AppError::Validation(
                "quantity must be greater than 0".to_string(),
            ));
        }
        if self.price <= 0.0 {
            return Err(AppError::Validation(
                "price must be greater than 0".to_string(),
            ));
        }
        if self.owner.is_empty() {
            return Err(AppError::Validation("owner cannot be empty".to_string()));
        }
        Ok(())
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateFruitRequest {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(name: &str, quantity: i32, price: f64, owner: &str) -> Fruit {
        Fruit::new(
            Uuid::new_v4(),
            name.to_string(),
            quantity,
            price,
            owner.to_string(),
        )
    }

    fn message(fruit: &Fruit) -> String {
        fruit.validate().unwrap_err().to_string()
    }

    #[test]
    fn valid_fruit_passes() {
        assert!(make("manzana", 12, 1000.0, "test").validate().is_ok());
    }

    #[test]
    fn name_with_spaces_passes() {
        assert!(make("granny smith", 3, 2.5, "test").validate().is_ok());
    }

    #[test]
    fn empty_name_rejected_first() {
        assert_eq!(message(&make("", 0, 0.0, "")), "name cannot be empty");
    }

    #[test]
    fn name_with_digits_rejected() {
        assert_eq!(
            message(&make("manzana123", 12, 1000.0, "test")),
            "name must contain only letters and spaces"
        );
    }

    #[test]
    fn name_with_punctuation_rejected() {
        assert_eq!(
            message(&make("man-zana", 12, 1000.0, "test")),
            "name must contain only letters and spaces"
        );
    }

    #[test]
    fn zero_quantity_rejected() {
        assert_eq!(
            message(&make("manzana", 0, 1000.0, "test")),
            "quantity must be greater than 0"
        );
    }

    #[test]
    fn negative_quantity_rejected() {
        assert_eq!(
            message(&make("manzana", -4, 1000.0, "test")),
            "quantity must be greater than 0"
        );
    }

    #[test]
    fn zero_price_rejected() {
        assert_eq!(
            message(&make("manzana", 12, 0.0, "test")),
            "price must be greater than 0"
        );
    }

    #[test]
    fn empty_owner_rejected() {
        assert_eq!(
            message(&make("manzana", 12, 1000.0, "")),
            "owner cannot be empty"
        );
    }

    #[test]
    fn rule_order_is_fixed() {
        // Both quantity and price are invalid; quantity is checked first.
        assert_eq!(
            message(&make("manzana", 0, 0.0, "")),
            "quantity must be greater than 0"
        );
    }

    #[test]
    fn new_fruit_defaults() {
        let fruit = make("manzana", 12, 1000.0, "test");
        assert_eq!(fruit.status, DEFAULT_STATUS);
        assert_eq!(fruit.date_created, fruit.date_last_updated);
    }

    #[test]
    fn json_shape_uses_snake_case_date_fields() {
        let fruit = make("manzana", 12, 1000.0, "test");
        let value = serde_json::to_value(&fruit).unwrap();
        assert!(value.get("date_created").is_some());
        assert!(value.get("date_last_updated").is_some());
        assert_eq!(value["status"], "comestible");
    }
}
