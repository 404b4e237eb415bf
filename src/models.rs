//! Inventory Models
//!
//! The in-memory item record and the validated form payload.

use serde::{Deserialize, Serialize};

/// One inventory record, rendered as one list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub quantity: i32,
    pub price: f64,
    pub location: String,
}

impl Item {
    /// Stock label derived from the quantity.
    pub fn stock_label(&self) -> &'static str {
        if self.quantity > 0 { "Disponible" } else { "Agotado" }
    }
}

/// Why a form submission was rejected before reaching the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field is empty")]
    MissingField,
    #[error("quantity must be a non-negative integer")]
    InvalidQuantity,
    #[error("price must be a non-negative number")]
    InvalidPrice,
}

/// Validated form payload, ready to be sent and committed.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub category: String,
    pub quantity: i32,
    pub price: f64,
    pub location: String,
}

impl ItemDraft {
    /// Validate raw form field values. The numeric fields arrive as the raw
    /// input strings; a value that does not parse fails validation.
    pub fn parse(
        title: String,
        category: String,
        quantity: &str,
        price: &str,
        location: String,
    ) -> Result<Self, ValidationError> {
        if title.is_empty() || category.is_empty() || location.is_empty() {
            return Err(ValidationError::MissingField);
        }
        let quantity: i32 = quantity
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidQuantity)?;
        if quantity < 0 {
            return Err(ValidationError::InvalidQuantity);
        }
        let price: f64 = price
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidPrice)?;
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self { title, category, quantity, price, location })
    }

    /// Turn the draft into a stored item under a locally assigned id.
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            title: self.title,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
            location: self.location,
        }
    }
}
