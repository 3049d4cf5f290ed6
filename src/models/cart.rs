use serde::{Deserialize, Serialize};

use super::Menu;
use crate::error::{AppError, AppResult};

/// `quantity * price`, rejecting values that do not fit in an `i64`.
pub fn line_amount(quantity: i64, price: i64) -> AppResult<i64> {
    quantity
        .checked_mul(price)
        .ok_or_else(|| AppError::BadRequest(format!("Amount overflows for quantity {}", quantity)))
}

/// One row of the shopping cart. `amount` is always `quantity * price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: u64,
    pub menu_id: u64,
    pub quantity: i64,
    pub amount: i64,
}

impl CartItem {
    /// Set a new quantity and recompute `amount` from the menu price. The row
    /// is untouched when the amount would overflow.
    pub fn set_quantity(&mut self, quantity: i64, price: i64) -> AppResult<()> {
        self.amount = line_amount(quantity, price)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Join the row with its menu for display.
    pub fn enrich(&self, menu: &Menu) -> EnrichedCartItem {
        EnrichedCartItem {
            item: self.clone(),
            name: menu.name.clone(),
            image: menu.image.clone(),
            price: menu.price,
        }
    }
}

/// Cart row joined with the menu's name, image and price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedCartItem {
    #[serde(flatten)]
    pub item: CartItem,
    pub name: String,
    pub image: String,
    pub price: i64,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of both `POST /cart/items` and `PUT /cart/items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemPayload {
    pub menu_id: u64,
    pub quantity: i64,
}
