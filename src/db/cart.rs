use crate::error::{AppError, AppResult};
use crate::models::{find_menu, line_amount, CartItem, CartItemPayload, EnrichedCartItem};

use super::Database;

/// Every cart row joined with its menu.
pub fn list_enriched(db: &Database) -> AppResult<Vec<EnrichedCartItem>> {
    db.cart
        .iter()
        .map(|item| {
            find_menu(&db.menus, item.menu_id)
                .map(|menu| item.enrich(menu))
                .ok_or(AppError::MenuNotFound(item.menu_id))
        })
        .collect()
}

/// Add `quantity` of a menu to the cart, merging into the existing row for
/// that menu when there is one.
pub fn add_item(db: &mut Database, payload: &CartItemPayload) -> AppResult<EnrichedCartItem> {
    let menu = find_menu(&db.menus, payload.menu_id)
        .cloned()
        .ok_or(AppError::MenuNotFound(payload.menu_id))?;

    if let Some(existing) = db.cart.iter_mut().find(|c| c.menu_id == payload.menu_id) {
        let quantity = existing
            .quantity
            .checked_add(payload.quantity)
            .ok_or_else(|| quantity_overflow(payload))?;
        existing.set_quantity(quantity, menu.price)?;
        return Ok(existing.enrich(&menu));
    }

    let amount = line_amount(payload.quantity, menu.price)?;
    let item = CartItem {
        id: db.next_cart_id(),
        menu_id: payload.menu_id,
        quantity: payload.quantity,
        amount,
    };
    let enriched = item.enrich(&menu);
    db.cart.push(item);
    Ok(enriched)
}

/// Take `quantity` off the row for a menu. The row is dropped once its
/// quantity reaches exactly zero; the returned item reflects the final state.
pub fn reduce_item(db: &mut Database, payload: &CartItemPayload) -> AppResult<EnrichedCartItem> {
    let index = db
        .cart
        .iter()
        .position(|c| c.menu_id == payload.menu_id)
        .ok_or_else(|| AppError::NotFound("Item not found in cart".to_string()))?;
    let menu = find_menu(&db.menus, payload.menu_id)
        .cloned()
        .ok_or(AppError::MenuNotFound(payload.menu_id))?;

    let item = &mut db.cart[index];
    let quantity = item
        .quantity
        .checked_sub(payload.quantity)
        .ok_or_else(|| quantity_overflow(payload))?;
    item.set_quantity(quantity, menu.price)?;
    let enriched = item.enrich(&menu);

    if enriched.item.quantity == 0 {
        db.cart.remove(index);
    }
    Ok(enriched)
}

fn quantity_overflow(payload: &CartItemPayload) -> AppError {
    AppError::BadRequest(format!("Quantity overflows for menu {}", payload.menu_id))
}
