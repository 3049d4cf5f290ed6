use std::collections::HashSet;

use crate::error::{AppError, AppResult};
use crate::models::{find_menu, line_amount, CreateOrder, Order};

use super::Database;

pub fn find_order(db: &Database, id: u64) -> Option<&Order> {
    db.orders.iter().find(|order| order.id == id)
}

/// Check out: price every line at the current menu price, store the order and
/// drop the cart rows it was built from.
pub fn create_order(db: &mut Database, payload: CreateOrder) -> AppResult<Order> {
    let total_amount = payload.items.iter().try_fold(0_i64, |total, item| {
        let menu = find_menu(&db.menus, item.menu_id).ok_or(AppError::MenuNotFound(item.menu_id))?;
        total
            .checked_add(line_amount(item.quantity, menu.price)?)
            .ok_or_else(|| AppError::BadRequest("Order total overflows".to_string()))
    })?;

    let order = Order {
        id: db.next_order_id(),
        customer_name: payload.customer_name,
        items: payload.items,
        total_amount,
    };

    let checked_out: HashSet<u64> = order.items.iter().filter_map(|item| item.id).collect();
    db.cart.retain(|row| !checked_out.contains(&row.id));
    db.orders.push(order.clone());

    Ok(order)
}
