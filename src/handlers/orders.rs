use tracing::info;

use crate::{
    db,
    envelope::Envelope,
    error::AppResult,
    models::{CreateOrder, Order},
    AppState,
};

pub async fn list_orders(state: &AppState) -> AppResult<Envelope<Vec<Order>>> {
    let orders = state.db.lock().await.orders.clone();

    info!(count = orders.len(), "Listed orders");

    Ok(Envelope::ok(orders))
}

pub async fn create_order(state: &AppState, payload: CreateOrder) -> AppResult<Envelope<Order>> {
    let mut db = state.db.lock().await;
    let order = db::orders::create_order(&mut db, payload)?;
    state.store.persist(&db)?;

    info!(
        id = order.id,
        customer = %order.customer_name,
        items = order.items.len(),
        total_amount = order.total_amount,
        "Created order"
    );

    Ok(Envelope::ok(order))
}

/// Unknown or unparsable ids answer with `data: null`, not an error.
pub async fn get_order(state: &AppState, id: Option<u64>) -> AppResult<Envelope<Option<Order>>> {
    let db = state.db.lock().await;
    let order = id.and_then(|id| db::orders::find_order(&db, id)).cloned();

    info!(id = ?id, found = order.is_some(), "Fetched order");

    Ok(Envelope::ok(order))
}
