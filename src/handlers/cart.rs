use tracing::info;

use crate::{
    db,
    envelope::Envelope,
    error::AppResult,
    models::{CartItemPayload, EnrichedCartItem},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_cart_items(state: &AppState) -> AppResult<Envelope<Vec<EnrichedCartItem>>> {
    let db = state.db.lock().await;
    let items = db::cart::list_enriched(&db)?;

    info!(count = items.len(), "Listed cart items");

    Ok(Envelope::ok(items))
}

// ── Add ───────────────────────────────────────────────────────────────────────

pub async fn add_cart_item(
    state: &AppState,
    payload: CartItemPayload,
) -> AppResult<Envelope<EnrichedCartItem>> {
    let mut db = state.db.lock().await;
    let item = db::cart::add_item(&mut db, &payload)?;
    state.store.persist(&db)?;

    info!(
        id = item.item.id,
        menu_id = payload.menu_id,
        added = payload.quantity,
        quantity = item.item.quantity,
        "Added to cart"
    );

    Ok(Envelope::ok(item))
}

// ── Reduce ────────────────────────────────────────────────────────────────────

pub async fn reduce_cart_item(
    state: &AppState,
    payload: CartItemPayload,
) -> AppResult<Envelope<EnrichedCartItem>> {
    let mut db = state.db.lock().await;
    let item = db::cart::reduce_item(&mut db, &payload)?;
    state.store.persist(&db)?;

    info!(
        id = item.item.id,
        menu_id = payload.menu_id,
        removed = payload.quantity,
        quantity = item.item.quantity,
        "Reduced cart item"
    );

    Ok(Envelope::ok(item))
}
