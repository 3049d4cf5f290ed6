use tracing::info;

use crate::{
    db,
    envelope::{Envelope, StatusKey},
    error::AppResult,
    models::Menu,
    AppState,
};

pub async fn list_menus(state: &AppState, page: u64, limit: u64) -> AppResult<Envelope<Vec<Menu>>> {
    let (menus, pagination) = db::menus::paginate(&*state.db.lock().await, page, limit);

    info!(
        page,
        limit,
        count = menus.len(),
        total_pages = pagination.total_pages,
        "Listed menus"
    );

    let status_key = if state.config.unify_envelope {
        StatusKey::Status
    } else {
        StatusKey::StatusCode
    };

    Ok(Envelope::ok(menus)
        .with_pagination(pagination)
        .with_status_key(status_key))
}
