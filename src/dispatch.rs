//! The request dispatcher. Every request the router does not own lands here;
//! it is matched against the cart / menu / order rules in a fixed order and
//! anything left over is handed to the pass-through handler.

use axum::{
    body::Body,
    extract::{Query, Request, State},
    http::{request::Parts, Method},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    error::{AppError, AppResult},
    handlers,
    AppState,
};

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    CartList,
    Menus,
    CartAdd,
    CartReduce,
    OrderList,
    OrderCreate,
    /// Trailing path segment parsed as an order id.
    OrderGet(Option<u64>),
}

impl Route {
    /// First matching rule wins. Exact rules compare the whole path, loose
    /// rules only look for the fragment anywhere in it.
    pub fn classify(method: &Method, path: &str) -> Option<Self> {
        let route = if path == "/cart/items" && method == Method::GET {
            Route::CartList
        } else if path.contains("/menus") {
            Route::Menus
        } else if path == "/cart/items" && method == Method::POST {
            Route::CartAdd
        } else if path.contains("/cart/items") && method == Method::PUT {
            Route::CartReduce
        } else if path == "/orders" && method == Method::GET {
            Route::OrderList
        } else if path == "/orders" && method == Method::POST {
            Route::OrderCreate
        } else if path.contains("/order") && method == Method::GET {
            Route::OrderGet(path.rsplit('/').next().and_then(parse_leading_int))
        } else {
            return None;
        };
        Some(route)
    }
}

/// Integer prefix of `raw` ("12abc" is 12); `None` when there are no digits.
/// A prefix too large for `u64` saturates to `u64::MAX`.
pub fn parse_leading_int(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let prefix = &digits[..end];
    if prefix.is_empty() {
        return None;
    }
    Some(prefix.parse().unwrap_or(u64::MAX))
}

fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(parse_leading_int)
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

#[derive(Debug, Default, Deserialize)]
struct MenuQuery {
    page: Option<String>,
    limit: Option<String>,
}

async fn read_json<T: DeserializeOwned>(body: Body) -> AppResult<T> {
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
}

// ── Entry point ───────────────────────────────────────────────────────────────

pub async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    let (parts, body) = req.into_parts();

    match Route::classify(&parts.method, parts.uri.path()) {
        Some(route) => run(&state, route, &parts, body).await.into_response(),
        None => handlers::passthrough::respond(&state, &parts.method, parts.uri.path())
            .await
            .into_response(),
    }
}

async fn run(state: &AppState, route: Route, parts: &Parts, body: Body) -> AppResult<Response> {
    let response = match route {
        Route::CartList => handlers::cart::list_cart_items(state).await?.into_response(),
        Route::Menus => {
            let query = Query::<MenuQuery>::try_from_uri(&parts.uri)
                .map(|Query(q)| q)
                .unwrap_or_default();
            let page = positive_or(query.page.as_deref(), 1);
            let limit = positive_or(query.limit.as_deref(), state.config.default_page_limit);
            handlers::menus::list_menus(state, page, limit)
                .await?
                .into_response()
        }
        Route::CartAdd => handlers::cart::add_cart_item(state, read_json(body).await?)
            .await?
            .into_response(),
        Route::CartReduce => handlers::cart::reduce_cart_item(state, read_json(body).await?)
            .await?
            .into_response(),
        Route::OrderList => handlers::orders::list_orders(state).await?.into_response(),
        Route::OrderCreate => handlers::orders::create_order(state, read_json(body).await?)
            .await?
            .into_response(),
        Route::OrderGet(id) => handlers::orders::get_order(state, id).await?.into_response(),
    };
    Ok(response)
}
