use axum::extract::Query;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::CartItemData;
use crate::cart::errors::CartError;
use crate::cart::ports::CartServicePort;
use crate::domain::cart::models::Page;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_items(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<CartItemData>>, ApiError> {
    let page = Page::new(
        query.skip.unwrap_or(0),
        query.limit.unwrap_or(Page::DEFAULT_LIMIT),
    )
    .map_err(CartError::from)?;

    let items = state.cart_service.list_items(current_user.0.id, page).await?;

    Ok(Json(items.iter().map(CartItemData::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListItemsQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
