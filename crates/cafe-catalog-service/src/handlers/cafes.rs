//! Catalog route handlers.

use std::sync::Arc;

use axum::extract::{Form, Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use cafe_catalog_core::{parse_flag, Cafe, NewCafe};
use cafe_catalog_store::{Store, StoreError};

use crate::auth::DeleteAuth;
use crate::error::ApiError;
use crate::state::AppState;

/// Response envelope for a single cafe.
#[derive(Debug, Serialize)]
pub struct CafeResponse {
    /// The selected record.
    pub cafe: Cafe,
}

/// Response envelope for a list of cafes.
#[derive(Debug, Serialize)]
pub struct CafeListResponse {
    /// The matching records.
    pub cafe: Vec<Cafe>,
}

/// Return one uniformly random cafe.
pub async fn random_cafe(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CafeResponse>, ApiError> {
    let cafe = state.store.get_random().await?;

    Ok(Json(CafeResponse { cafe }))
}

/// Return every cafe in the catalog.
pub async fn all_cafes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CafeListResponse>, ApiError> {
    let cafe = state.store.list_all().await?;

    Ok(Json(CafeListResponse { cafe }))
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Location label, matched exactly (case-sensitive).
    #[serde(default)]
    pub loc: Option<String>,
}

/// Return the cafes at a location.
///
/// Zero matches is reported in the body with HTTP 200, while a missing id on
/// the write routes is a 404. The asymmetry is long-standing API behavior
/// that existing clients parse; do not unify it.
pub async fn search_cafes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let loc = query
        .loc
        .ok_or_else(|| ApiError::InvalidInput("The loc query parameter is required.".into()))?;

    let cafes = state.store.find_by_location(&loc).await?;

    if cafes.is_empty() {
        return Ok(Json(json!({
            "error": { "Not Found": "Sorry we don't have a cafe at that location." }
        })));
    }

    Ok(Json(json!({ "cafe": cafes })))
}

/// Form payload for adding a cafe.
///
/// Every field arrives as a string; presence and flag coercion are checked in
/// [`AddCafeForm::into_new_cafe`] so malformed input becomes a 400, never a
/// panic inside the handler.
#[derive(Debug, Deserialize)]
pub struct AddCafeForm {
    /// Display name (required, unique).
    pub name: Option<String>,
    /// Map link (required).
    pub map_url: Option<String>,
    /// Photo link (required).
    pub img_url: Option<String>,
    /// Location label (required).
    pub location: Option<String>,
    /// Seat-count label (required).
    pub seats: Option<String>,
    /// Toilet flag, integer-like (required).
    pub has_toilet: Option<String>,
    /// Wifi flag, integer-like (required).
    pub has_wifi: Option<String>,
    /// Socket flag, integer-like (required).
    pub has_sockets: Option<String>,
    /// Calls flag, integer-like (required).
    pub can_take_calls: Option<String>,
    /// Coffee price label (optional).
    pub coffee_price: Option<String>,
}

impl AddCafeForm {
    /// Validate presence and coerce flags, producing the insert payload.
    fn into_new_cafe(self) -> Result<NewCafe, ApiError> {
        Ok(NewCafe {
            name: require(self.name, "name")?,
            map_url: require(self.map_url, "map_url")?,
            img_url: require(self.img_url, "img_url")?,
            location: require(self.location, "location")?,
            seats: require(self.seats, "seats")?,
            has_toilet: flag(self.has_toilet, "has_toilet")?,
            has_wifi: flag(self.has_wifi, "has_wifi")?,
            has_sockets: flag(self.has_sockets, "has_sockets")?,
            can_take_calls: flag(self.can_take_calls, "can_take_calls")?,
            coffee_price: self.coffee_price,
        })
    }
}

fn require(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::InvalidInput(format!("The {field} field is required.")))
}

fn flag(value: Option<String>, field: &str) -> Result<bool, ApiError> {
    let raw = require(value, field)?;

    parse_flag(&raw)
        .map_err(|err| ApiError::InvalidInput(format!("The {field} field is invalid: {err}")))
}

/// Add a cafe to the catalog.
pub async fn add_cafe(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddCafeForm>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let new_cafe = form.into_new_cafe()?;
    let cafe = state.store.insert(&new_cafe).await?;

    tracing::info!(id = cafe.id, name = %cafe.name, "Cafe added");

    Ok(Json(json!({
        "result": { "action successful": "The new cafe was added to the database." }
    })))
}

/// Update-price query parameters.
#[derive(Debug, Deserialize)]
pub struct UpdatePriceQuery {
    /// The new coffee price label.
    #[serde(default)]
    pub new_price: Option<String>,
}

/// Update the coffee price of a cafe.
pub async fn update_price(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<UpdatePriceQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let new_price = query.new_price.ok_or_else(|| {
        ApiError::InvalidInput("The new_price query parameter is required.".into())
    })?;

    let cafe = state
        .store
        .update_price(id, &new_price)
        .await
        .map_err(|err| match err {
            StoreError::NotFound { .. } => {
                ApiError::NotFound("Sorry the cafe id provided does not exist.".into())
            }
            other => other.into(),
        })?;

    tracing::info!(id = cafe.id, new_price = %new_price, "Coffee price updated");

    Ok(Json(json!({
        "result": { "action successful": "The cafe price for the cafe has been updated." }
    })))
}

/// Report a cafe closed and remove it from the catalog.
///
/// The shared-secret check happens in the [`DeleteAuth`] extractor before
/// this handler runs; a wrong or missing key never reaches the store.
pub async fn report_closed(
    State(state): State<Arc<AppState>>,
    _auth: DeleteAuth,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.store.delete(id).await.map_err(|err| match err {
        StoreError::NotFound { .. } => {
            ApiError::NotFound("The id provided is not in the database.".into())
        }
        other => other.into(),
    })?;

    tracing::info!(id, "Cafe reported closed and removed");

    Ok(Json(json!({
        "result": { "Action Successful": "The cafe was removed from the database." }
    })))
}
