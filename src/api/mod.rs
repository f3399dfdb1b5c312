//! HTTP handlers
//!
//! Read-mostly JSON endpoints for the admin dashboard and the gallery's
//! infinite-scroll client:
//! - `GET /api/config`: readiness checklist
//! - `GET /api/gallery/{region}`: load-more state for one region
//! - `POST /api/gallery/{region}`: apply a partial state update

use crate::error::{AppError, Result};
use crate::gallery::{GalleryRegion, RegionPatch, RegionState};
use crate::{AppState, config::ConfigChecklist};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

/// Build the `/api` router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/config", get(get_config))
        .route(
            "/gallery/:region",
            get(get_gallery_region).post(post_gallery_region),
        )
        .with_state(state)
}

/// Response body for `GET /api/config`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigReport {
    checklist: ConfigChecklist,
    is_site_ready: bool,
}

async fn get_config(State(state): State<AppState>) -> Json<ConfigReport> {
    let checklist = state.config.checklist();
    let is_site_ready = checklist.is_site_ready();
    Json(ConfigReport {
        checklist,
        is_site_ready,
    })
}

fn parse_region(segment: &str) -> Result<GalleryRegion> {
    segment.parse().map_err(|()| AppError::NotFound)
}

async fn get_gallery_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<RegionState>> {
    let region = parse_region(&region)?;
    Ok(Json(state.gallery.read_region(region)))
}

async fn post_gallery_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
    Json(patch): Json<RegionPatch>,
) -> Result<Json<RegionState>> {
    let region = parse_region(&region)?;

    // Loaded progress only moves forward; a patch that would rewind it
    // indicates a stale client.
    if let Some(index_loaded) = patch.index_loaded {
        let current = state.gallery.read_region(region).index_loaded;
        if index_loaded < current {
            return Err(AppError::Validation(format!(
                "indexLoaded may not decrease ({current} -> {index_loaded})"
            )));
        }
    }

    let updated = state.gallery.apply(region, &patch);
    tracing::debug!(
        region = region.as_str(),
        index_to_view = updated.index_to_view,
        index_loaded = updated.index_loaded,
        is_loading = updated.is_loading,
        "Gallery region updated"
    );
    Ok(Json(updated))
}
