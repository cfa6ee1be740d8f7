use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::export::{build_export, LeagueExport};
use crate::models::TeamRow;

pub async fn list_teams(State(state): State<AppState>) -> Json<Vec<TeamRow>> {
    let league = state.league.read().await;
    Json(league.team_rows())
}

pub async fn export(State(state): State<AppState>) -> Result<Json<LeagueExport>, ApiError> {
    let league = state.league.read().await;
    Ok(Json(build_export(&league)?))
}
