//! Match-related HTTP routes. Thin: parse, delegate to the service,
//! serialize.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::state::Mode;
use crate::error::AppError;
use crate::services::matches::MatchService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartMatchRequest {
    pub mode: Mode,
    pub rounds: u32,
}

#[derive(Debug, Deserialize)]
pub struct RollRequest {
    pub player_name: String,
}

/// POST /api/matches
async fn start_match(
    app_state: web::Data<AppState>,
    body: web::Json<StartMatchRequest>,
) -> Result<HttpResponse, AppError> {
    let service = MatchService::new();
    let view = service
        .start_match(&app_state, body.mode, body.rounds)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/matches/{match_id}/roll
async fn roll(
    app_state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<RollRequest>,
) -> Result<HttpResponse, AppError> {
    let service = MatchService::new();
    let response = service
        .roll(&app_state, path.into_inner(), &body.player_name)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/matches/{match_id}/advance
async fn advance_round(
    app_state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = MatchService::new();
    let view = service.advance_round(&app_state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// GET /api/matches/{match_id}
async fn get_state(
    app_state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = MatchService::new();
    let view = service.get_state(&app_state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/matches/{match_id}/end
async fn end_match(
    app_state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = MatchService::new();
    let result = service.end_match(&app_state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// DELETE /api/matches/{match_id}
async fn delete_match(
    app_state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = MatchService::new();
    service.delete_match(&app_state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

/// GET /api/matches/leaderboard
async fn leaderboard(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = MatchService::new();
    let rows = service.leaderboard(&app_state).await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Literal segments must register before the {match_id} matcher.
    cfg.service(web::resource("/leaderboard").route(web::get().to(leaderboard)));
    cfg.service(web::resource("").route(web::post().to(start_match)));
    cfg.service(
        web::resource("/{match_id}")
            .route(web::get().to(get_state))
            .route(web::delete().to(delete_match)),
    );
    cfg.service(web::resource("/{match_id}/roll").route(web::post().to(roll)));
    cfg.service(web::resource("/{match_id}/advance").route(web::post().to(advance_round)));
    cfg.service(web::resource("/{match_id}/end").route(web::post().to(end_match)));
}
