use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{MatchScore, MatchScoreResponse, MatchesQuery, TeamMember, TeamQuery};
use crate::routes::{ApiError, AppState};
use crate::services::RegistrySnapshot;

/// Configure matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/projects/{project_id}/matches", web::get().to(get_project_matches))
        .route("/projects/{project_id}/best-team", web::get().to(get_best_team))
        .route("/projects/{project_id}/team-report", web::get().to(get_team_report));
}

/// Attach member names, dropping scores whose member no longer resolves
fn to_responses(scores: Vec<MatchScore>, members: &[TeamMember]) -> Vec<MatchScoreResponse> {
    scores
        .into_iter()
        .filter_map(|score| {
            let name = members.iter().find(|m| m.id == score.member_id)?.name.clone();
            Some(MatchScoreResponse::new(score, name))
        })
        .collect()
}

/// All members scored against a project
///
/// GET /api/v1/projects/{project_id}/matches?limit=10&min_score=50
async fn get_project_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<MatchesQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;
    let project_id = path.into_inner();

    let RegistrySnapshot { members, projects } = state.registry.snapshot().await;
    let project = projects
        .iter()
        .find(|p| p.id == project_id)
        .ok_or_else(|| ApiError::NotFound(format!("Project with ID {} not found", project_id)))?;

    let matcher = state.matcher().await;
    let scores = matcher.find_matches(project, &members, query.limit, query.min_score);

    tracing::info!(
        "Returning {} matches for project {} (from {} members)",
        scores.len(),
        project_id,
        members.len()
    );

    Ok(HttpResponse::Ok().json(to_responses(scores, &members)))
}

/// Best team for a project
///
/// GET /api/v1/projects/{project_id}/best-team?team_size=4
async fn get_best_team(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<TeamQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;
    let project_id = path.into_inner();

    let snapshot = state.registry.snapshot().await;
    let matcher = state.matcher().await;
    let team = matcher.find_best_team_for(
        &project_id,
        &snapshot.projects,
        &snapshot.members,
        query.team_size,
    )?;

    tracing::info!("Selected team of {} for project {}", team.len(), project_id);

    Ok(HttpResponse::Ok().json(to_responses(team, &snapshot.members)))
}

/// Report on the best team for a project
///
/// GET /api/v1/projects/{project_id}/team-report?team_size=4
async fn get_team_report(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<TeamQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;
    let project_id = path.into_inner();

    let snapshot = state.registry.snapshot().await;
    let matcher = state.matcher().await;
    let team = matcher.find_best_team_for(
        &project_id,
        &snapshot.projects,
        &snapshot.members,
        query.team_size,
    )?;
    let report = matcher.build_report_for(&project_id, &snapshot.projects, &snapshot.members, &team)?;

    tracing::debug!(
        "Team report for project {}: {} members, average score {:?}",
        project_id,
        report.team_statistics.team_size,
        report.team_statistics.average_match_score
    );

    Ok(HttpResponse::Ok().json(report))
}
