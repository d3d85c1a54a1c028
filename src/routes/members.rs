use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{MemberRequest, MutationResponse, TeamMember};
use crate::routes::{ApiError, AppState};

/// Configure member CRUD routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/members")
            .route(web::get().to(list_members))
            .route(web::post().to(add_member)),
    )
    .service(
        web::resource("/members/{member_id}")
            .route(web::get().to(get_member))
            .route(web::put().to(update_member))
            .route(web::delete().to(delete_member)),
    );
}

fn into_member(req: MemberRequest) -> Result<TeamMember, ApiError> {
    req.validate()?;
    Ok(TeamMember::try_from(req)?)
}

/// POST /api/v1/members
async fn add_member(
    state: web::Data<AppState>,
    req: web::Json<MemberRequest>,
) -> Result<HttpResponse, ApiError> {
    let member = into_member(req.into_inner())?;
    let (id, name) = (member.id.clone(), member.name.clone());

    state.registry.insert_member(member).await?;
    tracing::info!("Added team member {}", id);

    Ok(HttpResponse::Created().json(MutationResponse {
        message: format!("Team member {} added successfully", name),
        id: Some(id),
    }))
}

/// GET /api/v1/members
async fn list_members(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.registry.members().await)
}

/// GET /api/v1/members/{member_id}
async fn get_member(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let member_id = path.into_inner();
    let member = state
        .registry
        .member(&member_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Member with ID {} not found", member_id)))?;

    Ok(HttpResponse::Ok().json(member))
}

/// PUT /api/v1/members/{member_id}
async fn update_member(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<MemberRequest>,
) -> Result<HttpResponse, ApiError> {
    let member_id = path.into_inner();
    let member = into_member(req.into_inner())?;
    let name = member.name.clone();

    state.registry.update_member(&member_id, member).await?;
    tracing::info!("Updated team member {}", member_id);

    Ok(HttpResponse::Ok().json(MutationResponse {
        message: format!("Member {} updated successfully", name),
        id: Some(member_id),
    }))
}

/// DELETE /api/v1/members/{member_id}
async fn delete_member(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let member_id = path.into_inner();
    let removed = state.registry.delete_member(&member_id).await?;
    tracing::info!("Deleted team member {}", member_id);

    Ok(HttpResponse::Ok().json(MutationResponse {
        message: format!("Member {} deleted successfully", removed.name),
        id: None,
    }))
}
