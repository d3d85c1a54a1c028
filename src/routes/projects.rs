use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{MutationResponse, Project, ProjectRequest};
use crate::routes::{ApiError, AppState};

/// Configure project CRUD routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects")
            .route(web::get().to(list_projects))
            .route(web::post().to(add_project)),
    )
    .service(
        web::resource("/projects/{project_id}")
            .route(web::get().to(get_project))
            .route(web::put().to(update_project))
            .route(web::delete().to(delete_project)),
    );
}

fn into_project(req: ProjectRequest) -> Result<Project, ApiError> {
    req.validate()?;
    Ok(Project::try_from(req)?)
}

/// POST /api/v1/projects
async fn add_project(
    state: web::Data<AppState>,
    req: web::Json<ProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    let project = into_project(req.into_inner())?;
    let (id, name) = (project.id.clone(), project.name.clone());

    state.registry.insert_project(project).await?;
    tracing::info!("Added project {}", id);

    Ok(HttpResponse::Created().json(MutationResponse {
        message: format!("Project {} added successfully", name),
        id: Some(id),
    }))
}

/// GET /api/v1/projects
async fn list_projects(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.registry.projects().await)
}

/// GET /api/v1/projects/{project_id}
async fn get_project(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();
    let project = state
        .registry
        .project(&project_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Project with ID {} not found", project_id)))?;

    Ok(HttpResponse::Ok().json(project))
}

/// PUT /api/v1/projects/{project_id}
async fn update_project(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();
    let project = into_project(req.into_inner())?;
    let name = project.name.clone();

    state.registry.update_project(&project_id, project).await?;
    tracing::info!("Updated project {}", project_id);

    Ok(HttpResponse::Ok().json(MutationResponse {
        message: format!("Project {} updated successfully", name),
        id: Some(project_id),
    }))
}

/// DELETE /api/v1/projects/{project_id}
async fn delete_project(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();
    let removed = state.registry.delete_project(&project_id).await?;
    tracing::info!("Deleted project {}", project_id);

    Ok(HttpResponse::Ok().json(MutationResponse {
        message: format!("Project {} deleted successfully", removed.name),
        id: None,
    }))
}
