use actix_web::{web, HttpResponse, Responder};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::responses::{MemberStats, ProjectStats, SkillStats, SkillsResponse};
use crate::models::{HealthResponse, StatsResponse};
use crate::routes::AppState;

/// Configure utility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/skills/list", web::get().to(list_skills))
        .route("/stats", web::get().to(system_stats));
}

/// Service information
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Team Match API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "active",
    }))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (members_count, projects_count) = state.registry.counts().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        members_count,
        projects_count,
        timestamp: chrono::Utc::now(),
    })
}

/// Sorted unique skill names across all members
async fn list_skills(state: web::Data<AppState>) -> impl Responder {
    let skills: BTreeSet<String> = state
        .registry
        .members()
        .await
        .into_iter()
        .flat_map(|member| member.skills.into_iter().map(|skill| skill.name))
        .collect();

    HttpResponse::Ok().json(SkillsResponse {
        skills: skills.into_iter().collect(),
    })
}

/// Registry statistics
async fn system_stats(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.registry.snapshot().await;

    let mut by_experience: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_availability: BTreeMap<String, usize> = BTreeMap::new();
    let mut departments = BTreeSet::new();
    let mut skills = BTreeSet::new();

    for member in &snapshot.members {
        departments.insert(member.department.clone());
        *by_experience.entry(member.experience_level.to_string()).or_default() += 1;
        *by_availability.entry(member.availability_status.to_string()).or_default() += 1;
        skills.extend(member.skills.iter().map(|skill| skill.name.clone()));
    }

    let mut by_priority: BTreeMap<String, usize> = BTreeMap::new();
    for project in &snapshot.projects {
        *by_priority.entry(project.priority.to_string()).or_default() += 1;
    }

    HttpResponse::Ok().json(StatsResponse {
        members: MemberStats {
            total: snapshot.members.len(),
            by_experience,
            by_availability,
            departments: departments.into_iter().collect(),
        },
        projects: ProjectStats {
            total: snapshot.projects.len(),
            by_priority,
        },
        skills: SkillStats {
            total_unique: skills.len(),
            list: skills.into_iter().collect(),
        },
    })
}
