use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::round2;
use crate::models::domain::{MatchScore, ScoreBreakdown, ScoringWeights};

/// A member's match score as returned by the matching endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScoreResponse {
    pub member_id: String,
    pub member_name: String,
    pub total_score: f64,
    pub skill_match_score: f64,
    pub availability_score: f64,
    pub experience_score: f64,
    pub cost_score: f64,
    pub location_score: f64,
    pub certification_score: f64,
    pub detailed_breakdown: ScoreBreakdown,
}

impl MatchScoreResponse {
    pub fn new(score: MatchScore, member_name: String) -> Self {
        Self {
            member_id: score.member_id,
            member_name,
            total_score: round2(score.total_score),
            skill_match_score: round2(score.skill_match_score),
            availability_score: round2(score.availability_score),
            experience_score: round2(score.experience_score),
            cost_score: round2(score.cost_score),
            location_score: round2(score.location_score),
            certification_score: round2(score.certification_score),
            detailed_breakdown: score.detailed_breakdown,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub members_count: usize,
    pub projects_count: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Acknowledgement for create/update/delete calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsUpdateResponse {
    pub message: String,
    pub updated_weights: BTreeMap<String, f64>,
    pub current_weights: ScoringWeights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberStats {
    pub total: usize,
    pub by_experience: BTreeMap<String, usize>,
    pub by_availability: BTreeMap<String, usize>,
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total: usize,
    pub by_priority: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillStats {
    pub total_unique: usize,
    pub list: Vec<String>,
}

/// System-wide registry statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsResponse {
    pub members: MemberStats,
    pub projects: ProjectStats,
    pub skills: SkillStats,
}
