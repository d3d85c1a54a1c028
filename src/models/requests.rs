use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::models::domain::{
    ExperienceLevel, ParseEnumError, Project, ProjectRequirement, ScoringWeights, Skill,
    TeamMember,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors turning a validated request into a domain record
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("invalid date '{value}' for {field}, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error(transparent)]
    InvalidEnum(#[from] ParseEnumError),
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ConversionError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ConversionError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1, max = 10))]
    pub proficiency: u8,
    #[serde(alias = "experience_years")]
    #[validate(range(min = 0.0))]
    pub years_experience: f64,
    /// Last used date in YYYY-MM-DD format
    pub last_used: String,
}

/// Request to register or replace a team member
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub email: String,
    pub department: String,
    #[validate(nested)]
    pub skills: Vec<SkillRequest>,
    /// JUNIOR, MID, SENIOR, LEAD or ARCHITECT
    pub experience_level: String,
    /// AVAILABLE, PARTIALLY_AVAILABLE, BUSY or UNAVAILABLE
    pub availability_status: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub current_workload: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub preferred_project_types: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl TryFrom<MemberRequest> for TeamMember {
    type Error = ConversionError;

    fn try_from(req: MemberRequest) -> Result<Self, Self::Error> {
        let skills = req
            .skills
            .into_iter()
            .map(|skill| {
                Ok(Skill {
                    last_used: parse_date("last_used", &skill.last_used)?,
                    name: skill.name,
                    proficiency: skill.proficiency,
                    years_experience: skill.years_experience,
                })
            })
            .collect::<Result<Vec<_>, ConversionError>>()?;

        Ok(TeamMember {
            id: req.id,
            name: req.name,
            email: req.email,
            department: req.department,
            skills,
            experience_level: req.experience_level.parse()?,
            availability_status: req.availability_status.parse()?,
            current_workload: req.current_workload,
            hourly_rate: req.hourly_rate,
            preferred_project_types: req.preferred_project_types,
            location: req.location,
            timezone: req.timezone,
            certifications: req.certifications,
        })
    }
}

/// A project requirement. Legacy seed files use the alternate keys
/// `min_proficiency`, `experience_level`, `mandatory` and `estimated_hours`;
/// when both spellings are present the primary key wins.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequirementRequest {
    #[validate(length(min = 1))]
    pub skill_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 10))]
    pub required_proficiency: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 10))]
    pub min_proficiency: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mandatory: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub estimated_hours: Option<f64>,
}

const DEFAULT_REQUIRED_PROFICIENCY: u8 = 5;
const DEFAULT_EXPERIENCE_LEVEL: ExperienceLevel = ExperienceLevel::Junior;
const DEFAULT_WEIGHT: f64 = 1.0;

fn default_team_size() -> usize { 5 }

/// Request to register or replace a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(nested)]
    pub requirements: Vec<RequirementRequest>,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
    /// LOW, MEDIUM, HIGH or CRITICAL
    pub priority: String,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub budget: Option<f64>,
    #[serde(default = "default_team_size")]
    #[validate(range(min = 1))]
    pub team_size: usize,
    #[serde(default)]
    pub required_certifications: Vec<String>,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub estimated_hours: u32,
}

impl TryFrom<RequirementRequest> for ProjectRequirement {
    type Error = ConversionError;

    fn try_from(req: RequirementRequest) -> Result<Self, Self::Error> {
        let min_experience_level = match req.min_experience_level.or(req.experience_level) {
            Some(level) => level.parse()?,
            None => DEFAULT_EXPERIENCE_LEVEL,
        };

        Ok(ProjectRequirement {
            skill_name: req.skill_name,
            required_proficiency: req
                .required_proficiency
                .or(req.min_proficiency)
                .unwrap_or(DEFAULT_REQUIRED_PROFICIENCY),
            min_experience_level,
            is_mandatory: req.is_mandatory.or(req.mandatory).unwrap_or(true),
            weight: req.weight.or(req.estimated_hours).unwrap_or(DEFAULT_WEIGHT),
        })
    }
}

impl TryFrom<ProjectRequest> for Project {
    type Error = ConversionError;

    fn try_from(req: ProjectRequest) -> Result<Self, Self::Error> {
        let requirements = req
            .requirements
            .into_iter()
            .map(ProjectRequirement::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Project {
            start_date: parse_date("start_date", &req.start_date)?,
            end_date: parse_date("end_date", &req.end_date)?,
            priority: req.priority.parse()?,
            id: req.id,
            name: req.name,
            description: req.description,
            requirements,
            budget: req.budget,
            team_size: req.team_size,
            required_certifications: req.required_certifications,
            preferred_locations: req.preferred_locations,
            project_type: req.project_type,
            estimated_hours: req.estimated_hours,
        })
    }
}

/// Partial update of the scoring weights. Absent keys keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateWeightsRequest {
    #[validate(range(min = 0.0, max = 1.0))]
    pub skill_match: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub availability: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub experience: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub cost: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub location: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub certification: Option<f64>,
}

impl UpdateWeightsRequest {
    /// Merge this update over `current`
    pub fn apply(&self, current: &ScoringWeights) -> ScoringWeights {
        ScoringWeights {
            skill_match: self.skill_match.unwrap_or(current.skill_match),
            availability: self.availability.unwrap_or(current.availability),
            experience: self.experience.unwrap_or(current.experience),
            cost: self.cost.unwrap_or(current.cost),
            location: self.location.unwrap_or(current.location),
            certification: self.certification.unwrap_or(current.certification),
        }
    }

    /// Key/value pairs actually present in the update
    pub fn updated_keys(&self) -> Vec<(&'static str, f64)> {
        [
            ("skill_match", self.skill_match),
            ("availability", self.availability),
            ("experience", self.experience),
            ("cost", self.cost),
            ("location", self.location),
            ("certification", self.certification),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

/// Query parameters for the project matches listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchesQuery {
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub min_score: Option<f64>,
}

/// Query parameters for team selection endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TeamQuery {
    #[validate(range(min = 1))]
    pub team_size: Option<usize>,
}
