use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when an enum label cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}', expected one of: {expected}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Seniority of a team member, ordered from JUNIOR to ARCHITECT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Lead,
    Architect,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 5] = [
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
        ExperienceLevel::Architect,
    ];

    /// Ordinal rank used by experience scoring (JUNIOR = 1 .. ARCHITECT = 5)
    pub fn rank(self) -> u8 {
        match self {
            ExperienceLevel::Junior => 1,
            ExperienceLevel::Mid => 2,
            ExperienceLevel::Senior => 3,
            ExperienceLevel::Lead => 4,
            ExperienceLevel::Architect => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "JUNIOR",
            ExperienceLevel::Mid => "MID",
            ExperienceLevel::Senior => "SENIOR",
            ExperienceLevel::Lead => "LEAD",
            ExperienceLevel::Architect => "ARCHITECT",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "experience level",
                value: s.to_string(),
                expected: "JUNIOR, MID, SENIOR, LEAD, ARCHITECT",
            })
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current availability of a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    Available,
    PartiallyAvailable,
    Busy,
    Unavailable,
}

impl AvailabilityStatus {
    pub const ALL: [AvailabilityStatus; 4] = [
        AvailabilityStatus::Available,
        AvailabilityStatus::PartiallyAvailable,
        AvailabilityStatus::Busy,
        AvailabilityStatus::Unavailable,
    ];

    pub fn rank(self) -> u8 {
        match self {
            AvailabilityStatus::Available => 1,
            AvailabilityStatus::PartiallyAvailable => 2,
            AvailabilityStatus::Busy => 3,
            AvailabilityStatus::Unavailable => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "AVAILABLE",
            AvailabilityStatus::PartiallyAvailable => "PARTIALLY_AVAILABLE",
            AvailabilityStatus::Busy => "BUSY",
            AvailabilityStatus::Unavailable => "UNAVAILABLE",
        }
    }
}

impl FromStr for AvailabilityStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AvailabilityStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "availability status",
                value: s.to_string(),
                expected: "AVAILABLE, PARTIALLY_AVAILABLE, BUSY, UNAVAILABLE",
            })
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl ProjectPriority {
    pub const ALL: [ProjectPriority; 4] = [
        ProjectPriority::Low,
        ProjectPriority::Medium,
        ProjectPriority::High,
        ProjectPriority::Critical,
    ];

    pub fn rank(self) -> u8 {
        match self {
            ProjectPriority::Low => 1,
            ProjectPriority::Medium => 2,
            ProjectPriority::High => 3,
            ProjectPriority::Critical => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectPriority::Low => "LOW",
            ProjectPriority::Medium => "MEDIUM",
            ProjectPriority::High => "HIGH",
            ProjectPriority::Critical => "CRITICAL",
        }
    }
}

impl FromStr for ProjectPriority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectPriority::ALL
            .into_iter()
            .find(|priority| priority.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "project priority",
                value: s.to_string(),
                expected: "LOW, MEDIUM, HIGH, CRITICAL",
            })
    }
}

impl fmt::Display for ProjectPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single skill held by a team member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency from 1 to 10
    pub proficiency: u8,
    pub years_experience: f64,
    pub last_used: NaiveDate,
}

/// A person who can be staffed on projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub skills: Vec<Skill>,
    pub experience_level: ExperienceLevel,
    pub availability_status: AvailabilityStatus,
    /// Percent of capacity already consumed (0-100)
    pub current_workload: f64,
    #[serde(default)]
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

/// Case-insensitive name comparison with full Unicode case folding
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

impl TeamMember {
    /// Proficiency in a skill, matched case-insensitively; 0 when absent
    pub fn skill_proficiency(&self, skill_name: &str) -> u8 {
        self.skills
            .iter()
            .find(|skill| names_match(&skill.name, skill_name))
            .map(|skill| skill.proficiency)
            .unwrap_or(0)
    }

    pub fn has_certification(&self, certification: &str) -> bool {
        self.certifications
            .iter()
            .any(|cert| names_match(cert, certification))
    }
}

/// A skill the project needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRequirement {
    pub skill_name: String,
    pub required_proficiency: u8,
    pub min_experience_level: ExperienceLevel,
    #[serde(default = "default_true")]
    pub is_mandatory: bool,
    #[serde(default = "default_requirement_weight")]
    pub weight: f64,
}

fn default_true() -> bool { true }
fn default_requirement_weight() -> f64 { 1.0 }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub requirements: Vec<ProjectRequirement>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub priority: ProjectPriority,
    #[serde(default)]
    pub budget: Option<f64>,
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

impl Project {
    pub fn mandatory_skills(&self) -> impl Iterator<Item = &str> {
        self.requirements
            .iter()
            .filter(|req| req.is_mandatory)
            .map(|req| req.skill_name.as_str())
    }
}

/// Availability context attached to a match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityBreakdown {
    pub status: AvailabilityStatus,
    pub workload: f64,
}

/// Experience context attached to a match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceBreakdown {
    pub member_level: ExperienceLevel,
    pub meets_requirements: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Requirement skill name -> per-requirement score (0-100)
    pub skill_details: BTreeMap<String, f64>,
    pub availability_breakdown: AvailabilityBreakdown,
    pub experience_breakdown: ExperienceBreakdown,
}

/// Score of one member against one project. Recomputed on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub member_id: String,
    pub total_score: f64,
    pub skill_match_score: f64,
    pub availability_score: f64,
    pub experience_score: f64,
    pub cost_score: f64,
    pub location_score: f64,
    pub certification_score: f64,
    pub detailed_breakdown: ScoreBreakdown,
}

/// Weights applied to the six sub-scores when computing the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill_match: f64,
    pub availability: f64,
    pub experience: f64,
    pub cost: f64,
    pub location: f64,
    pub certification: f64,
}

impl ScoringWeights {
    /// Maximum distance from 1.0 accepted for a weight set
    pub const SUM_TOLERANCE: f64 = 0.01;

    pub fn total(&self) -> f64 {
        self.skill_match
            + self.availability
            + self.experience
            + self.cost
            + self.location
            + self.certification
    }

    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() <= Self::SUM_TOLERANCE
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.35,
            availability: 0.25,
            experience: 0.20,
            cost: 0.10,
            location: 0.05,
            certification: 0.05,
        }
    }
}
