// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AvailabilityBreakdown, AvailabilityStatus, ExperienceBreakdown, ExperienceLevel, MatchScore,
    names_match, ParseEnumError, Project, ProjectPriority, ProjectRequirement, ScoreBreakdown,
    ScoringWeights, Skill, TeamMember,
};
pub use requests::{
    ConversionError, MatchesQuery, MemberRequest, ProjectRequest, RequirementRequest,
    SkillRequest, TeamQuery, UpdateWeightsRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, MatchScoreResponse, MutationResponse, StatsResponse,
    WeightsUpdateResponse,
};
