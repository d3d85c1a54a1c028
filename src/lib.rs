//! Team Match - scores people against project requirements and staffs teams
//!
//! This library provides the scoring engine, the coverage-first team
//! composer and the team report aggregation used by the Team Match service.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{MatchError, ReportGenerator, ScoringEngine, TeamComposer, TeamMatcher, TeamReport};
pub use models::{MatchScore, Project, ProjectRequirement, ScoringWeights, Skill, TeamMember};
pub use services::{Registry, RegistrySnapshot};
