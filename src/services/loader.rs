use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{ConversionError, MemberRequest, Project, ProjectRequest, TeamMember};

/// Errors that can occur while loading seed data
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data file JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record {id}: {source}")]
    Validation {
        id: String,
        #[source]
        source: ValidationErrors,
    },

    #[error("Invalid record {id}: {source}")]
    Conversion {
        id: String,
        #[source]
        source: ConversionError,
    },
}

/// The `project` key holds either one project or a list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<ProjectRequest>),
    One(Box<ProjectRequest>),
}

#[derive(Debug, Deserialize)]
struct DataFile {
    #[serde(default)]
    members: Vec<MemberRequest>,
    #[serde(default, alias = "projects")]
    project: Option<OneOrMany>,
}

/// Members and projects read from a seed file
#[derive(Debug, Default)]
pub struct SeedData {
    pub members: Vec<TeamMember>,
    pub projects: Vec<Project>,
}

/// Parse seed data from a JSON string
///
/// Every record is validated with the same rules as the HTTP API.
pub fn parse_seed_data(json: &str) -> Result<SeedData, LoaderError> {
    let file: DataFile = serde_json::from_str(json)?;

    let members = file
        .members
        .into_iter()
        .map(|req| {
            let id = req.id.clone();
            req.validate()
                .map_err(|source| LoaderError::Validation { id: id.clone(), source })?;
            TeamMember::try_from(req).map_err(|source| LoaderError::Conversion { id, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let project_requests = match file.project {
        Some(OneOrMany::Many(list)) => list,
        Some(OneOrMany::One(project)) => vec![*project],
        None => Vec::new(),
    };

    let projects = project_requests
        .into_iter()
        .map(|req| {
            let id = req.id.clone();
            req.validate()
                .map_err(|source| LoaderError::Validation { id: id.clone(), source })?;
            Project::try_from(req).map_err(|source| LoaderError::Conversion { id, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SeedData { members, projects })
}

/// Load seed data from a file
pub fn load_seed_data<P: AsRef<Path>>(path: P) -> Result<SeedData, LoaderError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    parse_seed_data(&contents)
}

/// Load seed data when the file exists, otherwise start empty
///
/// A file that fails to load is logged and treated as empty so the service
/// can still start.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> SeedData {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!("No data file at {}, starting with an empty registry", path.display());
        return SeedData::default();
    }

    match load_seed_data(path) {
        Ok(data) => {
            tracing::info!(
                "Loaded {} members and {} projects from {}",
                data.members.len(),
                data.projects.len(),
                path.display()
            );
            data
        }
        Err(e) => {
            tracing::warn!("Could not load {}: {}", path.display(), e);
            SeedData::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityStatus, ExperienceLevel};

    const SEED: &str = r#"{
        "members": [
            {
                "id": "m1",
                "name": "Ada",
                "email": "ada@example.com",
                "department": "Engineering",
                "skills": [
                    {"name": "Python", "proficiency": 9, "years_experience": 6, "last_used": "2024-04-01"}
                ],
                "experience_level": "LEAD",
                "availability_status": "PARTIALLY_AVAILABLE",
                "current_workload": 30,
                "hourly_rate": 120.0,
                "location": "London"
            }
        ],
        "project": {
            "id": "p1",
            "name": "Analytics",
            "description": "Reporting stack",
            "requirements": [
                {"skill_name": "Python", "min_proficiency": 6, "min_experience_level": "SENIOR"}
            ],
            "start_date": "2024-05-01",
            "end_date": "2024-10-01",
            "priority": "HIGH",
            "budget": 80000,
            "team_size": 3,
            "estimated_hours": 400
        }
    }"#;

    #[test]
    fn test_parse_single_project() {
        let data = parse_seed_data(SEED).unwrap();
        assert_eq!(data.members.len(), 1);
        assert_eq!(data.members[0].experience_level, ExperienceLevel::Lead);
        assert_eq!(
            data.members[0].availability_status,
            AvailabilityStatus::PartiallyAvailable
        );
        assert_eq!(data.projects.len(), 1);
        assert_eq!(data.projects[0].requirements[0].required_proficiency, 6);
        assert_eq!(data.projects[0].estimated_hours, 400);
    }

    #[test]
    fn test_parse_project_list() {
        let json = r#"{
            "members": [],
            "project": [
                {"id": "a", "name": "A", "requirements": [], "start_date": "2024-01-01", "end_date": "2024-02-01", "priority": "LOW"},
                {"id": "b", "name": "B", "requirements": [], "start_date": "2024-01-01", "end_date": "2024-02-01", "priority": "MEDIUM"}
            ]
        }"#;
        let data = parse_seed_data(json).unwrap();
        assert_eq!(data.projects.len(), 2);
        assert_eq!(data.projects[1].id, "b");
    }

    #[test]
    fn test_parse_legacy_field_names() {
        let json = r#"{
            "members": [
                {
                    "id": "m9", "name": "Ken", "email": "ken@example.com", "department": "Ops",
                    "skills": [{"name": "Go", "proficiency": 7, "experience_years": 6, "last_used": "2024-01-10"}],
                    "experience_level": "SENIOR", "availability_status": "AVAILABLE", "current_workload": 0
                }
            ],
            "project": {
                "id": "p9", "name": "Mesh", "start_date": "2024-01-01", "end_date": "2024-03-01", "priority": "LOW",
                "requirements": [
                    {"skill_name": "Go", "weight": 2.0, "estimated_hours": 40, "mandatory": false}
                ]
            }
        }"#;
        let data = parse_seed_data(json).unwrap();
        assert_eq!(data.members[0].skills[0].years_experience, 6.0);

        let requirement = &data.projects[0].requirements[0];
        assert_eq!(requirement.weight, 2.0);
        assert!(!requirement.is_mandatory);
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let json = SEED.replace("\"proficiency\": 9", "\"proficiency\": 0");
        let err = parse_seed_data(&json).unwrap_err();
        assert!(matches!(err, LoaderError::Validation { ref id, .. } if id == "m1"));

        let json = SEED.replace("\"HIGH\"", "\"URGENT\"");
        let err = parse_seed_data(&json).unwrap_err();
        assert!(matches!(err, LoaderError::Conversion { ref id, .. } if id == "p1"));
    }

    #[test]
    fn test_missing_file_yields_empty_data() {
        let data = load_or_empty("/nonexistent/team-match/data.json");
        assert!(data.members.is_empty());
        assert!(data.projects.is_empty());
    }
}
