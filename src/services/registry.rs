use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Project, TeamMember};

/// Errors that can occur with registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Member with ID {0} not found")]
    MemberNotFound(String),

    #[error("Project with ID {0} not found")]
    ProjectNotFound(String),

    #[error("Member with ID {0} already exists")]
    DuplicateMember(String),

    #[error("Project with ID {0} already exists")]
    DuplicateProject(String),
}

/// Point-in-time copy of the registry used for one scoring request
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    pub members: Vec<TeamMember>,
    pub projects: Vec<Project>,
}

/// In-memory store of members and projects
///
/// Each collection sits behind its own async `RwLock`. Mutations take the
/// write lock for the whole read-modify-write; scoring works on a cloned
/// [`RegistrySnapshot`] so concurrent edits never race a computation.
#[derive(Debug, Default)]
pub struct Registry {
    members: RwLock<Vec<TeamMember>>,
    projects: RwLock<Vec<Project>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry pre-populated with seed data
    pub fn with_data(members: Vec<TeamMember>, projects: Vec<Project>) -> Self {
        Self {
            members: RwLock::new(members),
            projects: RwLock::new(projects),
        }
    }

    /// Append a member without checking for an existing id
    pub async fn add_member(&self, member: TeamMember) {
        self.members.write().await.push(member);
    }

    /// Append a member, rejecting an id that is already registered
    pub async fn insert_member(&self, member: TeamMember) -> Result<(), RegistryError> {
        let mut members = self.members.write().await;
        if members.iter().any(|m| m.id == member.id) {
            return Err(RegistryError::DuplicateMember(member.id));
        }
        members.push(member);
        Ok(())
    }

    pub async fn member(&self, id: &str) -> Option<TeamMember> {
        self.members.read().await.iter().find(|m| m.id == id).cloned()
    }

    pub async fn members(&self) -> Vec<TeamMember> {
        self.members.read().await.clone()
    }

    /// Replace the member registered under `id`
    pub async fn update_member(&self, id: &str, member: TeamMember) -> Result<(), RegistryError> {
        let mut members = self.members.write().await;
        let slot = members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| RegistryError::MemberNotFound(id.to_string()))?;
        *slot = member;
        Ok(())
    }

    pub async fn delete_member(&self, id: &str) -> Result<TeamMember, RegistryError> {
        let mut members = self.members.write().await;
        let index = members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| RegistryError::MemberNotFound(id.to_string()))?;
        Ok(members.remove(index))
    }

    /// Append a project without checking for an existing id
    pub async fn add_project(&self, project: Project) {
        self.projects.write().await.push(project);
    }

    /// Append a project, rejecting an id that is already registered
    pub async fn insert_project(&self, project: Project) -> Result<(), RegistryError> {
        let mut projects = self.projects.write().await;
        if projects.iter().any(|p| p.id == project.id) {
            return Err(RegistryError::DuplicateProject(project.id));
        }
        projects.push(project);
        Ok(())
    }

    pub async fn project(&self, id: &str) -> Option<Project> {
        self.projects.read().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn projects(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    pub async fn update_project(&self, id: &str, project: Project) -> Result<(), RegistryError> {
        let mut projects = self.projects.write().await;
        let slot = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RegistryError::ProjectNotFound(id.to_string()))?;
        *slot = project;
        Ok(())
    }

    pub async fn delete_project(&self, id: &str) -> Result<Project, RegistryError> {
        let mut projects = self.projects.write().await;
        let index = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| RegistryError::ProjectNotFound(id.to_string()))?;
        Ok(projects.remove(index))
    }

    /// Clone both collections for one request
    ///
    /// Both read locks are held together so the pair is consistent.
    pub async fn snapshot(&self) -> RegistrySnapshot {
        let members = self.members.read().await;
        let projects = self.projects.read().await;
        RegistrySnapshot {
            members: members.clone(),
            projects: projects.clone(),
        }
    }

    /// (member count, project count)
    pub async fn counts(&self) -> (usize, usize) {
        let members = self.members.read().await.len();
        let projects = self.projects.read().await.len();
        (members, projects)
    }
}
