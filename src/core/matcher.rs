use std::cmp::Ordering;

use crate::core::{
    composer::{RankedCandidate, TeamComposer},
    error::MatchError,
    report::{ReportGenerator, TeamReport},
    scoring::ScoringEngine,
};
use crate::models::{MatchScore, Project, ScoringWeights, TeamMember};

/// Main team matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every member against the project
/// 2. Rank by total score (stable, registration order breaks ties)
/// 3. Compose the team: mandatory-skill coverage, then top-up by score
/// 4. Optionally summarize the team in a report
#[derive(Debug, Clone, Default)]
pub struct TeamMatcher {
    engine: ScoringEngine,
    composer: TeamComposer,
    reports: ReportGenerator,
}

impl TeamMatcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            engine: ScoringEngine::new(weights),
            composer: TeamComposer::new(),
            reports: ReportGenerator,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        self.engine.weights()
    }

    pub fn score_member(&self, member: &TeamMember, project: &Project) -> MatchScore {
        self.engine.score(member, project)
    }

    /// Score all members and sort them by descending total score
    pub fn rank_candidates<'a>(
        &self,
        project: &Project,
        members: &'a [TeamMember],
    ) -> Vec<RankedCandidate<'a>> {
        let mut ranked: Vec<RankedCandidate<'a>> = members
            .iter()
            .map(|member| RankedCandidate {
                member,
                score: self.engine.score(member, project),
            })
            .collect();

        // sort_by is stable, so equal scores keep registration order
        ranked.sort_by(|a, b| {
            b.score
                .total_score
                .partial_cmp(&a.score.total_score)
                .unwrap_or(Ordering::Equal)
        });

        ranked
    }

    /// All members scored against the project, best first
    ///
    /// # Arguments
    /// * `limit` - Maximum number of scores to return
    /// * `min_score` - Drop members whose total score is below this
    pub fn find_matches(
        &self,
        project: &Project,
        members: &[TeamMember],
        limit: Option<usize>,
        min_score: Option<f64>,
    ) -> Vec<MatchScore> {
        let mut scores: Vec<MatchScore> = self
            .rank_candidates(project, members)
            .into_iter()
            .map(|candidate| candidate.score)
            .filter(|score| min_score.map_or(true, |min| score.total_score >= min))
            .collect();

        if let Some(limit) = limit {
            scores.truncate(limit);
        }

        scores
    }

    /// Select the best team for a project
    ///
    /// The target size is `override_size` when given and nonzero, otherwise
    /// the project's own team size.
    pub fn find_best_team(
        &self,
        project: &Project,
        members: &[TeamMember],
        override_size: Option<usize>,
    ) -> Vec<MatchScore> {
        let target = override_size
            .filter(|size| *size > 0)
            .unwrap_or(project.team_size);

        let ranked = self.rank_candidates(project, members);
        tracing::debug!(
            "Selecting team of {} for project {} from {} candidates",
            target,
            project.id,
            ranked.len()
        );

        self.composer.compose(project, ranked, target)
    }

    /// Select the best team for a project looked up by id
    pub fn find_best_team_for(
        &self,
        project_id: &str,
        projects: &[Project],
        members: &[TeamMember],
        override_size: Option<usize>,
    ) -> Result<Vec<MatchScore>, MatchError> {
        let project = find_project(project_id, projects)?;
        Ok(self.find_best_team(project, members, override_size))
    }

    pub fn build_report(
        &self,
        project: &Project,
        members: &[TeamMember],
        team: &[MatchScore],
    ) -> TeamReport {
        self.reports.build(project, members, team)
    }

    pub fn build_report_for(
        &self,
        project_id: &str,
        projects: &[Project],
        members: &[TeamMember],
        team: &[MatchScore],
    ) -> Result<TeamReport, MatchError> {
        let project = find_project(project_id, projects)?;
        Ok(self.reports.build(project, members, team))
    }
}

fn find_project<'a>(project_id: &str, projects: &'a [Project]) -> Result<&'a Project, MatchError> {
    projects
        .iter()
        .find(|project| project.id == project_id)
        .ok_or_else(|| MatchError::ProjectNotFound(project_id.to_string()))
}
