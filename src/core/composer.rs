use crate::models::{MatchScore, Project, TeamMember};

/// A scored member in the globally ranked candidate list
#[derive(Debug, Clone)]
pub struct RankedCandidate<'a> {
    pub member: &'a TeamMember,
    pub score: MatchScore,
}

/// Positions (into the ranked list) picked so far, capped at a target size
#[derive(Debug, Clone)]
pub struct Selection {
    target: usize,
    picked: Vec<usize>,
}

impl Selection {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            picked: Vec::with_capacity(target),
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.picked.len() >= self.target
    }

    pub fn contains(&self, position: usize) -> bool {
        self.picked.contains(&position)
    }

    /// Add a position if there is room and it is not already picked
    pub fn push(&mut self, position: usize) -> bool {
        if self.is_full() || self.contains(position) {
            return false;
        }
        self.picked.push(position);
        true
    }

    pub fn positions(&self) -> &[usize] {
        &self.picked
    }
}

/// First selection phase: guarantee requirement coverage
pub trait CoverageSelector {
    fn select(&self, project: &Project, ranked: &[RankedCandidate<'_>], selection: &mut Selection);
}

/// Second selection phase: fill the remaining slots
pub trait TopUpSelector {
    fn fill(&self, ranked: &[RankedCandidate<'_>], selection: &mut Selection);
}

/// Picks, for each mandatory skill in requirement order, the best-ranked
/// unselected candidate holding that skill at nonzero proficiency
#[derive(Debug, Clone, Copy, Default)]
pub struct MandatorySkillCoverage;

impl CoverageSelector for MandatorySkillCoverage {
    fn select(&self, project: &Project, ranked: &[RankedCandidate<'_>], selection: &mut Selection) {
        for skill in project.mandatory_skills() {
            let best = ranked
                .iter()
                .enumerate()
                .find(|(pos, candidate)| {
                    !selection.contains(*pos) && candidate.member.skill_proficiency(skill) > 0
                })
                .map(|(pos, _)| pos);

            let Some(pos) = best else {
                tracing::debug!("No candidate holds mandatory skill {}", skill);
                continue;
            };
            if selection.push(pos) {
                tracing::trace!("Mandatory skill {} covered by {}", skill, ranked[pos].score.member_id);
            }
        }
    }
}

/// Adds the next best-ranked unselected candidates until the team is full
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreOrderTopUp;

impl TopUpSelector for ScoreOrderTopUp {
    fn fill(&self, ranked: &[RankedCandidate<'_>], selection: &mut Selection) {
        for pos in 0..ranked.len() {
            if selection.is_full() {
                break;
            }
            selection.push(pos);
        }
    }
}

/// Selects a team of at most `target` members from a ranked candidate list
///
/// # Selection phases
/// 1. Coverage: one member per mandatory skill where one exists
/// 2. Top-up: remaining slots in descending score order
///
/// When there are no more candidates than slots, every candidate is returned
/// in ranked order.
#[derive(Debug, Clone, Default)]
pub struct TeamComposer<C = MandatorySkillCoverage, T = ScoreOrderTopUp> {
    coverage: C,
    top_up: T,
}

impl TeamComposer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: CoverageSelector, T: TopUpSelector> TeamComposer<C, T> {
    pub fn with_selectors(coverage: C, top_up: T) -> Self {
        Self { coverage, top_up }
    }

    /// `ranked` must already be sorted by descending total score
    pub fn compose(
        &self,
        project: &Project,
        ranked: Vec<RankedCandidate<'_>>,
        target: usize,
    ) -> Vec<MatchScore> {
        if ranked.len() <= target {
            return ranked.into_iter().map(|candidate| candidate.score).collect();
        }

        let mut selection = Selection::new(target);
        self.coverage.select(project, &ranked, &mut selection);
        if selection.is_empty() {
            tracing::debug!("No coverage picks for project {}", project.id);
        }
        let covered = selection.len();
        self.top_up.fill(&ranked, &mut selection);

        tracing::debug!(
            "Composed team of {}/{} for project {}: {} coverage picks, {} top-up picks, {} candidates",
            selection.len(),
            selection.target(),
            project.id,
            covered,
            selection.len() - covered,
            ranked.len()
        );

        let mut slots: Vec<Option<MatchScore>> =
            ranked.into_iter().map(|candidate| Some(candidate.score)).collect();
        let mut team: Vec<MatchScore> = selection
            .positions()
            .iter()
            .filter_map(|&pos| slots[pos].take())
            .collect();

        team.truncate(target);
        team
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AvailabilityBreakdown, AvailabilityStatus, ExperienceBreakdown, ExperienceLevel,
        ProjectPriority, ProjectRequirement, ScoreBreakdown, Skill,
    };
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn create_member(id: &str, skills: &[&str]) -> TeamMember {
        TeamMember {
            id: id.to_string(),
            name: format!("Member {}", id),
            email: format!("{}@example.com", id),
            department: "Engineering".to_string(),
            skills: skills
                .iter()
                .map(|name| Skill {
                    name: name.to_string(),
                    proficiency: 6,
                    years_experience: 2.0,
                    last_used: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                })
                .collect(),
            experience_level: ExperienceLevel::Mid,
            availability_status: AvailabilityStatus::Available,
            current_workload: 0.0,
            hourly_rate: None,
            preferred_project_types: vec![],
            location: String::new(),
            timezone: String::new(),
            certifications: vec![],
        }
    }

    fn score(id: &str, total: f64) -> MatchScore {
        MatchScore {
            member_id: id.to_string(),
            total_score: total,
            skill_match_score: 0.0,
            availability_score: 0.0,
            experience_score: 0.0,
            cost_score: 0.0,
            location_score: 0.0,
            certification_score: 0.0,
            detailed_breakdown: ScoreBreakdown {
                skill_details: BTreeMap::new(),
                availability_breakdown: AvailabilityBreakdown {
                    status: AvailabilityStatus::Available,
                    workload: 0.0,
                },
                experience_breakdown: ExperienceBreakdown {
                    member_level: ExperienceLevel::Mid,
                    meets_requirements: true,
                },
            },
        }
    }

    fn project_with_mandatory(skills: &[&str]) -> Project {
        Project {
            id: "p1".to_string(),
            name: "Project".to_string(),
            description: String::new(),
            requirements: skills
                .iter()
                .map(|skill| ProjectRequirement {
                    skill_name: skill.to_string(),
                    required_proficiency: 5,
                    min_experience_level: ExperienceLevel::Junior,
                    is_mandatory: true,
                    weight: 1.0,
                })
                .collect(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            priority: ProjectPriority::High,
            budget: None,
            team_size: 3,
            required_certifications: vec![],
            preferred_locations: vec![],
            project_type: String::new(),
            estimated_hours: 0,
        }
    }

    fn rank<'a>(members: &'a [TeamMember]) -> Vec<RankedCandidate<'a>> {
        members
            .iter()
            .enumerate()
            .map(|(i, member)| RankedCandidate {
                member,
                score: score(&member.id, 100.0 - i as f64 * 5.0),
            })
            .collect()
    }

    fn ids(team: &[MatchScore]) -> Vec<&str> {
        team.iter().map(|s| s.member_id.as_str()).collect()
    }

    #[test]
    fn test_returns_all_when_candidates_fit() {
        let members = vec![create_member("a", &[]), create_member("b", &[])];
        let project = project_with_mandatory(&["Rust"]);

        let team = TeamComposer::new().compose(&project, rank(&members), 3);
        assert_eq!(ids(&team), vec!["a", "b"]);
    }

    #[test]
    fn test_mandatory_skill_pulls_in_low_ranked_candidate() {
        let members: Vec<TeamMember> = (1..=10)
            .map(|i| {
                let skills: &[&str] = if i == 7 { &["Kubernetes"] } else { &["Python"] };
                create_member(&format!("c{}", i), skills)
            })
            .collect();
        let project = project_with_mandatory(&["Kubernetes"]);

        let team = TeamComposer::new().compose(&project, rank(&members), 3);
        assert_eq!(team.len(), 3);
        assert_eq!(ids(&team), vec!["c7", "c1", "c2"]);
    }

    #[test]
    fn test_each_mandatory_skill_covered_once() {
        let members = vec![
            create_member("a", &["Python"]),
            create_member("b", &["Python"]),
            create_member("c", &["Go"]),
            create_member("d", &["SQL"]),
            create_member("e", &["Go", "SQL"]),
        ];
        let project = project_with_mandatory(&["SQL", "Go"]);

        let team = TeamComposer::new().compose(&project, rank(&members), 3);
        assert_eq!(ids(&team), vec!["d", "c", "a"]);
    }

    #[test]
    fn test_coverage_stops_at_target() {
        let members = vec![
            create_member("a", &[]),
            create_member("b", &["Go"]),
            create_member("c", &["SQL"]),
            create_member("d", &["Rust"]),
        ];
        let project = project_with_mandatory(&["Go", "SQL", "Rust"]);

        let team = TeamComposer::new().compose(&project, rank(&members), 2);
        assert_eq!(ids(&team), vec!["b", "c"]);
    }

    #[test]
    fn test_unheld_mandatory_skill_falls_back_to_score_order() {
        let members: Vec<TeamMember> =
            (0..5).map(|i| create_member(&format!("m{}", i), &["Python"])).collect();
        let project = project_with_mandatory(&["Haskell"]);

        let team = TeamComposer::new().compose(&project, rank(&members), 2);
        assert_eq!(ids(&team), vec!["m0", "m1"]);
    }

    #[test]
    fn test_selection_caps_at_target() {
        let mut selection = Selection::new(2);
        assert!(selection.is_empty());
        assert_eq!(selection.target(), 2);

        assert!(selection.push(3));
        assert!(!selection.push(3), "duplicate position");
        assert!(selection.push(0));
        assert!(!selection.push(1), "selection is full");

        assert!(selection.is_full());
        assert_eq!(selection.positions(), &[3, 0]);
    }

    #[test]
    fn test_zero_target_returns_empty() {
        let members = vec![create_member("a", &["Go"])];
        let project = project_with_mandatory(&["Go"]);

        let team = TeamComposer::new().compose(&project, rank(&members), 0);
        assert!(team.is_empty());
    }

    #[test]
    fn test_team_size_is_min_of_target_and_candidates() {
        let members: Vec<TeamMember> =
            (0..6).map(|i| create_member(&format!("m{}", i), &["Go"])).collect();
        let project = project_with_mandatory(&["Go", "Rust"]);

        for target in 0..9 {
            let team = TeamComposer::new().compose(&project, rank(&members), target);
            assert_eq!(team.len(), target.min(members.len()));
        }
    }

    #[test]
    fn test_selection_rejects_duplicates_and_overflow() {
        let mut selection = Selection::new(2);
        assert!(selection.push(3));
        assert!(!selection.push(3));
        assert!(selection.push(0));
        assert!(!selection.push(1));
        assert!(selection.is_full());
        assert_eq!(selection.positions(), &[3, 0]);
    }
}
