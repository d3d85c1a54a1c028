use std::collections::BTreeMap;

use crate::models::{
    names_match, AvailabilityBreakdown, AvailabilityStatus, ExperienceBreakdown, MatchScore,
    Project, ScoreBreakdown, ScoringWeights, TeamMember,
};

/// Score returned when cost data is missing on either side
const NEUTRAL_COST_SCORE: f64 = 50.0;
/// Flat score for a member outside the project's preferred locations
const REMOTE_LOCATION_SCORE: f64 = 30.0;
/// Experience score at or above which a member counts as meeting requirements
const EXPERIENCE_QUALIFIED_THRESHOLD: f64 = 70.0;

/// Computes the six sub-scores for a (member, project) pair and combines them
///
/// total = (
///     skill_match   * w.skill_match +
///     availability  * w.availability +
///     experience    * w.experience +
///     cost          * w.cost +
///     location      * w.location +
///     certification * w.certification
/// )
///
/// Every sub-score lies in [0, 100]. The weights are not required to sum to 1.0
/// here; that constraint is enforced where weights are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, member: &TeamMember, project: &Project) -> MatchScore {
        let (skill_match_score, skill_details) = skill_match_score(member, project);
        let availability_score = availability_score(member);
        let experience_score = experience_score(member, project);
        let cost_score = cost_score(member, project);
        let location_score = location_score(member, project);
        let certification_score = certification_score(member, project);

        let w = &self.weights;
        let total_score = skill_match_score * w.skill_match
            + availability_score * w.availability
            + experience_score * w.experience
            + cost_score * w.cost
            + location_score * w.location
            + certification_score * w.certification;

        MatchScore {
            member_id: member.id.clone(),
            total_score,
            skill_match_score,
            availability_score,
            experience_score,
            cost_score,
            location_score,
            certification_score,
            detailed_breakdown: ScoreBreakdown {
                skill_details,
                availability_breakdown: AvailabilityBreakdown {
                    status: member.availability_status,
                    workload: member.current_workload,
                },
                experience_breakdown: ExperienceBreakdown {
                    member_level: member.experience_level,
                    meets_requirements: experience_score >= EXPERIENCE_QUALIFIED_THRESHOLD,
                },
            },
        }
    }
}

/// Weighted average of per-requirement skill scores (0-100)
///
/// A mandatory requirement the member lacks entirely scores 0. Otherwise the
/// requirement scores 100 when met and proportionally less when not.
/// No requirements, or zero total weight, yields 0.
pub fn skill_match_score(member: &TeamMember, project: &Project) -> (f64, BTreeMap<String, f64>) {
    let mut details = BTreeMap::new();
    if project.requirements.is_empty() {
        return (0.0, details);
    }

    let total_weight: f64 = project.requirements.iter().map(|req| req.weight).sum();
    let mut weighted = 0.0;

    for req in &project.requirements {
        let proficiency = member.skill_proficiency(&req.skill_name);

        let score = if req.is_mandatory && proficiency == 0 {
            0.0
        } else if proficiency >= req.required_proficiency {
            100.0
        } else {
            100.0 * f64::from(proficiency) / f64::from(req.required_proficiency.max(1))
        };

        weighted += score * req.weight;
        details.insert(req.skill_name.clone(), score);
    }

    let score = if total_weight > 0.0 { weighted / total_weight } else { 0.0 };
    (score, details)
}

/// Base score for the availability status
#[inline]
fn status_base_score(status: AvailabilityStatus) -> f64 {
    match status {
        AvailabilityStatus::Available => 100.0,
        AvailabilityStatus::PartiallyAvailable => 60.0,
        AvailabilityStatus::Busy => 30.0,
        AvailabilityStatus::Unavailable => 0.0,
    }
}

/// Status base score discounted linearly by current workload
#[inline]
pub fn availability_score(member: &TeamMember) -> f64 {
    let workload_factor = ((100.0 - member.current_workload) / 100.0).clamp(0.0, 1.0);
    status_base_score(member.availability_status) * workload_factor
}

/// Experience fit against the most demanding requirement
///
/// Meeting the bar scores 90 plus 2 per level above it (capped at 100);
/// falling short scores up to 70 in proportion to the member's rank.
pub fn experience_score(member: &TeamMember, project: &Project) -> f64 {
    let Some(max_required) = project
        .requirements
        .iter()
        .map(|req| req.min_experience_level.rank())
        .max()
    else {
        return 100.0;
    };

    let member_rank = member.experience_level.rank();
    if member_rank >= max_required {
        let bonus = (f64::from(member_rank - max_required) * 2.0).min(10.0);
        (90.0 + bonus).min(100.0)
    } else {
        (f64::from(member_rank) / f64::from(max_required) * 70.0).max(0.0)
    }
}

/// Cost effectiveness of the member's rate against the project budget
///
/// Within budget the score falls from 100 (free) to 50 (exactly on budget).
/// Over budget it drops a further 30 points per 100% overrun, floored at 0.
pub fn cost_score(member: &TeamMember, project: &Project) -> f64 {
    let (Some(rate), Some(budget)) = (member.hourly_rate, project.budget) else {
        return NEUTRAL_COST_SCORE;
    };
    if rate <= 0.0 || budget <= 0.0 {
        return NEUTRAL_COST_SCORE;
    }

    let estimated_cost = rate * f64::from(project.estimated_hours);
    let ratio = estimated_cost / budget;

    if estimated_cost <= budget {
        100.0 * (1.0 - ratio * 0.5)
    } else {
        (50.0 - (ratio - 1.0) * 30.0).max(0.0)
    }
}

#[inline]
pub fn location_score(member: &TeamMember, project: &Project) -> f64 {
    if project.preferred_locations.is_empty()
        || project
            .preferred_locations
            .iter()
            .any(|loc| names_match(loc, &member.location))
    {
        100.0
    } else {
        REMOTE_LOCATION_SCORE
    }
}

/// Share of required certifications the member holds
pub fn certification_score(member: &TeamMember, project: &Project) -> f64 {
    if project.required_certifications.is_empty() {
        return 100.0;
    }

    let matched = project
        .required_certifications
        .iter()
        .filter(|cert| member.has_certification(cert))
        .count();

    100.0 * matched as f64 / project.required_certifications.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, ProjectPriority, ProjectRequirement, Skill};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn create_test_member(skills: &[(&str, u8)], workload: f64) -> TeamMember {
        TeamMember {
            id: "m1".to_string(),
            name: "Test Member".to_string(),
            email: "test@example.com".to_string(),
            department: "Engineering".to_string(),
            skills: skills
                .iter()
                .map(|(name, proficiency)| Skill {
                    name: name.to_string(),
                    proficiency: *proficiency,
                    years_experience: 3.0,
                    last_used: date(),
                })
                .collect(),
            experience_level: ExperienceLevel::Senior,
            availability_status: AvailabilityStatus::Available,
            current_workload: workload,
            hourly_rate: None,
            preferred_project_types: vec![],
            location: "Berlin".to_string(),
            timezone: "CET".to_string(),
            certifications: vec![],
        }
    }

    fn requirement(skill: &str, required: u8, mandatory: bool, weight: f64) -> ProjectRequirement {
        ProjectRequirement {
            skill_name: skill.to_string(),
            required_proficiency: required,
            min_experience_level: ExperienceLevel::Mid,
            is_mandatory: mandatory,
            weight,
        }
    }

    fn create_test_project(requirements: Vec<ProjectRequirement>) -> Project {
        Project {
            id: "p1".to_string(),
            name: "Test Project".to_string(),
            description: String::new(),
            requirements,
            start_date: date(),
            end_date: date(),
            priority: ProjectPriority::Medium,
            budget: None,
            team_size: 3,
            required_certifications: vec![],
            preferred_locations: vec![],
            project_type: String::new(),
            estimated_hours: 0,
        }
    }

    #[test]
    fn test_skill_met_scores_full() {
        let member = create_test_member(&[("Python", 8)], 20.0);
        let project = create_test_project(vec![requirement("python", 5, true, 1.0)]);

        let (score, details) = skill_match_score(&member, &project);
        assert_eq!(score, 100.0);
        assert_eq!(details["python"], 100.0);
    }

    #[test]
    fn test_missing_mandatory_skill_scores_zero() {
        let member = create_test_member(&[("Java", 9)], 0.0);
        let project = create_test_project(vec![requirement("Python", 5, true, 1.0)]);

        let (score, _) = skill_match_score(&member, &project);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_partial_skill_is_proportional_and_weighted() {
        let member = create_test_member(&[("Python", 4), ("SQL", 9)], 0.0);
        let project = create_test_project(vec![
            requirement("Python", 8, false, 3.0),
            requirement("SQL", 5, false, 1.0),
        ]);

        // (50 * 3 + 100 * 1) / 4
        let (score, details) = skill_match_score(&member, &project);
        assert!((score - 62.5).abs() < 1e-9);
        assert_eq!(details["Python"], 50.0);
    }

    #[test]
    fn test_skill_score_zero_without_requirements_or_weight() {
        let member = create_test_member(&[("Python", 8)], 0.0);
        assert_eq!(skill_match_score(&member, &create_test_project(vec![])).0, 0.0);

        let project = create_test_project(vec![requirement("Python", 5, false, 0.0)]);
        assert_eq!(skill_match_score(&member, &project).0, 0.0);
    }

    #[test]
    fn test_availability_scales_with_workload() {
        let member = create_test_member(&[], 20.0);
        assert!((availability_score(&member) - 80.0).abs() < 1e-9);

        let mut busy = create_test_member(&[], 50.0);
        busy.availability_status = AvailabilityStatus::Busy;
        assert!((availability_score(&busy) - 15.0).abs() < 1e-9);

        let mut overloaded = create_test_member(&[], 130.0);
        overloaded.availability_status = AvailabilityStatus::Available;
        assert_eq!(availability_score(&overloaded), 0.0);
    }

    #[test]
    fn test_availability_monotonic_and_unavailable_zero() {
        for status in AvailabilityStatus::ALL {
            let mut previous = f64::MAX;
            for workload in (0..=100).step_by(10) {
                let mut member = create_test_member(&[], workload as f64);
                member.availability_status = status;
                let score = availability_score(&member);
                assert!(score <= previous);
                if status == AvailabilityStatus::Unavailable {
                    assert_eq!(score, 0.0);
                }
                previous = score;
            }
        }
    }

    #[test]
    fn test_experience_meets_and_exceeds() {
        let mut member = create_test_member(&[], 0.0);
        let project = create_test_project(vec![requirement("Python", 5, true, 1.0)]);

        member.experience_level = ExperienceLevel::Mid;
        assert_eq!(experience_score(&member, &project), 90.0);

        member.experience_level = ExperienceLevel::Lead;
        assert_eq!(experience_score(&member, &project), 94.0);
    }

    #[test]
    fn test_experience_below_requirement() {
        let mut member = create_test_member(&[], 0.0);
        member.experience_level = ExperienceLevel::Junior;
        let mut req = requirement("Python", 5, true, 1.0);
        req.min_experience_level = ExperienceLevel::Lead;
        let project = create_test_project(vec![req]);

        assert!((experience_score(&member, &project) - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_experience_without_requirements_qualifies() {
        let member = create_test_member(&[], 0.0);
        assert_eq!(experience_score(&member, &create_test_project(vec![])), 100.0);
    }

    #[test]
    fn test_cost_neutral_without_data() {
        let member = create_test_member(&[], 0.0);
        let project = create_test_project(vec![]);
        assert_eq!(cost_score(&member, &project), 50.0);
    }

    #[test]
    fn test_cost_within_and_over_budget() {
        let mut member = create_test_member(&[], 0.0);
        member.hourly_rate = Some(100.0);
        let mut project = create_test_project(vec![]);
        project.estimated_hours = 100;

        project.budget = Some(20_000.0);
        assert!((cost_score(&member, &project) - 75.0).abs() < 1e-9);

        project.budget = Some(10_000.0);
        assert!((cost_score(&member, &project) - 50.0).abs() < 1e-9);

        project.budget = Some(5_000.0);
        assert!((cost_score(&member, &project) - 20.0).abs() < 1e-9);

        project.budget = Some(1_000.0);
        assert_eq!(cost_score(&member, &project), 0.0);
    }

    #[test]
    fn test_location_match_and_remote_penalty() {
        let member = create_test_member(&[], 0.0);
        let mut project = create_test_project(vec![]);
        assert_eq!(location_score(&member, &project), 100.0);

        project.preferred_locations = vec!["berlin".to_string()];
        assert_eq!(location_score(&member, &project), 100.0);

        project.preferred_locations = vec!["Lisbon".to_string()];
        assert_eq!(location_score(&member, &project), 30.0);
    }

    #[test]
    fn test_location_match_folds_non_ascii_case() {
        let mut member = create_test_member(&[], 0.0);
        member.location = "Zürich".to_string();
        let mut project = create_test_project(vec![]);
        project.preferred_locations = vec!["ZÜRICH".to_string()];
        assert_eq!(location_score(&member, &project), 100.0);
    }

    #[test]
    fn test_certification_fraction() {
        let mut member = create_test_member(&[], 0.0);
        member.certifications = vec!["aws-sa".to_string()];
        let mut project = create_test_project(vec![]);
        assert_eq!(certification_score(&member, &project), 100.0);

        project.required_certifications = vec!["AWS-SA".to_string(), "CKA".to_string()];
        assert_eq!(certification_score(&member, &project), 50.0);
    }

    #[test]
    fn test_total_is_weighted_sum() {
        let member = create_test_member(&[("Python", 8)], 20.0);
        let project = create_test_project(vec![requirement("Python", 5, true, 1.0)]);
        let engine = ScoringEngine::default();

        let score = engine.score(&member, &project);
        // 100*.35 + 80*.25 + 92*.20 + 50*.10 + 100*.05 + 100*.05
        assert!((score.total_score - 88.4).abs() < 1e-9);
        assert_eq!(score.member_id, "m1");
        assert!(score.detailed_breakdown.experience_breakdown.meets_requirements);
        assert_eq!(score.detailed_breakdown.availability_breakdown.workload, 20.0);
    }

    #[test]
    fn test_all_scores_in_range() {
        let engine = ScoringEngine::default();
        for workload in [0.0, 35.0, 100.0] {
            for level in ExperienceLevel::ALL {
                let mut member = create_test_member(&[("Python", 3), ("Go", 10)], workload);
                member.experience_level = level;
                member.hourly_rate = Some(150.0);
                let mut project = create_test_project(vec![
                    requirement("Python", 9, true, 2.0),
                    requirement("Rust", 6, true, 1.0),
                    requirement("Go", 4, false, 0.5),
                ]);
                project.budget = Some(12_000.0);
                project.estimated_hours = 200;
                project.required_certifications = vec!["CKA".to_string()];
                project.preferred_locations = vec!["Paris".to_string()];

                let s = engine.score(&member, &project);
                for value in [
                    s.total_score,
                    s.skill_match_score,
                    s.availability_score,
                    s.experience_score,
                    s.cost_score,
                    s.location_score,
                    s.certification_score,
                ] {
                    assert!((0.0..=100.0).contains(&value), "score {} out of range", value);
                }
            }
        }
    }
}
