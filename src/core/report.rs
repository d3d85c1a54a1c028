use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::round2;
use crate::models::{
    AvailabilityStatus, ExperienceLevel, MatchScore, Project, ProjectPriority, TeamMember,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub priority: ProjectPriority,
    /// "<start> to <end>" with YYYY-MM-DD dates
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub name: String,
    pub proficiency: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    pub status: AvailabilityStatus,
    pub workload: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub experience_level: ExperienceLevel,
    pub match_score: f64,
    pub skills: Vec<SkillLevel>,
    pub availability: AvailabilitySummary,
}

/// A team member holding a given skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillHolder {
    pub member: String,
    pub proficiency: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementCoverage {
    pub skill: String,
    pub required_proficiency: u8,
    pub is_mandatory: bool,
    pub covered_by: Vec<SkillHolder>,
    pub is_covered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatistics {
    pub team_size: usize,
    pub average_match_score: Option<f64>,
    pub estimated_total_cost: Option<f64>,
    pub skill_coverage: BTreeMap<String, Vec<SkillHolder>>,
    pub requirement_coverage: Vec<RequirementCoverage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub project: ProjectSummary,
    pub team_members: Vec<TeamMemberSummary>,
    pub team_statistics: TeamStatistics,
}

/// Aggregates a selected team into a descriptive report. Performs no scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    /// Build a report for `team`, resolving members by id in `members`.
    /// Team entries whose member id is unknown are left out of the member list.
    pub fn build(&self, project: &Project, members: &[TeamMember], team: &[MatchScore]) -> TeamReport {
        let mut team_members = Vec::with_capacity(team.len());
        let mut resolved: Vec<&TeamMember> = Vec::with_capacity(team.len());
        let mut total_cost = 0.0;
        let mut cost_contributors = 0usize;
        let mut skill_coverage: BTreeMap<String, Vec<SkillHolder>> = BTreeMap::new();

        for score in team {
            let Some(member) = members.iter().find(|m| m.id == score.member_id) else {
                tracing::warn!("Team member {} not found while building report", score.member_id);
                continue;
            };

            team_members.push(TeamMemberSummary {
                id: member.id.clone(),
                name: member.name.clone(),
                email: member.email.clone(),
                experience_level: member.experience_level,
                match_score: round2(score.total_score),
                skills: member
                    .skills
                    .iter()
                    .map(|skill| SkillLevel {
                        name: skill.name.clone(),
                        proficiency: skill.proficiency,
                    })
                    .collect(),
                availability: AvailabilitySummary {
                    status: member.availability_status,
                    workload: member.current_workload,
                },
            });

            if let Some(rate) = member.hourly_rate.filter(|rate| *rate > 0.0) {
                if project.estimated_hours > 0 {
                    total_cost += rate * f64::from(project.estimated_hours);
                    cost_contributors += 1;
                }
            }

            for skill in &member.skills {
                skill_coverage
                    .entry(skill.name.clone())
                    .or_default()
                    .push(SkillHolder {
                        member: member.name.clone(),
                        proficiency: skill.proficiency,
                    });
            }

            resolved.push(member);
        }

        let requirement_coverage = project
            .requirements
            .iter()
            .map(|req| {
                let covered_by: Vec<SkillHolder> = resolved
                    .iter()
                    .filter_map(|member| {
                        let proficiency = member.skill_proficiency(&req.skill_name);
                        (proficiency > 0).then(|| SkillHolder {
                            member: member.name.clone(),
                            proficiency,
                        })
                    })
                    .collect();
                let is_covered = covered_by
                    .iter()
                    .any(|holder| holder.proficiency >= req.required_proficiency);

                RequirementCoverage {
                    skill: req.skill_name.clone(),
                    required_proficiency: req.required_proficiency,
                    is_mandatory: req.is_mandatory,
                    covered_by,
                    is_covered,
                }
            })
            .collect();

        let average_match_score = if team.is_empty() {
            None
        } else {
            let sum: f64 = team.iter().map(|score| score.total_score).sum();
            Some(round2(sum / team.len() as f64))
        };

        TeamReport {
            project: ProjectSummary {
                id: project.id.clone(),
                name: project.name.clone(),
                priority: project.priority,
                duration: format!(
                    "{} to {}",
                    project.start_date.format("%Y-%m-%d"),
                    project.end_date.format("%Y-%m-%d")
                ),
            },
            team_statistics: TeamStatistics {
                team_size: team_members.len(),
                average_match_score,
                estimated_total_cost: (cost_contributors > 0).then(|| round2(total_cost)),
                skill_coverage,
                requirement_coverage,
            },
            team_members,
        }
    }
}
