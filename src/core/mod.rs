// Core algorithm exports
pub mod composer;
pub mod error;
pub mod matcher;
pub mod report;
pub mod scoring;

pub use composer::{
    CoverageSelector, MandatorySkillCoverage, RankedCandidate, ScoreOrderTopUp, Selection,
    TeamComposer, TopUpSelector,
};
pub use error::MatchError;
pub use matcher::TeamMatcher;
pub use report::{ReportGenerator, TeamReport};
pub use scoring::ScoringEngine;

/// Round to two decimal places for presentation
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
