// Route exports
pub mod algorithm;
pub mod error;
pub mod matching;
pub mod members;
pub mod projects;
pub mod utils;

use actix_web::web;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::TeamMatcher;
use crate::models::ScoringWeights;
use crate::services::Registry;

pub use error::{handle_json_payload_error, handle_query_payload_error, ApiError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub weights: Arc<RwLock<ScoringWeights>>,
}

impl AppState {
    pub fn new(registry: Registry, weights: ScoringWeights) -> Self {
        Self {
            registry: Arc::new(registry),
            weights: Arc::new(RwLock::new(weights)),
        }
    }

    /// Matcher bound to the weights current at call time
    pub async fn matcher(&self) -> TeamMatcher {
        TeamMatcher::new(*self.weights.read().await)
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(utils::root)).service(
        web::scope("/api/v1")
            .configure(utils::configure)
            .configure(members::configure)
            .configure(projects::configure)
            .configure(matching::configure)
            .configure(algorithm::configure),
    );
}
