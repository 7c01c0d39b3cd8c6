use std::sync::Arc;

use crate::scoring::catalog::Catalog;
use crate::scoring::recommender::{CourseRecommender, KeywordRecommender};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only afterwards.
    pub catalog: Arc<Catalog>,
    /// Pluggable recommender. Default: KeywordRecommender over `catalog`.
    pub recommender: Arc<dyn CourseRecommender>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let recommender = Arc::new(KeywordRecommender::new(catalog.clone()));
        AppState {
            catalog,
            recommender,
        }
    }
}
