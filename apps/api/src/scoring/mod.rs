// CV scoring core: catalog, normalization, gates, extraction, recommendations.
// Everything below `handlers` is synchronous and pure; the catalog is injected.

pub mod catalog;
pub mod extractor;
pub mod handlers;
pub mod match_score;
pub mod normalize;
pub mod pipeline;
pub mod recommender;
pub mod validity;
