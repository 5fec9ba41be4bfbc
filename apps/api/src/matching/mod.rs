// Matching engine: normalization, skill graph, scoring, categorization,
// narratives, ranking and tiering. Pure and synchronous; no I/O here
// apart from the HTTP handler.

pub mod categorizer;
pub mod handlers;
pub mod learning_paths;
pub mod narrative;
pub mod normalize;
pub mod pipeline;
pub mod ranker;
pub mod scorer;
pub mod skill_graph;
