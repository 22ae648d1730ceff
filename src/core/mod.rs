// Core algorithm exports
pub mod annotate;
pub mod distance;
pub mod filters;
pub mod policies;
pub mod ranker;
pub mod scoring;
pub mod stats;

pub use annotate::annotate;
pub use distance::{distance_km, haversine_distance, round_to_tenth};
pub use filters::{filter_by_genre, matches_genre};
pub use policies::{
    apply_policy, smart_sort, smart_sort_with, sort_by_accessibility, sort_by_budget,
    sort_by_popularity, sort_by_proximity,
};
pub use ranker::{rank, rank_view, RankedView};
pub use scoring::{popularity_score, smart_score, smart_scores, Normalization};
pub use stats::view_statistics;
