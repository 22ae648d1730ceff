use crate::models::{
    AnnotatedEvent, Event, GenreFilter, RankingPolicyId, UserLocation, ViewState, ViewStatistics,
};
use crate::core::{
    annotate::annotate,
    filters::filter_by_genre,
    policies::apply_policy,
    stats::view_statistics,
};

/// Rank the catalog for one view
///
/// # Pipeline Stages
/// 1. Distance annotation against `user`
/// 2. Genre filtering
/// 3. Ordering under the selected policy
///
/// Pure function of its inputs: call it again with the full catalog whenever
/// location, genre or policy changes.
pub fn rank(
    catalog: &[Event],
    user: &UserLocation,
    genre: &GenreFilter,
    policy: RankingPolicyId,
) -> Vec<AnnotatedEvent> {
    let annotated = annotate(catalog, user);
    let filtered = filter_by_genre(annotated, genre);
    let ranked = apply_policy(policy, &filtered);

    tracing::debug!(
        "Ranked {} of {} events (genre: {}, policy: {})",
        ranked.len(),
        catalog.len(),
        genre,
        policy
    );

    ranked
}

/// [`rank`] taking the whole view state at once
pub fn rank_view(catalog: &[Event], view: &ViewState) -> Vec<AnnotatedEvent> {
    rank(catalog, &view.location, &view.genre, view.policy)
}

/// Ranked events together with the figures shown beside them
#[derive(Debug, Clone)]
pub struct RankedView {
    pub events: Vec<AnnotatedEvent>,
    pub statistics: ViewStatistics,
    pub catalog_size: usize,
}

impl RankedView {
    pub fn build(catalog: &[Event], view: &ViewState) -> Self {
        let events = rank_view(catalog, view);
        let statistics = view_statistics(&events);

        Self {
            events,
            statistics,
            catalog_size: catalog.len(),
        }
    }
}
