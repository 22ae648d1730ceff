use std::cmp::Ordering;

use crate::core::scoring::{popularity_score, smart_scores};
use crate::models::{AnnotatedEvent, RankingPolicyId, SmartWeights};

// Every policy copies its input and orders the copy with `sort_by`, which is
// stable: events the comparator considers equal keep their incoming order.

/// Nearest first
pub fn sort_by_proximity(events: &[AnnotatedEvent]) -> Vec<AnnotatedEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    sorted
}

/// Cheapest first
pub fn sort_by_budget(events: &[AnnotatedEvent]) -> Vec<AnnotatedEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| a.event.base_price.total_cmp(&b.event.base_price));
    sorted
}

/// Accessible events first, nearest first within each group
pub fn sort_by_accessibility(events: &[AnnotatedEvent]) -> Vec<AnnotatedEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| {
        b.event
            .accessible
            .cmp(&a.event.accessible)
            .then_with(|| a.distance.total_cmp(&b.distance))
    });
    sorted
}

/// Highest `rating * 10 + popularity * 0.5` first
pub fn sort_by_popularity(events: &[AnnotatedEvent]) -> Vec<AnnotatedEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| popularity_score(&b.event).total_cmp(&popularity_score(&a.event)));
    sorted
}

/// Highest smart composite score first
///
/// Distance and price are normalized against the maxima of `events` itself.
pub fn smart_sort(events: &[AnnotatedEvent]) -> Vec<AnnotatedEvent> {
    smart_sort_with(events, &SmartWeights::FIXED)
}

/// Smart sort under explicit weights
pub fn smart_sort_with(events: &[AnnotatedEvent], weights: &SmartWeights) -> Vec<AnnotatedEvent> {
    let scores = smart_scores(events, weights);

    let mut scored: Vec<(f64, &AnnotatedEvent)> = scores.into_iter().zip(events).collect();
    scored.sort_by(|(a, _), (b, _)| descending(*a, *b));

    scored.into_iter().map(|(_, event)| event.clone()).collect()
}

#[inline]
fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Order `events` under the selected policy
pub fn apply_policy(policy: RankingPolicyId, events: &[AnnotatedEvent]) -> Vec<AnnotatedEvent> {
    match policy {
        RankingPolicyId::Proximity => sort_by_proximity(events),
        RankingPolicyId::Budget => sort_by_budget(events),
        RankingPolicyId::Accessibility => sort_by_accessibility(events),
        RankingPolicyId::Popularity => sort_by_popularity(events),
        RankingPolicyId::Smart => smart_sort(events),
    }
}
