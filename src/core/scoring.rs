use crate::models::{AnnotatedEvent, Event, SmartWeights};

/// Popularity ranking key: `rating * 10 + popularity * 0.5`
#[inline]
pub fn popularity_score(event: &Event) -> f64 {
    event.rating * 10.0 + event.popularity * 0.5
}

/// Range of one normalized dimension over the set being ranked
#[derive(Debug, Clone, Copy, PartialEq)]
struct DimensionRange {
    min: f64,
    max: f64,
}

impl DimensionRange {
    fn over(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |range, value| Self {
                min: range.min.min(value),
                max: range.max.max(value),
            },
        )
    }

    /// Every value ties: a zero maximum, a single event or an empty set
    fn is_degenerate(&self) -> bool {
        self.max == 0.0 || self.max <= self.min
    }

    /// `1 - value / max`, or 1 for every value when the range is degenerate
    #[inline]
    fn closeness(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            1.0
        } else {
            1.0 - value / self.max
        }
    }
}

/// Local normalization for the smart score
///
/// Maxima are taken over the events actually being ranked (the filtered
/// view), never the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    distance: DimensionRange,
    price: DimensionRange,
}

impl Normalization {
    pub fn over(events: &[AnnotatedEvent]) -> Self {
        Self {
            distance: DimensionRange::over(events.iter().map(|a| a.distance)),
            price: DimensionRange::over(events.iter().map(|a| a.event.base_price)),
        }
    }

    pub fn max_distance(&self) -> f64 {
        self.distance.max.max(0.0)
    }

    pub fn max_price(&self) -> f64 {
        self.price.max.max(0.0)
    }

    pub fn distance_is_degenerate(&self) -> bool {
        self.distance.is_degenerate()
    }

    pub fn price_is_degenerate(&self) -> bool {
        self.price.is_degenerate()
    }
}

/// Calculate the smart composite score for one event
///
/// Scoring formula:
/// score = (
///     (1 - distance / maxDistance) * 100 * w.distance +
///     (1 - basePrice / maxPrice) * 100 * w.price +
///     (rating / 5) * 100 * w.rating +
///     popularity * w.popularity +
///     (accessible ? 100 : 0) * w.accessibility
/// )
///
/// A degenerate distance or price range contributes its full weight to
/// every event.
pub fn smart_score(event: &AnnotatedEvent, norm: &Normalization, weights: &SmartWeights) -> f64 {
    let distance_score = norm.distance.closeness(event.distance) * 100.0;
    let price_score = norm.price.closeness(event.event.base_price) * 100.0;
    let rating_score = (event.event.rating / 5.0) * 100.0;
    let accessibility_score = if event.event.accessible { 100.0 } else { 0.0 };

    distance_score * weights.distance
        + price_score * weights.price
        + rating_score * weights.rating
        + event.event.popularity * weights.popularity
        + accessibility_score * weights.accessibility
}

/// Smart scores for a whole view, index-aligned with `events`
pub fn smart_scores(events: &[AnnotatedEvent], weights: &SmartWeights) -> Vec<f64> {
    let norm = Normalization::over(events);
    events
        .iter()
        .map(|event| smart_score(event, &norm, weights))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn create_annotated(distance: f64, price: f64, rating: f64, popularity: f64, accessible: bool) -> AnnotatedEvent {
        AnnotatedEvent::new(
            Event {
                id: 1,
                title: "Test Event".to_string(),
                genre: "music".to_string(),
                sub_genre: String::new(),
                base_price: price,
                rating,
                popularity,
                accessible,
                location: Coordinate::new(19.0, 72.8),
                venue: "Venue".to_string(),
                address: String::new(),
                time_slots: vec![],
                language: String::new(),
                icon: String::new(),
            },
            distance,
        )
    }

    #[test]
    fn test_popularity_score() {
        let event = create_annotated(1.0, 100.0, 4.5, 90.0, false).event;
        assert!((popularity_score(&event) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_smart_score_formula() {
        let events = vec![
            create_annotated(5.0, 500.0, 4.0, 80.0, true),
            create_annotated(10.0, 1000.0, 3.0, 40.0, false),
        ];
        let scores = smart_scores(&events, &SmartWeights::FIXED);

        // 50*0.30 + 50*0.25 + 80*0.25 + 80*0.15 + 100*0.05
        assert!((scores[0] - 64.5).abs() < 1e-9, "got {}", scores[0]);
        // 0 + 0 + 60*0.25 + 40*0.15 + 0
        assert!((scores[1] - 21.0).abs() < 1e-9, "got {}", scores[1]);
    }

    #[test]
    fn test_zero_max_distance_gives_full_weight() {
        let events = vec![
            create_annotated(0.0, 200.0, 4.0, 50.0, false),
            create_annotated(0.0, 400.0, 4.0, 50.0, false),
        ];
        let norm = Normalization::over(&events);
        assert!(norm.distance_is_degenerate());
        assert!(!norm.price_is_degenerate());

        let scores = smart_scores(&events, &SmartWeights::FIXED);
        assert!(scores.iter().all(|s| s.is_finite()));
        // distance term: 100 * 0.30 for both
        assert!((scores[0] - (30.0 + 12.5 + 20.0 + 7.5)).abs() < 1e-9);
        assert!((scores[1] - (30.0 + 0.0 + 20.0 + 7.5)).abs() < 1e-9);
    }

    #[test]
    fn test_all_free_events_give_full_price_weight() {
        let events = vec![
            create_annotated(2.0, 0.0, 5.0, 100.0, true),
            create_annotated(4.0, 0.0, 5.0, 100.0, true),
        ];
        let norm = Normalization::over(&events);
        assert!(norm.price_is_degenerate());
        assert_eq!(norm.max_price(), 0.0);

        let scores = smart_scores(&events, &SmartWeights::FIXED);
        assert!((scores[0] - (15.0 + 25.0 + 25.0 + 15.0 + 5.0)).abs() < 1e-9);
        assert!((scores[1] - (0.0 + 25.0 + 25.0 + 15.0 + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_single_event_is_degenerate_on_both_dimensions() {
        let events = vec![create_annotated(12.3, 750.0, 5.0, 100.0, false)];
        let norm = Normalization::over(&events);
        assert!(norm.distance_is_degenerate());
        assert!(norm.price_is_degenerate());

        let scores = smart_scores(&events, &SmartWeights::FIXED);
        assert!((scores[0] - 95.0).abs() < 1e-9, "got {}", scores[0]);
    }

    #[test]
    fn test_empty_view_has_no_scores() {
        assert!(smart_scores(&[], &SmartWeights::FIXED).is_empty());
        let norm = Normalization::over(&[]);
        assert_eq!(norm.max_distance(), 0.0);
        assert!(norm.distance_is_degenerate());
    }
}
