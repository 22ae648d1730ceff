// Unit tests for Event Ranker

use event_ranker::core::{
    distance::{distance_km, haversine_distance},
    filters::filter_by_genre,
    policies::{smart_sort, sort_by_accessibility, sort_by_budget, sort_by_popularity, sort_by_proximity},
    scoring::{popularity_score, smart_scores},
    stats::view_statistics,
};
use event_ranker::models::{AnnotatedEvent, Coordinate, Event, GenreFilter, SmartWeights};

fn create_event(id: u32, genre: &str, price: f64, rating: f64, popularity: f64, accessible: bool) -> Event {
    Event {
        id,
        title: format!("Event {}", id),
        genre: genre.to_string(),
        sub_genre: "General".to_string(),
        base_price: price,
        rating,
        popularity,
        accessible,
        location: Coordinate::new(19.0760, 72.8777),
        venue: format!("Venue {}", id),
        address: "Mumbai".to_string(),
        time_slots: vec!["7:00 PM".to_string()],
        language: "Hindi".to_string(),
        icon: "🎫".to_string(),
    }
}

fn annotated(id: u32, distance: f64) -> AnnotatedEvent {
    AnnotatedEvent::new(create_event(id, "music", 500.0, 4.0, 50.0, false), distance)
}

fn ids(events: &[AnnotatedEvent]) -> Vec<u32> {
    events.iter().map(|a| a.event.id).collect()
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(19.0760, 72.8777, 19.0760, 72.8777);
    assert!(distance < 0.01);
}

#[test]
fn test_distance_km_mumbai_to_pune() {
    // Mumbai to Pune is roughly 120 km as the crow flies
    let mumbai = Coordinate::new(19.0760, 72.8777);
    let pune = Coordinate::new(18.5204, 73.8567);

    let distance = distance_km(&mumbai, &pune);
    assert!(distance > 110.0 && distance < 130.0, "Expected ~120km, got {}", distance);
    assert_eq!(distance, distance_km(&pune, &mumbai));
}

#[test]
fn test_proximity_example_order() {
    let events = vec![annotated(1, 2.0), annotated(2, 10.0), annotated(3, 5.0)];

    let distances: Vec<f64> = sort_by_proximity(&events).iter().map(|a| a.distance).collect();
    assert_eq!(distances, vec![2.0, 5.0, 10.0]);
}

#[test]
fn test_budget_ascending() {
    let events = vec![
        AnnotatedEvent::new(create_event(1, "music", 1500.0, 4.0, 50.0, false), 1.0),
        AnnotatedEvent::new(create_event(2, "music", 0.0, 4.0, 50.0, false), 1.0),
        AnnotatedEvent::new(create_event(3, "music", 450.0, 4.0, 50.0, false), 1.0),
    ];

    assert_eq!(ids(&sort_by_budget(&events)), vec![2, 3, 1]);
}

#[test]
fn test_accessibility_tied_events_nearest_first() {
    let events = vec![
        AnnotatedEvent::new(create_event(1, "music", 500.0, 4.0, 50.0, true), 3.0),
        AnnotatedEvent::new(create_event(2, "music", 500.0, 4.0, 50.0, true), 1.0),
    ];

    let sorted = sort_by_accessibility(&events);
    assert_eq!(sorted[0].distance, 1.0);
}

#[test]
fn test_popularity_uses_rating_and_popularity() {
    let loved = create_event(1, "music", 500.0, 5.0, 20.0, false); // 60
    let hyped = create_event(2, "music", 500.0, 2.0, 90.0, false); // 65
    assert!(popularity_score(&hyped) > popularity_score(&loved));

    let events = vec![AnnotatedEvent::new(loved, 1.0), AnnotatedEvent::new(hyped, 1.0)];
    assert_eq!(ids(&sort_by_popularity(&events)), vec![2, 1]);
}

#[test]
fn test_smart_sort_single_event_scores() {
    // Free, co-located, top-rated, maximally popular
    let accessible = vec![AnnotatedEvent::new(create_event(1, "music", 0.0, 5.0, 100.0, true), 0.0)];
    let inaccessible = vec![AnnotatedEvent::new(create_event(2, "music", 0.0, 5.0, 100.0, false), 0.0)];
    let weights = SmartWeights::FIXED;

    let score = smart_scores(&accessible, &weights)[0];
    assert!((score - 100.0 * weights.sum()).abs() < 1e-9, "got {}", score);

    let score = smart_scores(&inaccessible, &weights)[0];
    assert!(
        (score - 100.0 * (weights.sum() - weights.accessibility)).abs() < 1e-9,
        "got {}",
        score
    );

    assert_eq!(smart_sort(&accessible).len(), 1);
}

#[test]
fn test_smart_sort_uses_local_maxima() {
    // Event 3 is far away but filtered out before ranking; the remaining
    // two are normalized against each other only.
    let events = vec![
        AnnotatedEvent::new(create_event(1, "music", 400.0, 4.0, 50.0, false), 4.0),
        AnnotatedEvent::new(create_event(2, "music", 400.0, 4.0, 50.0, false), 2.0),
        AnnotatedEvent::new(create_event(3, "comedy", 400.0, 4.0, 50.0, false), 400.0),
    ];
    let music = filter_by_genre(events, &GenreFilter::from_token("music"));
    let scores = smart_scores(&music, &SmartWeights::FIXED);

    // Event 1 sits at the local max distance, so its distance term is zero
    let without_distance = 100.0 * 0.25 + 80.0 * 0.25 + 50.0 * 0.15;
    assert!((scores[0] - without_distance).abs() < 1e-9, "got {}", scores[0]);
    assert_eq!(ids(&smart_sort(&music)), vec![2, 1]);
}

#[test]
fn test_filter_all_keeps_order() {
    let events = vec![annotated(5, 1.0), annotated(1, 2.0), annotated(3, 3.0)];
    assert_eq!(ids(&filter_by_genre(events, &GenreFilter::All)), vec![5, 1, 3]);
}

#[test]
fn test_view_statistics_guarded_for_empty_view() {
    let stats = view_statistics(&[]);
    assert_eq!(stats.event_count, 0);
    assert!(stats.avg_distance.is_none());
    assert!(stats.avg_price.is_none());
    assert!(stats.avg_rating.is_none());
}
