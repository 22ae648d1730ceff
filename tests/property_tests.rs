// Property tests for the ranking invariants

use event_ranker::core::{
    distance_km, filter_by_genre, popularity_score, rank, smart_scores, sort_by_accessibility,
    sort_by_budget, sort_by_popularity, sort_by_proximity,
};
use event_ranker::models::{
    AnnotatedEvent, Coordinate, Event, GenreFilter, RankingPolicyId, SmartWeights, UserLocation,
};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

prop_compose! {
    fn event(id: u32)(
        genre in prop::sample::select(vec!["movies", "music", "comedy"]),
        price in 0.0f64..5000.0,
        rating in 0.0f64..=5.0,
        popularity in 0.0f64..=100.0,
        accessible in any::<bool>(),
        location in coordinate(),
    ) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            genre: genre.to_string(),
            sub_genre: String::new(),
            base_price: price,
            rating,
            popularity,
            accessible,
            location,
            venue: "Venue".to_string(),
            address: String::new(),
            time_slots: vec![],
            language: String::new(),
            icon: String::new(),
        }
    }
}

fn catalog() -> impl Strategy<Value = Vec<Event>> {
    (0usize..16).prop_flat_map(|len| (0..len as u32).map(event).collect::<Vec<_>>())
}

fn annotated_set() -> impl Strategy<Value = Vec<AnnotatedEvent>> {
    prop::collection::vec((event(0), 0.0f64..500.0), 1..16).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (mut event, distance))| {
                event.id = i as u32;
                AnnotatedEvent::new(event, distance)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(distance_km(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        prop_assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn proximity_is_non_decreasing(events in annotated_set()) {
        let sorted = sort_by_proximity(&events);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn budget_is_non_decreasing(events in annotated_set()) {
        let sorted = sort_by_budget(&events);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].event.base_price <= pair[1].event.base_price);
        }
    }

    #[test]
    fn accessibility_partitions_then_orders_by_distance(events in annotated_set()) {
        let sorted = sort_by_accessibility(&events);
        let split = sorted.iter().position(|a| !a.event.accessible).unwrap_or(sorted.len());

        prop_assert!(sorted[split..].iter().all(|a| !a.event.accessible));
        for group in [&sorted[..split], &sorted[split..]] {
            for pair in group.windows(2) {
                prop_assert!(pair[0].distance <= pair[1].distance);
            }
        }
    }

    #[test]
    fn popularity_is_non_increasing(events in annotated_set()) {
        let sorted = sort_by_popularity(&events);
        for pair in sorted.windows(2) {
            prop_assert!(popularity_score(&pair[0].event) >= popularity_score(&pair[1].event));
        }
    }

    #[test]
    fn smart_score_ignores_distance_and_price_scale(
        events in annotated_set(),
        distance_scale in 0.01f64..100.0,
        price_scale in 0.01f64..100.0,
    ) {
        let scaled: Vec<AnnotatedEvent> = events
            .iter()
            .map(|a| {
                let mut event = a.event.clone();
                event.base_price *= price_scale;
                AnnotatedEvent::new(event, a.distance * distance_scale)
            })
            .collect();

        let original = smart_scores(&events, &SmartWeights::FIXED);
        let rescaled = smart_scores(&scaled, &SmartWeights::FIXED);
        for (a, b) in original.iter().zip(&rescaled) {
            prop_assert!((a - b).abs() < 1e-6, "{} vs {}", a, b);
        }
    }

    #[test]
    fn smart_scores_are_finite_and_bounded(events in annotated_set()) {
        for score in smart_scores(&events, &SmartWeights::FIXED) {
            prop_assert!(score.is_finite());
            prop_assert!((-1e-9..=100.0 + 1e-9).contains(&score));
        }
    }

    #[test]
    fn all_genre_is_identity(events in annotated_set()) {
        prop_assert_eq!(filter_by_genre(events.clone(), &GenreFilter::All), events);
    }

    #[test]
    fn ranking_is_a_permutation_of_the_filtered_view(
        events in catalog(),
        user in coordinate(),
        genre in prop::sample::select(vec!["all", "movies", "music", "comedy", "opera"]),
        policy in prop::sample::select(RankingPolicyId::ALL.to_vec()),
    ) {
        let user = UserLocation::new(user.lat, user.lng, "Somewhere");
        let genre = GenreFilter::from_token(genre);

        let ranked = rank(&events, &user, &genre, policy);

        let mut expected: Vec<u32> = events
            .iter()
            .filter(|e| genre == GenreFilter::All || e.genre == genre.as_token())
            .map(|e| e.id)
            .collect();
        let mut actual: Vec<u32> = ranked.iter().map(|a| a.event.id).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }
}
