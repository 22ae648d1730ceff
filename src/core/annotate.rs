use crate::core::distance::distance_km;
use crate::models::{AnnotatedEvent, Event, UserLocation};

/// Attach the distance from `user` to every catalog event
///
/// Catalog order is preserved and the catalog itself is left untouched.
/// Nothing is cached; call again whenever the user moves.
pub fn annotate(catalog: &[Event], user: &UserLocation) -> Vec<AnnotatedEvent> {
    let origin = user.coordinate();

    catalog
        .iter()
        .map(|event| AnnotatedEvent::new(event.clone(), distance_km(&origin, &event.location)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn create_event(id: u32, lat: f64, lng: f64) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            genre: "music".to_string(),
            sub_genre: "Live".to_string(),
            base_price: 500.0,
            rating: 4.0,
            popularity: 60.0,
            accessible: false,
            location: Coordinate::new(lat, lng),
            venue: "Venue".to_string(),
            address: "Address".to_string(),
            time_slots: vec![],
            language: "Hindi".to_string(),
            icon: "🎵".to_string(),
        }
    }

    #[test]
    fn test_annotate_preserves_order_and_source() {
        let catalog = vec![
            create_event(3, 19.2, 72.9),
            create_event(1, 19.0760, 72.8777),
            create_event(2, 18.9, 72.8),
        ];
        let snapshot = catalog.clone();
        let user = UserLocation::new(19.0760, 72.8777, "Mumbai");

        let annotated = annotate(&catalog, &user);

        let ids: Vec<u32> = annotated.iter().map(|a| a.event.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(annotated[1].distance, 0.0);
        assert!(annotated[0].distance > 0.0);
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn test_annotate_recomputes_for_new_location() {
        let catalog = vec![create_event(1, 19.0760, 72.8777)];

        let here = annotate(&catalog, &UserLocation::new(19.0760, 72.8777, "Here"));
        let there = annotate(&catalog, &UserLocation::new(18.5204, 73.8567, "Pune"));

        assert_eq!(here[0].distance, 0.0);
        assert!(there[0].distance > 100.0);
    }

    #[test]
    fn test_annotate_empty_catalog() {
        let user = UserLocation::new(0.0, 0.0, "Null Island");
        assert!(annotate(&[], &user).is_empty());
    }
}
