use crate::core::distance::round_to_tenth;
use crate::models::{AnnotatedEvent, ViewStatistics};

/// Summary figures for the events currently on screen
///
/// Distance and rating averages are rounded to one decimal place, the price
/// average to a whole amount. An empty view reports no averages rather than
/// dividing by zero.
pub fn view_statistics(events: &[AnnotatedEvent]) -> ViewStatistics {
    let event_count = events.len();
    let average = |total: f64| {
        if event_count == 0 {
            None
        } else {
            Some(total / event_count as f64)
        }
    };

    let total_distance: f64 = events.iter().map(|a| a.distance).sum();
    let total_price: f64 = events.iter().map(|a| a.event.base_price).sum();
    let total_rating: f64 = events.iter().map(|a| a.event.rating).sum();

    ViewStatistics {
        event_count,
        avg_distance: average(total_distance).map(round_to_tenth),
        avg_price: average(total_price).map(f64::round),
        avg_rating: average(total_rating).map(round_to_tenth),
    }
}
