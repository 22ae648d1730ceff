use crate::models::{AnnotatedEvent, Event, GenreFilter};

/// Check if an event belongs to the selected genre
///
/// Genre tokens compare exactly; `All` accepts every event.
#[inline]
pub fn matches_genre(event: &Event, genre: &GenreFilter) -> bool {
    match genre {
        GenreFilter::All => true,
        GenreFilter::Genre(token) => event.genre == *token,
    }
}

/// Narrow annotated events to the selected genre
///
/// `All` hands the input back untouched. Any other token keeps the matching
/// events in their original relative order; a genre nobody has yields an
/// empty collection.
pub fn filter_by_genre(events: Vec<AnnotatedEvent>, genre: &GenreFilter) -> Vec<AnnotatedEvent> {
    match genre {
        GenreFilter::All => events,
        GenreFilter::Genre(_) => events
            .into_iter()
            .filter(|annotated| matches_genre(&annotated.event, genre))
            .collect(),
    }
}
