use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;
use crate::models::{Coordinate, Event};

/// Errors that can occur while loading an event catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("Invalid event {id}: {reason}")]
    InvalidEvent { id: u32, reason: String },

    #[error("Duplicate event id: {0}")]
    DuplicateId(u32),
}

/// Accepted JSON layouts: a bare array or an `events` table
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Event>),
    Table { events: Vec<Event> },
}

impl CatalogDocument {
    fn into_events(self) -> Vec<Event> {
        match self {
            CatalogDocument::List(events) | CatalogDocument::Table { events } => events,
        }
    }
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    events: Vec<Event>,
}

/// Validated, immutable event catalog
///
/// Event order is the canonical order of the unfiltered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Build a catalog, rejecting out-of-range fields and repeated ids
    pub fn new(events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(events.len());

        for event in &events {
            event
                .validate()
                .and_then(|_| event.location.validate())
                .map_err(|errors| CatalogError::InvalidEvent {
                    id: event.id,
                    reason: errors.to_string(),
                })?;

            if !seen.insert(event.id) {
                return Err(CatalogError::DuplicateId(event.id));
            }
        }

        Ok(Self { events })
    }

    /// Load a catalog from a `.json` or `.toml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json_str(&contents)?,
            "toml" => Self::from_toml_str(&contents)?,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        tracing::info!("Loaded {} events from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.into_events())
    }

    /// Parse a TOML catalog made of `[[events]]` tables
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let document: TomlCatalog = toml::from_str(source)?;
        Self::new(document.events)
    }

    /// Sample catalog of Mumbai events used when no file is configured
    pub fn builtin() -> Self {
        Self {
            events: builtin_events(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct genres in order of first appearance
    pub fn genres(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .filter(|event| seen.insert(event.genre.as_str()))
            .map(|event| event.genre.clone())
            .collect()
    }
}

struct Sample {
    id: u32,
    title: &'static str,
    genre: &'static str,
    sub_genre: &'static str,
    base_price: f64,
    rating: f64,
    popularity: f64,
    accessible: bool,
    location: (f64, f64),
    venue: &'static str,
    address: &'static str,
    time_slots: &'static [&'static str],
    language: &'static str,
    icon: &'static str,
}

impl From<&Sample> for Event {
    fn from(sample: &Sample) -> Self {
        Event {
            id: sample.id,
            title: sample.title.to_string(),
            genre: sample.genre.to_string(),
            sub_genre: sample.sub_genre.to_string(),
            base_price: sample.base_price,
            rating: sample.rating,
            popularity: sample.popularity,
            accessible: sample.accessible,
            location: Coordinate::new(sample.location.0, sample.location.1),
            venue: sample.venue.to_string(),
            address: sample.address.to_string(),
            time_slots: sample.time_slots.iter().map(|slot| slot.to_string()).collect(),
            language: sample.language.to_string(),
            icon: sample.icon.to_string(),
        }
    }
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: 1,
        title: "Monsoon Blockbuster Premiere",
        genre: "movies",
        sub_genre: "Action",
        base_price: 350.0,
        rating: 4.3,
        popularity: 92.0,
        accessible: true,
        location: (19.0176, 72.8562),
        venue: "PVR Phoenix Palladium",
        address: "Lower Parel, Mumbai",
        time_slots: &["10:30 AM", "2:15 PM", "6:45 PM", "10:00 PM"],
        language: "Hindi",
        icon: "🎬",
    },
    Sample {
        id: 2,
        title: "Arijit Singh Live",
        genre: "music",
        sub_genre: "Bollywood",
        base_price: 2499.0,
        rating: 4.8,
        popularity: 98.0,
        accessible: true,
        location: (19.0414, 72.8190),
        venue: "NSCI Dome",
        address: "Worli, Mumbai",
        time_slots: &["7:00 PM"],
        language: "Hindi",
        icon: "🎤",
    },
    Sample {
        id: 3,
        title: "Stand-up Saturday",
        genre: "comedy",
        sub_genre: "Stand-up",
        base_price: 499.0,
        rating: 4.5,
        popularity: 76.0,
        accessible: false,
        location: (19.1197, 72.8464),
        venue: "The Habitat",
        address: "Khar West, Mumbai",
        time_slots: &["8:00 PM", "10:30 PM"],
        language: "English",
        icon: "😂",
    },
    Sample {
        id: 4,
        title: "Mughal-e-Azam: The Musical",
        genre: "theatre",
        sub_genre: "Musical",
        base_price: 1500.0,
        rating: 4.7,
        popularity: 84.0,
        accessible: true,
        location: (18.9256, 72.8242),
        venue: "NCPA Jamshed Bhabha Theatre",
        address: "Nariman Point, Mumbai",
        time_slots: &["3:00 PM", "7:30 PM"],
        language: "Hindustani",
        icon: "🎭",
    },
    Sample {
        id: 5,
        title: "Mumbai Indians Fan Screening",
        genre: "sports",
        sub_genre: "Cricket",
        base_price: 199.0,
        rating: 4.1,
        popularity: 88.0,
        accessible: false,
        location: (18.9389, 72.8258),
        venue: "Wankhede Fan Zone",
        address: "Churchgate, Mumbai",
        time_slots: &["7:30 PM"],
        language: "Hindi",
        icon: "🏏",
    },
    Sample {
        id: 6,
        title: "Indie Nights",
        genre: "music",
        sub_genre: "Indie",
        base_price: 799.0,
        rating: 4.4,
        popularity: 65.0,
        accessible: false,
        location: (19.0645, 72.8350),
        venue: "antiSOCIAL",
        address: "Khar West, Mumbai",
        time_slots: &["9:00 PM"],
        language: "English",
        icon: "🎸",
    },
    Sample {
        id: 7,
        title: "Marathi Classics Retrospective",
        genre: "movies",
        sub_genre: "Drama",
        base_price: 150.0,
        rating: 4.0,
        popularity: 42.0,
        accessible: true,
        location: (19.0186, 72.8428),
        venue: "Plaza Cinema",
        address: "Dadar West, Mumbai",
        time_slots: &["11:00 AM", "4:00 PM"],
        language: "Marathi",
        icon: "🎞️",
    },
    Sample {
        id: 8,
        title: "Open Mic at the Promenade",
        genre: "comedy",
        sub_genre: "Open Mic",
        base_price: 0.0,
        rating: 3.8,
        popularity: 35.0,
        accessible: true,
        location: (19.0544, 72.8206),
        venue: "Carter Road Amphitheatre",
        address: "Bandra West, Mumbai",
        time_slots: &["6:00 PM"],
        language: "English",
        icon: "🎙️",
    },
    Sample {
        id: 9,
        title: "Sufi Evening",
        genre: "music",
        sub_genre: "Sufi",
        base_price: 1200.0,
        rating: 4.6,
        popularity: 71.0,
        accessible: true,
        location: (19.2307, 72.8567),
        venue: "Borivali Sports Complex",
        address: "Borivali West, Mumbai",
        time_slots: &["7:00 PM"],
        language: "Urdu",
        icon: "🎶",
    },
    Sample {
        id: 10,
        title: "Pro Kabaddi Watch Party",
        genre: "sports",
        sub_genre: "Kabaddi",
        base_price: 299.0,
        rating: 3.9,
        popularity: 58.0,
        accessible: false,
        location: (19.1136, 72.8697),
        venue: "Andheri Sports Complex",
        address: "Andheri West, Mumbai",
        time_slots: &["8:00 PM"],
        language: "Hindi",
        icon: "🤼",
    },
];

fn builtin_events() -> Vec<Event> {
    SAMPLES.iter().map(Event::from).collect()
}
