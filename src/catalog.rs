// Room catalog: the static list of bookable rooms and lookups over it

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Duplicate room id: {0}")]
    DuplicateId(String),

    #[error("Room {0} has no images")]
    MissingImages(String),

    #[error("Room {0} has a non-positive nightly price")]
    InvalidPrice(String),

    #[error("Room {id} has rating {rating} outside 0-5")]
    InvalidRating { id: String, rating: f32 },

    #[error("Unknown room type: {0}")]
    UnknownRoomType(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RoomType {
    Single,
    Double,
    Deluxe,
    Suite,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Deluxe,
        RoomType::Suite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownRoomType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub room_type: RoomType,
    pub location: String,
    pub price_per_night: u32,
    pub images: Vec<String>,
    pub thumbnail: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub rating: f32,
    pub reviews: u32,
    #[serde(default)]
    pub unavailable_dates: BTreeSet<NaiveDate>,
}

impl Room {
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        !self.unavailable_dates.contains(&date)
    }

    // Unavailable dates falling inside the given month, for calendar views
    pub fn unavailable_in_month(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        self.unavailable_dates
            .iter()
            .filter(|d| d.year() == year && d.month() == month)
            .copied()
            .collect()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct CatalogDocument {
    rooms: Vec<Room>,
}

/// Read-only collection of rooms, in display order.
///
/// Construction checks the record invariants once, so every lookup and
/// filter afterwards can rely on unique ids, a positive price and at least
/// one image per room.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<Room>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for room in &rooms {
            if !seen.insert(room.id.as_str()) {
                tracing::warn!(room_id = %room.id, "rejecting catalog with duplicate id");
                return Err(CatalogError::DuplicateId(room.id.clone()));
            }
            if room.images.is_empty() {
                return Err(CatalogError::MissingImages(room.id.clone()));
            }
            if room.price_per_night == 0 {
                return Err(CatalogError::InvalidPrice(room.id.clone()));
            }
            if !(0.0..=5.0).contains(&room.rating) {
                return Err(CatalogError::InvalidRating {
                    id: room.id.clone(),
                    rating: room.rating,
                });
            }
        }

        tracing::debug!(rooms = rooms.len(), "catalog loaded");
        Ok(Self { rooms })
    }

    /// Parse a `{"rooms": [...]}` document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::new(document.rooms)
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        let document = CatalogDocument {
            rooms: self.rooms.clone(),
        };
        serde_json::to_string_pretty(&document).map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }

    /// The three rooms the site ships with.
    pub fn seeded() -> Self {
        Self {
            rooms: seed_rooms(),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn find(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    // Room preselected by the booking form when none was chosen
    pub fn default_room(&self) -> Option<&Room> {
        self.rooms.first()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn dates(list: &[(i32, u32, u32)]) -> BTreeSet<NaiveDate> {
    list.iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "r1".to_string(),
            name: "Cozy Single Room".to_string(),
            room_type: RoomType::Single,
            location: "Downtown, New York".to_string(),
            price_per_night: 109,
            images: strings(&["room-single-1.jpg", "room-single-2.jpg"]),
            thumbnail: "room-single-1.jpg".to_string(),
            description: "A warm and comfortable single room ideal for solo travelers. \
                Includes a plush bed, study desk, and a serene city view."
                .to_string(),
            amenities: strings(&[
                "Free Wi-Fi",
                "Air Conditioning",
                "Smart TV",
                "Work Desk",
                "Room Service",
            ]),
            rating: 4.5,
            reviews: 128,
            unavailable_dates: dates(&[(2025, 8, 20), (2025, 8, 21), (2025, 9, 5), (2025, 9, 12)]),
        },
        Room {
            id: "r2".to_string(),
            name: "Deluxe Double Room".to_string(),
            room_type: RoomType::Deluxe,
            location: "Midtown, New York".to_string(),
            price_per_night: 189,
            images: strings(&["room-deluxe-1.jpg", "room-deluxe-2.jpg"]),
            thumbnail: "room-deluxe-1.jpg".to_string(),
            description: "Spacious deluxe room with two beds, lounge area, and panoramic window. \
                Perfect for couples or friends seeking comfort and style."
                .to_string(),
            amenities: strings(&[
                "Free Wi-Fi",
                "Air Conditioning",
                "55\" TV",
                "Minibar",
                "In-room Safe",
            ]),
            rating: 4.7,
            reviews: 221,
            unavailable_dates: dates(&[(2025, 8, 25), (2025, 8, 26), (2025, 9, 18)]),
        },
        Room {
            id: "r3".to_string(),
            name: "Executive Luxury Suite".to_string(),
            room_type: RoomType::Suite,
            location: "Uptown, New York".to_string(),
            price_per_night: 329,
            images: strings(&["room-suite-1.jpg", "room-suite-2.jpg"]),
            thumbnail: "room-suite-1.jpg".to_string(),
            description: "Indulge in a refined suite featuring a separate living area, king-size bed, \
                and premium finishes for an unforgettable stay."
                .to_string(),
            amenities: strings(&[
                "Free Wi-Fi",
                "Air Conditioning",
                "65\" TV",
                "Coffee Machine",
                "Walk-in Wardrobe",
                "Butler Service",
            ]),
            rating: 4.9,
            reviews: 87,
            unavailable_dates: dates(&[(2025, 8, 22), (2025, 9, 2), (2025, 9, 3)]),
        },
    ]
}
