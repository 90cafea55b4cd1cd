// Availability filter: narrows the catalog by location, type, price and free dates

use crate::catalog::{CatalogError, Room, RoomCatalog, RoomType};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RangeError {
    #[error("Date range ends ({to}) before it starts ({from})")]
    InvertedDates { from: NaiveDate, to: NaiveDate },

    #[error("Price range maximum {max} is below minimum {min}")]
    InvertedPrice { min: u32, max: u32 },
}

/// Inclusive span of calendar days, `from <= to` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, RangeError> {
        if from > to {
            return Err(RangeError::InvertedDates { from, to });
        }
        Ok(Self { from, to })
    }

    /// A range is only in effect once both ends are picked.
    pub fn from_optional(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Option<Self>, RangeError> {
        match (from, to) {
            (Some(from), Some(to)) => Self::new(from, to).map(Some),
            _ => Ok(None),
        }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from.iter_days().take_while(move |day| *day <= self.to)
    }

    pub fn day_count(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

/// Inclusive nightly price band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvertedPrice { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, price: u32) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: 80, max: 400 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(RoomType),
}

impl TypeFilter {
    pub fn matches(&self, room_type: RoomType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == room_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TypeFilter::All);
        }
        s.parse().map(TypeFilter::Only)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("All"),
            TypeFilter::Only(room_type) => room_type.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub location: String,
    pub room_type: TypeFilter,
    pub price: PriceRange,
    pub dates: Option<DateRange>,
}

impl FilterCriteria {
    pub fn matches(&self, room: &Room) -> bool {
        let location_ok = self.location.is_empty()
            || room
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase());

        location_ok
            && self.room_type.matches(room.room_type)
            && self.price.contains(room.price_per_night)
            && self
                .dates
                .as_ref()
                .map_or(true, |range| room.is_available_for(range))
    }
}

impl Room {
    /// True when no day of the inclusive range is blocked.
    pub fn is_available_for(&self, range: &DateRange) -> bool {
        self.unavailable_dates
            .range(range.from..=range.to)
            .next()
            .is_none()
    }
}

// Keeps catalog order; an empty result is a normal outcome
pub fn filter_rooms<'a>(rooms: &'a [Room], criteria: &FilterCriteria) -> Vec<&'a Room> {
    let filtered: Vec<&Room> = rooms.iter().filter(|room| criteria.matches(room)).collect();

    tracing::debug!(
        location = %criteria.location,
        room_type = %criteria.room_type,
        min_price = criteria.price.min(),
        max_price = criteria.price.max(),
        dates = ?criteria.dates,
        matched = filtered.len(),
        "filtered rooms"
    );

    filtered
}

impl RoomCatalog {
    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&Room> {
        filter_rooms(self.rooms(), criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(rooms: Vec<&Room>) -> Vec<&str> {
        rooms.into_iter().map(|r| r.id.as_str()).collect()
    }

    fn range(from: (i32, u32, u32), to: (i32, u32, u32)) -> Option<DateRange> {
        Some(DateRange::new(date(from.0, from.1, from.2), date(to.0, to.1, to.2)).unwrap())
    }

    #[test_case(FilterCriteria::default(), vec!["r1", "r2", "r3"]; "#1 Defaults keep everything")]
    #[test_case(FilterCriteria {room_type: TypeFilter::Only(RoomType::Suite), ..Default::default()},
        vec!["r3"]; "#2 Suite within default price band")]
    #[test_case(FilterCriteria {location: "MIDTOWN".to_string(), ..Default::default()},
        vec!["r2"]; "#3 Location is case insensitive")]
    #[test_case(FilterCriteria {location: "new york".to_string(), ..Default::default()},
        vec!["r1", "r2", "r3"]; "#4 Location substring")]
    #[test_case(FilterCriteria {price: PriceRange::new(100, 200).unwrap(), ..Default::default()},
        vec!["r1", "r2"]; "#5 Price band")]
    #[test_case(FilterCriteria {price: PriceRange::new(109, 109).unwrap(), ..Default::default()},
        vec!["r1"]; "#6 Price bounds are inclusive")]
    #[test_case(FilterCriteria {dates: range((2025, 8, 19), (2025, 8, 23)), ..Default::default()},
        vec!["r2"]; "#7 Dates exclude blocked rooms")]
    #[test_case(FilterCriteria {dates: range((2025, 8, 22), (2025, 8, 22)), ..Default::default()},
        vec!["r1", "r2"]; "#8 Single day range")]
    #[test_case(FilterCriteria {room_type: TypeFilter::Only(RoomType::Double), ..Default::default()},
        vec![]; "#9 No double rooms in the seed")]
    #[test_case(FilterCriteria {location: "Uptown".to_string(), room_type: TypeFilter::Only(RoomType::Suite),
        price: PriceRange::new(300, 400).unwrap(), dates: range((2025, 9, 4), (2025, 9, 10))},
        vec!["r3"]; "#10 Combined filters")]
    fn test_criteria_filter_rooms(criteria: FilterCriteria, expected_ids: Vec<&str>) {
        let catalog = RoomCatalog::seeded();
        assert_eq!(ids(catalog.search(&criteria)), expected_ids);
    }

    #[test]
    fn test_price_property_holds_for_every_band() {
        let catalog = RoomCatalog::seeded();
        for lo in (50..=500).step_by(25) {
            for hi in (lo..=500).step_by(25) {
                let criteria = FilterCriteria {
                    price: PriceRange::new(lo, hi).unwrap(),
                    ..Default::default()
                };
                let result = catalog.search(&criteria);
                for room in catalog.rooms() {
                    let in_band = lo <= room.price_per_night && room.price_per_night <= hi;
                    assert_eq!(result.iter().any(|r| r.id == room.id), in_band);
                }
            }
        }
    }

    #[test]
    fn test_date_exclusion_matches_day_by_day_scan() {
        let catalog = RoomCatalog::seeded();
        let start = date(2025, 8, 15);
        for offset in 0..40 {
            for len in 0..6 {
                let from = start + chrono::Duration::days(offset);
                let to = from + chrono::Duration::days(len);
                let range = DateRange::new(from, to).unwrap();
                for room in catalog.rooms() {
                    let blocked = range.days().any(|d| room.unavailable_dates.contains(&d));
                    assert_eq!(room.is_available_for(&range), !blocked);
                }
            }
        }
    }

    #[test]
    fn test_all_type_equals_no_type_filter() {
        let catalog = RoomCatalog::seeded();
        let all = catalog.search(&FilterCriteria::default());
        let union: usize = RoomType::ALL
            .iter()
            .map(|t| {
                catalog
                    .search(&FilterCriteria {
                        room_type: TypeFilter::Only(*t),
                        ..Default::default()
                    })
                    .len()
            })
            .sum();
        assert_eq!(all.len(), union);
    }

    #[test]
    fn test_inverted_ranges_are_rejected() {
        assert_eq!(
            DateRange::new(date(2025, 8, 5), date(2025, 8, 1)),
            Err(RangeError::InvertedDates {
                from: date(2025, 8, 5),
                to: date(2025, 8, 1)
            })
        );
        assert!(PriceRange::new(400, 80).is_err());
    }

    #[test]
    fn test_half_picked_range_is_absent() {
        assert_eq!(DateRange::from_optional(Some(date(2025, 8, 1)), None), Ok(None));
        assert_eq!(DateRange::from_optional(None, None), Ok(None));
        assert!(DateRange::from_optional(Some(date(2025, 8, 1)), Some(date(2025, 8, 3)))
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_range_days() {
        let range = DateRange::new(date(2025, 8, 30), date(2025, 9, 2)).unwrap();
        assert_eq!(range.day_count(), 4);
        assert_eq!(
            range.days().collect::<Vec<_>>(),
            vec![
                date(2025, 8, 30),
                date(2025, 8, 31),
                date(2025, 9, 1),
                date(2025, 9, 2)
            ]
        );
    }

    #[test]
    fn test_type_filter_parsing() {
        assert_eq!("All".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            "deluxe".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(RoomType::Deluxe)
        );
        assert!("Cabin".parse::<TypeFilter>().is_err());
    }
}
