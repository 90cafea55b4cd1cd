// Room booking core: catalog, availability filter, pricing and form handling

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod money;
pub mod pricing;
pub mod validation;

// Re-export key types for convenience
pub use availability::{filter_rooms, DateRange, FilterCriteria, PriceRange, RangeError, TypeFilter};
pub use booking::{BookingConfirmation, BookingForm, BookingRequest, RoomRef};
pub use catalog::{CatalogError, Room, RoomCatalog, RoomType};
pub use config::{ConfigError, Settings};
pub use contact::{ContactForm, ContactMessage};
pub use pricing::{BookingSummary, PricingCalculator, PricingError, PromoRule, Stay};
pub use validation::{FieldError, ValidationErrors};
