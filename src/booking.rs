// Booking form: validation of raw input, pricing of the request, and the confirmation payload

use crate::catalog::{Room, RoomCatalog};
use crate::money::format_amount;
use crate::pricing::{BookingSummary, PricingCalculator, Stay};
use crate::validation::ValidationErrors;
use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 6;

/// Raw booking-form values, as typed by the guest.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct BookingForm {
    #[validate(length(min = 2, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Phone is required"))]
    pub phone: String,
    pub checkin: Option<NaiveDate>,
    pub checkout: Option<NaiveDate>,
    #[validate(range(min = 1, max = 6, message = "Guests must be between 1 and 6"))]
    pub guests: u32,
    pub room_id: Option<String>,
    pub requests: Option<String>,
    pub promo: Option<String>,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            checkin: None,
            checkout: None,
            guests: MIN_GUESTS,
            room_id: None,
            requests: None,
            promo: None,
        }
    }
}

impl BookingForm {
    fn resolve_room<'a>(&self, catalog: &'a RoomCatalog) -> Option<&'a Room> {
        match self.room_id.as_deref() {
            Some(id) => catalog.find(id),
            None => catalog.default_room(),
        }
    }

    /// Pricing sidebar for the form as it currently stands.
    pub fn quote(
        &self,
        catalog: &RoomCatalog,
        calculator: &PricingCalculator,
    ) -> Option<BookingSummary> {
        let room = self.resolve_room(catalog)?;
        Some(calculator.preview(room, self.checkin, self.checkout, self.promo.as_deref()))
    }

    pub fn validate(&self, catalog: &RoomCatalog) -> Result<BookingRequest, ValidationErrors> {
        let mut errors = ValidationErrors::from_rules(self, &["name", "email", "phone", "guests"]);

        let stay = match (self.checkin, self.checkout) {
            (None, _) => {
                errors.add("checkin", "Check-in required");
                if self.checkout.is_none() {
                    errors.add("checkout", "Check-out required");
                }
                None
            }
            (Some(_), None) => {
                errors.add("checkout", "Check-out required");
                None
            }
            (Some(checkin), Some(checkout)) => match Stay::new(checkin, checkout) {
                Ok(stay) => Some(stay),
                Err(_) => {
                    errors.add("checkout", "Check-out must be after check-in");
                    None
                }
            },
        };

        let room = self.resolve_room(catalog);
        if room.is_none() {
            errors.add("room_id", "Unknown room");
        }

        match (stay, room) {
            (Some(stay), Some(room)) if errors.is_empty() => Ok(BookingRequest {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                stay,
                guests: self.guests,
                room_id: room.id.clone(),
                promo_code: self.promo.clone().filter(|code| !code.is_empty()),
                requests: non_blank(&self.requests),
            }),
            _ => {
                tracing::debug!(errors = errors.errors.len(), "booking form rejected");
                Err(errors)
            }
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A booking form that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub stay: Stay,
    pub guests: u32,
    pub room_id: String,
    pub promo_code: Option<String>,
    pub requests: Option<String>,
}

impl BookingRequest {
    pub fn confirm(
        &self,
        calculator: &PricingCalculator,
        catalog: &RoomCatalog,
    ) -> Result<BookingConfirmation, ValidationErrors> {
        let Some(room) = catalog.find(&self.room_id) else {
            let mut errors = ValidationErrors::default();
            errors.add("room_id", "Unknown room");
            return Err(errors);
        };

        let summary = calculator.price(room, &self.stay, self.promo_code.as_deref());
        tracing::info!(
            room_id = %room.id,
            nights = summary.nights,
            total = summary.total,
            "booking created"
        );

        Ok(BookingConfirmation {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            checkin: self.stay.checkin(),
            checkout: self.stay.checkout(),
            guests: self.guests,
            requests: self.requests.clone(),
            room: RoomRef {
                id: room.id.clone(),
                name: room.name.clone(),
                price_per_night: room.price_per_night,
            },
            summary,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomRef {
    pub id: String,
    pub name: String,
    pub price_per_night: u32,
}

/// Payload handed to the confirmation view; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: u32,
    pub requests: Option<String>,
    pub room: RoomRef,
    pub summary: BookingSummary,
}

impl BookingConfirmation {
    pub fn headline(&self, currency: &str) -> String {
        format!(
            "{} • {} nights • {}",
            self.room.name,
            self.summary.nights,
            format_amount(currency, self.summary.total)
        )
    }

    pub fn render(&self, currency: &str) -> String {
        let mut lines = vec![
            format!("Guest: {}", self.name),
            format!("Email: {}", self.email),
            format!("Phone: {}", self.phone),
            format!("Room: {}", self.room.name),
            format!("Check-in: {}", self.checkin.format("%a %b %d %Y")),
            format!("Check-out: {}", self.checkout.format("%a %b %d %Y")),
            format!("Nights: {}", self.summary.nights),
        ];
        if self.summary.discount > 0 {
            lines.push(format!(
                "Discount: -{}",
                format_amount(currency, self.summary.discount)
            ));
        }
        lines.push(format!(
            "Total: {}",
            format_amount(currency, self.summary.total)
        ));
        lines.join("\n")
    }
}
