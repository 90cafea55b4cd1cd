// Pricing calculator: nights, base total, promo discount and final total for a stay

use crate::catalog::Room;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PricingError {
    #[error("Check-out {checkout} must be after check-in {checkin}")]
    InvalidStay {
        checkin: NaiveDate,
        checkout: NaiveDate,
    },

    #[error("Invalid promo rule: {0}")]
    InvalidPromoRule(String),
}

/// Check-in/check-out pair with at least one night between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stay {
    checkin: NaiveDate,
    checkout: NaiveDate,
}

impl Stay {
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> Result<Self, PricingError> {
        if checkout <= checkin {
            return Err(PricingError::InvalidStay { checkin, checkout });
        }
        Ok(Self { checkin, checkout })
    }

    pub fn checkin(&self) -> NaiveDate {
        self.checkin
    }

    pub fn checkout(&self) -> NaiveDate {
        self.checkout
    }

    pub fn nights(&self) -> u32 {
        (self.checkout - self.checkin).num_days() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoRule {
    pub code: String,
    pub percent_off: u8,
}

impl PromoRule {
    pub fn new(code: &str, percent_off: u8) -> Result<Self, PricingError> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(PricingError::InvalidPromoRule("empty code".to_string()));
        }
        if percent_off > 100 {
            return Err(PricingError::InvalidPromoRule(format!(
                "{} discounts {}%",
                code, percent_off
            )));
        }
        Ok(Self { code, percent_off })
    }

    pub fn welcome10() -> Self {
        Self {
            code: "WELCOME10".to_string(),
            percent_off: 10,
        }
    }

    // Rounds half up, as the site does for the 10% welcome discount
    fn discount_on(&self, base_total: u64) -> u64 {
        (base_total * u64::from(self.percent_off) + 50) / 100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookingSummary {
    pub nights: u32,
    pub base_total: u64,
    pub discount: u64,
    pub total: u64,
}

#[derive(Debug, Clone)]
pub struct PricingCalculator {
    promos: Vec<PromoRule>,
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new(vec![PromoRule::welcome10()])
    }
}

impl PricingCalculator {
    pub fn new(promos: Vec<PromoRule>) -> Self {
        Self { promos }
    }

    pub fn promos(&self) -> &[PromoRule] {
        &self.promos
    }

    /// Case-insensitive; surrounding whitespace is part of the code.
    pub fn find_promo(&self, code: &str) -> Option<&PromoRule> {
        let code = code.to_uppercase();
        if code.is_empty() {
            return None;
        }
        self.promos.iter().find(|rule| rule.code == code)
    }

    pub fn price(&self, room: &Room, stay: &Stay, promo_code: Option<&str>) -> BookingSummary {
        let summary = self.summarize(room.price_per_night, stay.nights(), promo_code);

        tracing::debug!(
            room_id = %room.id,
            checkin = %stay.checkin(),
            checkout = %stay.checkout(),
            nights = summary.nights,
            discount = summary.discount,
            total = summary.total,
            "priced stay"
        );

        summary
    }

    /// Live quote for a form that may still be incomplete: missing or
    /// non-positive stays price as zero nights.
    pub fn preview(
        &self,
        room: &Room,
        checkin: Option<NaiveDate>,
        checkout: Option<NaiveDate>,
        promo_code: Option<&str>,
    ) -> BookingSummary {
        match (checkin, checkout) {
            (Some(checkin), Some(checkout)) => match Stay::new(checkin, checkout) {
                Ok(stay) => self.price(room, &stay, promo_code),
                Err(_) => self.summarize(room.price_per_night, 0, promo_code),
            },
            _ => self.summarize(room.price_per_night, 0, promo_code),
        }
    }

    fn summarize(&self, price_per_night: u32, nights: u32, promo_code: Option<&str>) -> BookingSummary {
        let base_total = u64::from(nights) * u64::from(price_per_night);
        let discount = promo_code
            .and_then(|code| self.find_promo(code))
            .map_or(0, |rule| rule.discount_on(base_total));

        BookingSummary {
            nights,
            base_total,
            discount,
            total: base_total.saturating_sub(discount),
        }
    }
}
