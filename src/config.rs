// Site settings: display currency, filter defaults and the promo table

use crate::availability::{PriceRange, RangeError};
use crate::pricing::{PricingCalculator, PricingError, PromoRule};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Promo(#[from] PricingError),
}

// Bounds of the price slider on the rooms page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self {
            min: 50,
            max: 500,
            step: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub currency: String,
    pub default_price_range: PriceRange,
    pub slider: SliderBounds,
    pub promos: Vec<PromoRule>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            default_price_range: PriceRange::default(),
            slider: SliderBounds::default(),
            promos: vec![PromoRule::welcome10()],
        }
    }
}

pub const CURRENCY_ENV: &str = "STAYEASE_CURRENCY";
pub const MIN_PRICE_ENV: &str = "STAYEASE_MIN_PRICE";
pub const MAX_PRICE_ENV: &str = "STAYEASE_MAX_PRICE";
pub const PROMO_CODES_ENV: &str = "STAYEASE_PROMO_CODES";

impl Settings {
    /// Defaults overridden by `STAYEASE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(currency) = lookup(CURRENCY_ENV) {
            let currency = currency.trim().to_uppercase();
            if currency.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: CURRENCY_ENV,
                    value: currency,
                });
            }
            settings.currency = currency;
        }

        let min = parse_price(MIN_PRICE_ENV, lookup(MIN_PRICE_ENV))?
            .unwrap_or(settings.default_price_range.min());
        let max = parse_price(MAX_PRICE_ENV, lookup(MAX_PRICE_ENV))?
            .unwrap_or(settings.default_price_range.max());
        settings.default_price_range = PriceRange::new(min, max)?;

        if let Some(codes) = lookup(PROMO_CODES_ENV) {
            settings.promos = parse_promos(&codes)?;
        }

        tracing::debug!(
            currency = %settings.currency,
            promos = settings.promos.len(),
            "settings loaded"
        );
        Ok(settings)
    }

    pub fn pricing_calculator(&self) -> PricingCalculator {
        PricingCalculator::new(self.promos.clone())
    }
}

fn parse_price(key: &'static str, value: Option<String>) -> Result<Option<u32>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue { key, value: v })
        })
        .transpose()
}

// "WELCOME10=10,SUMMER=15"
fn parse_promos(codes: &str) -> Result<Vec<PromoRule>, ConfigError> {
    codes
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<PromoRule, ConfigError> {
            let invalid = || ConfigError::InvalidValue {
                key: PROMO_CODES_ENV,
                value: entry.to_string(),
            };
            let (code, percent) = entry.split_once('=').ok_or_else(invalid)?;
            let percent: u8 = percent.trim().parse().map_err(|_| invalid())?;
            Ok(PromoRule::new(code, percent)?)
        })
        .collect()
}
