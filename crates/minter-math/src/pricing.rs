//! Dutch-auction price engines.
//!
//! Both engines are pure functions of their parameters and a timestamp in
//! seconds. Prices never increase over time and never drop below the base
//! price.

use primitive_types::U256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingError {
    NotStarted,
    StartInPast,
    PriceNotDecaying,
    InvalidRange { min: u64, max: u64 },
    PeriodOutOfRange { value: u64, min: u64, max: u64 },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "auction not yet started"),
            Self::StartInPast => write!(f, "auction start must be in the future"),
            Self::PriceNotDecaying => write!(f, "start price must exceed base price"),
            Self::InvalidRange { min, max } => {
                write!(f, "invalid range: min {min} must be positive and not above max {max}")
            }
            Self::PeriodOutOfRange { value, min, max } => {
                write!(f, "period {value}s outside allowed range [{min}, {max}]")
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Inclusive `[min, max]` bound on a half-life or auction duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRange {
    pub min: u64,
    pub max: u64,
}

impl DurationRange {
    pub fn new(min: u64, max: u64) -> Result<Self, PricingError> {
        if min == 0 || min > max {
            return Err(PricingError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn check(&self, value: u64) -> Result<(), PricingError> {
        if !self.contains(value) {
            return Err(PricingError::PeriodOutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Price halves every `half_life_seconds` until it reaches `base_price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentialDecay {
    pub timestamp_start: u64,
    pub half_life_seconds: u64,
    pub start_price: u128,
    pub base_price: u128,
}

impl ExponentialDecay {
    /// Checks made when an artist configures the auction, not at purchase time.
    pub fn validate(&self, now: u64, range: DurationRange) -> Result<(), PricingError> {
        if self.timestamp_start <= now {
            return Err(PricingError::StartInPast);
        }
        if self.start_price <= self.base_price {
            return Err(PricingError::PriceNotDecaying);
        }
        range.check(self.half_life_seconds)
    }

    pub fn price_at(&self, now: u64) -> Result<u128, PricingError> {
        if now < self.timestamp_start {
            return Err(PricingError::NotStarted);
        }
        let elapsed = now - self.timestamp_start;
        let completed_half_lives = elapsed
            .checked_div(self.half_life_seconds)
            .unwrap_or(u64::MAX);
        // Shifting a u128 by 128 or more bits fully decays the price.
        let decayed = u32::try_from(completed_half_lives)
            .ok()
            .and_then(|shift| self.start_price.checked_shr(shift))
            .unwrap_or(0);
        Ok(decayed.max(self.base_price))
    }

    /// First timestamp at which the price has reached `base_price`.
    pub fn fully_decayed_at(&self) -> u64 {
        let mut halvings = 0u64;
        let mut price = self.start_price;
        while price > self.base_price {
            price >>= 1;
            halvings += 1;
        }
        self.timestamp_start
            .saturating_add(self.half_life_seconds.saturating_mul(halvings))
    }
}

/// Price falls linearly from `start_price` to `base_price` over `duration_seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearDecay {
    pub timestamp_start: u64,
    pub duration_seconds: u64,
    pub start_price: u128,
    pub base_price: u128,
}

impl LinearDecay {
    pub fn validate(&self, now: u64, range: DurationRange) -> Result<(), PricingError> {
        if self.timestamp_start <= now {
            return Err(PricingError::StartInPast);
        }
        if self.start_price <= self.base_price {
            return Err(PricingError::PriceNotDecaying);
        }
        range.check(self.duration_seconds)
    }

    pub fn timestamp_end(&self) -> u64 {
        self.timestamp_start.saturating_add(self.duration_seconds)
    }

    pub fn price_at(&self, now: u64) -> Result<u128, PricingError> {
        if now < self.timestamp_start {
            return Err(PricingError::NotStarted);
        }
        if self.duration_seconds == 0 || self.start_price <= self.base_price {
            return Ok(self.base_price);
        }
        let elapsed = (now - self.timestamp_start).min(self.duration_seconds);
        let spread = self.start_price - self.base_price;
        let price_drop = (U256::from(spread) * U256::from(elapsed)
            / U256::from(self.duration_seconds))
        .as_u128();
        Ok(self.start_price - price_drop)
    }
}
