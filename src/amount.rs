use crate::errors::JourneyError;
use std::num::IntErrorKind;

pub const DEFAULT_CEILING: u64 = 150_000;

/// Savings progress: a current value kept within `0..=ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountSetting {
    ceiling: u64,
    value: u64,
}

impl Default for AmountSetting {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
            value: 0,
        }
    }
}

impl AmountSetting {
    /// Builds a setting from stored parts, clamping the value. A zero ceiling
    /// falls back to the default.
    pub fn new(ceiling: u64, value: u64) -> Self {
        let ceiling = if ceiling == 0 { DEFAULT_CEILING } else { ceiling };
        Self {
            ceiling,
            value: value.min(ceiling),
        }
    }

    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns true when the current value had to be clamped down.
    pub fn set_ceiling(&mut self, input: &str) -> Result<bool, JourneyError> {
        let ceiling = parse_ceiling(input)?;
        self.ceiling = ceiling;
        let clamped = self.value > ceiling;
        if clamped {
            self.value = ceiling;
        }
        Ok(clamped)
    }

    pub fn set_value(&mut self, input: &str) -> Result<(), JourneyError> {
        let value = parse_amount(input)?;
        if value > self.ceiling {
            return Err(JourneyError::AmountExceedsCeiling {
                ceiling: self.ceiling,
            });
        }
        self.value = value;
        Ok(())
    }

    pub fn percentage(&self) -> f64 {
        self.value as f64 / self.ceiling as f64 * 100.0
    }
}

pub fn parse_ceiling(input: &str) -> Result<u64, JourneyError> {
    match input.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(value as u64),
        _ => Err(JourneyError::InvalidCeiling),
    }
}

/// Digit strings too long for an integer saturate to `u64::MAX`, so they fail
/// the ceiling check instead of being reported as non-numeric.
pub fn parse_amount(input: &str) -> Result<u64, JourneyError> {
    match input.trim().parse::<i64>() {
        Ok(value) if value >= 0 => Ok(value as u64),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
        _ => Err(JourneyError::InvalidAmount),
    }
}

/// Thousands-separated integer, e.g. `150,000`.
pub fn format_currency(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
