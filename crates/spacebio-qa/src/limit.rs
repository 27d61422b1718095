//! Validation of the user-supplied result limit (`top_k`).

use std::fmt;
use std::num::NonZeroU32;

use crate::error::QueryError;

/// A positive number of supporting snippets to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLimit(NonZeroU32);

impl ResultLimit {
    /// Parses form input. Blank input means `default`; anything above `max`
    /// is clamped to `max`. Zero, negatives and non-numbers are rejected.
    pub fn parse(raw: &str, default: u32, max: u32) -> Result<Self, QueryError> {
        let max = max.max(1);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::clamped(u64::from(default), max));
        }

        let requested: u64 = match trimmed.parse() {
            Ok(n) => n,
            // too many digits for u64, still a positive number
            Err(_)
                if trimmed.bytes().all(|b| b.is_ascii_digit())
                    && trimmed.bytes().any(|b| b != b'0') =>
            {
                u64::MAX
            }
            Err(_) => {
                return Err(QueryError::InvalidInput(format!(
                    "Result limit must be a whole number between 1 and {}, got {:?}",
                    max, trimmed
                )))
            }
        };
        if requested == 0 {
            return Err(QueryError::InvalidInput(format!(
                "Result limit must be between 1 and {}",
                max
            )));
        }
        Ok(Self::clamped(requested, max))
    }

    fn clamped(requested: u64, max: u32) -> Self {
        let value = requested.clamp(1, u64::from(max)) as u32;
        Self(NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ResultLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
