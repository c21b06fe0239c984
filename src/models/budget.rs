//! Exact currency amount used for trip budgets.
//!
//! Amounts are kept as integer cents so that `2000.10` never turns into
//! `2000.0999...`. The database column is `REAL`; conversion happens only at
//! the storage boundary (`to_db_value` / `from_db_value`).

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Budget {
    cents: i64,
}

fn budget_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(-)?(\d+)(?:\.(\d{1,2}))?$").expect("budget regex is valid")
    })
}

impl Budget {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Convert Budget → DB value (REAL column)
    pub fn to_db_value(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Convert DB value → Budget, rounding to the nearest cent
    pub fn from_db_value(value: f64) -> Self {
        Self {
            cents: (value * 100.0).round() as i64,
        }
    }
}

impl FromStr for Budget {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        let caps = budget_re()
            .captures(trimmed)
            .ok_or_else(|| AppError::InvalidBudget(format!("'{}' needs to be a number", s)))?;

        let units: i64 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidBudget(format!("'{}' is too large", s)))?;

        // "5" after the dot means 50 cents, not 5
        let frac = match caps.get(3) {
            Some(m) if m.as_str().len() == 1 => m.as_str().parse::<i64>().unwrap_or(0) * 10,
            Some(m) => m.as_str().parse::<i64>().unwrap_or(0),
            None => 0,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(|| AppError::InvalidBudget(format!("'{}' is too large", s)))?;

        let sign = if caps.get(1).is_some() { -1 } else { 1 };
        Ok(Self {
            cents: sign * cents,
        })
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
