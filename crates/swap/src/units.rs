//! Fixed-point amounts.
//!
//! Amounts cross the router boundary as base-unit integers and are shown to the user as
//! decimals.

use crate::error::RequestError;
use alloy_primitives::{
    U256,
    utils::{ParseUnits, Unit},
};
use std::fmt;

/// Decimals of the native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// A base-unit integer together with the decimals it is denominated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    raw: U256,
    decimals: u8,
}

impl Amount {
    pub const fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    /// An amount of the native currency, given in wei.
    pub const fn native(wei: U256) -> Self {
        Self::new(wei, NATIVE_DECIMALS)
    }

    /// Parses a non-negative decimal such as `"1.5"` into base units.
    ///
    /// Fails if `value` has more fractional digits than `decimals` allows or does not fit a
    /// `uint256`.
    pub fn parse(value: &str, decimals: u8) -> Result<Self, RequestError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(RequestError::EmptyAmount);
        }
        if value.starts_with('-') {
            return Err(RequestError::NegativeAmount(value.to_string()));
        }

        let invalid =
            |reason: String| RequestError::InvalidAmount { value: value.to_string(), reason };
        let unit = Unit::new(decimals).ok_or_else(|| invalid(format!("{decimals} decimals")))?;
        let raw = match ParseUnits::parse_units(value, unit).map_err(|e| invalid(e.to_string()))? {
            ParseUnits::U256(raw) => raw,
            ParseUnits::I256(raw) => raw.into_raw(),
        };
        Ok(Self { raw, decimals })
    }

    pub const fn raw(&self) -> U256 {
        self.raw
    }

    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }
}

impl fmt::Display for Amount {
    /// Formats the amount as a decimal, trimmed to its significant fractional digits but always
    /// keeping one, so `3_200000000000000000` with 18 decimals is `3.2` and zero is `0.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(unit) = Unit::new(self.decimals) else {
            return write!(f, "{}", self.raw);
        };
        let mut formatted = ParseUnits::U256(self.raw).format_units(unit);
        if formatted.contains('.') {
            formatted.truncate(formatted.trim_end_matches('0').len());
            if formatted.ends_with('.') {
                formatted.push('0');
            }
        }
        f.write_str(&formatted)
    }
}
