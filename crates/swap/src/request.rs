use crate::{error::RequestError, units::Amount};
use alloy_primitives::Address;
use std::str::FromStr;

/// The user-editable fields, exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapForm {
    pub token_in: String,
    pub token_out: String,
    pub amount: String,
}

impl Default for SwapForm {
    fn default() -> Self {
        Self { token_in: String::new(), token_out: String::new(), amount: "0".to_string() }
    }
}

impl SwapForm {
    pub fn new(
        token_in: impl Into<String>,
        token_out: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self { token_in: token_in.into(), token_out: token_out.into(), amount: amount.into() }
    }

    /// Validates the fields, scaling the amount by `decimals`.
    pub fn to_request(&self, decimals: u8) -> Result<SwapRequest, RequestError> {
        Ok(SwapRequest {
            token_in: parse_token("input", &self.token_in)?,
            token_out: parse_token("output", &self.token_out)?,
            amount_in: Amount::parse(&self.amount, decimals)?,
        })
    }
}

fn parse_token(field: &'static str, value: &str) -> Result<Address, RequestError> {
    Address::from_str(value.trim())
        .map_err(|_| RequestError::InvalidToken { field, value: value.to_string() })
}

/// A validated snapshot of a [`SwapForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SwapRequest {
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: Amount,
}
