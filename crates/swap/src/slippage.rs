use alloy_primitives::U256;
use std::fmt;

const BPS: u64 = 10_000;

/// The tolerated drop from a reference quote, in basis points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Slippage(u16);

impl Slippage {
    /// No drop tolerated.
    pub const ZERO: Self = Self(0);

    /// Returns `None` above 100%.
    pub const fn from_bps(bps: u16) -> Option<Self> {
        if bps as u64 > BPS { None } else { Some(Self(bps)) }
    }

    pub const fn bps(self) -> u16 {
        self.0
    }

    /// The least output accepted for a swap quoted at `reference`, rounded down.
    pub fn min_output(self, reference: U256) -> U256 {
        let keep = U256::from(BPS - self.0 as u64);
        let bps = U256::from(BPS);
        // split so `reference * keep` cannot overflow
        let (whole, rest) = reference.div_rem(bps);
        whole * keep + rest * keep / bps
    }
}

impl Default for Slippage {
    fn default() -> Self {
        Self(50)
    }
}

impl fmt::Display for Slippage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}
