use {
    anyhow::{Context, Result, ensure},
    number::units::parse_amount_u128,
    std::fmt,
};

/// Cap on the total fee per gas of the deployment transaction.
pub const MAX_FEE: &str = "1 gwei";
/// Cap on the priority fee (tip) per gas of the deployment transaction.
pub const MAX_PRIORITY_FEE: &str = "0.01 gwei";

/// EIP-1559 fee caps, in wei per gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeParameters {
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
}

impl FeeParameters {
    /// The fee caps every deployment is sent with.
    pub fn fixed() -> Result<Self> {
        Self::from_literals(MAX_FEE, MAX_PRIORITY_FEE)
    }

    pub fn from_literals(max_fee: &str, max_priority_fee: &str) -> Result<Self> {
        let max_fee_per_gas = parse_amount_u128(max_fee).context("invalid max fee")?;
        let max_priority_fee_per_gas =
            parse_amount_u128(max_priority_fee).context("invalid max priority fee")?;
        ensure!(
            max_priority_fee_per_gas <= max_fee_per_gas,
            "max priority fee {max_priority_fee:?} exceeds max fee {max_fee:?}"
        );
        Ok(Self {
            max_fee_per_gas,
            max_priority_fee_per_gas,
        })
    }
}

impl fmt::Display for FeeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max_fee_per_gas: {} wei, max_priority_fee_per_gas: {} wei",
            self.max_fee_per_gas, self.max_priority_fee_per_gas
        )
    }
}
