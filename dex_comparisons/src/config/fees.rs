//!
//! The transaction fee assumptions.
//!

use crate::model::cost::Estimator;

///
/// The transaction fee assumptions used to estimate costs.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fees {
    /// The base fee per gas unit in gwei.
    pub base_fee_gwei: f64,
    /// The priority fee per gas unit in gwei.
    pub priority_fee_gwei: f64,
    /// The price of one ether in USD.
    pub eth_price_usd: f64,
}

impl Fees {
    ///
    /// Checks that every value is a finite non-negative number.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("base fee", self.base_fee_gwei),
            ("priority fee", self.priority_fee_gwei),
            ("ETH price", self.eth_price_usd),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("Invalid {name} `{value}`: expected a non-negative number");
            }
        }
        Ok(())
    }
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            base_fee_gwei: Estimator::DEFAULT_BASE_FEE_GWEI as f64,
            priority_fee_gwei: Estimator::DEFAULT_PRIORITY_FEE_GWEI as f64,
            eth_price_usd: Estimator::DEFAULT_ETH_PRICE_USD as f64,
        }
    }
}

impl From<&Fees> for Estimator {
    fn from(fees: &Fees) -> Self {
        let wei_per_gwei = Estimator::WEI_PER_GWEI as f64;
        Self::new(
            (fees.base_fee_gwei * wei_per_gwei).round() as u128,
            (fees.priority_fee_gwei * wei_per_gwei).round() as u128,
            (fees.eth_price_usd * 100.0).round() as u128,
        )
    }
}
