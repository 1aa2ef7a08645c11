//!
//! The transaction cost estimator.
//!


///
/// An estimated transaction cost in USD cents.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cost {
    /// The amount in USD cents.
    pub cents: u128,
}

impl Cost {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(cents: u128) -> Self {
        Self { cents }
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl serde::Serialize for Cost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

///
/// Estimates the USD cost of spending some gas.
///
/// The cost is `gas * (base_fee + priority_fee) * eth_price`, computed in fixed point
/// and rounded half-up to whole cents.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimator {
    /// The base fee per gas unit in wei.
    pub base_fee_wei: u128,
    /// The priority fee per gas unit in wei.
    pub priority_fee_wei: u128,
    /// The price of one ether in USD cents.
    pub eth_price_cents: u128,
}

impl Estimator {
    /// The number of wei in one gwei.
    pub const WEI_PER_GWEI: u128 = 1_000_000_000;

    /// The number of wei in one ether.
    pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

    /// The default base fee in gwei.
    pub const DEFAULT_BASE_FEE_GWEI: u128 = 30;

    /// The default priority fee in gwei.
    pub const DEFAULT_PRIORITY_FEE_GWEI: u128 = 1;

    /// The default ether price in USD.
    pub const DEFAULT_ETH_PRICE_USD: u128 = 1500;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(base_fee_wei: u128, priority_fee_wei: u128, eth_price_cents: u128) -> Self {
        Self {
            base_fee_wei,
            priority_fee_wei,
            eth_price_cents,
        }
    }

    ///
    /// The total price of one gas unit in wei.
    ///
    pub fn gas_price_wei(&self) -> u128 {
        self.base_fee_wei.saturating_add(self.priority_fee_wei)
    }

    ///
    /// Estimates the cost of `gas` units.
    ///
    pub fn estimate(&self, gas: u64) -> Cost {
        let scaled = u128::from(gas)
            .saturating_mul(self.gas_price_wei())
            .saturating_mul(self.eth_price_cents);
        let cents = scaled / Self::WEI_PER_ETHER
            + u128::from(scaled % Self::WEI_PER_ETHER >= Self::WEI_PER_ETHER / 2);
        Cost::new(cents)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_BASE_FEE_GWEI * Self::WEI_PER_GWEI,
            Self::DEFAULT_PRIORITY_FEE_GWEI * Self::WEI_PER_GWEI,
            Self::DEFAULT_ETH_PRICE_USD * 100,
        )
    }
}
