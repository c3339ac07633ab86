//! Contract lengths offered for plans.

use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How long a plan runs. Serialized as its month count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Contract {
    /// 6 months
    Minimum,
    /// 12 months
    #[default]
    Medium,
    /// 24 months
    Maximum,
}

impl Contract {
    pub const ALL: [Contract; 3] = [Contract::Minimum, Contract::Medium, Contract::Maximum];

    /// Length of the contract in months.
    pub fn months(self) -> u32 {
        match self {
            Contract::Minimum => 6,
            Contract::Medium => 12,
            Contract::Maximum => 24,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Contract::Minimum => "minimum",
            Contract::Medium => "medium",
            Contract::Maximum => "maximum",
        }
    }
}

impl TryFrom<u32> for Contract {
    type Error = ValidationError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        Contract::ALL
            .into_iter()
            .find(|contract| contract.months() == months)
            .ok_or_else(|| ValidationError::InvalidContractLength(months.to_string()))
    }
}

impl From<Contract> for u32 {
    fn from(contract: Contract) -> Self {
        contract.months()
    }
}

impl FromStr for Contract {
    type Err = ValidationError;

    /// Accepts a month count (`"12"`) or a name (`"medium"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if let Ok(months) = value.parse::<u32>() {
            return Contract::try_from(months);
        }

        Contract::ALL
            .into_iter()
            .find(|contract| contract.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| ValidationError::InvalidContractLength(s.to_string()))
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.months())
    }
}
