//! Starknet account and contract addresses.

use crate::error::TypesError;
use crate::felt::Felt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Starknet address (account or contract).
///
/// Displayed as minimal hex. The backend API expects addresses in decimal,
/// see [`Address::to_decimal`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(Felt);

impl Address {
    pub fn new(felt: Felt) -> Self {
        Self(felt)
    }

    pub fn parse(s: &str) -> Result<Self, TypesError> {
        Felt::parse(s).map(Self)
    }

    pub fn as_felt(&self) -> &Felt {
        &self.0
    }

    pub fn to_decimal(&self) -> String {
        self.0.to_decimal()
    }
}

impl From<Felt> for Address {
    fn from(felt: Felt) -> Self {
        Self(felt)
    }
}

impl From<Address> for Felt {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// The address a task list is fetched for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskAddress {
    /// A connected wallet.
    Wallet(Address),
    /// No wallet connected in time; tasks are fetched anonymously.
    Anonymous,
}

impl TaskAddress {
    /// Placeholder the backend accepts in place of an address.
    pub const ANONYMOUS_PLACEHOLDER: &'static str = "O";

    /// The value sent as the `addr` query parameter.
    pub fn query_value(&self) -> String {
        match self {
            Self::Wallet(address) => address.to_decimal(),
            Self::Anonymous => Self::ANONYMOUS_PLACEHOLDER.to_string(),
        }
    }

    pub fn wallet(&self) -> Option<&Address> {
        match self {
            Self::Wallet(address) => Some(address),
            Self::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_query_value_is_decimal() {
        let address = Address::parse("0xabc").unwrap();
        assert_eq!(TaskAddress::Wallet(address).query_value(), "2748");
    }

    #[test]
    fn anonymous_query_value_is_placeholder() {
        assert_eq!(TaskAddress::Anonymous.query_value(), "O");
        assert_eq!(TaskAddress::Anonymous.wallet(), None);
    }

    #[test]
    fn address_displays_as_hex() {
        let address = Address::parse("2748").unwrap();
        assert_eq!(address.to_string(), "0xabc");
    }
}
