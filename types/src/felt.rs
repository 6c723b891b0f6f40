//! Starknet field element.
//!
//! Felts travel through the backend API and the JSON-RPC interface as strings,
//! sometimes hex (`0x...`), sometimes decimal. [`Felt`] accepts both and keeps
//! the value as 32 big-endian bytes.

use crate::error::TypesError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a Cairo short string.
pub const MAX_SHORT_STRING_LEN: usize = 31;

/// A 32-byte big-endian field element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Felt([u8; 32]);

impl Felt {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a `0x`-prefixed hex string or a plain decimal string.
    pub fn parse(s: &str) -> Result<Self, TypesError> {
        let s = s.trim();
        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(digits) => Self::from_hex_digits(digits, s),
            None => Self::from_decimal(s),
        }
    }

    fn from_hex_digits(digits: &str, original: &str) -> Result<Self, TypesError> {
        let trimmed = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Err(TypesError::InvalidFelt(original.to_string()));
        }
        if trimmed.len() > 64 {
            return Err(TypesError::FeltOverflow(original.to_string()));
        }
        let padded = if trimmed.len() % 2 == 1 {
            format!("0{trimmed}")
        } else {
            trimmed.to_string()
        };
        let decoded =
            hex::decode(&padded).map_err(|_| TypesError::InvalidFelt(original.to_string()))?;
        let mut bytes = [0u8; 32];
        bytes[32 - decoded.len()..].copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    /// Parse a base-10 string.
    pub fn from_decimal(s: &str) -> Result<Self, TypesError> {
        if s.is_empty() {
            return Err(TypesError::InvalidFelt(s.to_string()));
        }
        let mut bytes = [0u8; 32];
        for c in s.chars() {
            let digit = c
                .to_digit(10)
                .ok_or_else(|| TypesError::InvalidFelt(s.to_string()))?;
            let mut carry = digit;
            for byte in bytes.iter_mut().rev() {
                let v = u32::from(*byte) * 10 + carry;
                *byte = (v & 0xff) as u8;
                carry = v >> 8;
            }
            if carry != 0 {
                return Err(TypesError::FeltOverflow(s.to_string()));
            }
        }
        Ok(Self(bytes))
    }

    /// Encode an ASCII string of at most 31 bytes as a Cairo short string.
    pub fn from_short_string(s: &str) -> Result<Self, TypesError> {
        if !s.is_ascii() {
            return Err(TypesError::NonAsciiShortString);
        }
        if s.len() > MAX_SHORT_STRING_LEN {
            return Err(TypesError::ShortStringTooLong(s.len()));
        }
        let mut bytes = [0u8; 32];
        bytes[32 - s.len()..].copy_from_slice(s.as_bytes());
        Ok(Self(bytes))
    }

    /// Minimal lowercase hex with `0x` prefix (`0x0` for zero).
    pub fn to_hex(&self) -> String {
        let encoded = hex::encode(self.0);
        let trimmed = encoded.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{trimmed}")
        }
    }

    pub fn to_decimal(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut n = self.0;
        let mut digits = Vec::new();
        while n != [0u8; 32] {
            let mut rem = 0u32;
            for byte in n.iter_mut() {
                let cur = (rem << 8) | u32::from(*byte);
                *byte = (cur / 10) as u8;
                rem = cur % 10;
            }
            digits.push(char::from(b'0' + rem as u8));
        }
        digits.iter().rev().collect()
    }

    /// The value as `u64`, or `None` if it does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        if self.0[..24].iter().any(|b| *b != 0) {
            return None;
        }
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&self.0[24..]);
        Some(u64::from_be_bytes(tail))
    }
}

impl From<u64> for Felt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl FromStr for Felt {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Felt({})", self.to_hex())
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Felt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct FeltVisitor;

impl<'de> Visitor<'de> for FeltVisitor {
    type Value = Felt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex or decimal field element")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Felt, E> {
        Felt::parse(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Felt, E> {
        Ok(Felt::from_u64(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Felt, E> {
        u64::try_from(v)
            .map(Felt::from_u64)
            .map_err(|_| E::custom(format!("negative field element: {v}")))
    }
}

impl<'de> Deserialize<'de> for Felt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FeltVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_decimal_to_same_value() {
        let from_hex = Felt::parse("0xff").unwrap();
        let from_dec = Felt::parse("255").unwrap();
        assert_eq!(from_hex, from_dec);
        assert_eq!(from_hex.to_u64(), Some(255));
    }

    #[test]
    fn zero_renders_minimal() {
        assert_eq!(Felt::ZERO.to_hex(), "0x0");
        assert_eq!(Felt::ZERO.to_decimal(), "0");
        assert_eq!(Felt::parse("0x000").unwrap(), Felt::ZERO);
    }

    #[test]
    fn large_address_converts_to_decimal() {
        // 2^128
        let felt = Felt::parse("0x100000000000000000000000000000000").unwrap();
        assert_eq!(felt.to_decimal(), "340282366920938463463374607431768211456");
        assert_eq!(felt.to_u64(), None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Felt::parse("").is_err());
        assert!(Felt::parse("0x").is_err());
        assert!(Felt::parse("12a").is_err());
        assert!(Felt::parse("0xzz").is_err());
    }

    #[test]
    fn rejects_values_wider_than_32_bytes() {
        let too_wide = format!("0x1{}", "0".repeat(64));
        assert!(matches!(
            Felt::parse(&too_wide),
            Err(TypesError::FeltOverflow(_))
        ));
        let huge_decimal = "9".repeat(80);
        assert!(matches!(
            Felt::parse(&huge_decimal),
            Err(TypesError::FeltOverflow(_))
        ));
    }

    #[test]
    fn short_string_encoding() {
        let discord = Felt::from_short_string("discord").unwrap();
        // "discord" = 64 69 73 63 6f 72 64
        assert_eq!(discord.to_hex(), "0x646973636f7264");
        assert!(Felt::from_short_string(&"a".repeat(32)).is_err());
        assert_eq!(
            Felt::from_short_string("dïscord"),
            Err(TypesError::NonAsciiShortString)
        );
    }

    #[test]
    fn deserializes_strings_and_numbers() {
        let values: Vec<Felt> = serde_json::from_str(r#"["0x1", "2", 3]"#).unwrap();
        assert_eq!(
            values,
            vec![Felt::from_u64(1), Felt::from_u64(2), Felt::from_u64(3)]
        );
        assert_eq!(
            serde_json::to_string(&Felt::from_u64(16)).unwrap(),
            r#""0x10""#
        );
    }
}
