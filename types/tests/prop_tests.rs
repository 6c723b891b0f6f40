use proptest::prelude::*;

use quest_types::{Address, Felt, TaskAddress};

proptest! {
    /// Decimal rendering agrees with the native integer formatting.
    #[test]
    fn felt_decimal_matches_u128(value in any::<u128>()) {
        let felt = Felt::parse(&format!("{value:#x}")).unwrap();
        prop_assert_eq!(felt.to_decimal(), value.to_string());
    }

    /// Hex rendering agrees with the native integer formatting.
    #[test]
    fn felt_hex_matches_u128(value in any::<u128>()) {
        let felt = Felt::parse(&value.to_string()).unwrap();
        prop_assert_eq!(felt.to_hex(), format!("{value:#x}"));
    }

    /// Hex and decimal spellings of the same number parse to the same felt.
    #[test]
    fn hex_and_decimal_agree(value in any::<u64>()) {
        let a = Felt::parse(&format!("0x{value:x}")).unwrap();
        let b = Felt::parse(&value.to_string()).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.to_u64(), Some(value));
    }

    /// Leading zeros never change the parsed value.
    #[test]
    fn leading_zeros_are_ignored(value in any::<u64>(), zeros in 0usize..20) {
        let padded = format!("0x{}{value:x}", "0".repeat(zeros));
        prop_assert_eq!(Felt::parse(&padded).unwrap(), Felt::from_u64(value));
    }

    /// Any 32 bytes survive the decimal rendering.
    #[test]
    fn decimal_rendering_is_lossless(bytes in prop::array::uniform32(0u8..)) {
        let felt = Felt::new(bytes);
        let reparsed = Felt::from_decimal(&felt.to_decimal()).unwrap();
        prop_assert_eq!(reparsed.as_bytes(), &bytes);
    }

    /// The anonymous placeholder can never collide with a wallet query value.
    #[test]
    fn wallet_query_value_is_numeric(bytes in prop::array::uniform32(0u8..)) {
        let address = Address::new(Felt::new(bytes));
        let value = TaskAddress::Wallet(address).query_value();
        prop_assert!(value.chars().all(|c| c.is_ascii_digit()));
        prop_assert_ne!(value, TaskAddress::ANONYMOUS_PLACEHOLDER);
    }
}
