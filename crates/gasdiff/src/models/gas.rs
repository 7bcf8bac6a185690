use crate::prelude::*;

/// Amount of gas a node estimates a transaction will use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Deref,
    derive_more::From,
    derive_more::Display,
)]
pub struct Gas(u64);

// ========================================
// Public Implementation
// ========================================
impl Gas {
    /// Parses a JSON-RPC quantity, e.g. `"0x6518"`, as a base-16 integer.
    ///
    /// The `0x` prefix is optional, so `"6518"` parses to the same value.
    ///
    /// # Throws
    /// Throws [`Error::InvalidHexQuantity`] if there are no digits, if any
    /// digit is not hex, or if the value does not fit in 64 bits.
    pub fn from_hex_quantity(quantity: impl AsRef<str>) -> Result<Self> {
        let quantity = quantity.as_ref();
        let digits = quantity
            .strip_prefix("0x")
            .or_else(|| quantity.strip_prefix("0X"))
            .unwrap_or(quantity);
        let invalid = || Error::InvalidHexQuantity {
            bad_value: quantity.to_owned(),
        };
        // `from_str_radix` alone would accept a leading `+`
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        u64::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_with_prefix() {
        assert_eq!(Gas::from_hex_quantity("0x64").unwrap(), Gas::from(100));
    }

    #[test]
    fn hex_without_prefix() {
        assert_eq!(Gas::from_hex_quantity("5208").unwrap(), Gas::from(21_000));
    }

    #[test]
    fn hex_upper_case() {
        assert_eq!(Gas::from_hex_quantity("0XFFFFFF").unwrap(), Gas::from(16_777_215));
    }

    #[test]
    fn recorded_estimates() {
        assert_eq!(*Gas::from_hex_quantity("0x6518").unwrap(), 25_880);
        assert_eq!(*Gas::from_hex_quantity("0x72d8").unwrap(), 29_400);
        assert_eq!(*Gas::from_hex_quantity("0xe6c2").unwrap(), 59_074);
    }

    #[test]
    fn empty_is_err() {
        assert_eq!(
            Gas::from_hex_quantity("0x"),
            Err(Error::InvalidHexQuantity {
                bad_value: "0x".to_owned()
            })
        );
    }

    #[test]
    fn non_hex_is_err() {
        assert!(Gas::from_hex_quantity("0xzz").unwrap_err().is_invalid_hex_quantity());
    }

    #[test]
    fn plus_sign_is_err() {
        assert_eq!(
            Gas::from_hex_quantity("0x+64"),
            Err(Error::InvalidHexQuantity {
                bad_value: "0x+64".to_owned()
            })
        );
        assert!(Gas::from_hex_quantity("+64").is_err());
    }

    #[test]
    fn larger_than_u64_is_err() {
        assert!(Gas::from_hex_quantity("0x10000000000000000").is_err());
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(Gas::from(25_880).to_string(), "25880");
    }
}
