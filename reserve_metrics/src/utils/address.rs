use alloy::primitives::Address;

use crate::error::{MetricsError, Result};

/// Parse a caller-supplied hex address into the typed form the call layer
/// expects.
///
/// Accepts both lowercase and EIP-55 checksummed casing. Anything that is not
/// a 20-byte hex string fails with [`MetricsError::InvalidAddress`] before a
/// request leaves the process. The canonical display form of the result is
/// its checksum string, so normalizing twice yields the same address.
pub fn normalize_address(input: &str) -> Result<Address> {
    input
        .parse::<Address>()
        .map_err(|_| MetricsError::InvalidAddress(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAI_LOWERCASE: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
    const DAI_CHECKSUMMED: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    #[test]
    fn accepts_lowercase_and_checksummed_casing() {
        let from_lowercase = normalize_address(DAI_LOWERCASE).unwrap();
        let from_checksummed = normalize_address(DAI_CHECKSUMMED).unwrap();

        assert_eq!(from_lowercase, from_checksummed);
        assert_eq!(from_lowercase.to_checksum(None), DAI_CHECKSUMMED);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_address(DAI_LOWERCASE).unwrap();
        let twice = normalize_address(&once.to_checksum(None)).unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.to_checksum(None), twice.to_checksum(None));
    }

    #[test]
    fn rejects_malformed_input() {
        let malformed = [
            "0x123",
            "",
            "not-an-address",
            "0x6b175474e89094c44da98b954eedeac495271dzz",
            "0x6b175474e89094c44da98b954eedeac495271d0f00",
        ];

        for input in malformed {
            let result = normalize_address(input);
            assert!(
                matches!(result, Err(MetricsError::InvalidAddress(_))),
                "expected InvalidAddress for {:?}",
                input
            );
        }
    }
}
