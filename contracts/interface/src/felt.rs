//! Word helpers. A felt is carried as a 32-byte big-endian word.

/// A 32-byte big-endian field word.
pub type Felt = [u8; 32];

pub fn felt_from_u64(value: u64) -> Felt {
    let mut felt = [0u8; 32];
    felt[24..].copy_from_slice(&value.to_be_bytes());
    felt
}

pub fn felt_from_u128(value: u128) -> Felt {
    let mut felt = [0u8; 32];
    felt[16..].copy_from_slice(&value.to_be_bytes());
    felt
}

/// Splits a string into short-string felts of at most 31 bytes each.
///
/// Each chunk is right-aligned in its word, matching how L2 tooling encodes
/// metadata URIs.
pub fn short_string_felts(value: &str) -> Vec<Felt> {
    value
        .as_bytes()
        .chunks(31)
        .map(|chunk| {
            let mut felt = [0u8; 32];
            felt[32 - chunk.len()..].copy_from_slice(chunk);
            felt
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_chunks() {
        let uri = "ipfs://QmPChd2hVbrJ6bfo3WBcTW4iZnpHm8TEzWkLHmLpXhF68A";
        let felts = short_string_felts(uri);
        assert_eq!(felts.len(), 2);
        assert_eq!(felts[0][0], 0);
        assert_eq!(&felts[0][1..], &uri.as_bytes()[..31]);
    }

    #[test]
    fn test_empty_string_has_no_felts() {
        assert!(short_string_felts("").is_empty());
    }

    #[test]
    fn test_felt_from_u64() {
        assert_eq!(felt_from_u64(0x0102)[30..], [0x01, 0x02]);
    }
}
