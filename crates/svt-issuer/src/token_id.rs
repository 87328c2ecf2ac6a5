//! Token identifier generation.

use rand::rngs::OsRng;
use rand::RngCore;
use svt_canonical::{TokenId, ValidationError};

/// Random bytes drawn per token id.
pub const TOKEN_ID_BYTES: usize = 20;

/// Draws a fresh token id from the operating system CSPRNG.
///
/// The top bit is forced on, so the id read as a base-16 integer always has
/// exactly `TOKEN_ID_BYTES * 8` significant bits and `TOKEN_ID_BYTES * 8 - 1`
/// bits of entropy. `OsRng` holds no state, so concurrent callers cannot
/// observe correlated values.
pub fn new_token_id() -> Result<TokenId, ValidationError> {
    let mut bytes = [0u8; TOKEN_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes[0] |= 0x80;
    TokenId::from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn token_id_is_fixed_width_with_full_bit_length() {
        for _ in 0..256 {
            let id = new_token_id().unwrap();
            assert_eq!(id.as_str().len(), TOKEN_ID_BYTES * 2);
            assert_eq!(id.significant_bits(), TOKEN_ID_BYTES * 8);
        }
    }

    #[test]
    fn token_ids_do_not_repeat() {
        let ids: HashSet<_> = (0..1000).map(|_| new_token_id().unwrap()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
