// digest.rs - Hexadecimal digest alleles (hashed profiles)

use super::traits::{Allele, AlleleEncoder};

/// Only this many leading hex digits contribute to the surrogate.
pub const MAX_DIGEST_NIBBLES: usize = 40;

/// Hashed allele profiles where every call is a hex digest (e.g. SHA-1).
///
/// The digest is folded into a 64-bit surrogate by shifting in one nibble per
/// hex digit. Digests longer than 16 digits overflow and wrap; the resulting
/// collision risk is accepted.
#[derive(Debug, Clone)]
pub struct DigestEncoder;

impl AlleleEncoder for DigestEncoder {
    fn encode(&self, raw: &[u8]) -> Allele {
        fold_hex_digest(raw.trim_ascii())
    }

    fn name(&self) -> &'static str {
        "digest"
    }

    fn description(&self) -> &'static str {
        "Hexadecimal allele digests folded into 64-bit surrogates"
    }
}

/// Fold up to [`MAX_DIGEST_NIBBLES`] hex digits, stopping at the first non-hex byte.
pub fn fold_hex_digest(digest: &[u8]) -> Allele {
    digest
        .iter()
        .take(MAX_DIGEST_NIBBLES)
        .map_while(|&b| char::from(b).to_digit(16))
        .fold(0, |acc: Allele, nibble| (acc << 4) | Allele::from(nibble))
}
