// traits.rs - Core traits and types for allele encoding

use std::fmt::Debug;

/// Canonical allele code. Integer calls and digest surrogates share this type.
pub type Allele = u64;

/// Reserved code for "no confident call".
pub const MISSING: Allele = 0;

/// Strategy for turning one raw allele field into its canonical code.
///
/// Encoding never fails: anything that cannot be read as a call becomes
/// [`MISSING`].
pub trait AlleleEncoder: Send + Sync + Debug {
    /// Encode the raw bytes of one allele field
    fn encode(&self, raw: &[u8]) -> Allele;

    /// Get a human-readable name for this encoder
    fn name(&self) -> &'static str;

    /// Get a description of this encoder
    fn description(&self) -> &'static str;
}
