// mod.rs - Allele encoding module root

pub mod digest;
pub mod integer;
pub mod traits;

// Re-export main types for convenience
pub use digest::DigestEncoder;
pub use integer::IntegerEncoder;
pub use traits::{Allele, AlleleEncoder, MISSING};

/// How allele fields in the input table are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlleleEncoding {
    /// Integer calls, QC codes become missing
    #[default]
    Integer,
    /// Hexadecimal digests (hashed profiles)
    Digest,
}

impl AlleleEncoding {
    pub fn from_hash_flag(hashes: bool) -> Self {
        if hashes {
            AlleleEncoding::Digest
        } else {
            AlleleEncoding::Integer
        }
    }

    pub fn encoder(self) -> &'static dyn AlleleEncoder {
        match self {
            AlleleEncoding::Integer => &IntegerEncoder,
            AlleleEncoding::Digest => &DigestEncoder,
        }
    }

    /// Normalize one raw allele token
    pub fn normalize(self, raw: &[u8]) -> Allele {
        self.encoder().encode(raw)
    }
}
