// distance.rs - Core distance calculation engine

use crate::encoding::{Allele, MISSING};

/// Distance between two profiles, in number of differing loci
pub type Distance = u32;

/// Count loci where both calls are present and differ, stopping at `max_distance`.
///
/// The result is `min(true mismatch count, max_distance)`: once the count
/// reaches the cap the scan stops, so "at the cap" and "far beyond it" look
/// the same.
#[inline]
pub fn allele_distance(a: &[Allele], b: &[Allele], max_distance: Distance) -> Distance {
    debug_assert_eq!(a.len(), b.len());
    if max_distance == 0 {
        return 0;
    }

    let mut diff: Distance = 0;
    for (&x, &y) in a.iter().zip(b) {
        if x != y && x != MISSING && y != MISSING {
            diff += 1;
            if diff >= max_distance {
                return max_distance;
            }
        }
    }
    diff
}

/// Distance calculation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceEngine {
    max_distance: Distance,
}

impl Default for DistanceEngine {
    fn default() -> Self {
        Self::new(Distance::MAX)
    }
}

impl DistanceEngine {
    pub fn new(max_distance: Distance) -> Self {
        Self { max_distance }
    }

    pub fn max_distance(&self) -> Distance {
        self.max_distance
    }

    /// Saturating mismatch count between two profiles
    pub fn distance(&self, a: &[Allele], b: &[Allele]) -> Distance {
        allele_distance(a, b, self.max_distance)
    }
}
