//! LCP Query Engine (Binary Lifting over Class Layers)
//!
//! **Core Algorithm**: descending power-of-two matching walk
//! - Start at the highest layer `K`, cursors at `i` and `j`
//! - If `L_k[i] == L_k[j]` and both length-`2^k` windows fit in the text,
//!   accept: add `2^k`, advance both cursors
//! - Otherwise skip to layer `k - 1` with the cursors unchanged
//!
//! Each accepted step matches the highest remaining bit of the answer,
//! so the walk is exact after `K + 1` lookups. No suffix array, no
//! inverse permutation, no range-minimum structure.

extern crate alloc;
use core::cmp::Ordering;

use crate::classes::ClassLayers;
use crate::error::{check_pair, LcpError};

/// Longest common prefix between two suffixes of one fixed text.
///
/// Implemented by every query strategy of this crate.
pub trait LongestCommonPrefix {
    /// Length of the indexed text
    fn len(&self) -> usize;

    /// LCP length of the suffixes starting at `i` and `j`.
    ///
    /// Fails with [`LcpError::OutOfRange`] when either index is `>= len()`.
    fn get(&self, i: usize, j: usize) -> Result<usize, LcpError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LCP index answering queries in O(log N) from retained class layers.
#[derive(Clone, Debug)]
pub struct LcpIndex {
    layers: ClassLayers,
}

impl LcpIndex {
    /// Build the index.
    ///
    /// Always succeeds. An empty text yields an index on which every
    /// query fails its bounds check.
    ///
    /// # Complexity
    /// - Time: O(N log N)
    /// - Space: O(N log N)
    pub fn build(text: &[u8]) -> Self {
        Self {
            layers: ClassLayers::classify(text),
        }
    }

    /// Index over already computed layers
    pub fn from_layers(layers: ClassLayers) -> Self {
        Self { layers }
    }

    /// Longest common prefix of the suffixes at `i` and `j` in O(log N).
    ///
    /// # Example
    /// ```
    /// use lcp_index::LcpIndex;
    ///
    /// let index = LcpIndex::build(b"abacaba");
    /// assert_eq!(index.get(0, 4), Ok(3));
    /// assert_eq!(index.get(0, 0), Ok(7));
    /// assert!(index.get(0, 7).is_err());
    /// ```
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Result<usize, LcpError> {
        let n = self.layers.len();
        check_pair(i, j, n)?;

        // Kept apart from the walk: with i == j the answer may reach n
        if i == j {
            return Ok(n - i);
        }

        Ok(self.walk(i, j))
    }

    /// Matching walk for two distinct valid positions
    #[inline(always)]
    fn walk(&self, mut i: usize, mut j: usize) -> usize {
        let n = self.layers.len();
        let mut result = 0;

        for (k, layer) in self.layers.layers().iter().enumerate().rev() {
            let step = 1usize << k;

            // A cursor may sit at n after an accepted step: bounds before lookup
            if i + step > n || j + step > n {
                continue;
            }

            if layer[i] == layer[j] {
                result += step;
                i += step;
                j += step;
            }
        }

        result
    }

    /// Lexicographic order of the suffixes at `i` and `j`.
    ///
    /// A proper prefix orders before the longer suffix.
    pub fn compare(&self, i: usize, j: usize) -> Result<Ordering, LcpError> {
        check_pair(i, j, self.layers.len())?;
        let rank = self.layers.top();
        Ok(rank[i].cmp(&rank[j]))
    }

    /// Retained class layers
    #[inline]
    pub fn layers(&self) -> &ClassLayers {
        &self.layers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Index size in bytes (approximate)
    pub fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.layers.size_bytes()
    }
}

impl LongestCommonPrefix for LcpIndex {
    #[inline]
    fn len(&self) -> usize {
        LcpIndex::len(self)
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> Result<usize, LcpError> {
        LcpIndex::get(self, i, j)
    }
}
