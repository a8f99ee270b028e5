//! Static Range Minimum
//!
//! **Tournament Tree Layout**: `[unused | internal nodes 1..N | leaves N..2N]`.
//! Node `v` holds `min(tree[2v], tree[2v + 1])`, leaves hold the input.
//! Works for any N, not only powers of two.
//!
//! Build O(N), query O(log N), immutable after construction.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::LcpError;

#[derive(Clone, Debug)]
pub struct RangeMin<T> {
    /// Implicit binary tree, leaves start at `len`
    tree: Vec<T>,
    len: usize,
}

impl<T: Copy + Ord> RangeMin<T> {
    /// Build over a copy of `values`.
    pub fn build(values: &[T]) -> Self {
        let n = values.len();
        let mut tree = Vec::with_capacity(2 * n);

        // Internal slots start as leaf copies and are overwritten bottom-up
        tree.extend_from_slice(values);
        tree.extend_from_slice(values);

        for v in (1..n).rev() {
            tree[v] = tree[2 * v].min(tree[2 * v + 1]);
        }

        Self { tree, len: n }
    }

    /// Minimum of `values[lo..=hi]`.
    ///
    /// Fails with [`LcpError::InvalidRange`] if `lo > hi` or `hi >= len()`.
    pub fn get(&self, lo: usize, hi: usize) -> Result<T, LcpError> {
        if lo > hi || hi >= self.len {
            return Err(LcpError::InvalidRange {
                lo,
                hi,
                len: self.len,
            });
        }

        let mut l = lo + self.len;
        let mut r = hi + self.len + 1;
        let mut best = self.tree[l];

        while l < r {
            if l & 1 == 1 {
                best = best.min(self.tree[l]);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                best = best.min(self.tree[r]);
            }
            l >>= 1;
            r >>= 1;
        }

        Ok(best)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
