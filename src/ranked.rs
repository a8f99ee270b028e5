//! Rank + Range-Minimum LCP Strategy
//!
//! The classic alternative to binary lifting: for `i != j` the LCP of two
//! suffixes is the minimum adjacent LCP over their interval of ranks,
//! `lcp(i, j) = min(adj[rank[i] .. rank[j]])` with `rank[i] < rank[j]`.
//!
//! Keeps the suffix array and a [`RangeMin`] instead of all class layers:
//! O(N) space after construction, O(log N) query.

use crate::classes::ClassLayers;
use crate::error::{check_pair, LcpError};
use crate::lcp::LongestCommonPrefix;
use crate::rmq::RangeMin;
use crate::suffix_array::SuffixArray;

#[derive(Clone, Debug)]
pub struct RankedLcpIndex {
    sa: SuffixArray,
    adjacent: RangeMin<usize>,
}

impl RankedLcpIndex {
    /// Build the index. The class layers are dropped once the suffix
    /// array has been read off the top layer.
    pub fn build(text: &[u8]) -> Self {
        let layers = ClassLayers::classify(text);
        let sa = SuffixArray::with_layers(text, &layers);
        let adjacent = RangeMin::build(sa.adjacent_lcp());
        Self { sa, adjacent }
    }

    /// Longest common prefix of the suffixes at `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> Result<usize, LcpError> {
        let n = self.sa.len();
        check_pair(i, j, n)?;

        if i == j {
            return Ok(n - i);
        }

        let (a, b) = (self.sa.rank()[i], self.sa.rank()[j]);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        self.adjacent.get(lo, hi - 1)
    }

    #[inline]
    pub fn suffix_array(&self) -> &SuffixArray {
        &self.sa
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }
}

impl LongestCommonPrefix for RankedLcpIndex {
    #[inline]
    fn len(&self) -> usize {
        RankedLcpIndex::len(self)
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> Result<usize, LcpError> {
        RankedLcpIndex::get(self, i, j)
    }
}
