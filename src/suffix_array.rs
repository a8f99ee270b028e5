//! Suffix Array from Class Layers
//!
//! The top class layer already ranks every full suffix, so the suffix
//! array is its inverse permutation. The adjacent LCP array is filled
//! with Kasai's algorithm in O(N).

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::classes::ClassLayers;

/// Suffix array, its inverse, and the LCP of lexicographic neighbours.
#[derive(Clone, Debug)]
pub struct SuffixArray {
    /// `sa[r]`: start of the r-th smallest suffix
    sa: Vec<usize>,
    /// `rank[p]`: position of suffix `p` in `sa`
    rank: Vec<usize>,
    /// `lcp[r]`: LCP of `sa[r]` and `sa[r + 1]`, length N - 1
    lcp: Vec<usize>,
}

impl SuffixArray {
    /// Build via prefix doubling, then Kasai.
    ///
    /// # Complexity
    /// - Time: O(N log N)
    /// - Space: O(N) retained
    pub fn build(text: &[u8]) -> Self {
        let layers = ClassLayers::classify(text);
        Self::with_layers(text, &layers)
    }

    /// Build from layers already computed for `text`.
    pub(crate) fn with_layers(text: &[u8], layers: &ClassLayers) -> Self {
        let rank = layers.top().to_vec();
        let mut sa = vec![0usize; rank.len()];
        for (p, &r) in rank.iter().enumerate() {
            sa[r] = p;
        }

        let lcp = kasai(text, &sa, &rank);
        Self { sa, rank, lcp }
    }

    /// Returns the suffix array.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.sa
    }

    /// Returns the rank (inverse suffix array).
    #[inline]
    pub fn rank(&self) -> &[usize] {
        &self.rank
    }

    /// Returns the LCP of each pair of lexicographically adjacent suffixes.
    #[inline]
    pub fn adjacent_lcp(&self) -> &[usize] {
        &self.lcp
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

/// Kasai's algorithm: walk suffixes in text order, carrying the match length.
fn kasai(text: &[u8], sa: &[usize], rank: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut lcp = vec![0usize; n.saturating_sub(1)];
    let mut k = 0usize;

    for (i, &r) in rank.iter().enumerate() {
        if r + 1 == n {
            k = 0;
            continue;
        }
        let j = sa[r + 1];
        while i + k < n && j + k < n && text[i + k] == text[j + k] {
            k += 1;
        }
        lcp[r] = k;
        k = k.saturating_sub(1);
    }

    lcp
}
